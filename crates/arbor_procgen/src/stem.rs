//! Recursive stem construction.
//!
//! A [`StemGenerator`] walks one stem ring by ring. Orientation only changes
//! at curl boundaries (every `segment_resolution` rings); each new ring grows
//! along the surface normal of the previous one. Splits spawn continuation
//! stems at the same level, and a quota of child stems (or leaves at the
//! terminal level) is spread over the remaining rings.

use glam::{Vec2, Vec3};

use crate::error::GenerateError;
use crate::leaf::{Leaf, LeafBuilder};
use crate::mesh::{build_tube, MeshBuffer};
use crate::params::{LevelData, TreeParameters};
use crate::radius::{flare_radius, taper_radius};
use crate::ring::Ring;
use crate::sampler::Sampler;
use crate::shape::{shape_ratio, TreeShape};

/// Shared state threaded through one generation run.
pub(crate) struct BuildContext<'a, S: Sampler + ?Sized> {
    pub params: &'a TreeParameters,
    pub sampler: &'a mut S,
    pub budget: StemBudget,
    pub leaf_builder: LeafBuilder,
}

impl<'a, S: Sampler + ?Sized> BuildContext<'a, S> {
    pub fn new(params: &'a TreeParameters, sampler: &'a mut S) -> Self {
        BuildContext {
            params,
            sampler,
            budget: StemBudget::new(params.max_stems),
            leaf_builder: LeafBuilder::new(params.leaf_scale, params.leaf_scale_x),
        }
    }
}

/// Caps the total number of stems a run may build.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StemBudget {
    built: usize,
    limit: usize,
}

impl StemBudget {
    pub fn new(limit: usize) -> Self {
        StemBudget { built: 0, limit }
    }

    pub fn built(&self) -> usize {
        self.built
    }

    fn claim(&mut self) -> Result<(), GenerateError> {
        if self.built >= self.limit {
            log::warn!("stem budget of {} exhausted", self.limit);
            return Err(GenerateError::BudgetExceeded { limit: self.limit });
        }
        self.built += 1;
        Ok(())
    }
}

/// Error-diffusion counter turning a fractional split rate into whole splits.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SplitAccumulator {
    error: f32,
}

impl SplitAccumulator {
    pub fn next(&mut self, rate: f32) -> u32 {
        let effective = (rate + self.error).round();
        self.error -= effective - rate;
        effective.max(0.0) as u32
    }
}

/// Meshes collected from a stem and everything hanging off it.
#[derive(Debug, Default)]
pub(crate) struct StemMeshes {
    pub stems: Vec<MeshBuffer>,
    pub leaves: Vec<MeshBuffer>,
}

impl StemMeshes {
    fn absorb(&mut self, other: StemMeshes) {
        self.stems.extend(other.stems);
        self.leaves.extend(other.leaves);
    }
}

/// Values a child reads from the stem it grows on.
#[derive(Debug, Clone, Copy)]
struct ParentStem {
    level: u32,
    length: f32,
    base_radius: f32,
    radial_resolution: usize,
    segment_resolution: usize,
}

/// One stem (trunk, branch or split continuation) with its derived parameters.
#[derive(Debug, Clone)]
pub(crate) struct StemGenerator {
    pub level: u32,
    pub start: Vec3,
    /// (pitch, yaw) in radians
    pub orientation: Vec2,
    pub length: f32,
    pub base_radius: f32,
    pub segment_length: f32,
    pub ring_count: usize,
    /// Index of the first ring this stem emits; non-zero for split continuations
    pub first_ring: usize,
    pub radial_resolution: usize,
    pub segment_resolution: usize,
    pub branch_quota: u32,
    pub leaf_quota: u32,
}

impl StemGenerator {
    pub fn trunk<S: Sampler + ?Sized>(ctx: &mut BuildContext<'_, S>) -> Self {
        let params = ctx.params;
        let data = params.level(0);

        let scale = ctx.sampler.vary(params.scale, params.scale_variance);
        let length = scale * ctx.sampler.vary(data.length, data.length_variance);
        let base_radius =
            length * params.ratio * ctx.sampler.vary(data.radius_scale, data.radius_scale_variance);

        let (branch_quota, leaf_quota) = if params.levels == 0 {
            (0, params.leaves)
        } else {
            (params.level(1).branches, 0)
        };

        Self::with_resolution(
            0,
            Vec3::ZERO,
            Vec2::ZERO,
            length,
            base_radius,
            params.radial_resolution as usize,
            params.segment_resolution as usize,
            data,
            branch_quota,
            leaf_quota,
        )
    }

    /// Child stem one level below `parent`, attached `offset` along it.
    ///
    /// Returns `None` when the drawn length collapses to zero.
    fn branch<S: Sampler + ?Sized>(
        ctx: &mut BuildContext<'_, S>,
        parent: ParentStem,
        start: Vec3,
        orientation: Vec2,
        offset: f32,
    ) -> Option<Self> {
        let params = ctx.params;
        let level = parent.level + 1;
        let data = params.level(level);

        let length_factor = ctx.sampler.vary(data.length, data.length_variance);
        let length = if parent.level == 0 {
            let bare = params.base_size * parent.length;
            let position = (parent.length - offset) / (parent.length - bare).max(f32::EPSILON);
            parent.length * length_factor * shape_ratio(params.shape, position)
        } else {
            length_factor * (parent.length - 0.6 * offset)
        };

        if !(length > f32::EPSILON) {
            log::trace!("skipping level {} stem with length {}", level, length);
            return None;
        }

        let length_ratio = length / parent.length;
        let base_radius = parent.base_radius * length_ratio.powf(params.ratio_power);

        let (branch_quota, leaf_quota) = if level < params.levels {
            let next = params.level(level + 1);
            let density = if parent.level == 0 {
                0.2 + 0.8 * length_ratio / data.max_length()
            } else {
                1.0 - 0.5 * offset / parent.length
            };
            ((next.branches as f32 * density).round().max(0.0) as u32, 0)
        } else {
            let density = shape_ratio(TreeShape::TaperedCylindrical, offset / parent.length);
            (0, (params.leaves as f32 * density).round() as u32)
        };

        let radial_resolution = ((parent.radial_resolution as f32 / 1.5) as usize).clamp(3, 32);
        let segment_resolution = ((parent.segment_resolution as f32 / 1.5) as usize).clamp(1, 16);

        Some(Self::with_resolution(
            level,
            start,
            orientation,
            length,
            base_radius,
            radial_resolution,
            segment_resolution,
            data,
            branch_quota,
            leaf_quota,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn with_resolution(
        level: u32,
        start: Vec3,
        orientation: Vec2,
        length: f32,
        base_radius: f32,
        radial_resolution: usize,
        segment_resolution: usize,
        data: &LevelData,
        branch_quota: u32,
        leaf_quota: u32,
    ) -> Self {
        let ring_count = data.curve_resolution as usize * segment_resolution + 1;

        StemGenerator {
            level,
            start,
            orientation,
            length,
            base_radius,
            segment_length: length / (ring_count - 1) as f32,
            ring_count,
            first_ring: 0,
            radial_resolution,
            segment_resolution,
            branch_quota,
            leaf_quota,
        }
    }

    /// Fork of this stem starting at ring `first_ring`.
    ///
    /// The fork keeps the profile (length, radius, resolution) so its rings
    /// continue the parent's taper from the split height.
    fn split(&self, first_ring: usize, start: Vec3, orientation: Vec2, remaining: u32) -> Self {
        let carry = |quota: u32| if quota > 0 { remaining } else { 0 };

        StemGenerator {
            start,
            orientation,
            first_ring,
            branch_quota: carry(self.branch_quota),
            leaf_quota: carry(self.leaf_quota),
            ..self.clone()
        }
    }

    fn as_parent(&self) -> ParentStem {
        ParentStem {
            level: self.level,
            length: self.length,
            base_radius: self.base_radius,
            radial_resolution: self.radial_resolution,
            segment_resolution: self.segment_resolution,
        }
    }

    /// Radius at normalized height `h`, flared on the trunk.
    pub fn radius_at(&self, h: f32, data: &LevelData) -> f32 {
        let h = h.clamp(0.0, 1.0);
        let radius = taper_radius(h, data.taper, self.length, self.base_radius);
        if self.level == 0 {
            radius * flare_radius(h, data.flare)
        } else {
            radius
        }
    }

    /// Whether ring `index` lies at or above the bare base of the stem.
    ///
    /// A `base_size` of 1 or more leaves the whole stem bare.
    fn attaches_at(&self, index: usize, base_size: f32) -> bool {
        base_size < 1.0 && index as f32 / (self.ring_count - 1) as f32 >= base_size
    }

    /// Build this stem and everything it spawns, depth first.
    pub fn build<S: Sampler + ?Sized>(
        &self,
        ctx: &mut BuildContext<'_, S>,
    ) -> Result<StemMeshes, GenerateError> {
        ctx.budget.claim()?;

        let params = ctx.params;
        let data = params.level(self.level);
        let terminal = self.level >= params.levels;

        log::debug!(
            "level {} stem: length {:.3}, radius {:.3}, rings {}..{}",
            self.level,
            self.length,
            self.base_radius,
            self.first_ring,
            self.ring_count
        );

        let mut meshes = StemMeshes::default();
        let mut rings: Vec<Ring> = Vec::with_capacity(self.ring_count - self.first_ring);

        let mut splits = SplitAccumulator::default();
        let mut split_correction = 0.0_f32;
        let mut remaining = if terminal {
            self.leaf_quota
        } else {
            self.branch_quota
        };
        let mut rotation = 0.0_f32;
        let mut normal = Vec3::Y;

        for i in self.first_ring..self.ring_count {
            let height = i as f32 * self.segment_length;
            let radius = self.radius_at(height / self.length, data);

            let (midpoint, mut orientation) = match rings.last() {
                None => (self.start, self.orientation),
                Some(prev) => {
                    normal = prev.surface_normal();
                    (prev.midpoint + normal * self.segment_length, prev.orientation)
                }
            };

            if i > self.first_ring && i % self.segment_resolution == 0 {
                let curl = i / self.segment_resolution;

                if split_correction != 0.0 {
                    orientation.x += split_correction.to_radians();
                    split_correction = 0.0;
                }
                orientation += self.curvature(data, curl, ctx.sampler);

                if self.level <= params.levels && i + 1 < self.ring_count {
                    let count = if self.level == 0 && curl == 1 && data.base_splits > 0 {
                        data.base_splits
                    } else {
                        splits.next(data.segment_splits)
                    };

                    if count > 0 {
                        let declination = normal.y.clamp(-1.0, 1.0).acos().to_degrees();
                        let angle_split = ctx.sampler.vary(data.split_angle, data.split_angle_variance)
                            - declination;
                        let divergence = 20.0
                            + 0.75
                                * (30.0 + (declination - 90.0).abs())
                                * ctx.sampler.uniform(0.0, 1.0)
                                * ctx.sampler.uniform(0.0, 1.0);

                        split_correction = -angle_split;

                        for _ in 0..count {
                            let offset = Vec2::new(
                                (ctx.sampler.sign() * angle_split).to_radians(),
                                (ctx.sampler.sign() * divergence).to_radians(),
                            );
                            let fork = self.split(i, midpoint, orientation + offset, remaining);
                            meshes.absorb(fork.build(ctx)?);
                        }
                    }
                }
            }

            rings.push(Ring::new(midpoint, orientation, radius, self.radial_resolution));

            if remaining > 0 && i > self.first_ring && self.attaches_at(i, params.base_size) {
                let count = remaining / (self.ring_count - i) as u32;
                let anchor = Anchor {
                    midpoint,
                    orientation,
                    normal,
                    height,
                };
                self.attach(ctx, anchor, count, terminal, &mut rotation, &mut meshes)?;
                remaining -= count;
            }
        }

        meshes.stems.push(build_tube(&rings));
        Ok(meshes)
    }

    /// Orientation change at one curl boundary, in radians.
    fn curvature<S: Sampler + ?Sized>(&self, data: &LevelData, curl: usize, sampler: &mut S) -> Vec2 {
        let curls = data.curve_resolution as f32;
        let half = curls / 2.0;

        let pitch = if data.curve_back == 0.0 {
            data.curve / curls
        } else if curl as f32 <= half {
            data.curve / half
        } else {
            data.curve_back / half
        };
        let yaw = sampler.vary(0.0, data.curve_variance / curls);

        Vec2::new(pitch.to_radians(), yaw.to_radians())
    }

    /// Hang `count` children evenly in the slice below the anchor ring.
    fn attach<S: Sampler + ?Sized>(
        &self,
        ctx: &mut BuildContext<'_, S>,
        anchor: Anchor,
        count: u32,
        terminal: bool,
        rotation: &mut f32,
        meshes: &mut StemMeshes,
    ) -> Result<(), GenerateError> {
        if count == 0 {
            return Ok(());
        }

        let params = ctx.params;
        let child = params.child_level(self.level);
        let spacing = self.segment_length / count as f32;
        let bare = params.base_size * self.length;

        for j in 0..count {
            // Never hang a child below the bare base
            let drop = (spacing * j as f32).min(anchor.height - bare).max(0.0);
            let offset = anchor.height - drop;
            let position = anchor.midpoint - anchor.normal * drop;

            let down = if child.down_angle_variance >= 0.0 {
                ctx.sampler.vary(child.down_angle, child.down_angle_variance)
            } else {
                let along = (self.length - offset) / (self.length - bare).max(f32::EPSILON);
                child.down_angle
                    + child.down_angle_variance * (1.0 - 2.0 * shape_ratio(TreeShape::Conical, along))
            };

            let step = ctx.sampler.vary(child.rotate, child.rotate_variance);
            *rotation += if child.rotate >= 0.0 { step } else { 180.0 + step };

            let orientation =
                anchor.orientation + Vec2::new(down.to_radians(), rotation.to_radians());

            if terminal {
                let leaf = Leaf {
                    position,
                    orientation,
                };
                meshes.leaves.push(ctx.leaf_builder.build(&leaf));
            } else if let Some(stem) =
                StemGenerator::branch(ctx, self.as_parent(), position, orientation, offset)
            {
                meshes.absorb(stem.build(ctx)?);
            }
        }

        Ok(())
    }
}

/// Ring a batch of children is hung below.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    midpoint: Vec3,
    orientation: Vec2,
    /// Growth direction into the ring
    normal: Vec3,
    height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bare_trunk() -> TreeParameters {
        TreeParameters {
            levels: 0,
            leaves: 0,
            base_size: 0.0,
            scale: 1.0,
            scale_variance: 0.0,
            ratio: 0.5,
            radial_resolution: 5,
            segment_resolution: 2,
            level_data: vec![LevelData {
                length: 4.0,
                taper: 0.0,
                curve_resolution: 4,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_split_accumulator_converges() {
        for rate in [0.1_f32, 0.3, 0.5, 0.77, 1.0, 1.4] {
            let mut acc = SplitAccumulator::default();
            let boundaries = 1000;
            let total: u32 = (0..boundaries).map(|_| acc.next(rate)).sum();
            let expected = (rate * boundaries as f32).round() as i64;
            assert!(
                (total as i64 - expected).abs() <= 1,
                "rate {}: {} splits, expected {}",
                rate,
                total,
                expected
            );
        }
    }

    #[test]
    fn test_zero_rate_never_splits() {
        let mut acc = SplitAccumulator::default();
        assert!((0..100).all(|_| acc.next(0.0) == 0));
    }

    #[test]
    fn test_fractional_rate_still_splits() {
        let mut acc = SplitAccumulator::default();
        let total: u32 = (0..10).map(|_| acc.next(0.3)).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_budget_limits_stems() {
        let mut budget = StemBudget::new(2);
        assert!(budget.claim().is_ok());
        assert!(budget.claim().is_ok());
        assert_eq!(budget.claim(), Err(GenerateError::BudgetExceeded { limit: 2 }));
        assert_eq!(budget.built(), 2);
    }

    #[test]
    fn test_trunk_derivation() {
        let params = bare_trunk();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let trunk = StemGenerator::trunk(&mut ctx);

        assert_eq!(trunk.ring_count, 9);
        assert_eq!(trunk.length, 4.0);
        assert_eq!(trunk.base_radius, 2.0);
        assert_eq!(trunk.segment_length, 0.5);
    }

    #[test]
    fn test_straight_trunk_grows_up() {
        let params = bare_trunk();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let meshes = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap();

        assert_eq!(meshes.stems.len(), 1);
        assert!(meshes.leaves.is_empty());

        let tube = &meshes.stems[0];
        assert_eq!(tube.vertex_count(), 9 * 5);
        assert_eq!(tube.triangle_count(), 2 * 5 * 8);

        let top = &tube.vertices[8 * 5..];
        for v in top {
            assert!((v.y - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_curve_bends_towards_z() {
        let mut params = bare_trunk();
        params.level_data[0].curve = 60.0;
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let tube = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap().stems.remove(0);

        let tip: Vec3 = tube.vertices[8 * 5..].iter().copied().sum::<Vec3>() / 5.0;
        assert!(tip.z > 0.1);
        assert!(tip.y < 4.0);
    }

    #[test]
    fn test_s_curve_returns() {
        let mut params = bare_trunk();
        params.level_data[0].curve = 40.0;
        params.level_data[0].curve_back = -40.0;
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let tube = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap().stems.remove(0);

        // The last ring faces straight up again
        let last = &tube.vertices[8 * 5..];
        let spread = last.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max)
            - last.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
        assert!(spread < 1e-3);
    }

    #[test]
    fn test_leaf_quota_fully_placed() {
        let mut params = bare_trunk();
        params.leaves = 13;
        let mut rng = StdRng::seed_from_u64(5);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let meshes = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap();
        assert_eq!(meshes.leaves.len(), 13);
    }

    #[test]
    fn test_bare_base_blocks_attachment() {
        let mut params = bare_trunk();
        params.leaves = 40;
        params.base_size = 1.0;
        let mut rng = StdRng::seed_from_u64(5);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let meshes = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap();
        assert!(meshes.leaves.is_empty());
    }

    #[test]
    fn test_leaves_stay_above_base() {
        let mut params = bare_trunk();
        params.leaves = 20;
        params.base_size = 0.5;
        let mut rng = StdRng::seed_from_u64(9);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let meshes = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap();

        assert_eq!(meshes.leaves.len(), 20);
        for leaf in &meshes.leaves {
            assert!(leaf.vertices[0].y >= 2.0 - 1e-4);
        }
    }

    #[test]
    fn test_two_ring_stem_carries_leaves() {
        let mut params = bare_trunk();
        params.segment_resolution = 1;
        params.level_data[0].curve_resolution = 1;
        params.leaves = 10;
        params.base_size = 0.2;
        let mut rng = StdRng::seed_from_u64(2);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let meshes = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap();

        assert_eq!(meshes.stems[0].vertex_count(), 2 * 5);
        assert_eq!(meshes.leaves.len(), 10);
        for leaf in &meshes.leaves {
            assert!(leaf.vertices[0].y >= 0.2 * 4.0 - 1e-4);
        }
    }

    #[test]
    fn test_high_base_size_fills_tip_ring() {
        let mut params = bare_trunk();
        params.leaves = 10;
        params.base_size = 0.9;
        let mut rng = StdRng::seed_from_u64(4);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let meshes = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap();

        // Only the tip ring reaches 0.9 of the 8 segments
        assert_eq!(meshes.leaves.len(), 10);
        for leaf in &meshes.leaves {
            assert!(leaf.vertices[0].y >= 0.9 * 4.0 - 1e-4);
        }
    }

    /// Every uniform draw lands mid-range and signs alternate, starting positive.
    struct Midpoint {
        flip: bool,
    }

    impl Sampler for Midpoint {
        fn uniform(&mut self, min: f32, max: f32) -> f32 {
            (min + max) / 2.0
        }

        fn sign(&mut self) -> f32 {
            self.flip = !self.flip;
            if self.flip {
                1.0
            } else {
                -1.0
            }
        }
    }

    fn ring_normal(ring: &[Vec3]) -> Vec3 {
        let centre = ring.iter().copied().sum::<Vec3>() / ring.len() as f32;
        (-(ring[0] - centre).cross(ring[1] - centre)).normalize()
    }

    #[test]
    fn test_segment_splits_fork_and_correct() {
        let mut params = bare_trunk();
        params.level_data[0].segment_splits = 0.5;
        params.level_data[0].split_angle = 30.0;
        let mut sampler = Midpoint { flip: false };
        let mut ctx = BuildContext::new(&params, &mut sampler);
        let meshes = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap();

        // Splits may happen at rings 2, 4 and 6. A rate of 0.5 splits on the
        // 1st and 3rd boundary each stem sees: the trunk forks at 2 and 6, the
        // fork from 2 forks at 4, and that one again at 6.
        assert_eq!(meshes.stems.len(), 5);
        assert_eq!(ctx.budget.built(), 5);

        // The trunk's own tube comes last
        let trunk = meshes.stems.last().unwrap();
        assert_eq!(trunk.vertex_count(), 9 * 5);
        let ring = |i: usize| &trunk.vertices[i * 5..(i + 1) * 5];

        // Straight trunk: declination 0, so angle_split is the full 30 degrees.
        // The -30 correction lands on the next boundary (ring 4), not before.
        let tilted = Vec3::new(0.0, 30f32.to_radians().cos(), -(30f32.to_radians().sin()));
        for i in 0..4 {
            assert!((ring_normal(ring(i)) - Vec3::Y).length() < 1e-4, "ring {}", i);
        }
        for i in 4..9 {
            assert!((ring_normal(ring(i)) - tilted).length() < 1e-4, "ring {}", i);
        }
    }

    #[test]
    fn test_base_splits_fork_trunk() {
        let mut params = bare_trunk();
        params.level_data[0].base_splits = 2;
        params.level_data[0].split_angle = 30.0;
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let meshes = StemGenerator::trunk(&mut ctx).build(&mut ctx).unwrap();

        assert_eq!(meshes.stems.len(), 3);
        assert_eq!(ctx.budget.built(), 3);
        // Forks start at the first curl boundary and share the remaining rings
        assert_eq!(meshes.stems[0].vertex_count(), 7 * 5);
        assert_eq!(meshes.stems[2].vertex_count(), 9 * 5);
    }

    #[test]
    fn test_child_resolution_shrinks() {
        let mut params = bare_trunk();
        params.levels = 1;
        params.radial_resolution = 12;
        params.segment_resolution = 3;
        params.level_data.push(LevelData {
            length: 0.5,
            curve_resolution: 2,
            branches: 4,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(11);
        let mut ctx = BuildContext::new(&params, &mut rng);
        let trunk = StemGenerator::trunk(&mut ctx);

        let child = StemGenerator::branch(&mut ctx, trunk.as_parent(), Vec3::Y, Vec2::ZERO, 1.0)
            .unwrap();
        assert_eq!(child.level, 1);
        assert_eq!(child.radial_resolution, 8);
        assert_eq!(child.segment_resolution, 2);
        assert_eq!(child.ring_count, 5);
        assert!(child.length > 0.0 && child.length < trunk.length);
        assert!(child.base_radius < trunk.base_radius);
    }
}
