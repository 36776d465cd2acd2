use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::shape::TreeShape;

/// Deepest supported branch level (trunk is level 0).
pub const MAX_LEVELS: u32 = 3;

/// Per-level stem parameters. Angles are in degrees.
///
/// Every `*_variance` field is a symmetric uniform jitter around its base
/// value, except `down_angle_variance`, where a negative value instead bends
/// the down angle along the parent using the conical shape ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelData {
    pub length: f32,
    pub length_variance: f32,
    pub taper: f32,

    /// Number of curl boundaries along the stem
    pub curve_resolution: u32,
    pub curve: f32,
    /// Non-zero turns the stem into an S-curve: `curve` for the first half, this for the second
    pub curve_back: f32,
    pub curve_variance: f32,

    /// Fractional split rate per curl boundary
    pub segment_splits: f32,
    /// Forced split count at the trunk's first curl boundary
    pub base_splits: u32,
    pub split_angle: f32,
    pub split_angle_variance: f32,

    pub down_angle: f32,
    pub down_angle_variance: f32,
    pub rotate: f32,
    pub rotate_variance: f32,
    /// Target number of child stems hung from each parent stem of the previous level
    pub branches: u32,

    // Trunk only
    pub radius_scale: f32,
    pub radius_scale_variance: f32,
    pub flare: f32,
}

impl Default for LevelData {
    fn default() -> Self {
        LevelData {
            length: 1.0,
            length_variance: 0.0,
            taper: 1.0,
            curve_resolution: 3,
            curve: 0.0,
            curve_back: 0.0,
            curve_variance: 0.0,
            segment_splits: 0.0,
            base_splits: 0,
            split_angle: 0.0,
            split_angle_variance: 0.0,
            down_angle: 45.0,
            down_angle_variance: 0.0,
            rotate: 140.0,
            rotate_variance: 0.0,
            branches: 0,
            radius_scale: 1.0,
            radius_scale_variance: 0.0,
            flare: 0.0,
        }
    }
}

impl LevelData {
    /// Longest length factor this level can draw.
    pub fn max_length(&self) -> f32 {
        self.length + self.length_variance.abs()
    }

    fn numeric_fields(&self) -> [(&'static str, f32); 16] {
        [
            ("length", self.length),
            ("length_variance", self.length_variance),
            ("taper", self.taper),
            ("curve", self.curve),
            ("curve_back", self.curve_back),
            ("curve_variance", self.curve_variance),
            ("segment_splits", self.segment_splits),
            ("split_angle", self.split_angle),
            ("split_angle_variance", self.split_angle_variance),
            ("down_angle", self.down_angle),
            ("down_angle_variance", self.down_angle_variance),
            ("rotate", self.rotate),
            ("rotate_variance", self.rotate_variance),
            ("radius_scale", self.radius_scale),
            ("radius_scale_variance", self.radius_scale_variance),
            ("flare", self.flare),
        ]
    }
}

/// Complete tree recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeParameters {
    pub shape: TreeShape,
    /// Fraction of each stem left bare of children at its base
    pub base_size: f32,
    pub scale: f32,
    pub scale_variance: f32,
    /// Trunk radius to trunk length
    pub ratio: f32,
    /// Exponent relating child radius to child/parent length
    pub ratio_power: f32,
    /// Number of branch levels below the trunk; the last one carries leaves
    pub levels: u32,
    /// Leaves per terminal stem
    pub leaves: u32,
    pub leaf_scale: f32,
    pub leaf_scale_x: f32,

    /// Vertices per trunk ring
    pub radial_resolution: u32,
    /// Rings per curl
    pub segment_resolution: u32,
    pub flat_shaded: bool,
    /// Upper bound on generated stems, guards runaway split/branch counts
    pub max_stems: usize,

    /// Index 0 is the trunk. One extra entry past `levels` orients the leaves.
    pub level_data: Vec<LevelData>,
}

impl Default for TreeParameters {
    fn default() -> Self {
        TreeParameters::quaking_aspen()
    }
}

impl TreeParameters {
    pub const PRESET_NAMES: [&'static str; 5] = [
        "quaking_aspen",
        "black_tupelo",
        "weeping_willow",
        "sassafras",
        "balsam_fir",
    ];

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "quaking_aspen" => Some(Self::quaking_aspen()),
            "black_tupelo" => Some(Self::black_tupelo()),
            "weeping_willow" => Some(Self::weeping_willow()),
            "sassafras" => Some(Self::sassafras()),
            "balsam_fir" => Some(Self::balsam_fir()),
            _ => None,
        }
    }

    /// Slender, flame-shaped crown with drooping first-level branches
    pub fn quaking_aspen() -> Self {
        TreeParameters {
            shape: TreeShape::TendFlame,
            base_size: 0.4,
            scale: 13.0,
            scale_variance: 3.0,
            ratio: 0.015,
            ratio_power: 1.2,
            levels: 2,
            leaves: 25,
            leaf_scale: 0.17,
            leaf_scale_x: 1.0,
            radial_resolution: 8,
            segment_resolution: 2,
            flat_shaded: false,
            max_stems: 20_000,
            level_data: vec![
                LevelData {
                    length: 1.0,
                    taper: 1.0,
                    curve_resolution: 3,
                    curve_variance: 20.0,
                    flare: 0.6,
                    ..Default::default()
                },
                LevelData {
                    length: 0.3,
                    taper: 1.0,
                    curve_resolution: 5,
                    curve: -40.0,
                    curve_variance: 50.0,
                    down_angle: 60.0,
                    down_angle_variance: -50.0,
                    rotate: 140.0,
                    branches: 50,
                    ..Default::default()
                },
                LevelData {
                    length: 0.6,
                    taper: 1.0,
                    curve_resolution: 3,
                    curve: -40.0,
                    curve_variance: 75.0,
                    down_angle: 45.0,
                    down_angle_variance: 10.0,
                    rotate: 140.0,
                    branches: 30,
                    ..Default::default()
                },
                LevelData {
                    length: 0.4,
                    curve_resolution: 1,
                    down_angle: 45.0,
                    down_angle_variance: 10.0,
                    rotate: 77.0,
                    branches: 10,
                    ..Default::default()
                },
            ],
        }
    }

    /// Tall tapered cylinder with a flared, slightly club-tapered trunk
    pub fn black_tupelo() -> Self {
        TreeParameters {
            shape: TreeShape::TaperedCylindrical,
            base_size: 0.2,
            scale: 23.0,
            scale_variance: 5.0,
            ratio: 0.015,
            ratio_power: 1.3,
            levels: 2,
            leaves: 6,
            leaf_scale: 0.3,
            leaf_scale_x: 0.5,
            radial_resolution: 10,
            segment_resolution: 2,
            flat_shaded: false,
            max_stems: 20_000,
            level_data: vec![
                LevelData {
                    length: 1.0,
                    taper: 1.1,
                    curve_resolution: 10,
                    curve_variance: 40.0,
                    flare: 1.0,
                    ..Default::default()
                },
                LevelData {
                    length: 0.3,
                    length_variance: 0.05,
                    taper: 1.0,
                    curve_resolution: 10,
                    curve_variance: 90.0,
                    down_angle: 60.0,
                    down_angle_variance: -40.0,
                    rotate: 140.0,
                    branches: 50,
                    ..Default::default()
                },
                LevelData {
                    length: 0.6,
                    length_variance: 0.1,
                    taper: 1.0,
                    curve_resolution: 10,
                    curve: -10.0,
                    curve_variance: 150.0,
                    down_angle: 30.0,
                    down_angle_variance: 10.0,
                    rotate: 140.0,
                    branches: 25,
                    ..Default::default()
                },
                LevelData {
                    length: 0.4,
                    curve_resolution: 1,
                    down_angle: 45.0,
                    down_angle_variance: 10.0,
                    rotate: 140.0,
                    branches: 12,
                    ..Default::default()
                },
            ],
        }
    }

    /// Forked trunk with long, alternating, strongly curved whips
    pub fn weeping_willow() -> Self {
        TreeParameters {
            shape: TreeShape::Cylindrical,
            base_size: 0.05,
            scale: 15.0,
            scale_variance: 5.0,
            ratio: 0.03,
            ratio_power: 2.0,
            levels: 2,
            leaves: 15,
            leaf_scale: 0.12,
            leaf_scale_x: 0.2,
            radial_resolution: 10,
            segment_resolution: 2,
            flat_shaded: false,
            max_stems: 20_000,
            level_data: vec![
                LevelData {
                    length: 0.8,
                    taper: 1.0,
                    curve_resolution: 8,
                    curve_variance: 120.0,
                    base_splits: 2,
                    segment_splits: 0.1,
                    split_angle: 20.0,
                    flare: 0.75,
                    ..Default::default()
                },
                LevelData {
                    length: 0.5,
                    length_variance: 0.1,
                    taper: 1.0,
                    curve_resolution: 16,
                    curve: 40.0,
                    curve_variance: 90.0,
                    segment_splits: 0.1,
                    split_angle: 30.0,
                    split_angle_variance: 10.0,
                    down_angle: 20.0,
                    down_angle_variance: 10.0,
                    rotate: -120.0,
                    rotate_variance: 30.0,
                    branches: 25,
                    ..Default::default()
                },
                LevelData {
                    length: 1.5,
                    taper: 1.0,
                    curve_resolution: 12,
                    curve: 130.0,
                    curve_variance: 30.0,
                    down_angle: 30.0,
                    down_angle_variance: 10.0,
                    rotate: -120.0,
                    rotate_variance: 30.0,
                    branches: 10,
                    ..Default::default()
                },
                LevelData {
                    length: 0.1,
                    curve_resolution: 1,
                    down_angle: 20.0,
                    down_angle_variance: 10.0,
                    rotate: 140.0,
                    branches: 100,
                    ..Default::default()
                },
            ],
        }
    }

    /// Broad hemispherical crown with S-curved limbs
    pub fn sassafras() -> Self {
        TreeParameters {
            shape: TreeShape::HemiSpherical,
            base_size: 0.2,
            scale: 23.0,
            scale_variance: 7.0,
            ratio: 0.02,
            ratio_power: 1.3,
            levels: 2,
            leaves: 15,
            leaf_scale: 0.25,
            leaf_scale_x: 0.7,
            radial_resolution: 10,
            segment_resolution: 2,
            flat_shaded: false,
            max_stems: 20_000,
            level_data: vec![
                LevelData {
                    length: 1.0,
                    taper: 1.0,
                    curve_resolution: 16,
                    curve_variance: 60.0,
                    flare: 0.5,
                    ..Default::default()
                },
                LevelData {
                    length: 0.4,
                    length_variance: 0.15,
                    taper: 1.0,
                    curve_resolution: 18,
                    curve: -60.0,
                    curve_back: 40.0,
                    curve_variance: 140.0,
                    down_angle: 90.0,
                    down_angle_variance: -40.0,
                    rotate: 140.0,
                    branches: 20,
                    ..Default::default()
                },
                LevelData {
                    length: 0.7,
                    length_variance: 0.15,
                    taper: 1.0,
                    curve_resolution: 10,
                    curve: -40.0,
                    curve_variance: 120.0,
                    down_angle: 40.0,
                    down_angle_variance: 10.0,
                    rotate: 140.0,
                    branches: 15,
                    ..Default::default()
                },
                LevelData {
                    length: 0.2,
                    curve_resolution: 1,
                    down_angle: 45.0,
                    down_angle_variance: 10.0,
                    rotate: 140.0,
                    ..Default::default()
                },
            ],
        }
    }

    /// Narrow conical conifer with near-horizontal whorls
    pub fn balsam_fir() -> Self {
        TreeParameters {
            shape: TreeShape::Conical,
            base_size: 0.05,
            scale: 10.0,
            scale_variance: 2.0,
            ratio: 0.015,
            ratio_power: 1.5,
            levels: 2,
            leaves: 40,
            leaf_scale: 0.1,
            leaf_scale_x: 0.3,
            radial_resolution: 8,
            segment_resolution: 2,
            flat_shaded: false,
            max_stems: 20_000,
            level_data: vec![
                LevelData {
                    length: 1.0,
                    taper: 1.0,
                    curve_resolution: 5,
                    flare: 0.3,
                    ..Default::default()
                },
                LevelData {
                    length: 0.3,
                    length_variance: 0.05,
                    taper: 1.0,
                    curve_resolution: 4,
                    curve: -20.0,
                    curve_variance: 20.0,
                    down_angle: 85.0,
                    down_angle_variance: -30.0,
                    rotate: 140.0,
                    branches: 60,
                    ..Default::default()
                },
                LevelData {
                    length: 0.3,
                    taper: 1.0,
                    curve_resolution: 3,
                    curve_variance: 10.0,
                    down_angle: 60.0,
                    down_angle_variance: 10.0,
                    rotate: -90.0,
                    branches: 12,
                    ..Default::default()
                },
                LevelData {
                    length: 0.1,
                    curve_resolution: 1,
                    down_angle: 30.0,
                    rotate: 140.0,
                    ..Default::default()
                },
            ],
        }
    }

    /// Parameters for the stem level `level`.
    pub fn level(&self, level: u32) -> &LevelData {
        &self.level_data[level as usize]
    }

    /// Parameters used to orient the children hung from a `level` stem.
    ///
    /// Falls back to the stem's own level when no deeper entry exists.
    pub fn child_level(&self, level: u32) -> &LevelData {
        self.level_data
            .get(level as usize + 1)
            .unwrap_or_else(|| self.level(level))
    }

    /// Check the generator's input contract.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.radial_resolution < 3 {
            return Err(ParameterError::RadialResolution(self.radial_resolution));
        }
        if self.segment_resolution < 1 {
            return Err(ParameterError::SegmentResolution(self.segment_resolution));
        }
        if self.levels > MAX_LEVELS {
            return Err(ParameterError::TooManyLevels {
                levels: self.levels,
                max: MAX_LEVELS,
            });
        }
        let needed = self.levels as usize + 1;
        if self.level_data.len() < needed {
            return Err(ParameterError::MissingLevelData {
                levels: self.levels,
                needed,
                found: self.level_data.len(),
            });
        }
        if self.max_stems == 0 {
            return Err(ParameterError::ZeroBudget);
        }

        for (name, value) in [
            ("base_size", self.base_size),
            ("scale_variance", self.scale_variance),
            ("ratio_power", self.ratio_power),
            ("leaf_scale", self.leaf_scale),
            ("leaf_scale_x", self.leaf_scale_x),
        ] {
            check_finite(name, value)?;
        }
        check_positive("scale", self.scale)?;
        check_positive("ratio", self.ratio)?;

        for (index, data) in self.level_data.iter().enumerate() {
            for (name, value) in data.numeric_fields() {
                check_finite(&format!("level_data[{}].{}", index, name), value)?;
            }
        }

        for (index, data) in self.level_data.iter().take(needed).enumerate() {
            if data.curve_resolution < 1 {
                return Err(ParameterError::CurveResolution { level: index });
            }
            if !(0.0..=3.0).contains(&data.taper) {
                return Err(ParameterError::Taper {
                    level: index,
                    taper: data.taper,
                });
            }
            check_positive(&format!("level_data[{}].length", index), data.length)?;
        }

        let trunk = self.level(0);
        check_positive(
            "trunk length",
            (self.scale - self.scale_variance.abs()) * (trunk.length - trunk.length_variance.abs()),
        )?;
        check_positive(
            "trunk radius_scale",
            trunk.radius_scale - trunk.radius_scale_variance.abs(),
        )?;

        Ok(())
    }
}

fn check_finite(field: &str, value: f32) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite {
            field: field.to_string(),
        })
    }
}

fn check_positive(field: &str, value: f32) -> Result<(), ParameterError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NotPositive {
            field: field.to_string(),
            value,
        })
    }
}
