use glam::{Vec2, Vec3};

use crate::mesh::MeshBuffer;
use crate::ring::orientation_quat;

/// Leaf card outline in unit space, x across the blade and y along it.
const LEAF_OUTLINE: [[f32; 2]; 8] = [
    [0.0, 0.0],
    [0.3, 0.3],
    [0.0, 0.3],
    [-0.3, 0.3],
    [0.3, 0.7],
    [0.0, 0.7],
    [-0.3, 0.7],
    [0.0, 1.0],
];

const LEAF_TRIANGLES: [[u32; 3]; 8] = [
    [0, 2, 1],
    [0, 3, 2],
    [1, 2, 4],
    [2, 5, 4],
    [2, 3, 5],
    [3, 6, 5],
    [4, 5, 7],
    [5, 6, 7],
];

/// A leaf anchored on a stem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    pub position: Vec3,
    /// (pitch, yaw) in radians
    pub orientation: Vec2,
}

/// Builds the fixed eight-vertex leaf card.
#[derive(Debug, Clone, Copy)]
pub struct LeafBuilder {
    pub scale: f32,
    pub scale_x: f32,
}

impl LeafBuilder {
    pub fn new(scale: f32, scale_x: f32) -> Self {
        Self { scale, scale_x }
    }

    pub fn build(&self, leaf: &Leaf) -> MeshBuffer {
        let size = Vec3::new(self.scale * self.scale_x, self.scale, 0.0);
        let rotation = orientation_quat(leaf.orientation);

        let vertices = LEAF_OUTLINE
            .iter()
            .map(|&[x, y]| leaf.position + rotation * (Vec3::new(x, y, 0.0) * size))
            .collect();

        MeshBuffer {
            vertices,
            triangles: LEAF_TRIANGLES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_topology() {
        let builder = LeafBuilder::new(1.0, 0.5);
        let mesh = builder.build(&Leaf {
            position: Vec3::ZERO,
            orientation: Vec2::ZERO,
        });

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 8);
        assert!((mesh.max_index().unwrap() as usize) < mesh.vertex_count());
    }

    #[test]
    fn test_unrotated_leaf_scaled() {
        let builder = LeafBuilder::new(2.0, 0.5);
        let mesh = builder.build(&Leaf {
            position: Vec3::new(1.0, 1.0, 1.0),
            orientation: Vec2::ZERO,
        });

        assert_eq!(mesh.vertices[0], Vec3::new(1.0, 1.0, 1.0));
        assert!((mesh.vertices[1] - Vec3::new(1.3, 1.6, 1.0)).length() < 1e-5);
        assert!((mesh.vertices[7] - Vec3::new(1.0, 3.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_pitch_tips_leaf_over() {
        let builder = LeafBuilder::new(1.0, 1.0);
        let mesh = builder.build(&Leaf {
            position: Vec3::ZERO,
            orientation: Vec2::new(std::f32::consts::FRAC_PI_2, 0.0),
        });

        // Pitching a quarter turn about x swings the tip from +y to +z
        assert!((mesh.vertices[7] - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_every_leaf_shares_triangles() {
        let builder = LeafBuilder::new(0.4, 0.8);
        let a = builder.build(&Leaf {
            position: Vec3::ZERO,
            orientation: Vec2::new(0.1, 0.2),
        });
        let b = builder.build(&Leaf {
            position: Vec3::splat(4.0),
            orientation: Vec2::new(-1.0, 3.0),
        });
        assert_eq!(a.triangles, b.triangles);
    }
}
