use glam::{Quat, Vec2, Vec3};
use std::f32::consts::TAU;

/// One circular cross-section of a stem.
///
/// Every ring of a stem is generated with the same resolution and the same
/// angular ordering, which is what lets [`crate::mesh::build_tube`] stitch
/// consecutive rings with fixed index arithmetic.
#[derive(Debug, Clone)]
pub struct Ring {
    pub midpoint: Vec3,
    /// (pitch, yaw) in radians
    pub orientation: Vec2,
    pub radius: f32,
    pub vertices: Vec<Vec3>,
}

impl Ring {
    pub fn new(midpoint: Vec3, orientation: Vec2, radius: f32, resolution: usize) -> Self {
        assert!(resolution >= 3, "ring resolution must be at least 3, got {}", resolution);

        let rotation = orientation_quat(orientation);
        let step = TAU / resolution as f32;

        let vertices = (0..resolution)
            .map(|i| {
                let alpha = -step * i as f32;
                let local = Vec3::new(alpha.cos(), 0.0, -alpha.sin());
                midpoint + radius * (rotation * local)
            })
            .collect();

        Ring {
            midpoint,
            orientation,
            radius,
            vertices,
        }
    }

    pub fn resolution(&self) -> usize {
        self.vertices.len()
    }

    /// Unit normal of the plane through the first two perimeter vertices.
    ///
    /// This is the direction the next ring grows in. Degenerate rings (zero
    /// radius at a tapered tip) fall back to a unit ring of the same
    /// orientation.
    pub fn surface_normal(&self) -> Vec3 {
        let p = self.vertices[0] - self.midpoint;
        let q = self.vertices[1] - self.midpoint;
        let normal = -p.cross(q);

        if normal.length_squared() > f32::EPSILON * f32::EPSILON {
            return normal.normalize();
        }

        let unit = Ring::new(Vec3::ZERO, self.orientation, 1.0, self.resolution());
        let p = unit.vertices[0];
        let q = unit.vertices[1];
        (-p.cross(q)).normalize()
    }
}

/// Pitch about local x, then yaw about local y.
pub(crate) fn orientation_quat(orientation: Vec2) -> Quat {
    Quat::from_rotation_y(orientation.y) * Quat::from_rotation_x(orientation.x)
}
