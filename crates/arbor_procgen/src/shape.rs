use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Overall silhouette of the crown, used to scale branch lengths
/// along the trunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeShape {
    #[default]
    Conical,
    Spherical,
    HemiSpherical,
    Cylindrical,
    TaperedCylindrical,
    Flame,
    InverseConical,
    TendFlame,
}

impl TreeShape {
    pub const ALL: [TreeShape; 8] = [
        TreeShape::Conical,
        TreeShape::Spherical,
        TreeShape::HemiSpherical,
        TreeShape::Cylindrical,
        TreeShape::TaperedCylindrical,
        TreeShape::Flame,
        TreeShape::InverseConical,
        TreeShape::TendFlame,
    ];
}

/// Evaluate the silhouette function at normalized position `ratio`.
///
/// `ratio` is clamped to `[0.01, 0.99]` first, so the function is total.
pub fn shape_ratio(shape: TreeShape, ratio: f32) -> f32 {
    let r = ratio.clamp(0.01, 0.99);

    match shape {
        TreeShape::Conical => 0.2 + 0.8 * r,
        TreeShape::Spherical => 0.2 + 0.8 * (PI * r).sin(),
        TreeShape::HemiSpherical => 0.2 + 0.8 * (0.5 * PI * r).sin(),
        TreeShape::Cylindrical => 1.0,
        TreeShape::TaperedCylindrical => 0.5 + 0.5 * r,
        TreeShape::Flame => {
            if r <= 0.7 {
                r / 0.7
            } else {
                (1.0 - r) / 0.3
            }
        }
        TreeShape::InverseConical => 1.0 - 0.8 * r,
        TreeShape::TendFlame => {
            if r <= 0.7 {
                0.5 + 0.5 * (r / 0.7)
            } else {
                0.5 + 0.5 * ((1.0 - r) / 0.3)
            }
        }
    }
}
