//! Longitudinal radius profiles for stems.
//!
//! Both functions take the normalized height `h = height / length`. Callers
//! clamp `h` to `[0, 1]`; values outside that range are not meaningful.

/// Radius of a stem at normalized height `h`.
///
/// `taper` selects the regime:
/// - `[0, 1)` linear shrink towards `base_radius * (1 - taper)` at the tip
/// - `[1, 2)` club taper, rounded off with a circular profile near the tip
/// - `[2, 3]` periodic bulges along the stem (`taper - 2` is the bulge depth)
pub fn taper_radius(h: f32, taper: f32, length: f32, base_radius: f32) -> f32 {
    debug_assert!((0.0..=3.0).contains(&taper), "taper out of range: {}", taper);

    let unit_taper = if (0.0..1.0).contains(&taper) {
        taper
    } else if (1.0..2.0).contains(&taper) {
        2.0 - taper
    } else {
        0.0
    };

    let taper_z = base_radius * (1.0 - unit_taper * h);

    if taper < 1.0 {
        return taper_z;
    }
    if taper > 3.0 {
        return base_radius;
    }

    let z_two = (1.0 - h) * length;

    let depth = if taper < 2.0 || z_two < taper_z {
        1.0
    } else {
        taper - 2.0
    };

    let z_three = if taper < 2.0 {
        z_two
    } else {
        // Truncation matches the reference model's integer cast
        let period = 2.0 * taper_z;
        (z_two - period * (z_two / period + 0.5).trunc()).abs()
    };

    if taper < 2.0 && z_three >= taper_z {
        taper_z
    } else {
        let offset = z_three - taper_z;
        (1.0 - depth) * taper_z + depth * (taper_z * taper_z - offset * offset).max(0.0).sqrt()
    }
}

/// Root flare multiplier at normalized height `h`.
///
/// `1 + 0.99 * flare` at the base, decaying to exactly `1.0` from `h = 0.125` upward.
pub fn flare_radius(h: f32, flare: f32) -> f32 {
    let y = (1.0 - 8.0 * h).max(0.0);
    flare * (100f32.powf(y) - 1.0) / 100.0 + 1.0
}
