// profile.rs - Thickness profile
//
// Thick at the horizontal center, tapering toward both edges.

use crate::config::MainCurveSettings;

/// Stroke width at pixel column `x` on a surface `width` wide.
/// Always within [min_width, max_width].
#[inline]
pub fn thickness_at(x: f64, width: f64, main: &MainCurveSettings) -> f64 {
    let center = width * 0.5;
    if center <= 0.0 {
        return main.min_width;
    }

    // 0 at center, 1 at the edges
    let d = ((x - center) / center).abs();
    let s = (1.0 - d.powf(main.profile_exponent)).max(0.0);
    let w = main.min_width + s * (main.max_width - main.min_width);
    w.clamp(main.min_width, main.max_width)
}
