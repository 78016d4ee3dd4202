// repel.rs - Soft steering away from the main curve
//
// Samples near the branch base nudge its direction away from themselves.
// The nudge fades linearly to nothing at `safe_distance`, and is blended
// through sin(away - angle) so a branch already pointing away is left alone.

use kurbo::Point;

use crate::config::BranchSettings;
use crate::curve::Sample;

/// `repulsion_strength` at distance 0, falling linearly to 0 at
/// `safe_distance` and staying 0 beyond it.
#[inline]
pub fn repulsion_influence(dist: f64, settings: &BranchSettings) -> f64 {
    if dist >= settings.safe_distance {
        return 0.0;
    }
    (1.0 - dist / settings.safe_distance) * settings.repulsion_strength
}

/// Steer `angle` away from samples within `neighbor_window` of `index`.
/// Samples are applied in index order, each seeing the angle left by the
/// previous one.
pub fn steer(angle: f64, base: Point, samples: &[Sample], index: usize, settings: &BranchSettings) -> f64 {
    let Some(last) = samples.len().checked_sub(1) else {
        return angle;
    };
    let lo = index.saturating_sub(settings.neighbor_window);
    let hi = index.saturating_add(settings.neighbor_window).min(last);
    if lo > hi {
        return angle;
    }

    let mut angle = angle;
    for s in &samples[lo..=hi] {
        // From the sample toward the base; a sample on the base gives (-0, -0),
        // so atan2 resolves to -pi
        let away = -(s.pos - base);
        let dist = away.hypot();
        let influence = repulsion_influence(dist, settings);
        if influence > 0.0 {
            angle += influence * settings.steer_rate * (away.atan2() - angle).sin();
        }
    }
    angle
}
