// tangent.rs - Local direction of the centerline
//
// Finite differences over neighboring samples: central where both sides
// exist, one-sided at the ends of the sequence.

use kurbo::Vec2;

use super::Sample;

/// Tangent angle (radians) at sample `i`.
/// `None` if `i` is outside the sequence; `Some(0.0)` for a lone sample.
pub fn tangent_angle(samples: &[Sample], i: usize) -> Option<f64> {
    let here = samples.get(i)?;
    let prev = i.checked_sub(1).and_then(|j| samples.get(j));
    let next = samples.get(i + 1);

    let d = match (prev, next) {
        (Some(p), Some(n)) => n.pos - p.pos,
        (None, Some(n)) => n.pos - here.pos,
        (Some(p), None) => here.pos - p.pos,
        (None, None) => return Some(0.0),
    };
    Some(d.atan2())
}

/// Unit normal for a tangent angle: the tangent rotated +90 degrees
/// (toward +y on a y-down canvas when the curve runs left to right).
#[inline]
pub fn normal(tangent: f64) -> Vec2 {
    Vec2::new(-tangent.sin(), tangent.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn at(x: f64, y: f64) -> Sample {
        Sample { pos: Point::new(x, y), thickness: 1.0 }
    }

    #[test]
    fn central_difference() {
        let samples = [at(100.0, 10.0), at(101.0, 0.0), at(102.0, 20.0)];
        assert_eq!(tangent_angle(&samples, 1), Some(10f64.atan2(2.0)));
    }

    #[test]
    fn one_sided_at_the_ends() {
        let samples = [at(0.0, 0.0), at(1.0, 1.0), at(2.0, 1.0)];
        assert_eq!(tangent_angle(&samples, 0), Some(1f64.atan2(1.0)));
        assert_eq!(tangent_angle(&samples, 2), Some(0.0));
    }

    #[test]
    fn lone_sample_is_flat() {
        assert_eq!(tangent_angle(&[at(5.0, 5.0)], 0), Some(0.0));
    }

    #[test]
    fn out_of_range_is_none() {
        let samples = [at(0.0, 0.0), at(1.0, 0.0)];
        assert_eq!(tangent_angle(&samples, 2), None);
        assert_eq!(tangent_angle(&[], 0), None);
    }

    #[test]
    fn normal_is_perpendicular() {
        let t = 0.7;
        let n = normal(t);
        let dir = Vec2::from_angle(t);
        assert!(n.dot(dir).abs() < 1e-12);
        assert!((n.hypot() - 1.0).abs() < 1e-12);
        assert_eq!(normal(0.0), Vec2::new(-0.0, 1.0));
    }
}
