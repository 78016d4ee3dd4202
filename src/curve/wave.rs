// wave.rs - Sine centerline sampling and stroking

use kurbo::Point;

use super::{Sample, thickness_at};
use crate::config::MainCurveSettings;
use crate::render::{Stroke, Surface};

/// Fill `out` with one sample per integer x in [0, w).
/// `out` is cleared first so the buffer can be reused across frames.
pub fn sample_curve(w: u32, h: u32, clock: f64, main: &MainCurveSettings, out: &mut Vec<Sample>) {
    out.clear();
    out.reserve(w as usize);

    let width = w as f64;
    let mid = h as f64 * 0.5;
    for x in 0..w {
        let x = x as f64;
        let y = mid + main.amplitude * (x * main.frequency + clock).sin();
        out.push(Sample {
            pos: Point::new(x, y),
            thickness: thickness_at(x, width, main),
        });
    }
}

/// Stroke consecutive sample pairs one segment at a time; canvas has no
/// per-vertex width, so each segment takes the mean of its endpoints.
pub fn draw_curve(samples: &[Sample], main: &MainCurveSettings, surface: &mut impl Surface) {
    for pair in samples.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        surface.begin_path();
        surface.move_to(a.pos);
        surface.line_to(b.pos);
        surface.stroke(&Stroke {
            width: (a.thickness + b.thickness) * 0.5,
            color: main.color,
            cap: main.cap,
        });
    }
}
