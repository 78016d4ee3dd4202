// curve/ - Main curve geometry
//
// Pure functions over the per-frame sample sequence.
// No state kept between frames; callers own the sample buffer.

mod profile;
mod tangent;
mod wave;

pub use profile::thickness_at;
pub use tangent::{normal, tangent_angle};
pub use wave::{draw_curve, sample_curve};

use kurbo::Point;

/// One sample of the main curve. The index in the sequence is the pixel x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub pos: Point,
    pub thickness: f64,
}
