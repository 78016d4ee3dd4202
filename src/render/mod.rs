// render/ - Drawing surfaces
//
// The engine never talks to a canvas directly. Every frame is written to a
// `Surface`, which mirrors the small slice of the 2D canvas API we use:
// clear, path building, and stroking with a width, cap and color.
//
// Implementations:
// - `Recorder`  (record.rs)  in-memory command list, for tests and inspection
// - `Canvas2d`  (canvas.rs)  browser CanvasRenderingContext2d, wasm32 only
// - `Raster`    (raster.rs)  CPU rasterizer into an RgbaImage, native only

mod record;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(not(target_arch = "wasm32"))]
mod raster;

pub use record::{DrawCommand, Recorder};
#[cfg(target_arch = "wasm32")]
pub use canvas::Canvas2d;
#[cfg(not(target_arch = "wasm32"))]
pub use raster::Raster;

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Opaque 8-bit color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// CSS form accepted by `strokeStyle`
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
}

impl LineCap {
    pub fn css(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Rgb,
    pub cap: LineCap,
}

/// 2D drawing target. Paths are built with `begin_path` / `move_to` /
/// `line_to` / `quad_to` and rendered by `stroke`.
pub trait Surface {
    fn size(&self) -> (u32, u32);
    fn set_size(&mut self, w: u32, h: u32);
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn quad_to(&mut self, ctrl: Point, p: Point);
    fn stroke(&mut self, style: &Stroke);
}
