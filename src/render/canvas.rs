// canvas.rs - Browser canvas surface
//
// Thin mapping of `Surface` onto CanvasRenderingContext2d. Size reads and
// writes go through the owning <canvas> element; setting either dimension
// clears the bitmap, same as in JS.

use kurbo::Point;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Stroke, Surface};
use crate::error::{TimelineError, TimelineResult};

#[derive(Clone)]
pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: HtmlCanvasElement) -> TimelineResult<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| TimelineError::host("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| TimelineError::host("2d context has unexpected type"))?;
        Ok(Self { canvas, ctx })
    }

    pub fn from_context(ctx: CanvasRenderingContext2d) -> TimelineResult<Self> {
        let canvas = ctx
            .canvas()
            .ok_or_else(|| TimelineError::host("context is not attached to a canvas"))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for Canvas2d {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, w: u32, h: u32) {
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn quad_to(&mut self, ctrl: Point, p: Point) {
        self.ctx.quadratic_curve_to(ctrl.x, ctrl.y, p.x, p.y);
    }

    fn stroke(&mut self, style: &Stroke) {
        self.ctx.set_line_width(style.width);
        self.ctx.set_line_cap(style.cap.css());
        self.ctx.set_stroke_style_str(&style.color.css());
        self.ctx.stroke();
    }
}
