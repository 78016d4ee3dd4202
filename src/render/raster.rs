// raster.rs - CPU raster surface
//
// Paths are collected into a BezPath and stroked with vello_cpu. The
// render context accumulates the whole frame; `render` flushes it into a
// pixmap and copies that out as an RgbaImage.

use std::path::Path;

use image::RgbaImage;
use kurbo::Point;
use vello_cpu::kurbo::{self as cpu, BezPath, Cap};
use vello_cpu::peniko::Color;
use vello_cpu::{Pixmap, RenderContext};

use super::{LineCap, Rgb, Stroke, Surface};
use crate::error::{TimelineError, TimelineResult};

pub struct Raster {
    w: u16,
    h: u16,
    background: Rgb,
    ctx: RenderContext,
    path: BezPath,
}

fn to_cpu(p: Point) -> cpu::Point {
    cpu::Point::new(p.x, p.y)
}

fn paint(c: Rgb) -> Color {
    Color::from_rgba8(c.0, c.1, c.2, 255)
}

fn cap(c: LineCap) -> Cap {
    match c {
        LineCap::Butt => Cap::Butt,
        LineCap::Round => Cap::Round,
    }
}

impl Raster {
    pub fn new(w: u32, h: u32, background: Rgb) -> TimelineResult<Self> {
        let w: u16 = w
            .try_into()
            .map_err(|_| TimelineError::host("raster width exceeds u16"))?;
        let h: u16 = h
            .try_into()
            .map_err(|_| TimelineError::host("raster height exceeds u16"))?;

        let mut raster = Self {
            w,
            h,
            background,
            ctx: RenderContext::new(w, h),
            path: BezPath::new(),
        };
        raster.clear();
        Ok(raster)
    }

    /// Flush everything stroked since the last clear into an image
    pub fn render(&mut self) -> RgbaImage {
        let mut pixmap = Pixmap::new(self.w, self.h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        // Background is opaque, so premultiplied bytes equal straight RGBA
        let bytes = pixmap.data_as_u8_slice().to_vec();
        RgbaImage::from_raw(self.w as u32, self.h as u32, bytes)
            .unwrap_or_else(|| RgbaImage::new(self.w as u32, self.h as u32))
    }

    pub fn save(&mut self, path: &Path) -> TimelineResult<()> {
        self.render().save(path)?;
        Ok(())
    }
}

impl Surface for Raster {
    fn size(&self) -> (u32, u32) {
        (self.w as u32, self.h as u32)
    }

    fn set_size(&mut self, w: u32, h: u32) {
        self.w = w.min(u16::MAX as u32) as u16;
        self.h = h.min(u16::MAX as u32) as u16;
        self.clear();
    }

    fn clear(&mut self) {
        self.ctx = RenderContext::new(self.w, self.h);
        self.ctx.set_paint(paint(self.background));
        self.ctx
            .fill_rect(&cpu::Rect::new(0.0, 0.0, self.w as f64, self.h as f64));
        self.path = BezPath::new();
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(to_cpu(p));
    }

    fn line_to(&mut self, p: Point) {
        if self.path.elements().is_empty() {
            self.path.move_to(to_cpu(p));
        } else {
            self.path.line_to(to_cpu(p));
        }
    }

    fn quad_to(&mut self, ctrl: Point, p: Point) {
        if self.path.elements().is_empty() {
            self.path.move_to(to_cpu(p));
        } else {
            self.path.quad_to(to_cpu(ctrl), to_cpu(p));
        }
    }

    fn stroke(&mut self, style: &Stroke) {
        self.ctx
            .set_stroke(cpu::Stroke::new(style.width).with_caps(cap(style.cap)));
        self.ctx.set_paint(paint(style.color));
        self.ctx.stroke_path(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Antialiased edges aside, covered pixels take the stroke color
    fn lit(img: &RgbaImage, x: u32, y: u32) -> bool {
        let p = img.get_pixel(x, y).0;
        p[0] > 200 && p[3] == 255
    }

    fn dark(img: &RgbaImage, x: u32, y: u32) -> bool {
        let p = img.get_pixel(x, y).0;
        p[0] < 30 && p[1] < 30 && p[2] < 30
    }

    #[test]
    fn line_stroke_paints_pixels() {
        let mut r = Raster::new(20, 20, Rgb::BLACK).unwrap();
        r.begin_path();
        r.move_to(Point::new(2.0, 10.0));
        r.line_to(Point::new(18.0, 10.0));
        r.stroke(&Stroke { width: 4.0, color: Rgb::WHITE, cap: LineCap::Round });

        let img = r.render();
        assert!(lit(&img, 10, 10));
        assert!(dark(&img, 10, 2));
    }

    #[test]
    fn butt_cap_stops_short() {
        let mut r = Raster::new(30, 10, Rgb::BLACK).unwrap();
        r.begin_path();
        r.move_to(Point::new(5.0, 5.0));
        r.line_to(Point::new(25.0, 5.0));
        r.stroke(&Stroke { width: 6.0, color: Rgb::ORANGE, cap: LineCap::Butt });

        let img = r.render();
        // Round cap would reach x=2; butt ends at x=5
        assert!(dark(&img, 3, 5));
        assert!(lit(&img, 15, 5));
        assert!(img.get_pixel(15, 5).0[1] > 140);
    }

    #[test]
    fn round_cap_overhangs() {
        let mut r = Raster::new(30, 10, Rgb::BLACK).unwrap();
        r.begin_path();
        r.move_to(Point::new(8.0, 5.0));
        r.line_to(Point::new(25.0, 5.0));
        r.stroke(&Stroke { width: 6.0, color: Rgb::WHITE, cap: LineCap::Round });

        assert!(lit(&r.render(), 6, 5));
    }

    #[test]
    fn quad_passes_through_its_apex() {
        let mut r = Raster::new(40, 40, Rgb::BLACK).unwrap();
        r.begin_path();
        r.move_to(Point::new(5.0, 30.0));
        r.quad_to(Point::new(20.0, 0.0), Point::new(35.0, 30.0));
        r.stroke(&Stroke { width: 4.0, color: Rgb::WHITE, cap: LineCap::Round });

        // Apex of this quad is at (20, 15)
        let img = r.render();
        assert!(lit(&img, 19, 14));
        assert!(dark(&img, 20, 30));
    }

    #[test]
    fn clear_and_resize() {
        let mut r = Raster::new(4, 4, Rgb::WHITE).unwrap();
        r.set_size(8, 2);
        assert_eq!(r.size(), (8, 2));
        let img = r.render();
        assert_eq!(img.dimensions(), (8, 2));
        assert_eq!(img.get_pixel(7, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn oversized_raster_is_rejected() {
        assert!(Raster::new(70_000, 10, Rgb::BLACK).is_err());
    }
}
