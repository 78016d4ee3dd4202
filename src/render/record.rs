// record.rs - Command-recording surface
//
// Captures every surface call as a `DrawCommand`. Frames can be inspected
// without a browser, and the snapshot tool replays them onto a raster.

use kurbo::Point;

use super::{Stroke, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    Stroke(Stroke),
}

pub struct Recorder {
    w: u32,
    h: u32,
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every stroke call, in order
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke(s) => Some(s),
            _ => None,
        })
    }

    pub fn replay(&self, target: &mut impl Surface) {
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::Clear => target.clear(),
                DrawCommand::BeginPath => target.begin_path(),
                DrawCommand::MoveTo(p) => target.move_to(p),
                DrawCommand::LineTo(p) => target.line_to(p),
                DrawCommand::QuadTo(c, p) => target.quad_to(c, p),
                DrawCommand::Stroke(ref s) => target.stroke(s),
            }
        }
    }
}

impl Surface for Recorder {
    fn size(&self) -> (u32, u32) {
        (self.w, self.h)
    }

    fn set_size(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
    }

    // Clearing starts a new frame, so earlier commands are dropped as well.
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn quad_to(&mut self, ctrl: Point, p: Point) {
        self.commands.push(DrawCommand::QuadTo(ctrl, p));
    }

    fn stroke(&mut self, style: &Stroke) {
        self.commands.push(DrawCommand::Stroke(*style));
    }
}
