// growth/ - Offshoot branches
//
// Each branch is pinned to a sample index on the main curve and grows a
// little every frame. Its shape is rebuilt from the current samples each
// frame; only the length carries over.

mod branch;
mod repel;

pub use branch::Branch;
pub use repel::{repulsion_influence, steer};

use kurbo::Point;

use crate::config::BranchSettings;
use crate::render::{Stroke, Surface};

/// Geometry of a branch for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BranchShape {
    Line { base: Point, end: Point },
    Bow { base: Point, ctrl: Point, end: Point },
}

impl BranchShape {
    pub fn base(&self) -> Point {
        match *self {
            BranchShape::Line { base, .. } | BranchShape::Bow { base, .. } => base,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            BranchShape::Line { end, .. } | BranchShape::Bow { end, .. } => end,
        }
    }
}

pub fn draw_branch(shape: &BranchShape, settings: &BranchSettings, surface: &mut impl Surface) {
    surface.begin_path();
    match *shape {
        BranchShape::Line { base, end } => {
            surface.move_to(base);
            surface.line_to(end);
        }
        BranchShape::Bow { base, ctrl, end } => {
            surface.move_to(base);
            surface.quad_to(ctrl, end);
        }
    }
    surface.stroke(&Stroke {
        width: settings.width,
        color: settings.color,
        cap: settings.cap,
    });
}
