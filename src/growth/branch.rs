// branch.rs - A single growing offshoot

use kurbo::Vec2;

use super::{BranchShape, steer};
use crate::config::{BranchSettings, BranchSpec, GrowthPolicy};
use crate::curve::{Sample, normal, tangent_angle};

#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    index: usize,
    angle_offset: f64,
    length: f64,
    shape: Option<BranchShape>,
}

impl Branch {
    pub fn new(spec: BranchSpec) -> Self {
        Self {
            index: spec.index,
            angle_offset: spec.angle_offset,
            length: 0.0,
            shape: None,
        }
    }

    pub fn index(&self) -> usize { self.index }
    pub fn angle_offset(&self) -> f64 { self.angle_offset }
    pub fn length(&self) -> f64 { self.length }

    /// Shape from the most recent frame, `None` if that frame skipped it
    pub fn shape(&self) -> Option<&BranchShape> {
        self.shape.as_ref()
    }

    pub fn is_grown(&self, settings: &BranchSettings) -> bool {
        self.length >= settings.max_length
    }

    fn grow(&mut self, settings: &BranchSettings) {
        self.length = (self.length + settings.growth_speed).clamp(0.0, settings.max_length);
    }

    // Which side of the main stroke the branch sits on. Zero offset sits on it.
    fn side(&self) -> f64 {
        if self.angle_offset == 0.0 { 0.0 } else { self.angle_offset.signum() }
    }

    /// Grow and reshape against this frame's samples.
    ///
    /// Returns `None` without growing when the attachment index has no
    /// sample (the surface shrank below it); the branch picks up where it
    /// left off once the index is back in range.
    pub fn update(&mut self, samples: &[Sample], settings: &BranchSettings) -> Option<BranchShape> {
        let Some(anchor) = samples.get(self.index) else {
            self.shape = None;
            return None;
        };

        self.grow(settings);

        let tangent = tangent_angle(samples, self.index).unwrap_or(0.0);
        let n = normal(tangent);

        // Start outside the main stroke instead of buried in it
        let push = anchor.thickness * 0.5 * settings.base_offset_factor * self.side();
        let base = anchor.pos + n * push;
        let angle = tangent + self.angle_offset;

        let shape = match settings.policy {
            GrowthPolicy::Repel => {
                let angle = steer(angle, base, samples, self.index, settings);
                let end = base + Vec2::from_angle(angle) * self.length;
                BranchShape::Line { base, end }
            }
            GrowthPolicy::Bow => {
                let end = base + Vec2::from_angle(angle) * (self.length * settings.stretch);
                let bow = if self.angle_offset > 0.0 { -1.0 } else { 1.0 };
                let ctrl = base.midpoint(end) + n * (self.length * settings.curve_factor * bow);
                BranchShape::Bow { base, ctrl, end }
            }
        };

        self.shape = Some(shape);
        Some(shape)
    }
}
