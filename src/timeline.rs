// timeline.rs - Per-session animation state and the frame step
//
// Owns everything that survives between frames: the clock and the branch
// list. Samples are rebuilt every frame into a reused buffer, so a resize
// between frames needs no bookkeeping here.

use log::{info, trace};

use crate::config::TimelineConfig;
use crate::curve::{Sample, draw_curve, sample_curve};
use crate::error::TimelineResult;
use crate::growth::{Branch, draw_branch};
use crate::render::Surface;

/// What one frame did, for logging and tests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub samples: usize,
    pub drawn: usize,
    pub skipped: usize,
}

pub struct Timeline {
    config: TimelineConfig,
    clock: f64,
    branches: Vec<Branch>,
    samples: Vec<Sample>,
}

impl Timeline {
    pub fn new(config: TimelineConfig) -> TimelineResult<Self> {
        config.validate()?;
        info!(
            "timeline: {} branches, policy {:?}",
            config.branches.len(),
            config.branch.policy
        );

        let branches = config.branches.iter().copied().map(Branch::new).collect();
        Ok(Self {
            config,
            clock: 0.0,
            branches,
            samples: Vec::new(),
        })
    }

    pub fn config(&self) -> &TimelineConfig { &self.config }
    pub fn clock(&self) -> f64 { self.clock }
    pub fn branches(&self) -> &[Branch] { &self.branches }

    /// Samples of the most recent frame
    pub fn samples(&self) -> &[Sample] { &self.samples }

    /// Render one frame at the surface's current size, then advance the clock.
    pub fn frame(&mut self, surface: &mut impl Surface) -> FrameStats {
        let (w, h) = surface.size();
        surface.clear();

        sample_curve(w, h, self.clock, &self.config.main, &mut self.samples);

        // Branches go down first so the main stroke covers their roots
        let mut stats = FrameStats { samples: self.samples.len(), ..Default::default() };
        for branch in &mut self.branches {
            match branch.update(&self.samples, &self.config.branch) {
                Some(shape) => {
                    draw_branch(&shape, &self.config.branch, surface);
                    stats.drawn += 1;
                }
                None => stats.skipped += 1,
            }
        }

        draw_curve(&self.samples, &self.config.main, surface);

        self.clock += self.config.main.wave_speed;
        trace!("frame t={:.4} {:?}", self.clock, stats);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Recorder;

    #[test]
    fn clock_advances_by_wave_speed() {
        let mut tl = Timeline::new(TimelineConfig::default()).unwrap();
        let mut rec = Recorder::new(100, 100);
        for _ in 0..3 {
            tl.frame(&mut rec);
        }
        assert!((tl.clock() - 3.0 * tl.config().main.wave_speed).abs() < 1e-15);
    }

    #[test]
    fn narrow_surface_skips_far_branches() {
        let mut tl = Timeline::new(TimelineConfig::default()).unwrap();
        let mut rec = Recorder::new(450, 300);
        let stats = tl.frame(&mut rec);
        // Default branches sit at 200, 400 and 600
        assert_eq!(stats, FrameStats { samples: 450, drawn: 2, skipped: 1 });
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = TimelineConfig::default();
        cfg.branch.max_length = -1.0;
        assert!(Timeline::new(cfg).is_err());
    }

    #[test]
    fn branches_draw_before_the_main_curve() {
        let mut tl = Timeline::new(TimelineConfig::default()).unwrap();
        let mut rec = Recorder::new(800, 300);
        tl.frame(&mut rec);

        let strokes: Vec<_> = rec.strokes().collect();
        // 3 branches + 799 curve segments
        assert_eq!(strokes.len(), 3 + 799);
        assert!(strokes[..3].iter().all(|s| s.color == tl.config().branch.color));
        assert!(strokes[3..].iter().all(|s| s.color == tl.config().main.color));
    }
}
