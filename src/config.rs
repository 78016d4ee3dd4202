// config.rs - Engine settings
//
// Everything tunable lives here. Defaults reproduce the site's look; hosts
// may override any subset through JSON (missing fields keep defaults).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::render::{LineCap, Rgb};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainCurveSettings {
    pub amplitude: f64,
    pub frequency: f64,
    /// Clock advance per frame
    pub wave_speed: f64,
    pub min_width: f64,
    pub max_width: f64,
    /// Higher = wider thick plateau, sharper falloff at the edges
    pub profile_exponent: f64,
    pub color: Rgb,
    pub cap: LineCap,
}

impl Default for MainCurveSettings {
    fn default() -> Self {
        Self {
            amplitude: 50.0,
            frequency: 0.003,
            wave_speed: 0.001,
            min_width: 5.0,
            max_width: 30.0,
            profile_exponent: 2.0,
            color: Rgb::WHITE,
            cap: LineCap::Round,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthPolicy {
    /// Straight branches steered away from nearby main-curve samples
    #[default]
    Repel,
    /// Quadratic branches bowed outward, no steering
    Bow,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchSettings {
    pub policy: GrowthPolicy,
    /// Length added per frame
    pub growth_speed: f64,
    pub max_length: f64,
    pub width: f64,
    pub color: Rgb,
    pub cap: LineCap,
    /// Scales the half-thickness push off the main stroke
    pub base_offset_factor: f64,

    // Repel
    pub repulsion_strength: f64,
    pub safe_distance: f64,
    /// Samples checked on each side of the attachment index
    pub neighbor_window: usize,
    pub steer_rate: f64,

    // Bow
    pub stretch: f64,
    pub curve_factor: f64,
}

impl Default for BranchSettings {
    fn default() -> Self {
        Self {
            policy: GrowthPolicy::Repel,
            growth_speed: 0.05,
            max_length: 150.0,
            width: 5.0,
            color: Rgb::ORANGE,
            cap: LineCap::Round,
            base_offset_factor: 1.0,
            repulsion_strength: 50.0,
            safe_distance: 25.0,
            neighbor_window: 5,
            steer_rate: 0.001,
            stretch: 1.0,
            curve_factor: 0.2,
        }
    }
}

/// Where a branch attaches (sample index == pixel x) and its angle off the
/// local tangent, in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchSpec {
    pub index: usize,
    pub angle_offset: f64,
}

impl BranchSpec {
    pub const fn new(index: usize, angle_offset: f64) -> Self {
        Self { index, angle_offset }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub main: MainCurveSettings,
    pub branch: BranchSettings,
    pub branches: Vec<BranchSpec>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            main: MainCurveSettings::default(),
            branch: BranchSettings::default(),
            branches: vec![
                BranchSpec::new(200, -PI / 4.0),
                BranchSpec::new(400, PI / 6.0),
                BranchSpec::new(600, -PI / 5.0),
            ],
        }
    }
}

impl TimelineConfig {
    pub fn from_json(json: &str) -> TimelineResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> TimelineResult<()> {
        let m = &self.main;
        let b = &self.branch;

        let numbers = [
            ("main.amplitude", m.amplitude),
            ("main.frequency", m.frequency),
            ("main.wave_speed", m.wave_speed),
            ("main.min_width", m.min_width),
            ("main.max_width", m.max_width),
            ("main.profile_exponent", m.profile_exponent),
            ("branch.growth_speed", b.growth_speed),
            ("branch.max_length", b.max_length),
            ("branch.width", b.width),
            ("branch.base_offset_factor", b.base_offset_factor),
            ("branch.repulsion_strength", b.repulsion_strength),
            ("branch.safe_distance", b.safe_distance),
            ("branch.steer_rate", b.steer_rate),
            ("branch.stretch", b.stretch),
            ("branch.curve_factor", b.curve_factor),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TimelineError::invalid_config(format!("{name} must be finite")));
        }
        if let Some(spec) = self.branches.iter().find(|s| !s.angle_offset.is_finite()) {
            return Err(TimelineError::invalid_config(format!(
                "branch at index {} has a non-finite angle offset",
                spec.index
            )));
        }

        if m.min_width < 0.0 || m.min_width > m.max_width {
            return Err(TimelineError::invalid_config(
                "main widths must satisfy 0 <= min_width <= max_width",
            ));
        }
        if m.profile_exponent <= 0.0 {
            return Err(TimelineError::invalid_config("main.profile_exponent must be > 0"));
        }
        if b.growth_speed < 0.0 {
            return Err(TimelineError::invalid_config("branch.growth_speed must be >= 0"));
        }
        if b.max_length < 0.0 {
            return Err(TimelineError::invalid_config("branch.max_length must be >= 0"));
        }
        if b.width < 0.0 {
            return Err(TimelineError::invalid_config("branch.width must be >= 0"));
        }
        if b.safe_distance <= 0.0 {
            return Err(TimelineError::invalid_config("branch.safe_distance must be > 0"));
        }
        Ok(())
    }
}
