// timeline-engine - Animated "sacred timeline" background
//
// A sine-wave main branch, thick at the center and tapering to the edges,
// with offshoot branches growing from fixed points along it. Each frame is
// recomputed from the clock and the branch lengths; nothing else persists.
//
// Module map:
//   config    tunables, JSON-loadable
//   curve     main curve sampling, thickness profile, tangents
//   growth    offshoot branches (repel or bow policy)
//   timeline  per-session state + frame step
//   driver    frame scheduling (fixed steps, requestAnimationFrame)
//   render    Surface trait + canvas / recorder / raster surfaces
//   web       wasm-bindgen entry points (wasm32 only)

pub mod config;
pub mod curve;
pub mod driver;
pub mod error;
pub mod growth;
pub mod render;
pub mod timeline;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{TimelineHandle, start, start_with_config};

pub use config::{BranchSettings, BranchSpec, GrowthPolicy, MainCurveSettings, TimelineConfig};
pub use error::{TimelineError, TimelineResult};
pub use timeline::{FrameStats, Timeline};
