// web.rs - Browser entry points
//
// Finds the canvas, keeps it sized to the viewport, and hands the frame
// loop to requestAnimationFrame. Hosts that run their own loop can use
// `TimelineHandle` instead and call `tick` themselves.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::config::TimelineConfig;
use crate::driver::{AnimationFrames, Scheduler};
use crate::error::{TimelineError, TimelineResult};
use crate::render::{Canvas2d, Surface};
use crate::timeline::Timeline;

static INIT: Once = Once::new();

fn init_hooks() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
    });
}

fn window() -> TimelineResult<Window> {
    web_sys::window().ok_or_else(|| TimelineError::missing_element("window"))
}

fn viewport(window: &Window) -> TimelineResult<(u32, u32)> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w as u32, h as u32))
}

fn find_canvas(window: &Window, id: &str) -> TimelineResult<HtmlCanvasElement> {
    let document = window
        .document()
        .ok_or_else(|| TimelineError::missing_element("document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| TimelineError::missing_element(format!("#{id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| TimelineError::missing_element(format!("#{id} is not a <canvas>")))
}

fn fit_to_viewport(surface: &mut Canvas2d) -> TimelineResult<()> {
    let (w, h) = viewport(&window()?)?;
    surface.set_size(w, h);
    debug!("canvas resized to {w}x{h}");
    Ok(())
}

fn run(canvas_id: &str, config: TimelineConfig) -> TimelineResult<()> {
    let window = window()?;
    let mut surface = Canvas2d::new(find_canvas(&window, canvas_id)?)?;
    fit_to_viewport(&mut surface)?;

    let timeline = Timeline::new(config)?;
    info!("timeline started on #{canvas_id}");

    // Resizing only touches canvas dimensions; the next frame resamples.
    let resize = {
        let mut surface = surface.clone();
        Closure::wrap(Box::new(move || {
            if let Err(e) = fit_to_viewport(&mut surface) {
                log::error!("resize failed: {e}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    resize.forget();

    let state = Rc::new(RefCell::new((timeline, surface)));
    AnimationFrames.run(Box::new(move || {
        let mut guard = state.borrow_mut();
        let (timeline, surface) = &mut *guard;
        timeline.frame(surface);
    }))
}

/// Animate `#canvas_id` with the default settings.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    init_hooks();
    run(canvas_id, TimelineConfig::default())?;
    Ok(())
}

/// Animate `#canvas_id` with settings from JSON; omitted fields use defaults.
#[wasm_bindgen]
pub fn start_with_config(canvas_id: &str, config_json: &str) -> Result<(), JsValue> {
    init_hooks();
    let config = TimelineConfig::from_json(config_json)?;
    run(canvas_id, config)?;
    Ok(())
}

/// Timeline driven by the host's own frame loop
#[wasm_bindgen]
pub struct TimelineHandle {
    timeline: Timeline,
}

#[wasm_bindgen]
impl TimelineHandle {
    /// Empty string means default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<TimelineHandle, JsValue> {
        init_hooks();
        let config = if config_json.trim().is_empty() {
            TimelineConfig::default()
        } else {
            TimelineConfig::from_json(config_json)?
        };
        Ok(Self { timeline: Timeline::new(config)? })
    }

    /// Draw one frame at the context's canvas size
    pub fn tick(&mut self, ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
        let mut surface = Canvas2d::from_context(ctx)?;
        self.timeline.frame(&mut surface);
        Ok(())
    }

    pub fn clock(&self) -> f64 {
        self.timeline.clock()
    }
}
