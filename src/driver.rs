// driver.rs - Frame scheduling
//
// The timeline doesn't know when frames happen. A `Scheduler` takes a
// render-one-frame callback and calls it at whatever cadence the host has.

use crate::error::TimelineResult;

pub trait Scheduler {
    fn run(self, frame: Box<dyn FnMut()>) -> TimelineResult<()>;
}

/// Calls the frame callback a fixed number of times, back to back.
/// Used off-browser, where there is no display refresh to follow.
#[derive(Clone, Copy, Debug)]
pub struct FixedSteps(pub usize);

impl Scheduler for FixedSteps {
    fn run(self, mut frame: Box<dyn FnMut()>) -> TimelineResult<()> {
        for _ in 0..self.0 {
            frame();
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AnimationFrames;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::Scheduler;
    use crate::error::{TimelineError, TimelineResult};

    /// Follows the display refresh via requestAnimationFrame, forever.
    ///
    /// The closure has to re-request itself, so it lives in a shared slot
    /// it can reach from inside its own body.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct AnimationFrames;

    fn request(f: &Closure<dyn FnMut()>) -> TimelineResult<()> {
        let window = web_sys::window().ok_or_else(|| TimelineError::missing_element("window"))?;
        let callback: &js_sys::Function = f.as_ref().unchecked_ref();
        window.request_animation_frame(callback)?;
        Ok(())
    }

    impl Scheduler for AnimationFrames {
        fn run(self, mut frame: Box<dyn FnMut()>) -> TimelineResult<()> {
            let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let inner = slot.clone();

            *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                frame();
                if let Some(f) = inner.borrow().as_ref() {
                    if let Err(e) = request(f) {
                        log::error!("animation stopped: {e}");
                    }
                }
            }) as Box<dyn FnMut()>));

            let started = match slot.borrow().as_ref() {
                Some(f) => request(f),
                None => Ok(()),
            };
            started
        }
    }
}
