// Explicit wrapper over requestAnimationFrame / cancelAnimationFrame.
// The tick callback owns the per-frame work; the loop reschedules itself
// until stop() cancels the pending frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    // Holds the recursive closure for the lifetime of the loop; dropping it
    // while a frame is pending would invalidate the scheduled callback
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut() + 'static) -> Result<FrameLoop, JsValue> {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        // The closure reschedules itself through a handle to its own cell
        let closure_handle = closure.clone();
        let raf_handle = raf_id.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            tick();
            if let Some(window) = web_sys::window() {
                let borrowed = closure_handle.borrow();
                let callback = borrowed.as_ref().expect("frame closure missing");
                if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    raf_handle.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let first_id = window.request_animation_frame(
            closure
                .borrow()
                .as_ref()
                .expect("frame closure missing")
                .as_ref()
                .unchecked_ref(),
        )?;
        raf_id.set(Some(first_id));

        Ok(FrameLoop {
            raf_id,
            _tick: closure,
        })
    }

    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}
