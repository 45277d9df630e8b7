mod color;
mod driver;
mod field;
mod particle;
mod surface;
mod utils;

pub use crate::color::{Color, PALETTE};
pub use crate::field::{ParticleField, MAX_DISTANCE, NUM_PARTICLES};
pub use crate::particle::Particle;
pub use crate::surface::Surface;

use crate::driver::FrameLoop;
use crate::surface::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MouseEvent, Window,
};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// The host page provides the container; the canvas is ours
const CONTAINER_ID: &str = "matrix-bg";
const CANVAS_ID: &str = "neural-canvas";

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// The page-wide backdrop instance. Owns the canvas it created, the particle
/// field, and the running frame loop.
#[wasm_bindgen]
pub struct NeuralBackdrop {
    field: Rc<RefCell<ParticleField>>,
    canvas: HtmlCanvasElement,
    frame_loop: FrameLoop,
}

#[wasm_bindgen]
impl NeuralBackdrop {
    /// Looks up the well-known host container and attaches to it. A missing
    /// container is a construction error; there is no fallback.
    pub fn start() -> Result<NeuralBackdrop, JsValue> {
        let document = document()?;
        let container = document
            .get_element_by_id(CONTAINER_ID)
            .ok_or_else(|| JsValue::from_str("missing #matrix-bg container"))?;
        NeuralBackdrop::attach(&container)
    }

    /// Creates the canvas inside `container`, sizes it to the viewport,
    /// wires up pointer and resize listeners, and starts the frame loop.
    pub fn attach(container: &Element) -> Result<NeuralBackdrop, JsValue> {
        let window = window()?;
        let document = document()?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_id(CANVAS_ID);
        container.append_child(&canvas)?;

        // The backdrop usually sits behind the page content; make sure
        // pointer events still reach it
        if let Some(host) = container.dyn_ref::<web_sys::HtmlElement>() {
            host.style().set_property("pointer-events", "auto")?;
        }
        canvas.style().set_property("pointer-events", "auto")?;

        let (width, height) = viewport_size(&window)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut rng = rand::thread_rng();
        let field = Rc::new(RefCell::new(ParticleField::new(
            width,
            height,
            NUM_PARTICLES,
            &mut rng,
        )));

        console::log_1(
            &format!(
                "neural backdrop: {} particles on {}x{} surface",
                NUM_PARTICLES, width, height
            )
            .into(),
        );

        // Pointer tracking: present on mousemove, absent on mouseleave.
        // The closures are handed to the DOM for the page lifetime.
        {
            let field = field.clone();
            let on_mousemove = Closure::wrap(Box::new(move |event: MouseEvent| {
                field
                    .borrow_mut()
                    .set_pointer(event.client_x() as f64, event.client_y() as f64);
            }) as Box<dyn FnMut(_)>);
            document
                .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref())?;
            on_mousemove.forget();
        }
        {
            let field = field.clone();
            let on_mouseleave = Closure::wrap(Box::new(move |_: MouseEvent| {
                field.borrow_mut().clear_pointer();
            }) as Box<dyn FnMut(_)>);
            document
                .add_event_listener_with_callback("mouseleave", on_mouseleave.as_ref().unchecked_ref())?;
            on_mouseleave.forget();
        }
        {
            let field = field.clone();
            let canvas = canvas.clone();
            let window_handle = window.clone();
            let on_resize = Closure::wrap(Box::new(move || {
                if let Ok((width, height)) = viewport_size(&window_handle) {
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                    field.borrow_mut().resize(width, height);
                }
            }) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
            on_resize.forget();
        }

        let mut surface = CanvasSurface::new(context);
        let field_handle = field.clone();
        let frame_loop = FrameLoop::start(move || {
            field_handle.borrow_mut().step(&mut surface);
        })?;

        Ok(NeuralBackdrop {
            field,
            canvas,
            frame_loop,
        })
    }

    /// Cancels the pending animation frame. The field and canvas stay as-is.
    pub fn stop(&self) {
        self.frame_loop.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.canvas.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.field.borrow().particles().len() as u32
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}
