// Drawing surface abstraction. The simulation in field.rs issues draw calls
// through this trait so it can be exercised without a browser canvas; the
// production implementation forwards to a CanvasRenderingContext2d.

use crate::color::Color;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, line_width: f64);
}

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> CanvasSurface {
        CanvasSurface { context }
    }
}

// Drawing calls are treated as infallible once the context exists; arc() only
// errors on non-finite input, which the simulation never produces.
impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) {
        self.context.begin_path();
        let _ = self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0);
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, line_width: f64) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css_with_alpha(alpha)));
        self.context.set_line_width(line_width);
        self.context.stroke();
    }
}
