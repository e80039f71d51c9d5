// Canvas-facing half of the background. Owns the <canvas> inserted into
// the container and its 2d context, and knows how to paint one frame of a
// ParticleField: clear, discs, then proximity links.

use crate::color;
use crate::field::ParticleField;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

// Absolutely positioned behind siblings, never intercepts pointer events.
const CANVAS_CSS: &str =
    "position:absolute;inset:0;width:100%;height:100%;pointer-events:none;z-index:0;";

const LINK_LINE_WIDTH: f64 = 0.5;

pub struct CanvasRenderer {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Creates the canvas child inside `container`, grabs the 2d context,
    /// and sizes the pixel buffer to the container's rendered size.
    pub fn new(container: HtmlElement) -> Result<CanvasRenderer, JsValue> {
        let document = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.style().set_css_text(CANVAS_CSS);
        container.append_child(&canvas)?;

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let renderer = CanvasRenderer {
            container,
            canvas,
            context,
        };
        renderer.fit_to_container();
        Ok(renderer)
    }

    /// Re-reads the container's rendered size and matches the canvas pixel
    /// dimensions to it. Returns the size so the field bounds can follow.
    /// Setting a canvas dimension clears it even when the value is equal,
    /// so unchanged axes are skipped.
    pub fn fit_to_container(&self) -> (f64, f64) {
        let width = self.container.offset_width().max(0) as u32;
        let height = self.container.offset_height().max(0) as u32;
        if width != self.canvas.width() {
            self.canvas.set_width(width);
        }
        if height != self.canvas.height() {
            self.canvas.set_height(height);
        }
        (f64::from(width), f64::from(height))
    }

    pub fn surface_size(&self) -> (f64, f64) {
        (
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    /// Paints one frame: full clear, a filled disc per particle, then a
    /// faint line per proximity link.
    pub fn draw(&self, field: &ParticleField) -> Result<(), JsValue> {
        let ctx = &self.context;
        let (width, height) = self.surface_size();
        ctx.clear_rect(0.0, 0.0, width, height);

        for p in field.particles() {
            ctx.begin_path();
            ctx.arc(p.pos[0], p.pos[1], p.radius, 0.0, PI * 2.0)?;
            #[allow(deprecated)]
            ctx.set_fill_style(&JsValue::from_str(&p.hue.fill_style(p.opacity)));
            ctx.fill();
        }

        ctx.set_line_width(LINK_LINE_WIDTH);
        let particles = field.particles();
        for link in field.links() {
            let from = particles[link.a].pos;
            let to = particles[link.b].pos;
            ctx.begin_path();
            ctx.move_to(from[0], from[1]);
            ctx.line_to(to[0], to[1]);
            #[allow(deprecated)]
            ctx.set_stroke_style(&JsValue::from_str(&color::link_style(link.alpha)));
            ctx.stroke();
        }

        Ok(())
    }
}
