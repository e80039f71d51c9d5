mod utils;

pub mod color;
pub mod field;
pub mod particle;
pub mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use field::ParticleField;
use renderer::CanvasRenderer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlElement};

/// Particles spawned when the caller doesn't pick a count.
const DEFAULT_PARTICLE_COUNT: u32 = 60;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// One particle background bound to a container element. Owns the
/// simulation state and the canvas child; the host drives it by calling
/// `frame` once per animation frame, or hands the loop over via [`start`].
#[wasm_bindgen]
pub struct ParticleBackground {
    field: ParticleField,
    renderer: CanvasRenderer,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Builds the canvas inside `container` and spawns the default
    /// particle set sized to it.
    pub fn attach(container: HtmlElement) -> Result<ParticleBackground, JsValue> {
        ParticleBackground::attach_with_count(container, DEFAULT_PARTICLE_COUNT)
    }

    pub fn attach_with_count(
        container: HtmlElement,
        num_particles: u32,
    ) -> Result<ParticleBackground, JsValue> {
        let renderer = CanvasRenderer::new(container)?;
        let (width, height) = renderer.surface_size();
        let mut field = ParticleField::new(width, height);
        field.initialize_particles(num_particles, &mut rand::thread_rng());
        Ok(ParticleBackground { field, renderer })
    }

    /// Advances the simulation one tick and repaints.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        let _timer = Timer::new("ParticleBackground::frame");
        self.field.step();
        self.renderer.draw(&self.field)
    }

    /// Refits the canvas to the container and lets the field bounds follow.
    /// Particle state is left alone; a particle stranded by a shrink drifts
    /// back on its own.
    pub fn resize(&mut self) {
        let (width, height) = self.renderer.fit_to_container();
        self.field.resize(width, height);
    }

    pub fn particle_count(&self) -> u32 {
        self.field.particles().len() as u32
    }
}

/// Fire-and-forget entry point: attaches a background to `container`,
/// subscribes it to viewport resizes, and runs the animation-frame loop for
/// the rest of the page's life. There is no stop handle; hosts that need
/// deterministic teardown should use [`ParticleBackground::attach`] and
/// drive `frame` themselves.
#[wasm_bindgen]
pub fn start(container: HtmlElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let background = Rc::new(RefCell::new(ParticleBackground::attach(container)?));

    {
        let background = Rc::clone(&background);
        let on_resize = Closure::wrap(Box::new(move || {
            background.borrow_mut().resize();
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        // The listener lives until page unload.
        on_resize.forget();
    }

    // The usual self-rescheduling requestAnimationFrame pair: the closure
    // holds one handle to itself through `tick` and reschedules until a
    // frame fails.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let kickoff = Rc::clone(&tick);
    *kickoff.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if background.borrow_mut().frame().is_err() {
            return;
        }
        if let Some(callback) = tick.borrow().as_ref() {
            let _ = request_animation_frame(callback);
        }
    }) as Box<dyn FnMut()>));

    request_animation_frame(
        kickoff
            .borrow()
            .as_ref()
            .expect("animation closure installed above"),
    )?;
    Ok(())
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
