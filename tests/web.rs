//! Browser-side smoke test: the background attaches a canvas child to its
//! container and survives a frame and a resize.

#![cfg(target_arch = "wasm32")]

use particle_field::ParticleBackground;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn attaches_canvas_and_renders_a_frame() {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let mut background = ParticleBackground::attach(container.clone()).unwrap();
    assert_eq!(container.child_element_count(), 1);
    assert_eq!(background.particle_count(), 60);

    background.frame().unwrap();
    background.resize();
    background.frame().unwrap();
}

#[wasm_bindgen_test]
fn respects_an_explicit_particle_count() {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let mut background = ParticleBackground::attach_with_count(container, 5).unwrap();
    assert_eq!(background.particle_count(), 5);
    background.frame().unwrap();
}
