mod utils;

pub mod animation;
pub mod color;
pub mod field;
pub mod particle;
pub mod renderer;

use crate::field::ParticleField;
use crate::renderer::Canvas2d;
use rand::thread_rng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// A macro to provide `println!(..)`-style syntax for `console.log` logging.
#[allow(unused_macros)]
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into());
    }
}

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

// The background canvas the hosting page hands us: owns the particle field
// and the 2d context, and gets driven by the page's requestAnimationFrame
// loop and resize listener.
#[wasm_bindgen]
pub struct ParticleCanvas {
    canvas: HtmlCanvasElement,
    surface: Canvas2d,
    field: ParticleField,
}

#[wasm_bindgen]
impl ParticleCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ParticleCanvas, JsValue> {
        let (width, height) = viewport_size()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let field = ParticleField::new(width, height, &mut thread_rng());
        log!("particle field started with {} particles", field.len());
        Ok(ParticleCanvas {
            canvas,
            surface: Canvas2d::new(ctx, width, height),
            field,
        })
    }

    // One animation frame: clear, advance every particle, redraw
    pub fn tick(&mut self) {
        let _timer = Timer::new("ParticleCanvas::tick");
        animation::step(&mut self.field, &mut self.surface);
    }

    // Resize handler: match the canvas to the viewport and rebuild the
    // field from scratch; old particles are discarded, not carried over
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let (width, height) = viewport_size()?;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.surface.set_size(width, height);
        self.field.resize(width, height, &mut thread_rng());
        Ok(())
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }
}

fn viewport_size() -> Result<(f64, f64), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}
