// Frame loop: one step is clear -> advance -> render. run() keeps stepping
// for as long as the injected scheduler grants another frame; the browser
// build instead drives step() from its requestAnimationFrame callback
// (see ParticleCanvas::tick).

use crate::field::ParticleField;
use crate::renderer::{self, DrawSurface};

pub trait FrameScheduler {
    // Asks the host for one more frame; false ends the loop
    fn request_frame(&mut self) -> bool;
}

pub fn step<S: DrawSurface>(field: &mut ParticleField, surface: &mut S) {
    let (width, height) = (surface.width(), surface.height());
    surface.clear_region(0.0, 0.0, width, height);
    field.advance();
    renderer::render(field, surface);
}

pub fn run<S, F>(field: &mut ParticleField, surface: &mut S, scheduler: &mut F)
where
    S: DrawSurface,
    F: FrameScheduler,
{
    while scheduler.request_frame() {
        step(field, surface);
    }
}
