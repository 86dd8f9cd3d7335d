// Drawing layer: the DrawSurface seam over whichever 2d backend hosts the
// animation, the CanvasRenderingContext2d implementation used in the browser,
// and the render pass for particles and their proximity connections.

use crate::color::Color;
use crate::field::ParticleField;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub const NETWORK_HUE: Color = Color::from_u32(0x4fc3f7);
pub const CONNECT_DISTANCE: f64 = 150.0;
pub const CONNECT_ALPHA: f64 = 0.08;
pub const LINE_WIDTH: f64 = 0.5;

// Minimal surface contract the render pass needs; tests substitute a
// recording implementation in place of the real canvas context.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);
    fn draw_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, width: f64);
}

pub fn render<S: DrawSurface>(field: &ParticleField, surface: &mut S) {
    for p in field.particles() {
        surface.draw_circle(p.pos[0], p.pos[1], p.radius, NETWORK_HUE, p.opacity);
    }
    draw_connections(field, surface);
}

// O(n^2) over unordered pairs; the field's count cap keeps this affordable
fn draw_connections<S: DrawSurface>(field: &ParticleField, surface: &mut S) {
    let particles = field.particles();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let from = particles[i].pos;
            let to = particles[j].pos;
            if let Some(alpha) = connection_alpha(pair_distance(from, to)) {
                surface.draw_line(from, to, NETWORK_HUE, alpha, LINE_WIDTH);
            }
        }
    }
}

pub fn pair_distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    vecmath::vec2_len(vecmath::vec2_sub(a, b))
}

// Fades linearly from CONNECT_ALPHA at zero distance to nothing at the
// threshold; exactly at the threshold no line is drawn at all
pub fn connection_alpha(dist: f64) -> Option<f64> {
    if dist < CONNECT_DISTANCE {
        Some(CONNECT_ALPHA * (1.0 - dist / CONNECT_DISTANCE))
    } else {
        None
    }
}

// Production surface: a viewport-sized 2d canvas context
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2d {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Canvas2d {
        Canvas2d { ctx, width, height }
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl DrawSurface for Canvas2d {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    #[allow(deprecated)]
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
        self.ctx.begin_path();
        // a full-circle arc can only fail on non-finite input, which the
        // field never produces; a failure here just skips the dot
        let _ = self.ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.ctx
            .set_fill_style(&JsValue::from_str(&color.css(alpha)));
        self.ctx.fill();
    }

    #[allow(deprecated)]
    fn draw_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from[0], from[1]);
        self.ctx.line_to(to[0], to[1]);
        self.ctx
            .set_stroke_style(&JsValue::from_str(&color.css(alpha)));
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}
