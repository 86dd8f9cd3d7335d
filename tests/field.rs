// End-to-end scenarios for the particle field, driven with a seeded rng so
// every layout is reproducible.

use particle_network_backend::animation::{self, FrameScheduler};
use particle_network_backend::color::Color;
use particle_network_backend::field::ParticleField;
use particle_network_backend::particle::Particle;
use particle_network_backend::renderer::DrawSurface;
use rand::rngs::SmallRng;
use rand::SeedableRng;

struct FixedFrames(usize);

impl FrameScheduler for FixedFrames {
    fn request_frame(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

struct RecordingSurface {
    width: f64,
    height: f64,
    clears: usize,
    circles: usize,
    lines: usize,
}

impl RecordingSurface {
    fn new(width: f64, height: f64) -> RecordingSurface {
        RecordingSurface {
            width,
            height,
            clears: 0,
            circles: 0,
            lines: 0,
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_region(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        self.clears += 1;
    }

    fn draw_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Color, _alpha: f64) {
        self.circles += 1;
    }

    fn draw_line(
        &mut self,
        _from: [f64; 2],
        _to: [f64; 2],
        _color: Color,
        _alpha: f64,
        _width: f64,
    ) {
        self.lines += 1;
    }
}

#[test]
fn thousand_frames_stay_bounded() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut field = ParticleField::new(800.0, 600.0, &mut rng);
    assert_eq!(field.len(), 32);

    for _ in 0..1000 {
        field.advance();
    }

    // positions may overshoot a bound by at most one velocity step
    let slack = Particle::MAX_SPEED;
    for p in field.particles() {
        assert!(p.pos[0] >= -slack && p.pos[0] <= 800.0 + slack);
        assert!(p.pos[1] >= -slack && p.pos[1] <= 600.0 + slack);
    }
}

#[test]
fn resize_to_a_small_viewport_empties_the_field() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut field = ParticleField::new(800.0, 600.0, &mut rng);
    assert_eq!(field.len(), 32);

    field.resize(100.0, 100.0, &mut rng);
    assert_eq!(field.len(), 0);
    assert!(field.is_empty());

    // an empty field still animates without complaint
    let mut surface = RecordingSurface::new(100.0, 100.0);
    animation::run(&mut field, &mut surface, &mut FixedFrames(5));
    assert_eq!(surface.clears, 5);
    assert_eq!(surface.circles, 0);
    assert_eq!(surface.lines, 0);
}

#[test]
fn resize_back_up_repopulates_from_scratch() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut field = ParticleField::new(100.0, 100.0, &mut rng);
    assert!(field.is_empty());

    field.resize(1920.0, 1080.0, &mut rng);
    assert_eq!(field.len(), ParticleField::MAX_PARTICLES);
    for p in field.particles() {
        assert!(p.pos[0] >= 0.0 && p.pos[0] < 1920.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] < 1080.0);
    }
}

#[test]
fn frame_loop_draws_every_particle_every_frame() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut field = ParticleField::new(800.0, 600.0, &mut rng);
    let mut surface = RecordingSurface::new(800.0, 600.0);

    animation::run(&mut field, &mut surface, &mut FixedFrames(3));

    assert_eq!(surface.clears, 3);
    assert_eq!(surface.circles, 3 * field.len());
}

#[test]
fn degenerate_viewports_never_panic() {
    let mut rng = SmallRng::seed_from_u64(0);
    for &(w, h) in &[(0.0, 0.0), (0.0, 600.0), (-1.0, 400.0), (5.0, 5.0)] {
        let mut field = ParticleField::new(w, h, &mut rng);
        assert!(field.is_empty());
        field.advance();
    }
}
