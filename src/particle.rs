// Simple particle struct to keep track of individual position, velocity,
// and the radius/opacity it was spawned with

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    pub const MAX_SPEED: f64 = 0.25;
    pub const MIN_RADIUS: f64 = 0.5;
    pub const MAX_RADIUS: f64 = 2.5;
    pub const MIN_OPACITY: f64 = 0.1;
    pub const MAX_OPACITY: f64 = 0.6;

    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = rng.gen::<f64>() * (2.0 * Particle::MAX_SPEED) - Particle::MAX_SPEED;
        let vel_y = rng.gen::<f64>() * (2.0 * Particle::MAX_SPEED) - Particle::MAX_SPEED;
        let radius =
            rng.gen::<f64>() * (Particle::MAX_RADIUS - Particle::MIN_RADIUS) + Particle::MIN_RADIUS;
        let opacity = rng.gen::<f64>() * (Particle::MAX_OPACITY - Particle::MIN_OPACITY)
            + Particle::MIN_OPACITY;
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            opacity,
        }
    }

    // The bounce may overshoot by one step: the velocity flips after the
    // coordinate has left the surface, never retroactively.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }
}
