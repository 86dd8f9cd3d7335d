// Owned collection of particles plus the surface bounds they drift in.
// Rebuilt wholesale whenever the surface changes size; particles carry no
// identity across a rebuild.

use crate::particle::Particle;
use rand::Rng;

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub const MAX_PARTICLES: usize = 80;
    pub const AREA_PER_PARTICLE: f64 = 15_000.0;

    pub fn new<R: Rng>(width: f64, height: f64, rng: &mut R) -> ParticleField {
        let count = ParticleField::count_for(width, height);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(rng, width, height));
        }
        ParticleField {
            particles,
            width,
            height,
        }
    }

    // min(80, floor(area / 15000)); degenerate surfaces get an empty field
    pub fn count_for(width: f64, height: f64) -> usize {
        if width <= 0.0 || height <= 0.0 {
            return 0;
        }
        let by_area = ((width * height) / ParticleField::AREA_PER_PARTICLE).floor();
        by_area.min(ParticleField::MAX_PARTICLES as f64) as usize
    }

    // One animation step for every particle, unconditionally
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.advance(self.width, self.height);
        }
    }

    // Full replacement at the new bounds; nothing carries over
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        *self = ParticleField::new(width, height, rng);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    #[cfg(test)]
    pub(crate) fn from_particles(
        particles: Vec<Particle>,
        width: f64,
        height: f64,
    ) -> ParticleField {
        ParticleField {
            particles,
            width,
            height,
        }
    }
}
