use crate::constants::{
    PARTICLES_PER_FRAME, PARTICLE_ALPHA_STEP, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPAN,
    PARTICLE_SPEED_SPAN,
};
use glam::Vec2;
use rand::Rng;

/// Short-lived decorative dot that drifts and fades.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub alpha: f32,
    pub radius: f32,
}

impl Particle {
    pub fn spawn<R: Rng>(origin: Vec2, rng: &mut R) -> Self {
        let half = PARTICLE_SPEED_SPAN * 0.5;
        Self {
            position: origin,
            velocity: Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half)),
            alpha: 1.0,
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
        }
    }

    /// Integrate one frame. Returns false once the particle has faded out.
    #[inline]
    pub fn step(&mut self) -> bool {
        self.position += self.velocity;
        self.alpha -= PARTICLE_ALPHA_STEP;
        self.alpha > 0.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn_burst<R: Rng>(&mut self, origin: Vec2, rng: &mut R) {
        self.particles.reserve(PARTICLES_PER_FRAME);
        for _ in 0..PARTICLES_PER_FRAME {
            self.particles.push(Particle::spawn(origin, rng));
        }
    }

    /// Move and fade every particle, dropping the ones that reached zero alpha.
    pub fn advance(&mut self) {
        self.particles.retain_mut(Particle::step);
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
