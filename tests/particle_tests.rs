// Host-side tests for particle spawning and decay.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::particles::{Particle, ParticleField};
use constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn burst_spawns_fixed_count_at_origin() {
    let mut field = ParticleField::default();
    let origin = Vec2::new(320.0, 240.0);
    field.spawn_burst(origin, &mut rng());
    assert_eq!(field.len(), PARTICLES_PER_FRAME);
    for p in field.iter() {
        assert_eq!(p.position, origin);
        assert_eq!(p.alpha, 1.0);
    }
}

#[test]
fn spawned_particles_respect_ranges() {
    let mut r = rng();
    let half = PARTICLE_SPEED_SPAN * 0.5;
    for _ in 0..1000 {
        let p = Particle::spawn(Vec2::ZERO, &mut r);
        assert!(p.velocity.x >= -half && p.velocity.x < half);
        assert!(p.velocity.y >= -half && p.velocity.y < half);
        assert!(p.radius >= PARTICLE_RADIUS_MIN);
        assert!(p.radius <= PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN);
    }
}

#[test]
fn step_integrates_velocity_and_fades() {
    let mut p = Particle {
        position: Vec2::new(10.0, 10.0),
        velocity: Vec2::new(1.5, -2.0),
        alpha: 1.0,
        radius: 3.0,
    };
    assert!(p.step());
    assert_eq!(p.position, Vec2::new(11.5, 8.0));
    assert!((p.alpha - (1.0 - PARTICLE_ALPHA_STEP)).abs() < 1e-6);
}

#[test]
fn alpha_follows_linear_decay_until_removed() {
    let mut field = ParticleField::default();
    field.spawn_burst(Vec2::ZERO, &mut rng());
    for n in 1..=45 {
        field.advance();
        let expected = 1.0 - n as f32 * PARTICLE_ALPHA_STEP;
        for p in field.iter() {
            assert!((p.alpha - expected).abs() < 1e-4, "step {n}: {}", p.alpha);
        }
    }
}

#[test]
fn alpha_is_non_increasing_per_particle() {
    let mut field = ParticleField::default();
    field.spawn_burst(Vec2::ZERO, &mut rng());
    let mut prev: Vec<f32> = field.iter().map(|p| p.alpha).collect();
    for _ in 0..30 {
        field.advance();
        let now: Vec<f32> = field.iter().map(|p| p.alpha).collect();
        assert_eq!(now.len(), prev.len());
        for (a, b) in now.iter().zip(&prev) {
            assert!(a <= b);
        }
        prev = now;
    }
}

#[test]
fn faded_particles_are_removed_after_update() {
    let mut field = ParticleField::default();
    field.spawn_burst(Vec2::ZERO, &mut rng());
    for _ in 0..49 {
        field.advance();
    }
    assert_eq!(field.len(), PARTICLES_PER_FRAME);
    for _ in 0..2 {
        field.advance();
        assert!(field.iter().all(|p| p.alpha > 0.0));
    }
    assert!(field.is_empty());
}

#[test]
fn staggered_bursts_expire_oldest_first() {
    let mut field = ParticleField::default();
    let mut r = rng();
    field.spawn_burst(Vec2::ZERO, &mut r);
    for _ in 0..10 {
        field.advance();
    }
    field.spawn_burst(Vec2::ZERO, &mut r);
    for _ in 0..41 {
        field.advance();
    }
    // first burst is gone, second still fading
    assert_eq!(field.len(), PARTICLES_PER_FRAME);
    assert!(field.iter().all(|p| p.alpha > 0.0 && p.alpha < 0.25));
}
