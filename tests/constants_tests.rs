// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_constants_are_positive() {
    assert!(AVATAR_RADIUS > 0.0);
    assert!(AVATAR_CORNER_INSET >= AVATAR_RADIUS);
    assert!(PARTICLE_ALPHA_STEP > 0.0 && PARTICLE_ALPHA_STEP < 1.0);
    assert!(PARTICLE_RADIUS_MIN > 0.0);
    assert!(PARTICLE_RADIUS_SPAN > 0.0);
    assert!(WAVEFORM_GAIN > 0.0);
    assert!(WAVEFORM_X_STEP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn talking_pulse_is_faster_and_larger_than_idle() {
    // smaller divisor means higher frequency
    assert!(PULSE_TALKING_DIVISOR_MS < PULSE_IDLE_DIVISOR_MS);
    assert!(PULSE_TALKING_AMPLITUDE > PULSE_IDLE_AMPLITUDE);
    // the avatar never collapses to a negative radius
    assert!(PULSE_TALKING_AMPLITUDE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_match_the_hud_contract() {
    assert_eq!(STATUS_POLL_INTERVAL_MS, 1000);
    assert_eq!(WAVEFORM_LIFETIME_MS, 4000);
    assert_eq!(WAVEFORM_SAMPLES, 200);
    assert_eq!(PARTICLES_PER_FRAME, 5);
}

#[test]
fn element_ids_and_endpoints_are_set() {
    for id in [CANVAS_ID, AUDIO_ID, STATUS_ID, POPUP_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "ids are passed to getElementById without '#'");
    }
    assert!(WEATHER_ENDPOINT.starts_with('/'));
    assert!(TTS_ENDPOINT.starts_with('/'));
    assert_eq!(STATUS_FALLBACK, "Weather unavailable");
}
