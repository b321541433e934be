use crate::constants::{
    AVATAR_CORNER_INSET, AVATAR_RADIUS, PULSE_IDLE_AMPLITUDE, PULSE_IDLE_DIVISOR_MS,
    PULSE_TALKING_AMPLITUDE, PULSE_TALKING_DIVISOR_MS,
};
use glam::Vec2;

/// The on-screen circular icon representing the assistant.
#[derive(Clone, Debug)]
pub struct Avatar {
    pub position: Vec2,
    pub radius: f32,
    pub talking: bool,
    /// Pulse phase in radians, refreshed once per frame from wall-clock time.
    pub angle: f32,
}

impl Avatar {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            radius,
            talking: false,
            angle: 0.0,
        }
    }

    /// Place the avatar near the bottom-right corner of a surface.
    pub fn anchored(surface_width: f32, surface_height: f32) -> Self {
        Self::new(
            Vec2::new(
                surface_width - AVATAR_CORNER_INSET,
                surface_height - AVATAR_CORNER_INSET,
            ),
            AVATAR_RADIUS,
        )
    }

    /// Strict hit-test: a point exactly on the rim is outside.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) < self.radius
    }

    /// Recompute the pulse phase. Talking pulses twice as fast as idle.
    pub fn update_phase(&mut self, elapsed_ms: f64) {
        let divisor = if self.talking {
            PULSE_TALKING_DIVISOR_MS
        } else {
            PULSE_IDLE_DIVISOR_MS
        };
        // reduce in f64 so long-running pages keep sub-radian precision
        self.angle = (elapsed_ms / divisor).rem_euclid(std::f64::consts::TAU) as f32;
    }

    pub fn pulse_scale(&self) -> f32 {
        let amplitude = if self.talking {
            PULSE_TALKING_AMPLITUDE
        } else {
            PULSE_IDLE_AMPLITUDE
        };
        1.0 + self.angle.sin() * amplitude
    }

    #[inline]
    pub fn draw_radius(&self) -> f32 {
        self.radius * self.pulse_scale()
    }
}
