use crate::constants::STATUS_FALLBACK;
use crate::core::avatar::Avatar;
use crate::core::particles::ParticleField;
use crate::core::popup::{Persona, Popup};
use crate::core::speech::{SpeechRefusal, SpeechTicket};
use crate::core::waveform::WaveformTrack;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything the render loop and the event handlers share.
///
/// Constructed once at startup. The frame loop reads it for drawing and calls
/// [`HudState::step_particles`]; pointer handlers and network callbacks mutate
/// it through the gesture methods below.
pub struct HudState {
    pub avatar: Avatar,
    pub particles: ParticleField,
    pub waveform: WaveformTrack,
    pub popup: Popup,
    pub persona: Persona,
    pub status: String,
    speech_generation: u64,
    last_status_seq: u64,
    next_status_seq: u64,
    rng: StdRng,
}

impl HudState {
    pub fn new(surface_width: f32, surface_height: f32, seed: u64) -> Self {
        Self {
            avatar: Avatar::anchored(surface_width, surface_height),
            particles: ParticleField::default(),
            waveform: WaveformTrack::default(),
            popup: Popup::default(),
            persona: Persona::default(),
            status: STATUS_FALLBACK.to_string(),
            speech_generation: 0,
            last_status_seq: 0,
            next_status_seq: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Spawn a burst while talking, then advance and cull every particle.
    pub fn step_particles(&mut self) {
        if self.is_talking() {
            self.particles.spawn_burst(self.avatar.position, &mut self.rng);
        }
        self.particles.advance();
    }

    /// Single click. Returns the new popup visibility on a hit, `None` on a miss.
    pub fn click(&mut self, point: Vec2) -> Option<bool> {
        if !self.avatar.contains(point) {
            return None;
        }
        Some(self.popup.toggle())
    }

    /// Double click. Starts a speech gesture when the point hits the avatar
    /// and no other gesture is still talking.
    pub fn begin_speech(&mut self, point: Vec2) -> Result<SpeechTicket, SpeechRefusal> {
        if !self.avatar.contains(point) {
            return Err(SpeechRefusal::Miss);
        }
        if self.is_talking() {
            return Err(SpeechRefusal::Busy);
        }
        self.speech_generation += 1;
        self.avatar.talking = true;
        self.waveform.start(self.speech_generation);
        Ok(SpeechTicket::new(self.speech_generation))
    }

    /// Playback ended, playback failed, or the request failed. Repeated or
    /// stale calls are no-ops.
    pub fn end_speech(&mut self, ticket: SpeechTicket) -> bool {
        if ticket.generation() != self.speech_generation {
            return false;
        }
        self.avatar.talking = false;
        true
    }

    /// Fixed-delay waveform timer fired for `ticket`'s gesture.
    pub fn expire_waveform(&mut self, ticket: SpeechTicket) -> bool {
        self.waveform.expire(ticket.generation())
    }

    #[inline]
    pub fn is_talking(&self) -> bool {
        self.avatar.talking
    }

    /// Sequence number for a status poll about to be issued.
    pub fn next_status_seq(&mut self) -> u64 {
        self.next_status_seq += 1;
        self.next_status_seq
    }

    /// Store a poll result unless a later poll already landed.
    pub fn apply_status(&mut self, seq: u64, text: String) -> bool {
        if seq <= self.last_status_seq {
            return false;
        }
        self.last_status_seq = seq;
        self.status = text;
        true
    }
}
