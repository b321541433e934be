//! Platform-free HUD state: avatar, particles, waveform, popup and status.
//!
//! Nothing in here touches `web_sys`, so the host-side tests can pull these
//! files in directly.
pub mod avatar;
pub mod particles;
pub mod popup;
pub mod speech;
pub mod state;
pub mod status;
pub mod waveform;

pub use avatar::Avatar;
pub use particles::ParticleField;
pub use popup::{Persona, Popup};
pub use speech::{Completion, SpeechRefusal, SpeechRequest, SpeechTicket};
pub use state::HudState;
pub use status::{parse_report, status_text};
pub use waveform::WaveformTrack;
