/// HUD tuning constants.
///
/// These constants express intended behavior (pulse rates, fade steps, timer
/// lengths) and keep magic numbers out of the drawing and event code.
// Host page element ids
pub const CANVAS_ID: &str = "hudCanvas";
pub const AUDIO_ID: &str = "ttsAudio";
pub const STATUS_ID: &str = "weather";
pub const POPUP_ID: &str = "popup";

// Backend endpoints
pub const WEATHER_ENDPOINT: &str = "/weather";
pub const TTS_ENDPOINT: &str = "/tts";

// Status polling
pub const STATUS_POLL_INTERVAL_MS: i32 = 1000;
pub const STATUS_FALLBACK: &str = "Weather unavailable";

// Text sent to speech synthesis on double-click
pub const GREETING_TEXT: &str = "สวัสดี! ฉันคือ Liz AI";

// Avatar layout
pub const AVATAR_RADIUS: f32 = 40.0;
pub const AVATAR_CORNER_INSET: f32 = 80.0; // distance from the bottom-right corner

// Avatar pulse: scale = 1 + sin(elapsed_ms / divisor) * amplitude
pub const PULSE_TALKING_DIVISOR_MS: f64 = 100.0;
pub const PULSE_TALKING_AMPLITUDE: f32 = 0.3;
pub const PULSE_IDLE_DIVISOR_MS: f64 = 200.0;
pub const PULSE_IDLE_AMPLITUDE: f32 = 0.1;

pub const AVATAR_FILL: &str = "rgba(128,0,255,0.8)";
pub const AVATAR_GLOW: &str = "#fff";
pub const AVATAR_GLOW_BLUR: f64 = 20.0;

// Particles
pub const PARTICLES_PER_FRAME: usize = 5;
pub const PARTICLE_SPEED_SPAN: f32 = 5.0; // each velocity component in [-span/2, span/2)
pub const PARTICLE_RADIUS_MIN: f32 = 2.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 3.0;
pub const PARTICLE_ALPHA_STEP: f32 = 0.02;
pub const PARTICLE_RGB: (u8, u8, u8) = (0, 255, 255);

// Synthetic waveform
pub const WAVEFORM_SAMPLES: usize = 200;
pub const WAVEFORM_PHASE_STEP: f32 = 0.3;
pub const WAVEFORM_LIFETIME_MS: i32 = 4000;
pub const WAVEFORM_X_STEP: f64 = 2.0; // px between vertices
pub const WAVEFORM_GAIN: f64 = 50.0; // px per unit amplitude
pub const WAVEFORM_STROKE: &str = "#0ff";
pub const WAVEFORM_LINE_WIDTH: f64 = 2.0;
pub const WAVEFORM_GLOW_BLUR: f64 = 10.0;

// Info popup
pub const POPUP_TITLE: &str = "Liz AI HUD 5.0";
pub const POPUP_HINT: &str = "Double-click icon to talk!";
