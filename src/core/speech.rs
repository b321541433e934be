use serde::Serialize;

/// Body of `POST /tts`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SpeechRequest<'a> {
    pub text: &'a str,
}

/// Handle for one speech gesture. Completion and waveform expiry only take
/// effect while the ticket's generation is still the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeechTicket {
    generation: u64,
}

impl SpeechTicket {
    #[inline]
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Why a double-click did not start a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeechRefusal {
    /// The pointer was outside the avatar.
    Miss,
    /// A previous gesture is still talking.
    Busy,
}

/// Runs a playback completion hook at most once, whichever of the media
/// element's `ended`, `error` or `abort` events arrives first.
pub struct Completion {
    hook: Option<Box<dyn FnOnce()>>,
}

impl Completion {
    pub fn new(hook: impl FnOnce() + 'static) -> Self {
        Self {
            hook: Some(Box::new(hook)),
        }
    }

    /// Returns whether this call ran the hook.
    pub fn fire(&mut self) -> bool {
        match self.hook.take() {
            Some(hook) => {
                hook();
                true
            }
            None => false,
        }
    }
}
