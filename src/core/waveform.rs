use crate::constants::{WAVEFORM_GAIN, WAVEFORM_PHASE_STEP, WAVEFORM_SAMPLES, WAVEFORM_X_STEP};

/// Successive sine evaluations at a fixed phase increment, starting one step in.
pub fn synth_samples() -> Vec<f32> {
    (1..=WAVEFORM_SAMPLES)
        .map(|i| (i as f32 * WAVEFORM_PHASE_STEP).sin())
        .collect()
}

/// Decorative waveform shown while a speech gesture runs.
///
/// The track is either empty or holds exactly `WAVEFORM_SAMPLES` values. Each
/// fill is tagged with the generation of the gesture that started it, so an
/// expiry timer from an older gesture leaves a newer fill alone.
#[derive(Clone, Debug, Default)]
pub struct WaveformTrack {
    samples: Vec<f32>,
    generation: u64,
}

impl WaveformTrack {
    pub fn start(&mut self, generation: u64) {
        self.samples = synth_samples();
        self.generation = generation;
    }

    /// Clear the track if it still belongs to `generation`. Returns whether it was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.samples.is_empty() {
            return false;
        }
        self.samples.clear();
        true
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Canvas-space vertices for the polyline, one per sample, around `midline`.
    pub fn vertices(&self, midline: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples().iter().enumerate().map(move |(i, v)| {
            (
                i as f64 * WAVEFORM_X_STEP,
                midline - *v as f64 * WAVEFORM_GAIN,
            )
        })
    }
}
