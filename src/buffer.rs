//! Sample accumulation under a fixed sample-rate clock
//!
//! A [`SignalBuffer`] owns its parameters, its samples and its random
//! source. Every append call restarts the frame clock at t = 0 and steps it
//! by `1 / sample_rate` seconds.

use std::ops::Range;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SynthError;
use crate::gen::sampler;
use crate::gen::waveform::WaveformKind;
use crate::params::SynthesisParameters;

/// Frequency used by [`SignalBuffer::append_default_tone`].
pub const DEFAULT_FREQUENCY_HZ: f32 = 440.0;

/// Per-frame frequency range for [`SignalBuffer::append_random_tone`].
pub const RANDOM_FREQUENCY_RANGE: Range<f32> = 220.0..660.0;

/// Largest number of samples a buffer can hold.
pub const MAX_FRAMES: usize = isize::MAX as usize / std::mem::size_of::<f32>();

/// Number of whole frames covering `duration_seconds` at `sample_rate`.
/// The product is taken in f32 so decimal durations such as 0.7 s land on
/// the whole frame count rather than one below it. Saturates at `usize::MAX`.
pub fn frame_count(sample_rate: u32, duration_seconds: f32) -> usize {
    (sample_rate as f32 * duration_seconds).floor() as usize
}

/// Draw one frequency for a randomized tone frame.
pub fn random_frequency<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(RANDOM_FREQUENCY_RANGE)
}

pub struct SignalBuffer {
    params: SynthesisParameters,
    samples: Vec<f32>,
    rng: StdRng,
}

impl SignalBuffer {
    /// Create an empty buffer whose random source is seeded from the OS.
    pub fn new(params: SynthesisParameters) -> Result<Self, SynthError> {
        Self::with_rng(params, StdRng::from_os_rng())
    }

    /// Create an empty buffer with a reproducible random source.
    pub fn with_seed(params: SynthesisParameters, seed: u64) -> Result<Self, SynthError> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(params: SynthesisParameters, rng: StdRng) -> Result<Self, SynthError> {
        params.validate()?;
        Ok(Self {
            params,
            samples: Vec::new(),
            rng,
        })
    }

    pub fn params(&self) -> &SynthesisParameters {
        &self.params
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.params.gain = gain;
    }

    pub fn set_duty_cycle(&mut self, duty_cycle: f32) {
        self.params.duty_cycle = duty_cycle;
    }

    /// Change the kind used by [`Self::append_default_tone`].
    pub fn set_waveform(&mut self, waveform: WaveformKind) {
        self.params.waveform = waveform;
    }

    /// Append `floor(sample_rate * duration_seconds)` frames of a constant
    /// tone and return the number of frames added.
    ///
    /// A negative or non-finite duration is rejected and the buffer is left
    /// untouched.
    pub fn append_tone(
        &mut self,
        duration_seconds: f32,
        frequency_hz: f32,
        kind: WaveformKind,
    ) -> Result<usize, SynthError> {
        let frames = self.frames_for(duration_seconds)?;
        let SynthesisParameters {
            sample_rate,
            gain,
            duty_cycle,
            ..
        } = self.params;

        self.samples.reserve(frames);
        for i in 0..frames {
            let t = frame_time(i, sample_rate);
            let value = sampler::sample(t, frequency_hz, kind, duty_cycle, &mut self.rng);
            self.samples.push(gain * value);
        }

        debug!(
            "Appended {} frames of {} at {:.2} Hz ({} total)",
            frames,
            kind,
            frequency_hz,
            self.samples.len()
        );
        Ok(frames)
    }

    /// [`Self::append_tone`] at 440 Hz with the buffer's default waveform.
    pub fn append_default_tone(&mut self, duration_seconds: f32) -> Result<usize, SynthError> {
        self.append_tone(duration_seconds, DEFAULT_FREQUENCY_HZ, self.params.waveform)
    }

    /// Append a tone with one randomly chosen waveform for the whole call and
    /// a fresh random frequency in [220, 660) Hz on every frame.
    pub fn append_random_tone(&mut self, duration_seconds: f32) -> Result<usize, SynthError> {
        let frames = self.frames_for(duration_seconds)?;
        let kind = WaveformKind::random(&mut self.rng);
        let SynthesisParameters {
            sample_rate,
            gain,
            duty_cycle,
            ..
        } = self.params;

        self.samples.reserve(frames);
        for i in 0..frames {
            let t = frame_time(i, sample_rate);
            let frequency_hz = random_frequency(&mut self.rng);
            let value = sampler::sample(t, frequency_hz, kind, duty_cycle, &mut self.rng);
            self.samples.push(gain * value);
        }

        debug!(
            "Appended {} frames of random {} ({} total)",
            frames,
            kind,
            self.samples.len()
        );
        Ok(frames)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of the accumulated signal in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.params.sample_rate as f64
    }

    /// Largest absolute sample value, 0.0 when empty.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
    }

    fn frames_for(&self, duration_seconds: f32) -> Result<usize, SynthError> {
        if !duration_seconds.is_finite() || duration_seconds < 0.0 {
            return Err(SynthError::InvalidArgument(format!(
                "duration must be a non-negative number of seconds, got {}",
                duration_seconds
            )));
        }
        let frames = frame_count(self.params.sample_rate, duration_seconds);
        if frames > MAX_FRAMES - self.samples.len() {
            return Err(SynthError::InvalidArgument(format!(
                "duration of {} seconds does not fit in the buffer",
                duration_seconds
            )));
        }
        Ok(frames)
    }
}

fn frame_time(frame: usize, sample_rate: u32) -> f32 {
    (frame as f64 / sample_rate as f64) as f32
}
