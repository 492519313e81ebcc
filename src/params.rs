use crate::error::SynthError;
use crate::gen::waveform::WaveformKind;

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_GAIN: f32 = 0.5;
pub const DEFAULT_DUTY_CYCLE: f32 = 0.5;

/// Settings shared by every tone appended to a [`crate::buffer::SignalBuffer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthesisParameters {
    pub sample_rate: u32,  // frames per second
    pub channels: u16,     // always 1 for now
    pub gain: f32,         // 0.0 to 1.0, not clamped
    pub duty_cycle: f32,   // 0.0 to 1.0, Square and Pulse only
    pub waveform: WaveformKind,
}

impl SynthesisParameters {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub fn with_duty_cycle(mut self, duty_cycle: f32) -> Self {
        self.duty_cycle = duty_cycle;
        self
    }

    pub fn with_waveform(mut self, waveform: WaveformKind) -> Self {
        self.waveform = waveform;
        self
    }

    /// Check the parameters that would make the frame clock meaningless.
    /// Gain and duty cycle are never checked.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.sample_rate == 0 {
            return Err(SynthError::InvalidConfiguration(
                "sample rate must be positive".to_string(),
            ));
        }
        match self.channels {
            0 => Err(SynthError::InvalidConfiguration(
                "channel count must be positive".to_string(),
            )),
            1 => Ok(()),
            n => Err(SynthError::InvalidConfiguration(format!(
                "{} channels requested, only mono output is supported",
                n
            ))),
        }
    }
}

impl Default for SynthesisParameters {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: 1,
            gain: DEFAULT_GAIN,
            duty_cycle: DEFAULT_DUTY_CYCLE,
            waveform: WaveformKind::Square,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SynthesisParameters::default();
        assert_eq!(params.sample_rate, 44100);
        assert_eq!(params.channels, 1);
        assert_eq!(params.gain, 0.5);
        assert_eq!(params.duty_cycle, 0.5);
        assert_eq!(params.waveform, WaveformKind::Square);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_sample_rate_is_rejected() {
        let err = SynthesisParameters::new(0).validate().unwrap_err();
        assert!(matches!(err, SynthError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_channel_count_must_be_mono() {
        let mut params = SynthesisParameters::new(8000);
        params.channels = 0;
        assert!(matches!(params.validate(), Err(SynthError::InvalidConfiguration(_))));
        params.channels = 2;
        assert!(matches!(params.validate(), Err(SynthError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_out_of_range_gain_and_duty_are_accepted() {
        let params = SynthesisParameters::new(8000)
            .with_gain(3.0)
            .with_duty_cycle(-1.0)
            .with_waveform(WaveformKind::Pulse);
        assert!(params.validate().is_ok());
        assert_eq!(params.waveform, WaveformKind::Pulse);
    }
}
