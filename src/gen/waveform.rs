use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::SynthError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WaveformKind {
    #[default]
    Square,
    Triangle,
    Sawtooth,
    Sine,
    Noise,
    Pulse,
    Exponential,
    Harmonics,
}

impl WaveformKind {
    /// Every kind, in declaration order.
    pub const ALL: [WaveformKind; 8] = [
        WaveformKind::Square,
        WaveformKind::Triangle,
        WaveformKind::Sawtooth,
        WaveformKind::Sine,
        WaveformKind::Noise,
        WaveformKind::Pulse,
        WaveformKind::Exponential,
        WaveformKind::Harmonics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WaveformKind::Square => "square",
            WaveformKind::Triangle => "triangle",
            WaveformKind::Sawtooth => "sawtooth",
            WaveformKind::Sine => "sine",
            WaveformKind::Noise => "noise",
            WaveformKind::Pulse => "pulse",
            WaveformKind::Exponential => "exponential",
            WaveformKind::Harmonics => "harmonics",
        }
    }

    /// Pick one kind uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Whether the output stays within [-1, 1] for any time, frequency and
    /// duty cycle in (0, 1). Noise draws from [-1, 1) but is not a function
    /// of time, Harmonics is an unnormalized sum.
    pub fn is_bounded(self) -> bool {
        !matches!(self, WaveformKind::Noise | WaveformKind::Harmonics)
    }

    /// Sample this waveform at `time` seconds. See [`crate::gen::sampler::sample`].
    pub fn sample<R: Rng + ?Sized>(
        self,
        time: f32,
        frequency_hz: f32,
        duty_cycle: f32,
        rng: &mut R,
    ) -> f32 {
        super::sampler::sample(time, frequency_hz, self, duty_cycle, rng)
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveformKind {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "saw" {
            return Ok(WaveformKind::Sawtooth);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| SynthError::UnknownWaveform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_names_round_trip_through_parse() {
        for kind in WaveformKind::ALL {
            assert_eq!(kind.name().parse::<WaveformKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_accepts_saw() {
        assert_eq!("SINE".parse::<WaveformKind>().unwrap(), WaveformKind::Sine);
        assert_eq!(" Pulse ".parse::<WaveformKind>().unwrap(), WaveformKind::Pulse);
        assert_eq!("saw".parse::<WaveformKind>().unwrap(), WaveformKind::Sawtooth);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "wobble".parse::<WaveformKind>().unwrap_err();
        assert!(matches!(err, SynthError::UnknownWaveform(ref name) if name == "wobble"));
    }

    #[test]
    fn test_random_eventually_picks_every_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 8];
        for _ in 0..1000 {
            let kind = WaveformKind::random(&mut rng);
            let index = WaveformKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s), "Uniform choice should reach all kinds");
    }

    #[test]
    fn test_default_is_square() {
        assert_eq!(WaveformKind::default(), WaveformKind::Square);
        assert!(WaveformKind::Square.is_bounded());
        assert!(!WaveformKind::Harmonics.is_bounded());
    }
}
