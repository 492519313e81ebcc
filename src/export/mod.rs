//! Serialization of finished sample buffers
//!
//! The synthesis core never touches storage. Samples are handed to a
//! [`SampleSink`], which quantizes them to a fixed-width signed integer
//! format and writes them out.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ExportError;

pub mod raw;
pub mod wav;

pub use raw::RawWriter;
pub use wav::WavWriter;

/// Default destination used by the command-line tool.
pub const DEFAULT_OUTPUT_PATH: &str = "output.raw";

/// Integer encoding of a quantized sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleFormat {
    #[default]
    Pcm16,
    Pcm32,
}

impl SampleFormat {
    pub fn bits_per_sample(self) -> u16 {
        match self {
            SampleFormat::Pcm16 => 16,
            SampleFormat::Pcm32 => 32,
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        self.bits_per_sample() as usize / 8
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleFormat::Pcm16 => f.write_str("pcm16"),
            SampleFormat::Pcm32 => f.write_str("pcm32"),
        }
    }
}

impl FromStr for SampleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pcm16" | "s16" | "i16" => Ok(SampleFormat::Pcm16),
            "pcm32" | "s32" | "i32" => Ok(SampleFormat::Pcm32),
            other => Err(format!("unknown sample format '{}'", other)),
        }
    }
}

/// Convert a sample to signed 16-bit PCM. Out-of-range input is clamped and
/// -1.0 maps to `-i16::MAX`.
pub fn quantize_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

/// Convert a sample to signed 32-bit PCM, clamped like [`quantize_i16`].
pub fn quantize_i32(sample: f32) -> i32 {
    (sample.clamp(-1.0, 1.0) as f64 * i32::MAX as f64) as i32
}

pub fn to_pcm_i16(samples: &[f32]) -> Vec<i16> {
    samples.iter().map(|&s| quantize_i16(s)).collect()
}

pub fn to_pcm_i32(samples: &[f32]) -> Vec<i32> {
    samples.iter().map(|&s| quantize_i32(s)).collect()
}

/// Destination for a finished sample sequence.
pub trait SampleSink {
    /// Quantize and write `samples`, returning how many were written.
    fn write(&mut self, samples: &[f32]) -> Result<usize, ExportError>;
}

/// Container chosen for an output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Raw,
    Wav,
}

impl OutputFormat {
    /// `.wav` paths get a WAV container, everything else a headerless stream.
    pub fn for_path(path: &Path) -> Self {
        let is_wav = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
        if is_wav {
            OutputFormat::Wav
        } else {
            OutputFormat::Raw
        }
    }
}

/// Write `samples` to `path`, picking the container from the extension.
/// `sample_rate` and `channels` only end up in WAV headers.
pub fn write_file(
    path: &Path,
    samples: &[f32],
    format: SampleFormat,
    sample_rate: u32,
    channels: u16,
) -> Result<usize, ExportError> {
    match OutputFormat::for_path(path) {
        OutputFormat::Raw => RawWriter::create(path, format)?.write(samples),
        OutputFormat::Wav => WavWriter::new(path, format, sample_rate, channels).write(samples),
    }
}
