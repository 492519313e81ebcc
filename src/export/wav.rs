//! WAV container export through `hound`

use std::path::{Path, PathBuf};

use hound::WavSpec;
use log::debug;

use super::{quantize_i16, quantize_i32, SampleFormat, SampleSink};
use crate::error::ExportError;

/// Writes a PCM WAV file. The header carries the sample rate and channel
/// count; samples are written in buffer order.
pub struct WavWriter {
    path: PathBuf,
    spec: WavSpec,
    format: SampleFormat,
}

impl WavWriter {
    pub fn new(
        path: impl AsRef<Path>,
        format: SampleFormat,
        sample_rate: u32,
        channels: u16,
    ) -> Self {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: format.bits_per_sample(),
            sample_format: hound::SampleFormat::Int,
        };
        Self {
            path: path.as_ref().to_path_buf(),
            spec,
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SampleSink for WavWriter {
    fn write(&mut self, samples: &[f32]) -> Result<usize, ExportError> {
        let mut writer = hound::WavWriter::create(&self.path, self.spec)?;
        for &sample in samples {
            match self.format {
                SampleFormat::Pcm16 => writer.write_sample(quantize_i16(sample))?,
                SampleFormat::Pcm32 => writer.write_sample(quantize_i32(sample))?,
            }
        }
        writer.finalize()?;

        debug!(
            "Wrote {} samples ({} Hz, {}) to {}",
            samples.len(),
            self.spec.sample_rate,
            self.format,
            self.path.display()
        );
        Ok(samples.len())
    }
}
