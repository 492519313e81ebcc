//! Headerless little-endian PCM stream

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use super::{quantize_i16, quantize_i32, SampleFormat, SampleSink};
use crate::error::ExportError;

/// Writes quantized samples back to back with no header.
pub struct RawWriter<W: Write> {
    inner: W,
    format: SampleFormat,
}

impl RawWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path, format: SampleFormat) -> Result<Self, ExportError> {
        let file = File::create(path)?;
        debug!("Writing raw {} samples to {}", format, path.display());
        Ok(Self::new(BufWriter::new(file), format))
    }
}

impl<W: Write> RawWriter<W> {
    pub fn new(inner: W, format: SampleFormat) -> Self {
        Self { inner, format }
    }

    pub fn format(&self) -> SampleFormat {
        self.format
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> SampleSink for RawWriter<W> {
    fn write(&mut self, samples: &[f32]) -> Result<usize, ExportError> {
        for &sample in samples {
            match self.format {
                SampleFormat::Pcm16 => self.inner.write_all(&quantize_i16(sample).to_le_bytes())?,
                SampleFormat::Pcm32 => self.inner.write_all(&quantize_i32(sample).to_le_bytes())?,
            }
        }
        self.inner.flush()?;
        Ok(samples.len())
    }
}
