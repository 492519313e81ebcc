//! Error types for synthesis and export

use thiserror::Error;

/// Errors raised by the synthesis core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown waveform '{0}'")]
    UnknownWaveform(String),
}

/// Errors raised while writing samples to storage.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),
}
