//! Offline waveform synthesis: sample parametric waveforms under a fixed
//! sample-rate clock into a flat buffer, then export it as raw PCM or WAV.

pub mod buffer;
pub mod error;
pub mod export;
pub mod gen;
pub mod params;
pub mod utils;

pub use buffer::SignalBuffer;
pub use error::{ExportError, SynthError};
pub use gen::waveform::WaveformKind;
pub use params::SynthesisParameters;
