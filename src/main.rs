use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use bitsynth::buffer::DEFAULT_FREQUENCY_HZ;
use bitsynth::export::{self, SampleFormat, DEFAULT_OUTPUT_PATH};
use bitsynth::params::{DEFAULT_DUTY_CYCLE, DEFAULT_GAIN, DEFAULT_SAMPLE_RATE};
use bitsynth::utils::init_logger;
use bitsynth::{SignalBuffer, SynthesisParameters, WaveformKind};

/// Render a waveform tone to a raw PCM stream or a WAV file.
#[derive(Parser, Debug)]
#[command(name = "bitsynth", version, about)]
struct Cli {
    /// Frames per second
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Output gain applied to every sample (not clamped)
    #[arg(long, default_value_t = DEFAULT_GAIN)]
    gain: f32,

    /// High fraction of each period for square and pulse waves
    #[arg(long, default_value_t = DEFAULT_DUTY_CYCLE)]
    duty_cycle: f32,

    /// Default waveform for tones that do not name one
    #[arg(long, default_value_t = WaveformKind::Square)]
    waveform: WaveformKind,

    /// Seed for noise and random tones; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Integer sample encoding (pcm16 or pcm32)
    #[arg(long, default_value_t = SampleFormat::Pcm16)]
    format: SampleFormat,

    /// Destination file; a .wav extension selects the WAV container
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Constant-frequency tone
    Tone {
        /// Length in seconds
        #[arg(short, long, default_value_t = 1.0)]
        duration: f32,

        /// Frequency in Hz
        #[arg(short, long, default_value_t = DEFAULT_FREQUENCY_HZ)]
        frequency: f32,

        /// Overrides the default waveform for this tone
        #[arg(short, long)]
        waveform: Option<WaveformKind>,
    },
    /// Random waveform with a per-frame random pitch between 220 and 660 Hz
    Random {
        /// Length in seconds
        #[arg(short, long, default_value_t = 15.0)]
        duration: f32,
    },
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let cli = Cli::parse();

    let params = SynthesisParameters::new(cli.sample_rate)
        .with_gain(cli.gain)
        .with_duty_cycle(cli.duty_cycle)
        .with_waveform(cli.waveform);
    let mut buffer = match cli.seed {
        Some(seed) => SignalBuffer::with_seed(params, seed),
        None => SignalBuffer::new(params),
    }
    .context("Failed to configure synthesizer")?;

    let frames = match cli.command {
        Command::Tone {
            duration,
            frequency,
            waveform,
        } => {
            let kind = waveform.unwrap_or(cli.waveform);
            info!("Rendering {:.2}s {} tone at {:.2} Hz", duration, kind, frequency);
            buffer.append_tone(duration, frequency, kind)
        }
        Command::Random { duration } => {
            info!("Rendering {:.2}s random tone", duration);
            buffer.append_random_tone(duration)
        }
    }
    .context("Failed to render tone")?;

    if buffer.peak() > 1.0 {
        info!("Peak {:.3} exceeds full scale, output will be clipped", buffer.peak());
    }

    let written = export::write_file(
        &cli.output,
        buffer.samples(),
        cli.format,
        params.sample_rate,
        params.channels,
    )
    .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    info!(
        "Wrote {} of {} frames to {} ({})",
        written,
        frames,
        cli.output.display(),
        cli.format
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tone_arguments() {
        let cli = Cli::try_parse_from([
            "bitsynth",
            "--sample-rate",
            "8000",
            "--waveform",
            "saw",
            "-o",
            "out.wav",
            "tone",
            "--duration",
            "0.5",
            "-w",
            "pulse",
        ])
        .unwrap();
        assert_eq!(cli.sample_rate, 8000);
        assert_eq!(cli.waveform, WaveformKind::Sawtooth);
        assert_eq!(cli.output, PathBuf::from("out.wav"));
        match cli.command {
            Command::Tone {
                duration,
                frequency,
                waveform,
            } => {
                assert_eq!(duration, 0.5);
                assert_eq!(frequency, 440.0);
                assert_eq!(waveform, Some(WaveformKind::Pulse));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_random_defaults() {
        let cli = Cli::try_parse_from(["bitsynth", "random"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("output.raw"));
        assert_eq!(cli.format, SampleFormat::Pcm16);
        assert!(matches!(cli.command, Command::Random { duration } if duration == 15.0));
    }

    #[test]
    fn test_unknown_waveform_is_rejected() {
        assert!(Cli::try_parse_from(["bitsynth", "--waveform", "wobble", "random"]).is_err());
    }
}
