//! Stateless waveform sampling
//!
//! Maps (time, frequency, waveform kind, duty cycle) to an amplitude. All
//! kinds except Sine and Harmonics are driven by the fractional phase of
//! `time * frequency`, so they restart their cycle from raw time on every
//! call. Sine and Harmonics are evaluated from absolute time.

use std::f32::consts::PI;

use rand::Rng;

use super::waveform::WaveformKind;

/// Number of partials summed by [`WaveformKind::Harmonics`].
pub const HARMONIC_COUNT: u32 = 4;

/// Fractional part of `time * frequency_hz`, always in [0, 1).
pub fn phase(time: f32, frequency_hz: f32) -> f32 {
    let phase = (time * frequency_hz).rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}

/// Sample `kind` at `time` seconds.
///
/// # Arguments
/// * `time` - Elapsed time in seconds
/// * `frequency_hz` - Tone frequency; 0.0 holds the phase-0 value
/// * `kind` - Waveform to evaluate
/// * `duty_cycle` - High fraction of the period, used by Square and Pulse only
/// * `rng` - Random source, consumed by Noise only
///
/// Values outside (0, 1) for `duty_cycle` are accepted and give a constant
/// high or low level. Harmonics is not normalized and can exceed [-1, 1].
pub fn sample<R: Rng + ?Sized>(
    time: f32,
    frequency_hz: f32,
    kind: WaveformKind,
    duty_cycle: f32,
    rng: &mut R,
) -> f32 {
    match kind {
        WaveformKind::Square => {
            if phase(time, frequency_hz) < duty_cycle {
                1.0
            } else {
                -1.0
            }
        }
        WaveformKind::Triangle => 2.0 * (2.0 * phase(time, frequency_hz) - 1.0).abs() - 1.0,
        WaveformKind::Sawtooth => 2.0 * phase(time, frequency_hz) - 1.0,
        WaveformKind::Sine => (2.0 * PI * frequency_hz * time).sin(),
        WaveformKind::Noise => rng.random_range(-1.0..1.0),
        WaveformKind::Pulse => {
            if phase(time, frequency_hz) < duty_cycle {
                1.0
            } else {
                -0.5
            }
        }
        WaveformKind::Exponential => 2.0 * (-4.0 * phase(time, frequency_hz)).exp() - 1.0,
        WaveformKind::Harmonics => harmonics(time, frequency_hz),
    }
}

fn harmonics(time: f32, frequency_hz: f32) -> f32 {
    let two_pi = 2.0 * PI;
    (1..=HARMONIC_COUNT)
        .map(|i| {
            let multiple = i as f32;
            (two_pi * frequency_hz * multiple * time).sin() / multiple
        })
        .sum()
}
