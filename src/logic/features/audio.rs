//! Audio Feature Extraction
//!
//! Computes the four audio metrics from a decoded waveform:
//! - `mfcc_var`: variance of a mel-frequency cepstral coefficient matrix
//! - `chroma_corr`: correlation between the first two pitch-class series
//! - `spectral_rolloff`: mean 85% energy rolloff, normalized to Nyquist
//! - `zero_crossing_rate`: mean waveform sign-change rate
//!
//! Analysis is framed and capped (`MAX_FRAMES`), so a call completes in
//! bounded time regardless of input length. Everything here is pure;
//! the same buffer always yields the same feature set.

use std::f32::consts::PI;

use super::set::{AudioFeatures, FeatureSet};
use super::wav::{self, Waveform};
use super::ExtractionError;

// ============================================================================
// ANALYSIS PARAMETERS
// ============================================================================

/// Samples per analysis frame
const FRAME_SIZE: usize = 1024;
/// Hop between consecutive frames
const HOP_SIZE: usize = 512;
/// Frame cap keeping extraction time bounded
const MAX_FRAMES: usize = 8;
/// Longest waveform span the caps can cover
const ANALYSIS_SPAN: usize = FRAME_SIZE + HOP_SIZE * (MAX_FRAMES - 1);

/// Triangular mel filters in the bank
const MEL_BANDS: usize = 26;
/// Cepstral coefficients kept per frame
const MFCC_COEFFS: usize = 13;

/// Energy fraction defining the rolloff point
const ROLLOFF_FRACTION: f32 = 0.85;

/// Pitch classes in an octave
const PITCH_CLASSES: usize = 12;
/// Reference tuning
const A4_HZ: f32 = 440.0;
const A4_MIDI: f32 = 69.0;

// ============================================================================
// EXTRACTION
// ============================================================================

/// Decode a WAV buffer and compute the audio feature set
pub fn extract(bytes: &[u8]) -> Result<FeatureSet, ExtractionError> {
    let wav = wav::decode(bytes)?;
    extract_from_waveform(&wav)
}

/// Compute the audio feature set from an already-decoded waveform
pub fn extract_from_waveform(wav: &Waveform) -> Result<FeatureSet, ExtractionError> {
    if wav.samples.len() < FRAME_SIZE {
        return Err(ExtractionError::TooShort {
            samples: wav.samples.len(),
            needed: FRAME_SIZE,
        });
    }

    let spectra = framed_spectra(&wav.samples);

    let mfcc_var = mfcc_variance(&spectra, wav.sample_rate);
    let chroma_corr = chroma_correlation(&spectra, wav.sample_rate);
    let spectral_rolloff = mean_rolloff(&spectra);
    let zero_crossing_rate = zero_crossing_rate(&wav.samples);

    Ok(FeatureSet::Audio(AudioFeatures {
        mfcc_var,
        chroma_corr,
        spectral_rolloff,
        zero_crossing_rate,
    }))
}

// ============================================================================
// SPECTRA
// ============================================================================

/// Hann-windowed magnitude spectra for up to `MAX_FRAMES` frames
fn framed_spectra(samples: &[f32]) -> Vec<Vec<f32>> {
    let mut spectra = Vec::new();
    let mut start = 0;
    while start + FRAME_SIZE <= samples.len() && spectra.len() < MAX_FRAMES {
        spectra.push(magnitude_spectrum(&samples[start..start + FRAME_SIZE]));
        start += HOP_SIZE;
    }
    spectra
}

/// Magnitude spectrum of one frame (bins 0..FRAME_SIZE/2).
///
/// Plain DFT; frame size and frame cap keep the cost fixed, so no FFT
/// machinery is warranted for a four-metric probe.
fn magnitude_spectrum(frame: &[f32]) -> Vec<f32> {
    let n = frame.len();
    let windowed: Vec<f32> = frame
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let w = 0.5 - 0.5 * (2.0 * PI * i as f32 / (n - 1) as f32).cos();
            s * w
        })
        .collect();

    let bins = n / 2;
    let mut mags = Vec::with_capacity(bins);
    for k in 0..bins {
        let step = -2.0 * PI * k as f32 / n as f32;
        let mut re = 0.0f32;
        let mut im = 0.0f32;
        for (i, s) in windowed.iter().enumerate() {
            let angle = step * i as f32;
            re += s * angle.cos();
            im += s * angle.sin();
        }
        mags.push((re * re + im * im).sqrt());
    }
    mags
}

/// Center frequency of a spectrum bin
fn bin_frequency(bin: usize, bins: usize, sample_rate: u32) -> f32 {
    bin as f32 * sample_rate as f32 / (bins * 2) as f32
}

// ============================================================================
// METRICS
// ============================================================================

fn mean_rolloff(spectra: &[Vec<f32>]) -> f32 {
    if spectra.is_empty() {
        return 0.0;
    }
    let total: f32 = spectra
        .iter()
        .map(|spec| {
            let bin = rolloff_bin(spec, ROLLOFF_FRACTION);
            bin as f32 / (spec.len() - 1) as f32
        })
        .sum();
    total / spectra.len() as f32
}

/// First bin at which cumulative energy reaches the given fraction
fn rolloff_bin(spec: &[f32], fraction: f32) -> usize {
    let total: f32 = spec.iter().map(|m| m * m).sum();
    let target = total * fraction;
    let mut acc = 0.0f32;
    for (i, m) in spec.iter().enumerate() {
        acc += m * m;
        if acc >= target {
            return i;
        }
    }
    spec.len().saturating_sub(1)
}

fn mfcc_variance(spectra: &[Vec<f32>], sample_rate: u32) -> f32 {
    if spectra.is_empty() {
        return 0.0;
    }
    let bank = mel_filterbank(spectra[0].len(), sample_rate);
    let mut coeffs = Vec::with_capacity(spectra.len() * MFCC_COEFFS);

    for spec in spectra {
        let log_mel: Vec<f32> = bank
            .iter()
            .map(|filter| {
                let energy: f32 = filter.iter().map(|&(bin, w)| spec[bin] * w).sum();
                (energy + 1e-10).ln()
            })
            .collect();

        // DCT-II of the log-mel energies
        for k in 0..MFCC_COEFFS {
            let mut c = 0.0f32;
            for (m, &e) in log_mel.iter().enumerate() {
                c += e * (PI * k as f32 * (m as f32 + 0.5) / MEL_BANDS as f32).cos();
            }
            coeffs.push(c);
        }
    }

    variance(&coeffs)
}

/// Sparse triangular mel filterbank over the spectrum bins
fn mel_filterbank(bins: usize, sample_rate: u32) -> Vec<Vec<(usize, f32)>> {
    let nyquist = sample_rate as f32 / 2.0;
    let mel_max = hz_to_mel(nyquist);
    let edges: Vec<f32> = (0..MEL_BANDS + 2)
        .map(|i| mel_to_hz(mel_max * i as f32 / (MEL_BANDS + 1) as f32))
        .collect();

    let mut bank = Vec::with_capacity(MEL_BANDS);
    for b in 0..MEL_BANDS {
        let (lo, center, hi) = (edges[b], edges[b + 1], edges[b + 2]);
        let mut filter = Vec::new();
        for bin in 0..bins {
            let freq = bin_frequency(bin, bins, sample_rate);
            if freq <= lo || freq >= hi {
                continue;
            }
            let w = if freq <= center {
                (freq - lo) / (center - lo)
            } else {
                (hi - freq) / (hi - center)
            };
            if w.is_finite() && w > 0.0 {
                filter.push((bin, w));
            }
        }
        bank.push(filter);
    }
    bank
}

fn hz_to_mel(hz: f32) -> f32 {
    2595.0 * (1.0 + hz / 700.0).log10()
}

fn mel_to_hz(mel: f32) -> f32 {
    700.0 * (10.0f32.powf(mel / 2595.0) - 1.0)
}

fn chroma_correlation(spectra: &[Vec<f32>], sample_rate: u32) -> f32 {
    let mut class_a = Vec::with_capacity(spectra.len());
    let mut class_b = Vec::with_capacity(spectra.len());

    for spec in spectra {
        let mut chroma = [0.0f32; PITCH_CLASSES];
        for (bin, m) in spec.iter().enumerate().skip(1) {
            let freq = bin_frequency(bin, spec.len(), sample_rate);
            if freq < 20.0 {
                // Sub-audible bins only add noise to the chromagram
                continue;
            }
            let midi = A4_MIDI + 12.0 * (freq / A4_HZ).log2();
            let class = (midi.round() as i32).rem_euclid(PITCH_CLASSES as i32) as usize;
            chroma[class] += m * m;
        }
        class_a.push(chroma[0]);
        class_b.push(chroma[1]);
    }

    pearson(&class_a, &class_b)
}

fn zero_crossing_rate(samples: &[f32]) -> f32 {
    let span = samples.len().min(ANALYSIS_SPAN);
    if span < 2 {
        return 0.0;
    }
    let analyzed = &samples[..span];
    let crossings = analyzed
        .windows(2)
        .filter(|pair| (pair[0] >= 0.0) != (pair[1] >= 0.0))
        .count();
    crossings as f32 / (span - 1) as f32
}

// ============================================================================
// STATISTICS
// ============================================================================

fn variance(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n
}

/// Pearson correlation of two equal-length series.
///
/// Degenerate input (short series or zero variance on either side)
/// reports 0.0 rather than NaN so scoring stays total.
fn pearson(xs: &[f32], ys: &[f32]) -> f32 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }
    let n = xs.len() as f32;
    let mean_x = xs.iter().sum::<f32>() / n;
    let mean_y = ys.iter().sum::<f32>() / n;

    let mut cov = 0.0f32;
    let mut var_x = 0.0f32;
    let mut var_y = 0.0f32;
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x <= f32::EPSILON || var_y <= f32::EPSILON {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

// ============================================================================
// TESTS
// ============================================================================
