//! WAV Container Decoding
//!
//! Minimal RIFF/WAVE reader for the live audio path. Accepts PCM16 and
//! IEEE float32 encodings at any channel count; frames are mixed down
//! to a mono f32 waveform for feature extraction. Chunk order is not
//! assumed (`fmt ` and `data` may appear in either order).

use super::ExtractionError;

/// WAVE format code for integer PCM
const FORMAT_PCM: u16 = 1;
/// WAVE format code for IEEE float
const FORMAT_IEEE_FLOAT: u16 = 3;

/// Decoded mono waveform
#[derive(Debug, Clone)]
pub struct Waveform {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

struct FmtChunk {
    format: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

/// Decode a RIFF/WAVE byte buffer into a mono waveform
pub fn decode(bytes: &[u8]) -> Result<Waveform, ExtractionError> {
    if bytes.len() < 12 {
        return Err(ExtractionError::InvalidContainer {
            detail: format!("buffer too small for a RIFF header ({} bytes)", bytes.len()),
        });
    }
    if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(ExtractionError::InvalidContainer {
            detail: "missing RIFF/WAVE magic".to_string(),
        });
    }

    let mut fmt: Option<FmtChunk> = None;
    let mut data: Option<&[u8]> = None;

    let mut pos = 12;
    while pos + 8 <= bytes.len() {
        let id = &bytes[pos..pos + 4];
        let size = u32::from_le_bytes([bytes[pos + 4], bytes[pos + 5], bytes[pos + 6], bytes[pos + 7]])
            as usize;
        let body_start = pos + 8;
        let body_end = match body_start.checked_add(size) {
            Some(end) if end <= bytes.len() => end,
            _ => {
                return Err(ExtractionError::InvalidContainer {
                    detail: format!(
                        "chunk '{}' truncated (declared {} bytes)",
                        String::from_utf8_lossy(id),
                        size
                    ),
                });
            }
        };

        match id {
            b"fmt " => fmt = Some(parse_fmt(&bytes[body_start..body_end])?),
            b"data" => data = Some(&bytes[body_start..body_end]),
            _ => {} // LIST, cue, etc. are irrelevant here
        }

        // RIFF chunks are word-aligned
        pos = body_end + (size & 1);
    }

    let fmt = fmt.ok_or_else(|| ExtractionError::InvalidContainer {
        detail: "no fmt chunk".to_string(),
    })?;
    let data = data.ok_or_else(|| ExtractionError::InvalidContainer {
        detail: "no data chunk".to_string(),
    })?;

    let samples = decode_samples(&fmt, data)?;
    Ok(Waveform {
        samples,
        sample_rate: fmt.sample_rate,
    })
}

fn parse_fmt(body: &[u8]) -> Result<FmtChunk, ExtractionError> {
    if body.len() < 16 {
        return Err(ExtractionError::InvalidContainer {
            detail: format!("fmt chunk too small ({} bytes)", body.len()),
        });
    }
    let fmt = FmtChunk {
        format: u16::from_le_bytes([body[0], body[1]]),
        channels: u16::from_le_bytes([body[2], body[3]]),
        sample_rate: u32::from_le_bytes([body[4], body[5], body[6], body[7]]),
        bits_per_sample: u16::from_le_bytes([body[14], body[15]]),
    };
    if fmt.channels == 0 {
        return Err(ExtractionError::InvalidContainer {
            detail: "fmt chunk declares zero channels".to_string(),
        });
    }
    if fmt.sample_rate == 0 {
        return Err(ExtractionError::InvalidContainer {
            detail: "fmt chunk declares zero sample rate".to_string(),
        });
    }
    Ok(fmt)
}

fn decode_samples(fmt: &FmtChunk, data: &[u8]) -> Result<Vec<f32>, ExtractionError> {
    let channels = fmt.channels as usize;
    match (fmt.format, fmt.bits_per_sample) {
        (FORMAT_PCM, 16) => {
            let frame_bytes = 2 * channels;
            let mut samples = Vec::with_capacity(data.len() / frame_bytes);
            for frame in data.chunks_exact(frame_bytes) {
                let mut acc = 0.0f32;
                for ch in frame.chunks_exact(2) {
                    acc += i16::from_le_bytes([ch[0], ch[1]]) as f32 / 32768.0;
                }
                samples.push(acc / channels as f32);
            }
            Ok(samples)
        }
        (FORMAT_IEEE_FLOAT, 32) => {
            let frame_bytes = 4 * channels;
            let mut samples = Vec::with_capacity(data.len() / frame_bytes);
            for frame in data.chunks_exact(frame_bytes) {
                let mut acc = 0.0f32;
                for ch in frame.chunks_exact(4) {
                    acc += f32::from_le_bytes([ch[0], ch[1], ch[2], ch[3]]);
                }
                samples.push(acc / channels as f32);
            }
            Ok(samples)
        }
        (format, bits) => Err(ExtractionError::UnsupportedEncoding { format, bits }),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a minimal PCM16 WAV buffer from raw sample frames
    fn make_wav_pcm16(channels: u16, sample_rate: u32, frames: &[i16]) -> Vec<u8> {
        let data_len = frames.len() * 2;
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&((36 + data_len) as u32).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&channels.to_le_bytes());
        out.extend_from_slice(&sample_rate.to_le_bytes());
        out.extend_from_slice(&(sample_rate * channels as u32 * 2).to_le_bytes());
        out.extend_from_slice(&(channels * 2).to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&(data_len as u32).to_le_bytes());
        for s in frames {
            out.extend_from_slice(&s.to_le_bytes());
        }
        out
    }

    #[test]
    fn test_decode_mono_pcm16() {
        let bytes = make_wav_pcm16(1, 22050, &[0, 16384, -16384, 32767]);
        let wav = decode(&bytes).unwrap();
        assert_eq!(wav.sample_rate, 22050);
        assert_eq!(wav.samples.len(), 4);
        assert!((wav.samples[1] - 0.5).abs() < 1e-3);
        assert!((wav.samples[2] + 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_decode_stereo_mixdown() {
        // L=+0.5, R=-0.5 mixes to silence
        let bytes = make_wav_pcm16(2, 44100, &[16384, -16384, 16384, -16384]);
        let wav = decode(&bytes).unwrap();
        assert_eq!(wav.samples.len(), 2);
        assert!(wav.samples[0].abs() < 1e-3);
    }

    #[test]
    fn test_decode_float32() {
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36u32 + 8).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&3u16.to_le_bytes()); // IEEE float
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&48000u32.to_le_bytes());
        out.extend_from_slice(&(48000u32 * 4).to_le_bytes());
        out.extend_from_slice(&4u16.to_le_bytes());
        out.extend_from_slice(&32u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&8u32.to_le_bytes());
        out.extend_from_slice(&0.25f32.to_le_bytes());
        out.extend_from_slice(&(-0.75f32).to_le_bytes());

        let wav = decode(&out).unwrap();
        assert_eq!(wav.sample_rate, 48000);
        assert_eq!(wav.samples, vec![0.25, -0.75]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode(b"not a wav file at all").unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidContainer { .. }));
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn test_decode_rejects_truncated_chunk() {
        let mut bytes = make_wav_pcm16(1, 22050, &[1, 2, 3, 4]);
        bytes.truncate(bytes.len() - 3);
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidContainer { .. }));
    }

    #[test]
    fn test_decode_rejects_unsupported_encoding() {
        let mut bytes = make_wav_pcm16(1, 22050, &[0; 4]);
        // Flip bits-per-sample to 24
        let fmt_bits_offset = 12 + 8 + 14;
        bytes[fmt_bits_offset] = 24;
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::UnsupportedEncoding { format: 1, bits: 24 }
        ));
    }

    #[test]
    fn test_decode_requires_data_chunk() {
        let full = make_wav_pcm16(1, 22050, &[0; 4]);
        // Keep header + fmt only
        let bytes = &full[..12 + 8 + 16];
        let err = decode(bytes).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidContainer { .. }));
    }
}
