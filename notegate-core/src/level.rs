//! # Signal Level Module
//!
//! RMS loudness estimation for the level bar and for silence gating.
//! The display value is a decibel reading shifted up by a fixed offset so
//! the usable microphone range lands near 0..100.

/// Offset added to the dBFS reading to shift the display range up from
/// negative decibels. Values above 100 are possible for hot signals; a
/// bounded bar must clamp on the consumer side.
pub const DB_DISPLAY_OFFSET: f32 = 100.0;

/// Computes the root-mean-square amplitude of a signal.
///
/// Returns 0.0 for an empty buffer.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|&s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

/// Converts an RMS amplitude to the shifted-decibel display scale.
///
/// Perfect silence would be negative infinity in the log domain, so it is
/// special-cased to the 0 floor instead of propagating a non-finite value.
pub fn loudness_from_rms(rms: f32) -> f32 {
    if rms <= 0.0 {
        return 0.0;
    }
    let db = 20.0 * rms.log10();
    (db + DB_DISPLAY_OFFSET).round().max(0.0)
}

/// Estimates display loudness from a signed normalized sample buffer.
pub fn estimate_level(samples: &[f32]) -> f32 {
    loudness_from_rms(rms(samples))
}

/// Estimates display loudness from an unsigned-byte sample view
/// (midpoint 128), recentering each sample to [-1, 1) first.
pub fn estimate_level_bytes(samples: &[u8]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples
        .iter()
        .map(|&s| {
            let centered = (s as f32 - 128.0) / 128.0;
            centered * centered
        })
        .sum();
    loudness_from_rms((sum / samples.len() as f32).sqrt())
}
