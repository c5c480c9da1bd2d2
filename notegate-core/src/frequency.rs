//! # Frequency Estimation Module
//!
//! Coarse fundamental-frequency estimation by zero-crossing counting.
//! Reliable only for quasi-periodic monophonic input inside the tuner's
//! valid band; inharmonic or multi-partial signals can fool it, which is
//! why detections are debounced downstream before anything is committed.

/// Estimates the fundamental frequency of a signal by counting zero
/// crossings.
///
/// Every sign change between adjacent samples is counted, with
/// exactly-zero samples treated as non-negative. A periodic signal
/// crosses zero twice per cycle, so the cycle rate is
/// `crossings / duration / 2`. No smoothing, autocorrelation, or
/// spectral refinement is applied; the estimate is quantized to steps of
/// `sample_rate / samples.len() / 2` Hz.
///
/// # Arguments
/// * `samples` - Signed normalized time-domain buffer
/// * `sample_rate` - Capture rate in Hz
///
/// # Returns
/// * Estimated frequency in Hz; 0.0 when the buffer holds no crossing
///   (or is too short to hold one)
pub fn estimate_frequency(samples: &[f32], sample_rate: u32) -> f32 {
    if samples.len() < 2 || sample_rate == 0 {
        return 0.0;
    }

    let mut crossings = 0u32;
    for pair in samples.windows(2) {
        let was_negative = pair[0] < 0.0;
        let is_negative = pair[1] < 0.0;
        if was_negative != is_negative {
            crossings += 1;
        }
    }

    let duration = samples.len() as f32 / sample_rate as f32;
    crossings as f32 / duration / 2.0
}
