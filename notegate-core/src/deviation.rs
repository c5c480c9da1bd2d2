//! # Tuner Deviation Module
//!
//! Maps the gap between a raw frequency estimate and the committed note's
//! reference frequency onto a bounded needle position for the tuner bar.

/// Computes the tuning-needle position for a raw frequency against a
/// target frequency.
///
/// The relative deviation is amplified by the sensitivity multiplier and
/// clamped, so the needle saturates at 0/100 once the deviation ratio
/// exceeds `0.5 / sensitivity` of the target. 50 means in tune.
///
/// # Returns
/// * `Some(percent)` in [0, 100]
/// * `None` when the target is non-positive or any intermediate value is
///   non-finite
pub fn needle_position(raw_freq: f32, target_freq: f32, sensitivity: f32) -> Option<f32> {
    if !target_freq.is_finite() || target_freq <= 0.0 || !raw_freq.is_finite() {
        return None;
    }
    let deviation = raw_freq - target_freq;
    let percent = 50.0 + ((deviation / target_freq) * 100.0 * sensitivity).clamp(-50.0, 50.0);
    percent.is_finite().then_some(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_tune_reads_the_center() {
        assert_eq!(needle_position(440.0, 440.0, 15.0), Some(50.0));
        assert_eq!(needle_position(82.41, 82.41, 15.0), Some(50.0));
    }

    #[test]
    fn sharp_reads_above_center_and_flat_below() {
        let sharp = needle_position(441.0, 440.0, 15.0).unwrap();
        let flat = needle_position(439.0, 440.0, 15.0).unwrap();
        assert!(sharp > 50.0);
        assert!(flat < 50.0);
        // 1 Hz at 440 Hz with x15 sensitivity is about 3.4 points.
        assert!((sharp - 53.4).abs() < 0.1);
    }

    #[test]
    fn needle_saturates_at_the_extremes() {
        // An octave sharp or a fifth flat is far past the +/-3.3%
        // relative deviation where the x15 scale saturates.
        assert_eq!(needle_position(880.0, 440.0, 15.0), Some(100.0));
        assert_eq!(needle_position(220.0, 440.0, 15.0), Some(0.0));
    }

    #[test]
    fn degenerate_targets_are_undefined() {
        assert_eq!(needle_position(440.0, 0.0, 15.0), None);
        assert_eq!(needle_position(440.0, -1.0, 15.0), None);
        assert_eq!(needle_position(f32::NAN, 440.0, 15.0), None);
        assert_eq!(needle_position(440.0, f32::NAN, 15.0), None);
    }
}
