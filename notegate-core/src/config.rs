//! # Tuner Configuration Module
//!
//! The tunable surface of the analysis core. Values serialize with serde
//! so frontends can persist user settings alongside their own profiles.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Configuration for one analysis session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TunerConfig {
    /// Reference frequency for A4 in Hz.
    pub concert_pitch: f32,
    /// Number of consecutive identical detections required before a note
    /// is committed.
    pub stability_window: usize,
    /// RMS amplitude below which a frame is treated as silence and the
    /// pitch path is skipped.
    pub silence_threshold: f32,
    /// Lower bound (exclusive) of the valid frequency band in Hz.
    pub min_frequency: f32,
    /// Upper bound (exclusive) of the valid frequency band in Hz.
    pub max_frequency: f32,
    /// Sensitivity multiplier for the tuning needle; higher values make
    /// the needle saturate on smaller relative deviations.
    pub needle_sensitivity: f32,
}

impl Default for TunerConfig {
    fn default() -> TunerConfig {
        TunerConfig {
            concert_pitch: 440.0,
            stability_window: 3,
            silence_threshold: 0.01,
            min_frequency: 50.0,
            max_frequency: 1500.0,
            needle_sensitivity: 15.0,
        }
    }
}

impl TunerConfig {
    /// Rejects configurations the analysis math cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.concert_pitch > 0.0) {
            bail!("concert pitch must be positive, got {}", self.concert_pitch);
        }
        if self.stability_window == 0 {
            bail!("stability window must hold at least one detection");
        }
        if self.silence_threshold < 0.0 {
            bail!(
                "silence threshold must be non-negative, got {}",
                self.silence_threshold
            );
        }
        if !(self.min_frequency > 0.0) || !(self.max_frequency > self.min_frequency) {
            bail!(
                "invalid frequency band {}..{} Hz",
                self.min_frequency,
                self.max_frequency
            );
        }
        if !(self.needle_sensitivity > 0.0) {
            bail!(
                "needle sensitivity must be positive, got {}",
                self.needle_sensitivity
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_canonical_tuner_values() {
        let config = TunerConfig::default();
        assert_eq!(config.concert_pitch, 440.0);
        assert_eq!(config.stability_window, 3);
        assert_eq!(config.silence_threshold, 0.01);
        assert_eq!(config.min_frequency, 50.0);
        assert_eq!(config.max_frequency, 1500.0);
        assert_eq!(config.needle_sensitivity, 15.0);
        config.validate().unwrap();
    }

    #[test]
    fn validation_rejects_degenerate_settings() {
        let mut config = TunerConfig::default();
        config.concert_pitch = 0.0;
        assert!(config.validate().is_err());

        let mut config = TunerConfig::default();
        config.stability_window = 0;
        assert!(config.validate().is_err());

        let mut config = TunerConfig::default();
        config.min_frequency = 1500.0;
        config.max_frequency = 50.0;
        assert!(config.validate().is_err());

        let mut config = TunerConfig::default();
        config.needle_sensitivity = -1.0;
        assert!(config.validate().is_err());

        let mut config = TunerConfig::default();
        config.silence_threshold = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn serde_round_trip_and_partial_profiles() {
        let mut config = TunerConfig::default();
        config.concert_pitch = 442.0;
        let json = serde_json::to_string(&config).unwrap();
        let back: TunerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.concert_pitch, 442.0);
        assert_eq!(back.stability_window, config.stability_window);

        // Missing fields fall back to the defaults.
        let partial: TunerConfig = serde_json::from_str(r#"{"stability_window": 5}"#).unwrap();
        assert_eq!(partial.stability_window, 5);
        assert_eq!(partial.concert_pitch, 440.0);
    }
}
