//! # Frame Analysis Module
//!
//! The per-frame analysis pipeline. An external scheduler (render loop,
//! capture callback, worker thread) calls [`Analyzer::analyze_frame`]
//! once per frame with the most recent sample window; everything the
//! presentation sink needs comes back in the returned
//! [`AnalysisResult`].
//!
//! ## Pipeline
//! 1. Loudness is always computed for the level display
//! 2. Frames below the silence threshold skip all pitch work
//! 3. The zero-crossing estimate is gated to the valid frequency band
//! 4. In-band detections vote in the stability filter
//! 5. Once a note is committed, the needle deviation is derived from the
//!    current frame's raw estimate against that note's reference frequency

use anyhow::{Result, bail};

use crate::config::TunerConfig;
use crate::stability::StabilityFilter;
use crate::{AnalysisResult, deviation, frequency, level, tuning};

/// One tuning session: the configuration plus the debouncing state that
/// persists across frames.
///
/// Analysis mutates the stability window in place, so exactly one caller
/// may drive a given `Analyzer` at a time; independent sessions get
/// independent instances.
#[derive(Debug)]
pub struct Analyzer {
    config: TunerConfig,
    stability: StabilityFilter,
}

impl Analyzer {
    /// Creates a session from a validated configuration.
    pub fn new(config: TunerConfig) -> Result<Analyzer> {
        config.validate()?;
        let stability = StabilityFilter::new(config.stability_window);
        Ok(Analyzer { config, stability })
    }

    /// Analyzes one frame of audio.
    ///
    /// # Arguments
    /// * `samples` - Signed normalized sample window; must be non-empty
    /// * `sample_rate` - Capture rate in Hz; must be non-zero
    ///
    /// # Returns
    /// * `Ok(result)` - The frame's loudness, frequency, committed note,
    ///   and needle deviation
    /// * `Err(e)` - The buffer was degenerate; no state was touched
    pub fn analyze_frame(&mut self, samples: &[f32], sample_rate: u32) -> Result<AnalysisResult> {
        if samples.is_empty() {
            bail!("cannot analyze an empty sample buffer");
        }
        if sample_rate == 0 {
            bail!("sample rate must be positive");
        }

        let rms = level::rms(samples);
        let mut result = AnalysisResult {
            loudness: level::loudness_from_rms(rms),
            frequency: None,
            note: self.stability.committed(),
            note_changed: false,
            deviation: None,
        };

        // Too weak to trust; leave the debouncing state untouched.
        if rms < self.config.silence_threshold {
            return Ok(result);
        }

        let freq = frequency::estimate_frequency(samples, sample_rate);
        if !(freq > self.config.min_frequency && freq < self.config.max_frequency) {
            return Ok(result);
        }
        result.frequency = Some(freq);

        let candidate = tuning::note_from_frequency(freq, self.config.concert_pitch);
        result.note_changed = self.stability.observe(candidate);
        result.note = self.stability.committed();

        if let Some(note) = result.note {
            let target = tuning::note_to_frequency(note, self.config.concert_pitch);
            result.deviation =
                deviation::needle_position(freq, target, self.config.needle_sensitivity);
        }

        if result.note_changed {
            log::debug!("committed note {} at {:.1} Hz", candidate, freq);
        }

        Ok(result)
    }

    /// The note the session currently stands behind.
    pub fn committed_note(&self) -> Option<tuning::Note> {
        self.stability.committed()
    }

    /// The session configuration.
    pub fn config(&self) -> &TunerConfig {
        &self.config
    }

    /// Clears the debouncing state for a fresh tuning session.
    pub fn reset(&mut self) {
        self.stability.reset();
    }
}
