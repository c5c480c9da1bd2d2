// notegate-core/src/lib.rs

//! The core logic for the real-time pitch/tuner analyzer.
//! This crate is responsible for frequency estimation, note
//! classification, detection debouncing, and tuning-deviation
//! computation. It is completely headless and contains no audio
//! capture or GUI code: frontends feed it sample buffers and read
//! back plain `AnalysisResult` values.

pub mod analyzer;
pub mod config;
pub mod deviation;
pub mod engine;
pub mod frequency;
pub mod level;
pub mod stability;
pub mod tuning;

pub use analyzer::Analyzer;
pub use config::TunerConfig;
pub use tuning::Note;

/// Represents the result of a single audio analysis frame.
///
/// This is the complete payload a presentation sink needs after each
/// frame: a level-bar value, the raw frequency estimate (when one could
/// be made), the note the stability filter currently stands behind, and
/// the tuning-needle position relative to that note.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Display loudness on the 0-and-up decibel-offset scale (0 = silence floor).
    pub loudness: f32,
    /// The raw frequency estimate in Hz, or `None` when the frame was
    /// silent or the estimate fell outside the valid band.
    pub frequency: Option<f32>,
    /// The currently committed note, if any frame run has committed one yet.
    pub note: Option<Note>,
    /// True exactly on the frame where a new note was committed.
    pub note_changed: bool,
    /// Tuning-needle position in [0, 100] (50 = in tune), or `None`
    /// when no note is committed or the reading would be non-finite.
    pub deviation: Option<f32>,
}
