//! # Musical Tuning Module
//!
//! Equal-temperament note mapping for the tuner core. Converts a detected
//! frequency to the nearest note name + octave, and a note back to its
//! reference frequency, relative to a configurable concert pitch.
//!
//! ## Features
//! - Frequency to nearest note (name + octave) classification
//! - Note to reference-frequency calculation via MIDI numbering
//! - Forward and inverse mappings are exact inverses under rounding
//! - Concert pitch is a parameter everywhere, never baked into the math

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The twelve pitch-class names in table order, starting at C.
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone distance from C at octave 0 up to A4, given the table above
/// starts at C. This single constant couples the forward mapping's index
/// arithmetic to the A4 concert-pitch reference.
pub const SEMITONES_C0_TO_A4: i32 = 57;

/// MIDI note number assigned to A4.
const MIDI_A4: i32 = 69;

/// Static map for quick pitch-class name to index lookups.
static PITCH_CLASS_INDEX: Lazy<BTreeMap<&'static str, u8>> = Lazy::new(|| {
    PITCH_CLASS_NAMES
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, i as u8))
        .collect()
});

/// A musical note as a pitch class plus an octave.
///
/// Two notes are equal iff both fields match exactly; the reference
/// frequency is derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Pitch-class index into [`PITCH_CLASS_NAMES`] (0 = C, 11 = B).
    pitch_class: u8,
    /// Octave number in scientific pitch notation (A4 = octave 4).
    pub octave: i32,
}

impl Note {
    /// Builds a note from a pitch-class name ("C", "F#", ...) and an octave.
    ///
    /// Returns `None` for names outside the canonical 12-entry table
    /// (flat spellings like "Bb" are not accepted).
    pub fn new(pitch_class_name: &str, octave: i32) -> Option<Note> {
        PITCH_CLASS_INDEX
            .get(pitch_class_name)
            .map(|&pitch_class| Note { pitch_class, octave })
    }

    /// The pitch-class index (0 = C, 11 = B).
    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    /// The canonical pitch-class name ("C#", "A", ...).
    pub fn pitch_class_name(&self) -> &'static str {
        PITCH_CLASS_NAMES[self.pitch_class as usize]
    }

    /// The MIDI note number (A4 = 69, C4 = 60).
    pub fn midi_number(&self) -> i32 {
        self.pitch_class as i32 + 12 * (self.octave + 1)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class_name(), self.octave)
    }
}

impl FromStr for Note {
    type Err = anyhow::Error;

    /// Parses the "A4" / "C#3" / "B-1" notation used for display and
    /// session keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| anyhow::anyhow!("note '{}' has no octave", s))?;
        let (name, octave) = s.split_at(split);
        let octave: i32 = octave
            .parse()
            .map_err(|_| anyhow::anyhow!("note '{}' has an invalid octave", s))?;
        Note::new(name, octave).ok_or_else(|| anyhow::anyhow!("unknown pitch class in '{}'", s))
    }
}

/// Classifies a frequency as its nearest equal-temperament note.
///
/// The semitone offset from the concert-pitch reference is rounded to the
/// nearest integer and rebased onto the C-rooted table via
/// [`SEMITONES_C0_TO_A4`]; the octave falls out of the same index.
///
/// # Arguments
/// * `freq` - Input frequency in Hz; must be strictly positive (the
///   analyzer's valid-band gate guarantees this before calling)
/// * `concert_pitch` - Reference frequency for A4 in Hz
pub fn note_from_frequency(freq: f32, concert_pitch: f32) -> Note {
    debug_assert!(freq > 0.0 && concert_pitch > 0.0);
    let semitones_from_a4 = 12.0 * (freq / concert_pitch).log2();
    let index = semitones_from_a4.round() as i32 + SEMITONES_C0_TO_A4;
    Note {
        pitch_class: index.rem_euclid(12) as u8,
        octave: index.div_euclid(12),
    }
}

/// Computes a note's reference frequency in equal temperament.
///
/// Uses the MIDI-number form `concert_pitch * 2^((midi - 69) / 12)`, the
/// exact inverse of [`note_from_frequency`] under rounding.
pub fn note_to_frequency(note: Note, concert_pitch: f32) -> f32 {
    concert_pitch * 2.0_f32.powf((note.midi_number() - MIDI_A4) as f32 / 12.0)
}
