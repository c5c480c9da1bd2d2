//! # Detection Stability Module
//!
//! Run-length debouncing of raw per-frame note detections. A candidate
//! note must fill the whole observation window with exact-equality votes
//! before it is committed, which suppresses flicker from noise frames and
//! transients without any nearest-neighbor smoothing.

use std::collections::VecDeque;
use std::time::Instant;

use crate::tuning::Note;

/// Debounces a stream of raw note detections into a committed note.
///
/// Keeps the last `required_consistency` detections in a FIFO window. The
/// window is never cleared on disagreement; stale entries simply slide
/// out, so the filter always votes over the last N observations.
#[derive(Debug)]
pub struct StabilityFilter {
    window: VecDeque<Note>,
    required_consistency: usize,
    committed: Option<Note>,
    last_commit: Option<Instant>,
}

impl StabilityFilter {
    /// Creates a filter that commits after `required_consistency`
    /// consecutive identical detections (minimum 1).
    pub fn new(required_consistency: usize) -> StabilityFilter {
        let required_consistency = required_consistency.max(1);
        StabilityFilter {
            window: VecDeque::with_capacity(required_consistency),
            required_consistency,
            committed: None,
            last_commit: None,
        }
    }

    /// Feeds one raw detection into the window.
    ///
    /// Commits the candidate iff the window is full, every entry in it
    /// equals the candidate, and the candidate differs from the note
    /// already committed. Silent or out-of-band frames must not reach
    /// this method; skipping them leaves the window untouched.
    ///
    /// # Returns
    /// * `true` - a new note was committed this frame
    /// * `false` - no change
    pub fn observe(&mut self, candidate: Note) -> bool {
        self.window.push_back(candidate);
        if self.window.len() > self.required_consistency {
            self.window.pop_front();
        }

        let unanimous = self.window.len() == self.required_consistency
            && self.window.iter().all(|note| *note == candidate);

        if unanimous && self.committed != Some(candidate) {
            self.committed = Some(candidate);
            self.last_commit = Some(Instant::now());
            true
        } else {
            false
        }
    }

    /// The currently committed note, if any.
    pub fn committed(&self) -> Option<Note> {
        self.committed
    }

    /// When the current note was committed.
    pub fn last_commit(&self) -> Option<Instant> {
        self.last_commit
    }

    /// Clears the window and the committed note for a fresh session.
    pub fn reset(&mut self) {
        self.window.clear();
        self.committed = None;
        self.last_commit = None;
    }
}
