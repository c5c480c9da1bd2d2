//! # Analysis Engine Module
//!
//! Channel plumbing for frontends that run capture and analysis on
//! separate threads. The worker owns the [`Analyzer`] outright, so the
//! single-writer discipline over the debouncing state holds by
//! construction: frames arrive on one channel, results leave on another,
//! and the capture side decides what to do about backpressure (bounded
//! channels and `try_send` both work; the core keeps no queue of its own).

use std::thread::{self, JoinHandle};

use anyhow::Result;
use crossbeam_channel::{Receiver, Sender};

use crate::analyzer::Analyzer;
use crate::config::TunerConfig;
use crate::AnalysisResult;

/// Spawns a dedicated analysis thread.
///
/// The worker drains `frames` until the sending side disconnects,
/// analyzing each frame in arrival order. Malformed frames are logged
/// and skipped rather than tearing the session down. The thread also
/// stops once nobody is listening for results.
///
/// # Arguments
/// * `config` - Session configuration; validated before the thread starts
/// * `sample_rate` - Capture rate of the incoming frames in Hz
/// * `frames` - Channel of sample windows from the capture side
/// * `results` - Channel of per-frame results toward the presentation sink
pub fn spawn_analysis_worker(
    config: TunerConfig,
    sample_rate: u32,
    frames: Receiver<Vec<f32>>,
    results: Sender<AnalysisResult>,
) -> Result<JoinHandle<()>> {
    let mut analyzer = Analyzer::new(config)?;
    let handle = thread::spawn(move || {
        for frame in frames.iter() {
            match analyzer.analyze_frame(&frame, sample_rate) {
                Ok(result) => {
                    if results.send(result).is_err() {
                        log::debug!("result receiver dropped, stopping analysis worker");
                        break;
                    }
                }
                Err(err) => log::warn!("skipping malformed frame: {err}"),
            }
        }
    });
    Ok(handle)
}
