//! Per-pass scanning.
//!
//! This module provides:
//! - [`LabelScanner`], which runs one OCR pass through interpretation and smoothing
//! - [`SharedScanner`], a lock-guarded handle for hosts that run passes from several threads
//! - A single-consumer work queue and worker loop as the alternative to locking

pub mod queue;
pub mod worker;

pub use queue::{create_work_queue, ScanCommand, ScanWorkItem};
pub use worker::run_scan_worker;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::config::ScanConfig;
use crate::nutrition::{RatingTier, Reading, TemporalSmoother};
use crate::ocr::{fragments_from_records, read_label, OcrRecord, TextFragment};

/// What one successful pass hands to the display side.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Smoothed reading to display
    pub reading: Reading,
    /// Reading extracted from this pass alone
    pub raw: Reading,
    /// Grams of protein per 100 kcal of the smoothed reading
    pub ratio: f64,
    pub tier: RatingTier,
    /// When the pass completed; drives the display's expiry timer
    pub captured_at: DateTime<Local>,
}

impl ScanResult {
    fn new(reading: Reading, raw: Reading) -> Self {
        Self {
            reading,
            raw,
            ratio: reading.ratio(),
            tier: reading.tier(),
            captured_at: Local::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize scan result to JSON")
    }
}

/// Runs OCR passes through the interpretation pipeline and the smoother.
///
/// Not synchronized: passes must not overlap. Use [`SharedScanner`] or the work
/// queue when they might.
#[derive(Debug, Clone)]
pub struct LabelScanner {
    config: ScanConfig,
    smoother: TemporalSmoother,
}

impl Default for LabelScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

impl LabelScanner {
    pub fn new(config: ScanConfig) -> Self {
        let smoother = TemporalSmoother::new(config.history_capacity, config.min_history);
        Self { config, smoother }
    }

    /// Creates a scanner from a config file, using defaults if it can't be loaded.
    pub fn from_config_file(path: &Path) -> Self {
        Self::new(ScanConfig::load_or_default(path))
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Reads a label from one pass without touching the smoothing history.
    pub fn interpret(&self, fragments: &[TextFragment]) -> Option<Reading> {
        read_label(fragments, &self.config)
    }

    /// Runs one full pass. `None` means the label is not readable in this pass;
    /// the history is left untouched in that case.
    pub fn process_pass(&mut self, fragments: &[TextFragment]) -> Option<ScanResult> {
        let raw = self.interpret(fragments)?;
        let reading = self.smoother.push(raw);
        let result = ScanResult::new(reading, raw);

        debug!(
            "Pass accepted: {} kcal, {} g protein, ratio {:.2} ({})",
            reading.calories, reading.protein, result.ratio, result.tier
        );
        Some(result)
    }

    /// Runs one full pass from raw OCR records, normalizing their bounding
    /// boxes with the configured coordinate origin.
    pub fn process_records(&mut self, records: &[OcrRecord]) -> Option<ScanResult> {
        let fragments = fragments_from_records(records, self.config.origin);
        self.process_pass(&fragments)
    }

    /// Clears the smoothing history, e.g. when the display expires a reading.
    pub fn reset(&mut self) {
        debug!("Scanner history reset ({} readings dropped)", self.smoother.len());
        self.smoother.reset();
    }

    pub fn history_len(&self) -> usize {
        self.smoother.len()
    }
}

/// A [`LabelScanner`] behind a mutex, cloneable across threads.
#[derive(Debug, Clone, Default)]
pub struct SharedScanner {
    inner: Arc<Mutex<LabelScanner>>,
}

impl SharedScanner {
    pub fn new(scanner: LabelScanner) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scanner)),
        }
    }

    /// A panic in another pass can't leave the history half-updated, so a
    /// poisoned lock is simply taken over.
    fn lock(&self) -> MutexGuard<'_, LabelScanner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn process_pass(&self, fragments: &[TextFragment]) -> Option<ScanResult> {
        self.lock().process_pass(fragments)
    }

    pub fn process_records(&self, records: &[OcrRecord]) -> Option<ScanResult> {
        self.lock().process_records(records)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn history_len(&self) -> usize {
        self.lock().history_len()
    }
}
