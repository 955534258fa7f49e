//! Nutrition readings and what is derived from them.
//!
//! This module provides:
//! - The validated (calories, protein) [`Reading`] and its protein ratio
//! - Median smoothing across recent passes
//! - The qualitative rating tier for a ratio

pub mod rating;
pub mod smoothing;

pub use rating::RatingTier;
pub use smoothing::TemporalSmoother;

use serde::Serialize;
use std::ops::Range;

use crate::ocr::extract::PROTEIN_RANGE;

/// Calories a reading may carry. Zero is never a valid label value.
const READING_CALORIES: Range<u32> = 1..10_000;

/// One committed (calories, protein) pair read off a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub calories: u32,
    pub protein: u32,
}

impl Reading {
    /// Builds a reading if both values are within label bounds
    /// (calories in 1..10000, protein in 0..1000).
    pub fn new(calories: u32, protein: u32) -> Option<Self> {
        if READING_CALORIES.contains(&calories) && PROTEIN_RANGE.contains(&protein) {
            Some(Self { calories, protein })
        } else {
            None
        }
    }

    /// Grams of protein per 100 kcal. Zero when either value is zero.
    pub fn ratio(&self) -> f64 {
        if self.protein > 0 && self.calories > 0 {
            self.protein as f64 / self.calories as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn tier(&self) -> RatingTier {
        RatingTier::from_ratio(self.ratio())
    }
}
