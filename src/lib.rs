//! Protein Lens
//!
//! Turns the text fragments of a camera OCR pass over a nutrition label into a
//! stabilized (calories, protein) reading and a protein-per-100-kcal rating.
//!
//! The capture side (camera, throttling, display fade) lives in the host. Each
//! pass hands this crate a set of [`TextFragment`]s and gets back either a
//! [`ScanResult`] or nothing.

pub mod config;
pub mod logging;
pub mod nutrition;
pub mod ocr;
pub mod scanner;

pub use config::{CoordinateOrigin, ScanConfig};
pub use nutrition::{RatingTier, Reading, TemporalSmoother};
pub use ocr::{NormalizedRect, OcrRecord, TextFragment};
pub use scanner::{LabelScanner, ScanResult, SharedScanner};
