//! Label text interpretation.
//!
//! One OCR pass produces a loose set of positioned text fragments. This module
//! rebuilds them into visual rows, checks that the rows look like a nutrition
//! label, and pulls the calorie and protein values out of them.

pub mod extract;
pub mod rows;
pub mod validate;

pub use extract::{extract_calories, extract_protein};
pub use rows::reconstruct_rows;
pub use validate::is_nutrition_label;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CoordinateOrigin, ScanConfig};
use crate::nutrition::Reading;

/// A rectangle in normalized coordinates (0.0 to 1.0) relative to the scanned region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    /// Left edge
    pub x: f32,
    /// Edge nearest the coordinate origin (bottom for bottom-left, top for top-left)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One OCR-detected run of text with its position.
///
/// `vertical_center` always grows upward: 1.0 is the top of the scanned region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub vertical_center: f32,
    pub horizontal_start: f32,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, vertical_center: f32, horizontal_start: f32) -> Self {
        Self {
            text: text.into(),
            vertical_center,
            horizontal_start,
        }
    }

    /// Builds a fragment from an OCR bounding box, normalizing the vertical axis
    /// so that larger values are higher on the label.
    pub fn from_rect(
        text: impl Into<String>,
        rect: NormalizedRect,
        origin: CoordinateOrigin,
    ) -> Self {
        let center = rect.y + rect.height / 2.0;
        let vertical_center = match origin {
            CoordinateOrigin::BottomLeft => center,
            CoordinateOrigin::TopLeft => 1.0 - center,
        };
        Self::new(text, vertical_center, rect.x)
    }
}

/// A text run as reported by the OCR engine, before position normalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OcrRecord {
    pub text: String,
    pub bounds: NormalizedRect,
}

impl OcrRecord {
    pub fn new(text: impl Into<String>, bounds: NormalizedRect) -> Self {
        Self {
            text: text.into(),
            bounds,
        }
    }

    pub fn to_fragment(&self, origin: CoordinateOrigin) -> TextFragment {
        TextFragment::from_rect(self.text.clone(), self.bounds, origin)
    }
}

/// Converts a pass of OCR records into fragments using the given origin.
pub fn fragments_from_records(
    records: &[OcrRecord],
    origin: CoordinateOrigin,
) -> Vec<TextFragment> {
    records.iter().map(|r| r.to_fragment(origin)).collect()
}

/// Runs the stateless part of a pass: rows → label gate → field extraction.
///
/// Returns `None` whenever the label is not (yet) readable; that is the normal
/// outcome for most frames, not an error.
pub fn read_label(fragments: &[TextFragment], config: &ScanConfig) -> Option<Reading> {
    let lines = reconstruct_rows(fragments, config.row_threshold);

    if !is_nutrition_label(&lines) {
        debug!("No nutrition label among {} rows", lines.len());
        return None;
    }

    let calories = extract_calories(&lines);
    let protein = extract_protein(&lines);
    debug!("Extracted calories={:?} protein={:?}", calories, protein);

    Reading::new(calories?, protein?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str, y: f32, x: f32) -> TextFragment {
        TextFragment::new(text, y, x)
    }

    #[test]
    fn test_from_rect_bottom_left() {
        let rect = NormalizedRect {
            x: 0.1,
            y: 0.6,
            width: 0.3,
            height: 0.04,
        };
        let f = TextFragment::from_rect("Protein", rect, CoordinateOrigin::BottomLeft);
        assert!((f.vertical_center - 0.62).abs() < 1e-6);
        assert!((f.horizontal_start - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_from_rect_top_left_flips() {
        let rect = NormalizedRect {
            x: 0.1,
            y: 0.2,
            width: 0.3,
            height: 0.04,
        };
        let f = TextFragment::from_rect("Protein", rect, CoordinateOrigin::TopLeft);
        assert!((f.vertical_center - 0.78).abs() < 1e-6);
    }

    #[test]
    fn test_fragments_from_records_uses_origin() {
        let records = vec![OcrRecord::new(
            "Calories",
            NormalizedRect {
                x: 0.2,
                y: 0.1,
                width: 0.3,
                height: 0.02,
            },
        )];

        let top_left = fragments_from_records(&records, CoordinateOrigin::TopLeft);
        let bottom_left = fragments_from_records(&records, CoordinateOrigin::BottomLeft);
        assert!((top_left[0].vertical_center - 0.89).abs() < 1e-6);
        assert!((bottom_left[0].vertical_center - 0.11).abs() < 1e-6);
        assert_eq!(top_left[0].text, "Calories");
    }

    #[test]
    fn test_read_label_scattered_fragments() {
        // Fragments arrive out of spatial order, value and label split apart
        let fragments = vec![
            fragment("20g", 0.40, 0.8),
            fragment("Calories", 0.60, 0.1),
            fragment("Nutrition Facts", 0.90, 0.1),
            fragment("Protein", 0.405, 0.1),
            fragment("140", 0.605, 0.7),
        ];

        let reading = read_label(&fragments, &ScanConfig::default()).unwrap();
        assert_eq!(reading.calories, 140);
        assert_eq!(reading.protein, 20);
    }

    #[test]
    fn test_read_label_requires_header() {
        let fragments = vec![
            fragment("Calories 140", 0.6, 0.1),
            fragment("Protein 20g", 0.4, 0.1),
        ];
        assert!(read_label(&fragments, &ScanConfig::default()).is_none());
    }

    #[test]
    fn test_read_label_partial_extraction_is_none() {
        let fragments = vec![
            fragment("Nutrition Facts", 0.9, 0.1),
            fragment("Calories 140", 0.6, 0.1),
        ];
        assert!(read_label(&fragments, &ScanConfig::default()).is_none());
    }

    #[test]
    fn test_read_label_empty_pass() {
        assert!(read_label(&[], &ScanConfig::default()).is_none());
    }
}
