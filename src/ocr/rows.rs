//! Rebuilds visual text rows from positioned OCR fragments.
//!
//! OCR engines report each text run separately and not in reading order. On a
//! nutrition label the nutrient name and its value are often far apart on the
//! same row, so fragments are grouped by approximate vertical position and
//! joined left-to-right.

use tracing::trace;

use super::TextFragment;

/// Groups fragments into rows, top of the label first.
///
/// Greedy single pass over the fragments sorted top to bottom: a fragment
/// joins the current row when it is within `threshold` of the row's anchor
/// (the first fragment placed in it), otherwise it starts a new row. Rows are
/// never merged or revisited.
pub fn reconstruct_rows(fragments: &[TextFragment], threshold: f32) -> Vec<String> {
    let mut sorted: Vec<&TextFragment> = fragments.iter().collect();
    sorted.sort_by(|a, b| b.vertical_center.total_cmp(&a.vertical_center));

    let mut rows: Vec<Vec<&TextFragment>> = Vec::new();
    let mut anchor_y: Option<f32> = None;

    for fragment in sorted {
        match (anchor_y, rows.last_mut()) {
            (Some(y), Some(row)) if (fragment.vertical_center - y).abs() < threshold => {
                row.push(fragment);
            }
            _ => {
                anchor_y = Some(fragment.vertical_center);
                rows.push(vec![fragment]);
            }
        }
    }

    let lines: Vec<String> = rows
        .into_iter()
        .map(|mut row| {
            row.sort_by(|a, b| a.horizontal_start.total_cmp(&b.horizontal_start));
            row.iter()
                .map(|f| f.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    trace!("Reconstructed {} rows from {} fragments: {:?}", lines.len(), fragments.len(), lines);

    lines
}
