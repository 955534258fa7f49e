//! Nutrition label gate.

/// Substrings that mark a nutrition label header, including a common OCR
/// misread of "i" as "l". The bare "nutrition" catches headers split across rows.
const LABEL_MARKERS: [&str; 3] = ["nutritionfacts", "nutritlonfacts", "nutrition"];

/// Returns true if any row looks like part of a nutrition label header.
///
/// Deliberately permissive: a false positive only costs an extraction attempt
/// that finds nothing, while a false negative drops a real label.
pub fn is_nutrition_label(lines: &[String]) -> bool {
    lines.iter().any(|line| {
        let normalized: String = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        LABEL_MARKERS.iter().any(|marker| normalized.contains(marker))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_header_present() {
        assert!(is_nutrition_label(&lines(&["Nutrition Facts", "Calories 100"])));
    }

    #[test]
    fn test_no_header() {
        assert!(!is_nutrition_label(&lines(&["Total Fat 10g"])));
        assert!(!is_nutrition_label(&[]));
    }

    #[test]
    fn test_ocr_misread_header() {
        assert!(is_nutrition_label(&lines(&["NutritlonFacts"])));
        assert!(is_nutrition_label(&lines(&["NUTRITION   FACTS"])));
    }

    #[test]
    fn test_bare_nutrition() {
        assert!(is_nutrition_label(&lines(&["Calories 200", "Nutrition"])));
    }
}
