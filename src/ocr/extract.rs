use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::debug;

/// The word "calorie(s)" with the letter/digit confusions OCR commonly makes
/// (a/4, l/1/i/|, o/0, e/3, s/5). Must not touch another letter on either
/// side, so it never matches inside a longer word, but a glued-on number is
/// fine ("Calories140", "140Calories").
const CALORIES_PATTERN: &str =
    r"(?i)(?:^|[^a-zA-Z])c[a4][l1i|][o0]r[i1l|][e3][s5]?(?:[^a-zA-Z]|$)";

/// "Protein" (o/0, e/3, i/1/l/| tolerant), optional whitespace, the value,
/// optional whitespace and an optional unit letter.
const PROTEIN_PATTERN: &str = r"(?i)\bpr[o0]t[e3][i1l|]n\s*([0-9]+)\s*[a-z]?";

/// A comma-grouped number ("1,200") or any other run of ASCII digits.
const INTEGER_PATTERN: &str = r"[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+";

/// Plausible calorie values. Anything below 50 on the calories row is a
/// gram/percent value or OCR debris.
pub const CALORIE_RANGE: Range<u32> = 50..10_000;

/// Plausible protein values in grams.
pub const PROTEIN_RANGE: Range<u32> = 0..1_000;

static CALORIES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CALORIES_PATTERN).expect("calories pattern is valid"));
static PROTEIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PROTEIN_PATTERN).expect("protein pattern is valid"));
static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INTEGER_PATTERN).expect("integer pattern is valid"));

/// Returns every integer in the line, left to right, with thousands
/// separators removed. Digit runs too long for a `u32` are skipped.
fn integers(line: &str) -> impl Iterator<Item = u32> + '_ {
    INTEGER_RE.find_iter(line).filter_map(|m| {
        let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse::<u32>().ok()
    })
}

/// Returns true if the line contains the word "calories" (OCR tolerant).
pub fn mentions_calories(line: &str) -> bool {
    CALORIES_RE.is_match(line)
}

/// Extracts the calorie value from reconstructed label rows.
///
/// For each row mentioning "calories", in order:
/// - Pass 1: first in-range number on the same row. The row may carry other
///   nutrients too ("Calories Trans Fat 0g Cholesterol 50mg"), so every number
///   on it is considered, not just the one next to the word.
/// - Pass 2: largest in-range number on the row above. An "Amount per serving"
///   row often holds a serving count next to the calorie figure, and the
///   calorie figure is the larger of the two.
/// - Pass 3: largest in-range number on the row below.
///
/// Returns `None` if no row mentions calories or none of them yields a value.
pub fn extract_calories(lines: &[String]) -> Option<u32> {
    for (idx, line) in lines.iter().enumerate() {
        if !mentions_calories(line) {
            continue;
        }

        if let Some(value) = integers(line).find(|v| CALORIE_RANGE.contains(v)) {
            debug!("Calories {} found on row {}: {:?}", value, idx, line);
            return Some(value);
        }

        let previous = idx.checked_sub(1).and_then(|i| lines.get(i));
        if let Some(value) = previous.and_then(|l| max_in_range(l, &CALORIE_RANGE)) {
            debug!("Calories {} found on row above {:?}", value, line);
            return Some(value);
        }

        if let Some(value) = lines.get(idx + 1).and_then(|l| max_in_range(l, &CALORIE_RANGE)) {
            debug!("Calories {} found on row below {:?}", value, line);
            return Some(value);
        }

        debug!("Row {} mentions calories but has no value nearby: {:?}", idx, line);
    }

    None
}

/// Extracts the protein value: the first "Protein <n>" match in document order
/// whose value is in range. Protein values always sit next to their label, so
/// there is no neighbouring-row fallback.
pub fn extract_protein(lines: &[String]) -> Option<u32> {
    let value = lines
        .iter()
        .flat_map(|line| PROTEIN_RE.captures_iter(line))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .find(|v| PROTEIN_RANGE.contains(v));

    if let Some(v) = value {
        debug!("Protein {} found", v);
    }
    value
}

fn max_in_range(line: &str, range: &Range<u32>) -> Option<u32> {
    integers(line).filter(|v| range.contains(v)).max()
}
