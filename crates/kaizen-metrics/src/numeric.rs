//! Numeric cell parsing for the coercion policy.

/// Parse a cell's text as a finite f64.
///
/// Handles the formats that show up in hand-edited tables:
/// - Standard numbers: "123", "-45.67"
/// - Thousands separators: "1,234,567"
/// - Stray whitespace: "  123  "
/// - Scientific notation: "1.23e5"
///
/// Returns `None` for anything that does not parse to a finite number;
/// `nan`/`inf` spellings are deliberately rejected so the canonical tables
/// only ever hold finite values.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    // Remove thousands separators and whitespace
    let cleaned = trimmed
        .replace(',', "")
        .replace(' ', "")
        .replace('\u{a0}', ""); // Non-breaking space

    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}
