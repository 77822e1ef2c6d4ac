//! Normalization of raw form input
//!
//! Nothing here fails: malformed input degrades to "no value" and the rest of
//! the entity stays committable.

/// Trim a free-text field
pub fn text(raw: &str) -> String {
    raw.trim().to_string()
}

/// Trim an optional text field; blank means unset
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Finite, positive number from a numeric input
fn positive_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

/// Round to a pixel count; values rounding to zero are rejected
fn to_pixels(n: f64) -> Option<u32> {
    let rounded = n.round();
    if rounded < 1.0 {
        None
    } else {
        Some(rounded.min(u32::MAX as f64) as u32)
    }
}

/// Parse a sticker size input; `None` keeps the previous size
pub fn sticker_size(raw: &str) -> Option<u32> {
    positive_number(raw).and_then(to_pixels)
}

/// Normalize a per-map size override against the icon's base size
///
/// Blank, unparsable, non-finite, non-positive, or base-equal input all mean
/// "no override".
pub fn size_override(raw: &str, base_size: u32) -> Option<u32> {
    let n = positive_number(raw)?;
    if (n - f64::from(base_size)).abs() < 0.0001 {
        return None;
    }
    to_pixels(n)
}

/// Whether a stored override should be shown in the input at all
pub fn shows_override(override_size: Option<u32>, base_size: u32) -> bool {
    matches!(override_size, Some(n) if n > 0 && n != base_size)
}
