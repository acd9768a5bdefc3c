//! Deterministic text-width estimation.
//!
//! Layout math must work headless, so widths are estimated from per-glyph
//! ratios of the font size rather than measured through a font stack.
//! Backends with real metrics (Pango) still align their own output; the
//! estimate only drives label-column sizing and ellipsizing.

const ELLIPSIS: char = '\u{2026}';

fn glyph_width_ratio(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | 't' | 'f' | 'r' | '.' | ',' | ':' | ';' | '!' | '\'' | '|' | ' ' => 0.32,
        'm' | 'w' | 'M' | 'W' | '@' | ELLIPSIS => 0.85,
        'A'..='Z' | '0'..='9' => 0.66,
        _ => 0.58,
    }
}

/// Estimated pixel width of `text` at `font_size_px`.
#[must_use]
pub fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars()
        .map(|ch| glyph_width_ratio(ch) * font_size_px)
        .sum()
}

/// Compact numeric label: integers without decimals, otherwise one decimal.
#[must_use]
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Truncates `text` with a trailing ellipsis so it fits `max_width_px`.
///
/// Returns the input unchanged when it already fits. When not even the
/// ellipsis fits, returns an empty string so callers skip the label.
#[must_use]
pub fn ellipsize(text: &str, max_width_px: f64, font_size_px: f64) -> String {
    if !max_width_px.is_finite() || max_width_px <= 0.0 {
        return String::new();
    }
    if estimate_text_width(text, font_size_px) <= max_width_px {
        return text.to_owned();
    }

    let ellipsis_width = glyph_width_ratio(ELLIPSIS) * font_size_px;
    if ellipsis_width > max_width_px {
        return String::new();
    }

    let mut kept = String::new();
    let mut used = ellipsis_width;
    for ch in text.chars() {
        let width = glyph_width_ratio(ch) * font_size_px;
        if used + width > max_width_px {
            break;
        }
        used += width;
        kept.push(ch);
    }

    kept.push(ELLIPSIS);
    kept
}
