//! # Quantity Module
//!
//! Parsing of free-text quantities ("2", "1.5", "1/2", "1 1/2", "1-1/2", "½")
//! into numbers, and formatting numbers back into fraction-aware display text.
//!
//! A missing quantity is a normal outcome and is represented by `None`.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Vulgar fraction glyphs and their ASCII equivalents
pub const FRACTION_GLYPHS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// Canonical display fractions, keyed by the remainder in hundredths
const DISPLAY_FRACTIONS: &[(i64, &str)] = &[
    (25, "1/4"),
    (33, "1/3"),
    (50, "1/2"),
    (67, "2/3"),
    (75, "3/4"),
];

lazy_static! {
    static ref DECIMAL: Regex = Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)$").unwrap();
    static ref MIXED_NUMBER: Regex = Regex::new(r"^(\d+)(?:\s+|\s*-\s*)(\d+)/(\d+)$").unwrap();
}

/// Regex character class matching any vulgar fraction glyph
pub(crate) fn glyph_class() -> String {
    let glyphs: String = FRACTION_GLYPHS.iter().map(|(glyph, _)| *glyph).collect();
    format!("[{}]", glyphs)
}

/// Replace every vulgar fraction glyph with a space and its ASCII form
pub(crate) fn expand_fraction_glyphs(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match FRACTION_GLYPHS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => {
                expanded.push(' ');
                expanded.push_str(ascii);
            }
            None => expanded.push(c),
        }
    }
    expanded
}

fn parse_decimal(text: &str) -> Option<f64> {
    if DECIMAL.is_match(text) {
        text.parse().ok()
    } else {
        None
    }
}

/// Whole part as text, without the `i64` range limit
fn format_whole(whole: f64) -> String {
    if whole == 0.0 {
        "0".to_string()
    } else {
        format!("{:.0}", whole)
    }
}

fn divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Parse a quantity string into a number
///
/// Supports integers, decimals, simple fractions, mixed numbers separated by a
/// space or hyphen, and vulgar fraction glyphs. Returns `None` when the text
/// holds no quantity, or when a fraction has a zero denominator.
///
/// # Examples
///
/// ```rust
/// use mealprep::quantity::parse_quantity;
///
/// assert_eq!(parse_quantity("2"), Some(2.0));
/// assert_eq!(parse_quantity("1 1/2"), Some(1.5));
/// assert_eq!(parse_quantity("1½"), Some(1.5));
/// assert_eq!(parse_quantity("to taste"), None);
/// ```
pub fn parse_quantity(text: &str) -> Option<f64> {
    let expanded = expand_fraction_glyphs(text);
    let text = expanded.trim();

    if let Some(value) = parse_decimal(text) {
        return Some(value);
    }

    if text.matches('/').count() == 1 && !text.contains(' ') {
        if let Some((numerator, denominator)) = text.split_once('/') {
            if let (Some(numerator), Some(denominator)) =
                (parse_decimal(numerator), parse_decimal(denominator))
            {
                return divide(numerator, denominator);
            }
        }
    }

    if let Some(captures) = MIXED_NUMBER.captures(text) {
        let whole: f64 = captures[1].parse().ok()?;
        let numerator: f64 = captures[2].parse().ok()?;
        let denominator: f64 = captures[3].parse().ok()?;
        return divide(numerator, denominator).map(|fraction| whole + fraction);
    }

    trace!("No quantity in '{}'", text);
    None
}

/// Format a quantity for display
///
/// Whole numbers print without a decimal point, common fractions print as
/// "1/4", "1/3", "1/2", "2/3" or "3/4" (with a leading whole part when there
/// is one), and everything else prints with at most two decimals.
///
/// # Examples
///
/// ```rust
/// use mealprep::quantity::format_quantity;
///
/// assert_eq!(format_quantity(2.0), "2");
/// assert_eq!(format_quantity(1.5), "1 1/2");
/// assert_eq!(format_quantity(0.25), "1/4");
/// assert_eq!(format_quantity(1.2), "1.2");
/// ```
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let whole = value.trunc();
    if value == whole {
        return format_whole(whole);
    }

    let hundredths = ((value - whole) * 100.0).round() as i64;
    if let Some((_, fraction)) = DISPLAY_FRACTIONS.iter().find(|(h, _)| *h == hundredths) {
        return if whole == 0.0 {
            fraction.to_string()
        } else {
            format!("{} {}", format_whole(whole), fraction)
        };
    }

    let decimal = format!("{:.2}", value);
    decimal
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers_and_decimals() {
        assert_eq!(parse_quantity("2"), Some(2.0));
        assert_eq!(parse_quantity(" 2.5 "), Some(2.5));
        assert_eq!(parse_quantity(".5"), Some(0.5));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_quantity("inf"), None);
        assert_eq!(parse_quantity("NaN"), None);
        assert_eq!(parse_quantity("1e3"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("Salt to taste"), None);
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(parse_quantity("1/2"), Some(0.5));
        assert_eq!(parse_quantity("3/4"), Some(0.75));
        assert_eq!(parse_quantity("1/0"), None);
    }

    #[test]
    fn test_parse_mixed_numbers() {
        assert_eq!(parse_quantity("1 1/2"), Some(1.5));
        assert_eq!(parse_quantity("2-1/4"), Some(2.25));
        assert_eq!(parse_quantity("2 1/0"), None);
    }

    #[test]
    fn test_parse_separated_glyphs() {
        assert_eq!(parse_quantity("1 ½"), Some(1.5));
        assert_eq!(parse_quantity("1-½"), Some(1.5));
        assert_eq!(parse_quantity("2 - ¼"), Some(2.25));
    }

    #[test]
    fn test_parse_glyphs() {
        assert_eq!(parse_quantity("½"), Some(0.5));
        assert_eq!(parse_quantity("1½"), Some(1.5));
        assert_eq!(parse_quantity("2¾"), Some(2.75));
        assert_eq!(parse_quantity("⅛"), Some(0.125));
    }

    #[test]
    fn test_expand_fraction_glyphs() {
        assert_eq!(expand_fraction_glyphs("1½"), "1 1/2");
        assert_eq!(expand_fraction_glyphs("no glyph"), "no glyph");
    }

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(-3.0), "-3");
        assert_eq!(format_quantity(-0.0), "0");
    }

    #[test]
    fn test_format_beyond_integer_range() {
        assert_eq!(format_quantity(1e20), "100000000000000000000");
        assert_eq!(format_quantity(-1e19), "-10000000000000000000");
    }

    #[test]
    fn test_glyph_class_covers_table() {
        let class = Regex::new(&glyph_class()).unwrap();
        for (glyph, _) in FRACTION_GLYPHS {
            assert!(class.is_match(&glyph.to_string()), "{} not in class", glyph);
        }
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_quantity(1.5), "1 1/2");
        assert_eq!(format_quantity(0.5), "1/2");
        assert_eq!(format_quantity(1.0 / 3.0), "1/3");
        assert_eq!(format_quantity(2.0 + 2.0 / 3.0), "2 2/3");
        assert_eq!(format_quantity(0.75), "3/4");
    }

    #[test]
    fn test_format_decimals() {
        assert_eq!(format_quantity(1.2), "1.2");
        assert_eq!(format_quantity(1.234), "1.23");
        assert_eq!(format_quantity(0.1), "0.1");
        assert_eq!(format_quantity(2.999), "3");
        assert_eq!(format_quantity(2.001), "2");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_quantity(f64::INFINITY), "inf");
        assert_eq!(format_quantity(f64::NAN), "NaN");
    }
}
