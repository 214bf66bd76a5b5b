//! # Ingredient Parser
//!
//! This module turns raw ingredient lines into structured
//! [`ParsedIngredientLine`] values.
//!
//! ## Features
//!
//! - Leading quantities as integers, decimals, fractions (1/2), mixed numbers
//!   (1 1/2, 1-1/2) and vulgar fraction glyphs (½, 1½)
//! - Unit recognition against the closed unit vocabulary (English, French, German)
//! - Lines without a quantity ("Salt to taste") keep their whole text as the name
//!
//! ## Usage
//!
//! ```rust
//! use mealprep::ingredient_parser::parse_ingredient_list;
//!
//! let text = "2 cups flour\n1 tbsp salt\n1/2 tsp pepper";
//! let parsed = parse_ingredient_list(text);
//!
//! assert_eq!(parsed.len(), 3);
//! assert_eq!(parsed[2].name, "pepper");
//! ```

use crate::ingredient_model::ParsedIngredientLine;
use crate::quantity::{glyph_class, parse_quantity};
use crate::unit_vocabulary::is_unit;
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

/// Leading quantity token patterns, tried in order
static QUANTITY_TOKENS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        // "½", "1½", "1 ½", "1-½"
        Regex::new(&format!(r"^(?:\d+\s*-?\s*)?{}", glyph_class())).unwrap(),
        // "1 1/2", "1-1/2", "1/2", "2.5", "2"
        Regex::new(r"^(?:(?:\d+[ \-])?\d+/\d+|\d+(?:\.\d+)?)").unwrap(),
    ]
});

/// Filler word dropped from the front of a name ("2 cups of flour")
const FILLER_PREFIX: &str = "of ";

/// Parse a multi-line block of ingredients, skipping blank lines
pub fn parse_ingredient_list(text: &str) -> Vec<ParsedIngredientLine> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_ingredient_line)
        .collect()
}

/// Parse a single ingredient line
///
/// Never fails: text without a recognizable quantity becomes the name, and an
/// empty line yields an empty name.
///
/// # Examples
///
/// ```rust
/// use mealprep::ingredient_parser::parse_ingredient_line;
///
/// let line = parse_ingredient_line("2 cups flour");
/// assert_eq!(line.quantity, Some(2.0));
/// assert_eq!(line.unit.as_deref(), Some("cups"));
/// assert_eq!(line.name, "flour");
///
/// let line = parse_ingredient_line("Salt to taste");
/// assert_eq!(line.quantity, None);
/// assert_eq!(line.name, "Salt to taste");
/// ```
pub fn parse_ingredient_line(raw: &str) -> ParsedIngredientLine {
    let line = raw.trim();
    if line.is_empty() {
        return ParsedIngredientLine::new(raw);
    }

    let Some((quantity, remainder)) = split_quantity(line) else {
        trace!("No quantity token in '{}'", line);
        return ParsedIngredientLine::new(raw).with_name(line);
    };

    let (unit, name) = split_unit(remainder);
    let mut parsed = ParsedIngredientLine::new(raw)
        .with_quantity(quantity)
        .with_name(strip_filler(name));
    if let Some(unit) = unit {
        parsed = parsed.with_unit(unit);
    }

    trace!(
        "Parsed '{}' -> quantity={:?}, unit={:?}, name='{}'",
        raw,
        parsed.quantity,
        parsed.unit,
        parsed.name
    );
    parsed
}

/// Split a leading quantity token off the line
///
/// Returns the quantity value and the trimmed remainder.
fn split_quantity(line: &str) -> Option<(f64, &str)> {
    let token = QUANTITY_TOKENS.iter().find_map(|pattern| pattern.find(line))?;

    match parse_quantity(token.as_str()) {
        Some(quantity) => Some((quantity, line[token.end()..].trim())),
        None => {
            debug!(
                "Quantity token '{}' in '{}' has no value, keeping the line as a name",
                token.as_str(),
                line
            );
            None
        }
    }
}

/// Split a unit word off the front of the remainder, if it is a known unit
fn split_unit(remainder: &str) -> (Option<&str>, &str) {
    let (first, rest) = match remainder.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (remainder, ""),
    };

    let word = first.trim_end_matches(['.', ',']);
    if !word.is_empty() && is_unit(word) {
        (Some(word), rest)
    } else {
        (None, remainder)
    }
}

fn strip_filler(name: &str) -> &str {
    match name.get(..FILLER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(FILLER_PREFIX) => {
            name[FILLER_PREFIX.len()..].trim_start()
        }
        _ => name,
    }
}
