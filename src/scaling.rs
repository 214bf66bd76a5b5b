//! # Scaling Module
//!
//! Scales ingredient lines from one serving count to another.

use crate::ingredient_model::ParsedIngredientLine;
use crate::ingredient_parser::parse_ingredient_line;
use log::debug;

/// Ratio between two serving counts
///
/// Returns `None` when either count is not a positive finite number or both
/// are equal, in which case no scaling should happen.
pub fn scale_factor(original_servings: f64, new_servings: f64) -> Option<f64> {
    if !original_servings.is_finite() || !new_servings.is_finite() {
        return None;
    }
    if original_servings <= 0.0 || new_servings <= 0.0 || original_servings == new_servings {
        return None;
    }
    Some(new_servings / original_servings)
}

/// Multiply a parsed line's quantity by `factor`
///
/// A line without a quantity is returned unchanged.
pub fn scale_line(parsed: &ParsedIngredientLine, factor: f64) -> ParsedIngredientLine {
    ParsedIngredientLine {
        quantity: parsed.quantity.map(|quantity| quantity * factor),
        ..parsed.clone()
    }
}

/// Scale raw ingredient lines from `original_servings` to `new_servings`
///
/// Lines with a quantity are re-rendered as "<quantity> <unit> <name>"; lines
/// without one pass through untouched. Non-positive or equal serving counts
/// return the input as is.
///
/// # Examples
///
/// ```rust
/// use mealprep::scaling::scale_ingredients;
///
/// let scaled = scale_ingredients(&["2 cups flour", "Salt to taste"], 2.0, 4.0);
/// assert_eq!(scaled, vec!["4 cups flour", "Salt to taste"]);
/// ```
pub fn scale_ingredients<S: AsRef<str>>(
    lines: &[S],
    original_servings: f64,
    new_servings: f64,
) -> Vec<String> {
    let Some(factor) = scale_factor(original_servings, new_servings) else {
        debug!(
            "Skipping scaling from {} to {} servings",
            original_servings, new_servings
        );
        return lines.iter().map(|line| line.as_ref().to_string()).collect();
    };

    debug!(
        "Scaling {} lines from {} to {} servings (factor {})",
        lines.len(),
        original_servings,
        new_servings,
        factor
    );

    lines
        .iter()
        .map(|line| {
            let parsed = parse_ingredient_line(line.as_ref());
            if parsed.has_quantity() {
                scale_line(&parsed, factor).to_string()
            } else {
                line.as_ref().to_string()
            }
        })
        .collect()
}
