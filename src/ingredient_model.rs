//! # Ingredient Data Model
//!
//! This module defines the structured form of a single ingredient line as
//! extracted from recipe text.
//!
//! ## Usage
//!
//! ```rust
//! use mealprep::ingredient_model::ParsedIngredientLine;
//!
//! let line = ParsedIngredientLine::new("2 cups flour")
//!     .with_quantity(2.0)
//!     .with_unit("cups")
//!     .with_name("flour");
//!
//! assert_eq!(line.to_string(), "2 cups flour");
//! ```

use crate::quantity::format_quantity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredientLine {
    /// Leading quantity, if the line had one (e.g. 2.0 for "2 cups flour")
    pub quantity: Option<f64>,

    /// Unit as written in the source, punctuation stripped (e.g. "cups", "EL")
    pub unit: Option<String>,

    /// Ingredient name, trimmed (e.g. "flour", "Salt to taste")
    pub name: String,

    /// The raw input line, untouched
    pub original: String,
}

impl ParsedIngredientLine {
    /// Create an empty parse result for a raw line
    pub fn new(original: &str) -> Self {
        Self {
            quantity: None,
            unit: None,
            name: String::new(),
            original: original.to_string(),
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Check if this line carries a quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }
}

impl fmt::Display for ParsedIngredientLine {
    /// Renders "<quantity> <unit> <name>", skipping absent parts.
    ///
    /// Lines without a quantity render their original text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(quantity) = self.quantity else {
            return write!(f, "{}", self.original);
        };

        write!(f, "{}", format_quantity(quantity))?;
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit)?;
        }
        if !self.name.is_empty() {
            write!(f, " {}", self.name)?;
        }
        Ok(())
    }
}
