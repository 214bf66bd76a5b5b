//! # Meal Plan Module
//!
//! Dated recipe entries, as handed over by the meal plan store, and the
//! selection of the `(recipe label, ingredient lines)` pairs that feed the
//! grocery list for a date range.
//!
//! ## Document format
//!
//! ```json
//! {
//!   "entries": [
//!     {
//!       "date": "2024-05-06",
//!       "servings": 4,
//!       "recipe": {
//!         "label": "Pancakes",
//!         "servings": 2,
//!         "ingredients": ["2 cups flour", "2 eggs"],
//!         "instructions": ["Whisk everything", "Fry"]
//!       }
//!     }
//!   ]
//! }
//! ```

use crate::error::PlannerError;
use crate::grocery_list::{build_grocery_list, GroceryList};
use crate::instruction_parser::{parse_instructions, InstructionEntry};
use crate::scaling::scale_ingredients;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A recipe as stored by the recipe service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeInput {
    pub label: String,
    /// Servings the ingredient amounts are written for
    #[serde(default)]
    pub servings: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// A recipe planned for a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub date: NaiveDate,
    pub recipe: RecipeInput,
    /// Servings planned for that day
    #[serde(default)]
    pub servings: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default)]
    pub entries: Vec<MealPlanEntry>,
}

impl RecipeInput {
    /// Ingredient lines scaled to `servings`
    ///
    /// Lines are returned unchanged when either serving count is unknown.
    pub fn ingredients_for(&self, servings: Option<f64>) -> Vec<String> {
        match (self.servings, servings) {
            (Some(original), Some(planned)) => {
                scale_ingredients(self.ingredients.as_slice(), original, planned)
            }
            _ => self.ingredients.clone(),
        }
    }

    /// Classified instruction entries, steps numbered from 1
    pub fn instruction_entries(&self) -> Vec<InstructionEntry> {
        parse_instructions(self.instructions.as_slice())
    }
}

impl MealPlanEntry {
    fn in_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.map_or(true, |from| self.date >= from) && to.map_or(true, |to| self.date <= to)
    }
}

impl MealPlan {
    /// Decode a meal plan from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, PlannerError> {
        let plan: MealPlan = serde_json::from_str(json)?;
        debug!("Decoded meal plan with {} entries", plan.entries.len());
        Ok(plan)
    }

    /// Read and decode a meal plan file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlannerError> {
        let path = path.as_ref();
        info!("Loading meal plan from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// `(recipe label, ingredient lines)` for entries dated within `from..=to`
    ///
    /// A `None` bound leaves that side open. Entries keep their plan order and
    /// their ingredients are scaled to the planned servings.
    pub fn occurrences_between(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<(String, Vec<String>)> {
        let occurrences: Vec<(String, Vec<String>)> = self
            .entries
            .iter()
            .filter(|entry| entry.in_range(from, to))
            .map(|entry| {
                (
                    entry.recipe.label.clone(),
                    entry.recipe.ingredients_for(entry.servings),
                )
            })
            .collect();

        debug!(
            "Selected {} of {} meal plan entries between {:?} and {:?}",
            occurrences.len(),
            self.entries.len(),
            from,
            to
        );
        occurrences
    }

    /// Grocery list for the entries dated within `from..=to`
    pub fn grocery_list(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> GroceryList {
        build_grocery_list(self.occurrences_between(from, to))
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> Result<NaiveDate, PlannerError> {
    Ok(NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")?)
}
