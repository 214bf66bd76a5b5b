//! # Grocery List Module
//!
//! Merges ingredient lines from several recipes into one shopping list.
//!
//! Items are merged by case-insensitive name. Every occurrence keeps its own
//! [`QuantitySource`] so the list can always show which recipe asked for
//! what: same-unit amounts from different recipes are displayed side by side
//! ("3+4 eggs") rather than summed.
//!
//! ## Usage
//!
//! ```rust
//! use mealprep::grocery_list::build_grocery_list;
//!
//! let list = build_grocery_list(vec![
//!     ("Omelette", vec!["3 eggs", "1 tbsp butter"]),
//!     ("Cake", vec!["4 eggs", "200 g flour"]),
//! ]);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.items[0].display_text(), "3+4 eggs");
//! ```

use crate::category::{detect_category, Category};
use crate::ingredient_parser::parse_ingredient_line;
use crate::quantity::format_quantity;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

/// One recipe's contribution to a grocery item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantitySource {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub recipe_label: String,
}

/// A single entry of a grocery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Name as first inserted
    pub name: String,

    pub category: Category,

    #[serde(default)]
    pub checked: bool,

    /// Recipes that need this item, without duplicates, in first-seen order
    #[serde(default)]
    pub recipe_labels: Vec<String>,

    /// Every occurrence, in insertion order
    #[serde(default)]
    pub quantity_sources: Vec<QuantitySource>,

    /// Flat quantity for items added by hand
    #[serde(default)]
    pub quantity: Option<f64>,

    /// Flat unit for items added by hand
    #[serde(default)]
    pub unit: Option<String>,
}

/// Ordered, name-unique collection of grocery items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    pub items: Vec<GroceryItem>,
}

/// Quantities sharing a unit within one item's display text
struct UnitGroup<'a> {
    key: Option<String>,
    unit: Option<&'a str>,
    quantities: Vec<f64>,
}

impl GroceryItem {
    fn new(name: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            category,
            checked: false,
            recipe_labels: Vec::new(),
            quantity_sources: Vec::new(),
            quantity: None,
            unit: None,
        }
    }

    /// Check whether this item's name matches `name`, ignoring case
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    fn add_source(&mut self, source: QuantitySource) {
        if !self.recipe_labels.contains(&source.recipe_label) {
            self.recipe_labels.push(source.recipe_label.clone());
        }
        self.quantity_sources.push(source);
    }

    /// Text shown on the shopping list, e.g. "3+4 eggs" or "2 cups, 100 g flour"
    ///
    /// Computed from the quantity sources on every call.
    pub fn display_text(&self) -> String {
        let mut groups: Vec<UnitGroup> = Vec::new();

        for source in &self.quantity_sources {
            let Some(quantity) = source.quantity else {
                continue;
            };
            let key = source.unit.as_ref().map(|unit| unit.to_lowercase());
            match groups.iter_mut().find(|group| group.key == key) {
                Some(group) => {
                    group.quantities.push(quantity);
                    if group.unit.is_none() {
                        group.unit = source.unit.as_deref();
                    }
                }
                None => groups.push(UnitGroup {
                    key,
                    unit: source.unit.as_deref(),
                    quantities: vec![quantity],
                }),
            }
        }

        if groups.is_empty() {
            return self.flat_display_text();
        }

        let amounts: Vec<String> = groups
            .iter()
            .map(|group| {
                let joined = group
                    .quantities
                    .iter()
                    .map(|quantity| format_quantity(*quantity))
                    .collect::<Vec<_>>()
                    .join("+");
                match group.unit {
                    Some(unit) => format!("{} {}", joined, unit),
                    None => joined,
                }
            })
            .collect();

        let amounts = amounts.join(", ");
        if self.name.is_empty() {
            amounts
        } else {
            format!("{} {}", amounts, self.name)
        }
    }

    fn flat_display_text(&self) -> String {
        let mut parts = Vec::new();
        if let Some(quantity) = self.quantity {
            parts.push(format_quantity(quantity));
        }
        if let Some(unit) = &self.unit {
            parts.push(unit.clone());
        }
        if !self.name.is_empty() {
            parts.push(self.name.clone());
        }
        parts.join(" ")
    }
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GroceryItem> {
        self.items.iter()
    }

    /// Find an item by case-insensitive name
    pub fn find(&self, name: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.matches_name(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut GroceryItem> {
        self.items.iter_mut().find(|item| item.matches_name(name))
    }

    /// Parse one ingredient line from a recipe and merge it into the list
    ///
    /// Blank lines are ignored.
    pub fn add_occurrence(&mut self, recipe_label: &str, raw_line: &str) {
        if raw_line.trim().is_empty() {
            trace!("Skipping blank ingredient line from '{}'", recipe_label);
            return;
        }

        let parsed = parse_ingredient_line(raw_line);
        let source = QuantitySource {
            quantity: parsed.quantity,
            unit: parsed.unit,
            recipe_label: recipe_label.to_string(),
        };

        match self.find_mut(&parsed.name) {
            Some(item) => {
                debug!(
                    "Merging '{}' from '{}' into existing item '{}'",
                    parsed.name, recipe_label, item.name
                );
                item.add_source(source);
            }
            None => {
                let category = detect_category(&parsed.name);
                debug!(
                    "Adding '{}' ({}) from '{}'",
                    parsed.name, category, recipe_label
                );
                let mut item = GroceryItem::new(&parsed.name, category);
                item.add_source(source);
                self.items.push(item);
            }
        }
    }

    /// Add an item by hand, with a flat quantity and unit
    ///
    /// Returns `false` and leaves the list untouched when an item with the
    /// same name (ignoring case) already exists.
    pub fn add_manual_item(
        &mut self,
        name: &str,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> bool {
        let name = name.trim();
        if self.find(name).is_some() {
            debug!("Manual item '{}' already on the list", name);
            return false;
        }

        let mut item = GroceryItem::new(name, detect_category(name));
        item.quantity = quantity;
        item.unit = unit.map(str::to_string);
        self.items.push(item);
        true
    }

    /// Flip the checked state of an item, returning the new state
    pub fn toggle_checked(&mut self, name: &str) -> Option<bool> {
        let item = self.find_mut(name)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    /// Items grouped by category, in category declaration order
    ///
    /// Empty categories are left out; items keep their list order within a
    /// group. The list itself is not reordered.
    pub fn by_category(&self) -> Vec<(Category, Vec<&GroceryItem>)> {
        Category::ALL
            .iter()
            .filter_map(|category| {
                let items: Vec<&GroceryItem> = self
                    .items
                    .iter()
                    .filter(|item| item.category == *category)
                    .collect();
                (!items.is_empty()).then_some((*category, items))
            })
            .collect()
    }

    /// Number of distinct recipes contributing to the list
    pub fn recipe_count(&self) -> usize {
        let mut labels: Vec<&str> = Vec::new();
        for item in self {
            labels.extend(item.recipe_labels.iter().map(String::as_str));
        }
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}

impl<'a> IntoIterator for &'a GroceryList {
    type Item = &'a GroceryItem;
    type IntoIter = std::slice::Iter<'a, GroceryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Build a grocery list from `(recipe label, ingredient lines)` pairs
///
/// Items appear in first-seen order and are never reordered or removed.
pub fn build_grocery_list<I, L, R, S>(occurrences: I) -> GroceryList
where
    I: IntoIterator<Item = (L, R)>,
    L: AsRef<str>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = GroceryList::new();
    let mut line_count = 0usize;

    for (recipe_label, lines) in occurrences {
        for line in lines {
            list.add_occurrence(recipe_label.as_ref(), line.as_ref());
            line_count += 1;
        }
    }

    info!(
        "Built grocery list with {} items from {} ingredient lines",
        list.len(),
        line_count
    );
    list
}
