//! # Shopping List Report
//!
//! Renders a grocery list as plain text, grouped by category with localized
//! headings.

use crate::config::AppConfig;
use crate::grocery_list::{GroceryItem, GroceryList};
use crate::localization::LocalizationManager;

/// Render a grocery list for display
///
/// ```text
/// Shopping list
///
/// Produce
///   [ ] 2 lemon (Lemonade)
///
/// Dairy & Eggs
///   [x] 3+4 eggs (Omelette, Cake)
/// ```
pub fn render_grocery_list(
    list: &GroceryList,
    localizer: &LocalizationManager,
    config: &AppConfig,
) -> String {
    let language = config.language.as_str();
    let mut output = String::new();
    output.push_str(&localizer.get_message_in_language("grocery-list-title", language, None));
    output.push('\n');

    if list.is_empty() {
        output.push('\n');
        output.push_str(&localizer.get_message_in_language("grocery-list-empty", language, None));
        output.push('\n');
        return output;
    }

    for (category, items) in list.by_category() {
        let heading_key = format!("category-{}", category.as_str());
        output.push('\n');
        output.push_str(&localizer.get_message_in_language(&heading_key, language, None));
        output.push('\n');
        for item in items {
            output.push_str(&format!("  {}\n", render_item(item, config.show_recipe_labels)));
        }
    }

    output
}

fn render_item(item: &GroceryItem, show_recipe_labels: bool) -> String {
    let checkbox = if item.checked { "[x]" } else { "[ ]" };
    let mut line = format!("{} {}", checkbox, item.display_text());
    if show_recipe_labels && !item.recipe_labels.is_empty() {
        line.push_str(&format!(" ({})", item.recipe_labels.join(", ")));
    }
    line
}

/// One-line summary: item and recipe counts
pub fn summarize(list: &GroceryList, localizer: &LocalizationManager, language: &str) -> String {
    localizer.get_message_with_counts(
        "grocery-summary",
        language,
        &[("items", list.len()), ("recipes", list.recipe_count())],
    )
}
