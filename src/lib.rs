//! # mealprep
//!
//! Ingredient and instruction parsing for a meal-planning backend: structured
//! ingredient lines from free text, fraction-aware quantity display, recipe
//! scaling, shopping categories, and provenance-preserving grocery lists built
//! from several recipes.
//!
//! Everything in the parsing, scaling, classification and aggregation modules
//! is pure and synchronous, and safe to call from any number of threads.

pub mod category;
pub mod config;
pub mod error;
pub mod grocery_list;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod instruction_parser;
pub mod localization;
pub mod meal_plan;
pub mod quantity;
pub mod report;
pub mod scaling;
pub mod unit_vocabulary;

pub use category::{detect_category, Category};
pub use grocery_list::{build_grocery_list, GroceryItem, GroceryList, QuantitySource};
pub use ingredient_model::ParsedIngredientLine;
pub use ingredient_parser::{parse_ingredient_line, parse_ingredient_list};
pub use instruction_parser::{
    classify_instruction, parse_instructions, InstructionEntry, InstructionType,
};
pub use quantity::{format_quantity, parse_quantity};
pub use scaling::{scale_ingredients, scale_line};
