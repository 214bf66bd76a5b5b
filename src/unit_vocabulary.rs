//! # Unit Vocabulary Module
//!
//! This module contains the closed set of measurement tokens used to separate a
//! unit from the ingredient name when parsing an ingredient line.
//!
//! The vocabulary covers English metric and imperial units, countable pieces,
//! size descriptors, and French and German kitchen units. All entries are
//! lower-case; lookups lower-case the candidate word first.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Metric volume and weight units
const METRIC_UNITS: &[&str] = &[
    "ml", "milliliter", "milliliters", "millilitre", "millilitres",
    "cl", "dl", "l", "liter", "liters", "litre", "litres",
    "mg", "g", "gr", "gram", "grams", "kg", "kilogram", "kilograms",
];

/// Imperial / US customary volume and weight units
const IMPERIAL_UNITS: &[&str] = &[
    "tsp", "tsps", "teaspoon", "teaspoons",
    "tbsp", "tbsps", "tbs", "tablespoon", "tablespoons",
    "cup", "cups", "pint", "pints", "pt", "quart", "quarts", "qt",
    "gallon", "gallons", "gal",
    "oz", "ounce", "ounces", "lb", "lbs", "pound", "pounds",
];

/// Countable pieces and containers
const COUNT_UNITS: &[&str] = &[
    "clove", "cloves", "can", "cans", "package", "packages", "pkg",
    "packet", "packets", "jar", "jars", "bottle", "bottles", "box", "boxes",
    "bag", "bags", "slice", "slices", "piece", "pieces", "stick", "sticks",
    "bunch", "bunches", "sprig", "sprigs", "stalk", "stalks", "head", "heads",
    "sheet", "sheets", "cube", "cubes", "fillet", "fillets",
];

/// Size descriptors and imprecise amounts
const SIZE_UNITS: &[&str] = &[
    "pinch", "pinches", "dash", "dashes", "handful", "handfuls",
    "splash", "drop", "drops", "small", "medium", "large",
];

/// French units
const FRENCH_UNITS: &[&str] = &[
    "cuillère", "cuillères", "cuillere", "cuilleres", "cas", "cac", "c.à.s", "c.à.c",
    "tasse", "tasses", "verre", "verres", "pincée", "pincées",
    "gramme", "grammes", "kilogramme", "kilogrammes",
    "gousse", "gousses", "boîte", "boîtes", "sachet", "sachets",
    "paquet", "paquets", "tranche", "tranches", "morceau", "morceaux",
    "brin", "brins", "feuille", "feuilles", "bouquet", "bouquets",
    "poignée", "poignées", "pièce", "pièces",
];

/// German units
const GERMAN_UNITS: &[&str] = &[
    "el", "tl", "msp", "prise", "prisen", "bund", "dose", "dosen",
    "becher", "packung", "packungen", "päckchen", "pck", "stück",
    "zehe", "zehen", "scheibe", "scheiben", "tasse", "tassen",
];

lazy_static! {
    static ref UNIT_VOCABULARY: HashSet<&'static str> = METRIC_UNITS
        .iter()
        .chain(IMPERIAL_UNITS)
        .chain(COUNT_UNITS)
        .chain(SIZE_UNITS)
        .chain(FRENCH_UNITS)
        .chain(GERMAN_UNITS)
        .copied()
        .collect();
}

/// Check whether a word is a recognized measurement unit
///
/// The comparison is case-insensitive: "Cups", "EL" and "tsp" all match.
///
/// # Examples
///
/// ```rust
/// use mealprep::unit_vocabulary::is_unit;
///
/// assert!(is_unit("cups"));
/// assert!(is_unit("EL"));
/// assert!(!is_unit("flour"));
/// ```
pub fn is_unit(word: &str) -> bool {
    UNIT_VOCABULARY.contains(word.to_lowercase().as_str())
}
