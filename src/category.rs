//! # Category Module
//!
//! Classifies ingredient names into shopping categories using static keyword
//! tables.
//!
//! Tables are checked in declaration order and the first table with a keyword
//! contained in the lower-cased name wins, so "eggplant" lands in produce
//! before the dairy table ever sees "egg". Names matching nothing fall into
//! [`Category::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shopping category of a grocery item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Produce,
    MeatSeafood,
    Dairy,
    Bakery,
    Pantry,
    Frozen,
    Beverages,
    Other,
}

const PRODUCE_KEYWORDS: &[&str] = &[
    "apple", "banana", "lemon", "lime", "orange", "tomat", "potato", "onion",
    "garlic", "shallot", "leek", "scallion", "carrot", "celery", "lettuce",
    "spinach", "kale", "arugula", "cabbage", "cucumber", "zucchini", "courgette",
    "eggplant", "aubergine", "broccoli", "cauliflower", "mushroom", "avocado",
    "bell pepper", "chili", "jalapeño", "ginger", "basil", "parsley", "cilantro",
    "coriander", "mint", "dill", "rosemary", "thyme", "berry", "berries",
    "grape", "mango", "peach", "pear", "pineapple", "melon", "squash",
    "pumpkin", "radish", "beet", "asparagus", "fennel", "salad",
    "oignon", "poireau", "carotte", "pomme", "champignon", "persil",
    "zwiebel", "knoblauch", "kartoffel", "karotte", "möhre", "petersilie",
];

const MEAT_SEAFOOD_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "ham",
    "steak", "mince", "veal", "duck", "chorizo", "prosciutto", "salami",
    "salmon", "tuna", "cod", "shrimp", "prawn", "fish", "crab", "lobster",
    "anchov", "mussel", "clam", "scallop",
    "poulet", "boeuf", "bœuf", "porc", "agneau", "jambon", "lardon", "saumon",
    "hähnchen", "huhn", "rind", "schwein", "hackfleisch", "speck", "lachs",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "milk", "butter", "cheese", "cream", "yogurt", "yoghurt", "egg", "parmesan",
    "mozzarella", "cheddar", "feta", "ricotta", "mascarpone", "ghee",
    "lait", "beurre", "fromage", "crème", "oeuf", "œuf",
    "milch", "käse", "sahne", "quark", "joghurt",
];

const BAKERY_KEYWORDS: &[&str] = &[
    "bread", "bun", "bagel", "tortilla", "pita", "croissant", "baguette",
    "brioche", "naan", "muffin", "pain", "brot", "brötchen",
];

const PANTRY_KEYWORDS: &[&str] = &[
    "flour", "sugar", "salt", "pepper", "oil", "vinegar", "rice", "pasta",
    "noodle", "spaghetti", "macaroni", "bean", "lentil", "chickpea", "oat",
    "honey", "syrup", "sauce", "stock", "broth", "cumin", "paprika",
    "cinnamon", "nutmeg", "oregano", "vanilla", "baking", "yeast", "cornstarch",
    "almond", "walnut", "peanut", "cashew", "mustard", "ketchup", "mayonnaise",
    "jam", "cocoa", "chocolate", "raisin", "breadcrumb", "couscous", "quinoa",
    "farine", "sucre", "sel", "poivre", "huile", "vinaigre", "riz", "pâtes",
    "mehl", "zucker", "salz", "pfeffer", "essig", "nudeln",
];

const FROZEN_KEYWORDS: &[&str] = &["frozen", "ice cream", "sorbet", "surgelé", "tiefkühl"];

const BEVERAGE_KEYWORDS: &[&str] = &[
    "water", "juice", "coffee", "tea", "wine", "beer", "soda", "lemonade",
    "cider", "kombucha", "espresso", "eau", "jus", "café", "vin", "bière",
    "wasser", "saft", "kaffee", "wein", "bier",
];

/// Keyword tables in priority order
const KEYWORD_TABLES: &[(Category, &[&str])] = &[
    (Category::Produce, PRODUCE_KEYWORDS),
    (Category::MeatSeafood, MEAT_SEAFOOD_KEYWORDS),
    (Category::Dairy, DAIRY_KEYWORDS),
    (Category::Bakery, BAKERY_KEYWORDS),
    (Category::Pantry, PANTRY_KEYWORDS),
    (Category::Frozen, FROZEN_KEYWORDS),
    (Category::Beverages, BEVERAGE_KEYWORDS),
];

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 8] = [
        Category::Produce,
        Category::MeatSeafood,
        Category::Dairy,
        Category::Bakery,
        Category::Pantry,
        Category::Frozen,
        Category::Beverages,
        Category::Other,
    ];

    /// Snake-case key, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::MeatSeafood => "meat_seafood",
            Category::Dairy => "dairy",
            Category::Bakery => "bakery",
            Category::Pantry => "pantry",
            Category::Frozen => "frozen",
            Category::Beverages => "beverages",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detect the shopping category of an ingredient name
///
/// # Examples
///
/// ```rust
/// use mealprep::category::{detect_category, Category};
///
/// assert_eq!(detect_category("Red Onion"), Category::Produce);
/// assert_eq!(detect_category("whole milk"), Category::Dairy);
/// assert_eq!(detect_category("unobtainium"), Category::Other);
/// ```
pub fn detect_category(name: &str) -> Category {
    let name = name.to_lowercase();
    KEYWORD_TABLES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_each_category() {
        assert_eq!(detect_category("carrots"), Category::Produce);
        assert_eq!(detect_category("chicken thighs"), Category::MeatSeafood);
        assert_eq!(detect_category("Greek yogurt"), Category::Dairy);
        assert_eq!(detect_category("sourdough bread"), Category::Bakery);
        assert_eq!(detect_category("all-purpose flour"), Category::Pantry);
        assert_eq!(detect_category("frozen peas"), Category::Frozen);
        assert_eq!(detect_category("sparkling water"), Category::Beverages);
        assert_eq!(detect_category("dish soap"), Category::Other);
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect_category("GARLIC"), Category::Produce);
        assert_eq!(detect_category("Parmesan"), Category::Dairy);
    }

    #[test]
    fn test_collisions_resolve_by_table_order() {
        // produce is checked before dairy
        assert_eq!(detect_category("eggplant"), Category::Produce);
        // dairy ("butter") is checked before pantry ("peanut")
        assert_eq!(detect_category("peanut butter"), Category::Dairy);
    }

    #[test]
    fn test_detect_is_total() {
        assert_eq!(detect_category(""), Category::Other);
        assert_eq!(detect_category("   "), Category::Other);
        assert_eq!(detect_category("1234"), Category::Other);
    }

    #[test]
    fn test_regional_keywords() {
        assert_eq!(detect_category("farine"), Category::Pantry);
        assert_eq!(detect_category("Zwiebeln"), Category::Produce);
        assert_eq!(detect_category("Sahne"), Category::Dairy);
    }

    #[test]
    fn test_serialized_form_matches_as_str() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
