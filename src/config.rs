//! # Configuration Module
//!
//! Runtime settings for the command-line front end, read from environment
//! variables (a `.env` file is honored by the binary).
//!
//! The unit vocabulary and category keyword tables are compiled in and are not
//! part of this configuration.

use log::warn;
use std::env;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const LANGUAGE_VAR: &str = "MEALPREP_LANGUAGE";
pub const SHOW_LABELS_VAR: &str = "MEALPREP_SHOW_LABELS";

/// Configuration for report rendering
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Language code for report headings (e.g. "en", "fr")
    pub language: String,
    /// Whether report lines list the recipes that need each item
    pub show_recipe_labels: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            show_recipe_labels: true,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(language) = lookup(LANGUAGE_VAR) {
            let language = language.trim().to_lowercase();
            if !language.is_empty() {
                config.language = language;
            }
        }

        if let Some(value) = lookup(SHOW_LABELS_VAR) {
            match parse_bool(&value) {
                Some(show) => config.show_recipe_labels = show,
                None => warn!(
                    "Ignoring {}={:?}, expected true/false",
                    SHOW_LABELS_VAR, value
                ),
            }
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.language, "en");
        assert!(config.show_recipe_labels);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (LANGUAGE_VAR, " FR "),
            (SHOW_LABELS_VAR, "no"),
        ]));
        assert_eq!(config.language, "fr");
        assert!(!config.show_recipe_labels);
    }

    #[test]
    fn test_invalid_bool_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(SHOW_LABELS_VAR, "maybe")]));
        assert!(config.show_recipe_labels);
    }
}
