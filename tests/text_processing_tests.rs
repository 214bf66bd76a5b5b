//! # Text Processing Tests
//!
//! Tests for ingredient line parsing, quantity formatting and scaling through
//! the public API.

#[cfg(test)]
mod tests {
    use mealprep::{format_quantity, parse_ingredient_line, scale_ingredients};

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("expected a quantity");
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_concrete_scenarios() {
        let line = parse_ingredient_line("2 cups flour");
        assert_eq!(line.quantity, Some(2.0));
        assert_eq!(line.unit.as_deref(), Some("cups"));
        assert_eq!(line.name, "flour");

        let line = parse_ingredient_line("1/2 tsp salt");
        assert_eq!(line.quantity, Some(0.5));
        assert_eq!(line.unit.as_deref(), Some("tsp"));
        assert_eq!(line.name, "salt");

        let line = parse_ingredient_line("Salt to taste");
        assert_eq!(line.quantity, None);
        assert_eq!(line.unit, None);
        assert_eq!(line.name, "Salt to taste");

        assert_eq!(format_quantity(1.5), "1 1/2");
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(scale_ingredients(&["2 cups flour"], 2.0, 4.0), vec!["4 cups flour"]);
    }

    #[test]
    fn test_format_then_parse_round_trip() {
        let cases = [
            (0.25, "cups", "flour"),
            (1.0 / 3.0, "tsp", "baking powder"),
            (1.5, "Tbsp", "olive oil"),
            (2.0 / 3.0, "cuillères", "sucre"),
            (2.25, "EL", "Olivenöl"),
            (3.2, "g", "Grand Marnier"),
            (12.0, "cloves", "garlic"),
        ];

        for (quantity, unit, name) in cases {
            let text = format!("{} {} {}", format_quantity(quantity), unit, name);
            let line = parse_ingredient_line(&text);
            assert_close(line.quantity, quantity);
            assert_eq!(line.unit.as_deref(), Some(unit), "unit for '{}'", text);
            assert_eq!(line.name, name, "name for '{}'", text);
            assert_eq!(line.original, text);
        }
    }

    #[test]
    fn test_multilingual_lines() {
        let line = parse_ingredient_line("3 gousses d'ail");
        assert_eq!(line.quantity, Some(3.0));
        assert_eq!(line.unit.as_deref(), Some("gousses"));
        assert_eq!(line.name, "d'ail");

        let line = parse_ingredient_line("1 Prise Salz");
        assert_eq!(line.unit.as_deref(), Some("Prise"));
        assert_eq!(line.name, "Salz");

        let line = parse_ingredient_line("6 oeufs");
        assert_eq!(line.quantity, Some(6.0));
        assert_eq!(line.unit, None);
        assert_eq!(line.name, "oeufs");
    }

    #[test]
    fn test_scaling_idempotence() {
        let lines = ["2 cups flour", "1/2 tsp salt", "Salt to taste", "3 eggs"];
        for servings in [1.0, 2.0, 4.5, 10.0] {
            assert_eq!(scale_ingredients(&lines, servings, servings), lines.to_vec());
        }
    }

    #[test]
    fn test_scaling_noop_guard() {
        let lines = ["2 cups flour", "1 egg"];
        assert_eq!(scale_ingredients(&lines, 0.0, 4.0), lines.to_vec());
        assert_eq!(scale_ingredients(&lines, 4.0, 0.0), lines.to_vec());
        assert_eq!(scale_ingredients(&lines, -1.0, 4.0), lines.to_vec());
    }

    #[test]
    fn test_scaling_composition() {
        let lines = ["2 cups flour", "1 1/2 tsp baking soda", "3 eggs", "Pepper"];

        let twice = scale_ingredients(&lines, 2.0, 4.0);
        let twice = scale_ingredients(twice.as_slice(), 1.0, 3.0);
        let once = scale_ingredients(&lines, 2.0, 12.0);

        assert_eq!(twice, once);
        assert_eq!(once, vec!["12 cups flour", "9 tsp baking soda", "18 eggs", "Pepper"]);
    }

    #[test]
    fn test_scaling_down_uses_fractions() {
        let scaled = scale_ingredients(&["1 cup milk", "3 tbsp sugar"], 4.0, 1.0);
        assert_eq!(scaled, vec!["1/4 cup milk", "3/4 tbsp sugar"]);
    }
}
