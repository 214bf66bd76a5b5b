use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use mealprep::config::AppConfig;
use mealprep::localization::LocalizationManager;
use mealprep::meal_plan::{parse_date, MealPlan};
use mealprep::report::{render_grocery_list, summarize};
use mealprep::{parse_ingredient_line, parse_instructions, scale_ingredients};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mealprep", about = "Recipe ingredient parsing and grocery lists")]
struct Cli {
    /// Report language, overrides the configured one
    #[arg(long, global = true, env = "MEALPREP_LANGUAGE")]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse ingredient lines and print them as JSON
    Parse { file: PathBuf },
    /// Scale ingredient lines to a new serving count
    Scale {
        file: PathBuf,
        #[arg(long = "from")]
        original_servings: f64,
        #[arg(long = "to")]
        new_servings: f64,
    },
    /// Build the grocery list for a meal plan
    Groceries {
        plan: PathBuf,
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Print the list as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Classify instruction lines and print them as JSON
    Instructions { file: PathBuf },
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(language) = cli.language {
        config.language = language.trim().to_lowercase();
    }

    match cli.command {
        Command::Parse { file } => {
            let parsed: Vec<_> = read_lines(&file)?
                .iter()
                .filter(|line| !line.trim().is_empty())
                .map(|line| parse_ingredient_line(line))
                .collect();
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Command::Scale {
            file,
            original_servings,
            new_servings,
        } => {
            let lines = read_lines(&file)?;
            for line in scale_ingredients(lines.as_slice(), original_servings, new_servings) {
                println!("{}", line);
            }
        }
        Command::Groceries {
            plan,
            from,
            to,
            json,
        } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            let plan = MealPlan::from_file(&plan)
                .with_context(|| format!("Failed to load meal plan {}", plan.display()))?;
            let list = plan.grocery_list(from, to);

            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                let localizer = LocalizationManager::new()?;
                if !localizer.supports(&config.language) {
                    warn!(
                        "No translations for '{}', using English",
                        config.language
                    );
                }
                print!("{}", render_grocery_list(&list, &localizer, &config));
                println!();
                println!("{}", summarize(&list, &localizer, &config.language));
            }
            info!("Grocery list ready with {} items", list.len());
        }
        Command::Instructions { file } => {
            let lines = read_lines(&file)?;
            let entries = parse_instructions(lines.as_slice());
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
