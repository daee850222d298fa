use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::calculator::MealOccasion;
use crate::models::Gender;

/// Gizi: daily nutrition needs, food exchange servings and menu checks.
#[derive(Parser, Debug)]
#[command(name = "gizi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Reference data JSON file replacing the built-in tables.
    #[arg(long, global = true, env = "GIZI_DATA")]
    pub data: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Individual needs, gender average and meal split for one person.
    Needs {
        /// "male" or "female".
        #[arg(short, long)]
        gender: Gender,

        /// Age in years.
        #[arg(short, long)]
        age: f64,

        /// Body weight in kg (recorded, not used by the table lookup).
        #[arg(long)]
        weight: Option<f64>,

        /// Height in cm (recorded, not used by the table lookup).
        #[arg(long)]
        height: Option<f64>,
    },

    /// Needs averaged over both genders for one age.
    Average {
        #[arg(short, long)]
        age: f64,
    },

    /// Needs averaged over every bracket in an age range.
    Range {
        #[arg(long)]
        from: f64,

        #[arg(long)]
        to: f64,
    },

    /// Split a daily target across the five meal occasions.
    Meals {
        #[arg(short, long)]
        age: f64,

        /// Use individual needs for children when given.
        #[arg(short, long)]
        gender: Option<Gender>,
    },

    /// List food categories and their foods.
    Foods {
        /// Category key, e.g. "carbohydrate".
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Nutrients in an actual serving of a food.
    Serving {
        #[arg(short, long)]
        category: String,

        #[arg(short, long)]
        food: String,

        /// Served weight in grams; defaults to the food's standard weight.
        #[arg(short, long)]
        weight: Option<f64>,
    },

    /// Compose a menu interactively and check it against a target.
    Menu {
        /// Age used to derive the target.
        #[arg(short, long)]
        age: Option<f64>,

        #[arg(short, long)]
        gender: Option<Gender>,

        /// Check against one meal occasion instead of the whole day.
        #[arg(short, long, value_enum)]
        meal: Option<MealOccasion>,

        #[arg(short, long)]
        name: Option<String>,
    },
}
