use std::io;

use clap::Parser;
use serde::Serialize;
use tracing::debug;

use gizi_calc::calculator::{distribute_meals, MealOccasion, NeedsCalculator};
use gizi_calc::cli::{Cli, Command, OutputFormat};
use gizi_calc::error::{NutriError, Result};
use gizi_calc::interface::{
    compose_menu, display_checks, display_food_list, display_meal_distribution, display_menu,
    display_profile, display_serving, write_checks_csv, write_foods_csv, write_meals_csv,
    write_menu_csv, write_menu_json, write_profiles_csv, write_serving_csv,
};
use gizi_calc::menu::MenuSession;
use gizi_calc::models::{Gender, NutrientProfile};
use gizi_calc::reference::{load_reference, ReferenceTable, DEFAULT_REFERENCE};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let custom;
    let reference: &ReferenceTable = match &cli.data {
        Some(path) => {
            custom = load_reference(path)?;
            &custom
        }
        None => &*DEFAULT_REFERENCE,
    };
    let calc = NeedsCalculator::new(reference);
    let format = cli.format;

    match cli.command {
        Command::Needs {
            gender,
            age,
            weight,
            height,
        } => cmd_needs(&calc, format, gender, age, weight, height),
        Command::Average { age } => {
            let profile = calc.compute_average_needs(age);
            emit_profiles(format, &[(&profile, "Kebutuhan Gizi Rata-rata")])
        }
        Command::Range { from, to } => {
            let profile = calc.compute_custom_range_needs(from, to);
            emit_profiles(format, &[(&profile, "Kebutuhan Gizi Rentang Umur")])
        }
        Command::Meals { age, gender } => {
            let target = calc.target_needs(age, gender);
            let meals = distribute_meals(&target);
            match format {
                OutputFormat::Text => {
                    display_profile(&target, "Target Harian");
                    display_meal_distribution(&meals);
                    Ok(())
                }
                OutputFormat::Csv => write_meals_csv(io::stdout(), &meals),
                OutputFormat::Json => print_json(&meals),
            }
        }
        Command::Foods { category } => cmd_foods(reference, format, category.as_deref()),
        Command::Serving {
            category,
            food,
            weight,
        } => cmd_serving(reference, format, &category, &food, weight),
        Command::Menu {
            age,
            gender,
            meal,
            name,
        } => cmd_menu(
            reference,
            &calc,
            format,
            age,
            gender,
            meal,
            name,
        ),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit_profiles(format: OutputFormat, profiles: &[(&NutrientProfile, &str)]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (profile, title) in profiles {
                display_profile(profile, title);
            }
            Ok(())
        }
        OutputFormat::Csv => {
            let rows: Vec<_> = profiles.iter().map(|(p, _)| *p).collect();
            write_profiles_csv(io::stdout(), &rows)
        }
        OutputFormat::Json => {
            let rows: Vec<_> = profiles.iter().map(|(p, _)| *p).collect();
            print_json(&rows)
        }
    }
}

/// Individual needs, gender average and meal split for one person.
fn cmd_needs(
    calc: &NeedsCalculator<'_>,
    format: OutputFormat,
    gender: Gender,
    age: f64,
    weight: Option<f64>,
    height: Option<f64>,
) -> Result<()> {
    // Weight and height do not enter the table lookup.
    debug!(?weight, ?height, "body measurements recorded");

    let individual = calc.compute_needs(gender, age);
    let average = calc.compute_average_needs(age);
    let meals = distribute_meals(&individual);

    match format {
        OutputFormat::Text => {
            display_profile(&individual, "Kebutuhan Gizi Individual");
            display_profile(&average, "Kebutuhan Gizi Rata-rata");
            display_meal_distribution(&meals);
            Ok(())
        }
        OutputFormat::Csv => write_profiles_csv(io::stdout(), &[&individual, &average]),
        OutputFormat::Json => print_json(&serde_json::json!({
            "individual": individual,
            "average": average,
            "meals": meals,
        })),
    }
}

fn cmd_foods(
    reference: &ReferenceTable,
    format: OutputFormat,
    category: Option<&str>,
) -> Result<()> {
    let categories: Vec<_> = match category {
        Some(key) => vec![reference.require_category(key)?],
        None => reference.categories().iter().collect(),
    };

    match format {
        OutputFormat::Text => {
            display_food_list(&categories);
            Ok(())
        }
        OutputFormat::Csv => write_foods_csv(io::stdout(), &categories),
        OutputFormat::Json => print_json(&categories),
    }
}

fn cmd_serving(
    reference: &ReferenceTable,
    format: OutputFormat,
    category: &str,
    food: &str,
    weight: Option<f64>,
) -> Result<()> {
    let (item, weight, nutrition) = match reference.serving_for(category, food, weight) {
        Ok(found) => found,
        Err(e @ NutriError::FoodNotFound { .. }) => {
            let suggestions = reference.suggest_foods(category, food);
            if !suggestions.is_empty() {
                let names: Vec<&str> =
                    suggestions.iter().take(5).map(|f| f.name.as_str()).collect();
                eprintln!("Did you mean: {}?", names.join(", "));
            }
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    match format {
        OutputFormat::Text => {
            display_serving(&item.name, weight, &nutrition);
            Ok(())
        }
        OutputFormat::Csv => write_serving_csv(io::stdout(), &item.name, weight, &nutrition),
        OutputFormat::Json => print_json(&serde_json::json!({
            "food": item,
            "weight": weight,
            "nutrition": nutrition,
        })),
    }
}

fn cmd_menu(
    reference: &ReferenceTable,
    calc: &NeedsCalculator<'_>,
    format: OutputFormat,
    age: Option<f64>,
    gender: Option<Gender>,
    meal: Option<MealOccasion>,
    name: Option<String>,
) -> Result<()> {
    let mut menu = MenuSession::with_name(reference, name.unwrap_or_default());
    compose_menu(&mut menu, reference)?;

    let target = age.map(|age| calc.target_needs(age, gender));
    let checks = target.as_ref().map(|target| match meal {
        Some(occasion) => menu.compare_to_meal_target(target, occasion),
        None => menu.compare_to_target(target),
    });

    match format {
        OutputFormat::Text => {
            display_menu(&menu);
            if let (Some(target), Some(checks)) = (&target, &checks) {
                let title = match meal {
                    Some(occasion) => format!("{} vs {}", occasion, target.category),
                    None => format!("Menu vs {}", target.category),
                };
                display_checks(checks, &title);
            }
            Ok(())
        }
        OutputFormat::Csv => {
            write_menu_csv(io::stdout(), &menu)?;
            if let Some(checks) = &checks {
                println!();
                write_checks_csv(io::stdout(), checks)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            write_menu_json(io::stdout(), &menu, target.as_ref(), checks.as_deref())
        }
    }
}
