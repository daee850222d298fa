use std::io::Write;

use serde::Serialize;

use crate::calculator::{MealDistribution, MealOccasion, NutrientCheck};
use crate::error::Result;
use crate::menu::{MenuEntry, MenuSession};
use crate::models::{FoodCategory, NutrientProfile, ServingNutrition};

/// Write profiles as CSV rows, one per profile.
pub fn write_profiles_csv<W: Write>(out: W, profiles: &[&NutrientProfile]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record([
        "category",
        "source",
        "energy_kcal",
        "protein_g",
        "fat_total_g",
        "omega3_g",
        "omega6_g",
        "carbohydrate_g",
        "fiber_g",
        "water_ml",
    ])?;

    for p in profiles {
        wtr.write_record([
            p.category.clone(),
            p.source.as_str().to_string(),
            p.energy.to_string(),
            p.protein.to_string(),
            p.fat.total.to_string(),
            p.fat.omega3.to_string(),
            p.fat.omega6.to_string(),
            p.carbohydrate.to_string(),
            p.fiber.to_string(),
            p.water.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a meal distribution as one row per nutrient, one column per occasion.
pub fn write_meals_csv<W: Write>(out: W, meals: &MealDistribution) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let mut header = vec!["nutrient".to_string()];
    header.extend(MealOccasion::ALL.iter().map(|o| o.label().to_string()));
    header.push("total".to_string());
    wtr.write_record(&header)?;

    let rows = [
        ("energy_kcal", &meals.energy),
        ("protein_g", &meals.protein),
        ("fat_g", &meals.fat),
        ("carbohydrate_g", &meals.carbohydrate),
        ("fiber_g", &meals.fiber),
        ("water_ml", &meals.water),
    ];
    for (name, split) in rows {
        let mut record = vec![name.to_string()];
        record.extend(MealOccasion::ALL.iter().map(|&o| split.get(o).to_string()));
        record.push(split.total().to_string());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a single serving as a CSV row.
pub fn write_serving_csv<W: Write>(
    out: W,
    food: &str,
    actual_weight: f64,
    nutrition: &ServingNutrition,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record([
        "food",
        "weight_g",
        "energy_kcal",
        "protein_g",
        "fat_g",
        "carbohydrate_g",
        "fiber_g",
    ])?;
    wtr.write_record([
        food.to_string(),
        actual_weight.to_string(),
        nutrition.energy.to_string(),
        nutrition.protein.to_string(),
        nutrition.fat.to_string(),
        nutrition.carbohydrate.to_string(),
        nutrition.fiber.to_string(),
    ])?;
    wtr.flush()?;
    Ok(())
}

/// Write every menu entry plus a trailing total row.
pub fn write_menu_csv<W: Write>(out: W, menu: &MenuSession<'_>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record([
        "id",
        "category",
        "food",
        "weight_g",
        "energy_kcal",
        "protein_g",
        "fat_g",
        "carbohydrate_g",
        "fiber_g",
    ])?;

    for entry in menu.entries() {
        let n = &entry.nutrition;
        wtr.write_record([
            entry.id.to_string(),
            entry.category.clone(),
            entry.food.name.clone(),
            entry.actual_weight.to_string(),
            n.energy.to_string(),
            n.protein.to_string(),
            n.fat.to_string(),
            n.carbohydrate.to_string(),
            n.fiber.to_string(),
        ])?;
    }

    let total = menu.total_nutrition();
    wtr.write_record([
        String::new(),
        String::new(),
        "TOTAL".to_string(),
        String::new(),
        total.energy.to_string(),
        total.protein.to_string(),
        total.fat.to_string(),
        total.carbohydrate.to_string(),
        total.fiber.to_string(),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct MenuReport<'m> {
    name: &'m str,
    entries: &'m [MenuEntry],
    total: ServingNutrition,
    target: Option<&'m NutrientProfile>,
    checks: Option<&'m [NutrientCheck]>,
}

/// Write the menu, its total and the optional tolerance checks as pretty JSON.
pub fn write_menu_json<W: Write>(
    mut out: W,
    menu: &MenuSession<'_>,
    target: Option<&NutrientProfile>,
    checks: Option<&[NutrientCheck]>,
) -> Result<()> {
    let report = MenuReport {
        name: menu.name(),
        entries: menu.entries(),
        total: menu.total_nutrition(),
        target,
        checks,
    };
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Write tolerance checks; band columns are empty when the target is undefined.
pub fn write_checks_csv<W: Write>(out: W, checks: &[NutrientCheck]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record([
        "nutrient", "actual", "target", "min", "max", "status", "percentage",
    ])?;

    for check in checks {
        let (min, max, status, pct) = match &check.report {
            Some(r) => (
                r.min.to_string(),
                r.max.to_string(),
                r.status.to_string(),
                r.percentage.to_string(),
            ),
            None => Default::default(),
        };
        wtr.write_record([
            check.nutrient.label().to_string(),
            check.actual.to_string(),
            check.target.to_string(),
            min,
            max,
            status,
            pct,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the food catalog of the given categories.
pub fn write_foods_csv<W: Write>(out: W, categories: &[&FoodCategory]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["category", "food", "portion", "weight_g"])?;
    for category in categories {
        for food in &category.foods {
            wtr.write_record([
                category.key.clone(),
                food.name.clone(),
                food.portion.clone(),
                food.weight.to_string(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}
