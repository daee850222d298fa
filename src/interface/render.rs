use crate::calculator::{
    MealContribution, MealDistribution, MealOccasion, NutrientCheck, ToleranceStatus,
};
use crate::menu::MenuSession;
use crate::models::{FoodCategory, NutrientProfile, ServingNutrition};

/// Display a daily needs profile.
pub fn display_profile(profile: &NutrientProfile, title: &str) {
    println!();
    println!("=== {} ===", title);
    println!("{}", profile.category);
    println!();
    println!("  Energi        : {:>7} kkal", profile.energy);
    println!("  Protein       : {:>7} g", profile.protein);
    println!(
        "  Lemak total   : {:>7} g  (omega-3 {} g, omega-6 {} g)",
        profile.fat.total, profile.fat.omega3, profile.fat.omega6
    );
    println!("  Karbohidrat   : {:>7} g", profile.carbohydrate);
    println!("  Serat         : {:>7} g", profile.fiber);
    println!("  Air           : {:>7} ml", profile.water);
    println!();
}

fn meal_row(name: &str, unit: &str, split: &MealContribution) {
    let cells: Vec<String> = MealOccasion::ALL
        .iter()
        .map(|&o| format!("{:>12}", split.get(o)))
        .collect();
    println!("  {:<14}{}  {}", name, cells.join(""), unit);
}

/// Display the per-occasion split of every nutrient.
pub fn display_meal_distribution(meals: &MealDistribution) {
    println!();
    println!("=== Kontribusi per Waktu Makan ===");
    println!();

    let header: Vec<String> = MealOccasion::ALL
        .iter()
        .map(|o| format!("{:>12}", o.label()))
        .collect();
    println!("  {:<14}{}", "", header.join(""));

    let shares: Vec<String> = MealOccasion::ALL
        .iter()
        .map(|o| format!("{:>11.0}%", o.share() * 100.0))
        .collect();
    println!("  {:<14}{}", "", shares.join(""));

    meal_row("Energi", "kkal", &meals.energy);
    meal_row("Protein", "g", &meals.protein);
    meal_row("Lemak", "g", &meals.fat);
    meal_row("Karbohidrat", "g", &meals.carbohydrate);
    meal_row("Serat", "g", &meals.fiber);
    meal_row("Air", "ml", &meals.water);
    println!();
}

/// Display the nutrients of one serving.
pub fn display_serving(food: &str, actual_weight: f64, nutrition: &ServingNutrition) {
    println!();
    println!("=== {} ({} g) ===", food, actual_weight);
    println!("  Energi      : {} kkal", nutrition.energy);
    println!("  Protein     : {} g", nutrition.protein);
    println!("  Lemak       : {} g", nutrition.fat);
    println!("  Karbohidrat : {} g", nutrition.carbohydrate);
    println!("  Serat       : {} g", nutrition.fiber);
    println!();
}

/// Display the food catalog of the given categories.
pub fn display_food_list(categories: &[&FoodCategory]) {
    if categories.is_empty() {
        println!("(no categories)");
        return;
    }

    for category in categories {
        let standard = &category.standard;
        println!();
        println!("=== {} [{}] ({} items) ===", category.name, category.key, category.foods.len());
        println!(
            "  Standard per {} g: {} kkal, P {} g, L {} g, KH {} g, serat {} g",
            standard.reference_weight,
            standard.nutrients.energy,
            standard.nutrients.protein,
            standard.nutrients.fat,
            standard.nutrients.carbohydrate,
            standard.nutrients.fiber
        );

        let width = category.foods.iter().map(|f| f.name.len()).max().unwrap_or(10);
        for food in &category.foods {
            println!(
                "  {:<width$}  {:<22} {:>5} g",
                food.name,
                food.portion,
                food.weight,
                width = width
            );
        }
    }
    println!();
}

/// Display the menu grouped by category, with totals.
pub fn display_menu(menu: &MenuSession<'_>) {
    if menu.is_empty() {
        println!("Menu is empty.");
        return;
    }

    println!();
    if menu.name().is_empty() {
        println!("=== Menu ===");
    } else {
        println!("=== Menu: {} ===", menu.name());
    }

    let width = menu
        .entries()
        .iter()
        .map(|e| e.food.name.len())
        .max()
        .unwrap_or(10);

    for (category, entries) in menu.entries_by_category() {
        println!();
        println!("  {}", menu.category_name(category));
        for entry in entries {
            let n = &entry.nutrition;
            println!(
                "    {:<width$} {:>6} g | {:>5} kkal | P {:>5} | L {:>5} | KH {:>5} | S {:>4}",
                entry.food.name,
                entry.actual_weight,
                n.energy,
                n.protein,
                n.fat,
                n.carbohydrate,
                n.fiber,
                width = width
            );
        }
    }

    let total = menu.total_nutrition();
    println!();
    println!("--- Total ---");
    println!("Items: {}", menu.len());
    println!(
        "Energi {} kkal, Protein {} g, Lemak {} g, Karbohidrat {} g, Serat {} g",
        total.energy, total.protein, total.fat, total.carbohydrate, total.fiber
    );
    println!();
}

/// Display tolerance checks against a target.
pub fn display_checks(checks: &[NutrientCheck], title: &str) {
    println!();
    println!("=== {} ===", title);
    println!();

    for check in checks {
        let unit = check.nutrient.unit();
        match &check.report {
            Some(report) => {
                let marker = match report.status {
                    ToleranceStatus::Kurang => "-",
                    ToleranceStatus::Sesuai => "=",
                    ToleranceStatus::Berlebih => "+",
                };
                println!(
                    "  [{}] {:<12} {:>7} / {:>7} {:<4} ({:>3}%)  rentang {}-{}  {}",
                    marker,
                    check.nutrient.label(),
                    check.actual,
                    check.target,
                    unit,
                    report.percentage,
                    report.min,
                    report.max,
                    report.status
                );
            }
            None => {
                println!(
                    "  [?] {:<12} {:>7} {:<4} (no target)",
                    check.nutrient.label(),
                    check.actual,
                    unit
                );
            }
        }
    }
    println!();
}
