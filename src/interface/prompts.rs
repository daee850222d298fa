//! Interactive prompts. dialoguer draws on stderr and so does every status
//! line here; stdout is left to the formatted result.

use dialoguer::{Confirm, Input, Select};

use crate::error::{NutriError, Result};
use crate::menu::{EntryId, MenuSession};
use crate::models::{FoodCategory, FoodItem};
use crate::reference::ReferenceTable;

/// Prompt for the menu name.
pub fn prompt_menu_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Menu name")
        .allow_empty(true)
        .interact_text()?;
    Ok(name.trim().to_string())
}

/// Let the user pick a food category.
pub fn prompt_category(reference: &ReferenceTable) -> Result<&FoodCategory> {
    let categories = reference.categories();
    if categories.is_empty() {
        return Err(NutriError::NoCategorySelected);
    }

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Food category")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(&categories[selection])
}

/// Prompt for a food within `category`, with fuzzy matching.
///
/// Returns `None` when the user gives up on the current input.
pub fn prompt_food<'r>(
    reference: &'r ReferenceTable,
    category: &'r FoodCategory,
) -> Result<Option<&'r FoodItem>> {
    let input: String = Input::new()
        .with_prompt(format!("Food in {} (Enter to list all)", category.name))
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        let names: Vec<String> = category
            .foods
            .iter()
            .map(|f| format!("{} ({}, {} g)", f.name, f.portion, f.weight))
            .collect();
        let selection = Select::new()
            .with_prompt("Choose a food")
            .items(&names)
            .default(0)
            .interact()?;
        return Ok(category.foods.get(selection));
    }

    // Try exact match first (case-insensitive)
    if let Some(food) = category.find_food(input) {
        return Ok(Some(food));
    }

    let candidates = reference.suggest_foods(&category.key, input);
    match candidates.len() {
        0 => {
            eprintln!("No matching food found for '{}'", input);
            Ok(None)
        }
        1 => {
            let food = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(food))
        }
        _ => {
            let mut options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|f| f.name.clone())
                .collect();
            let shown = options.len();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok((selection < shown).then(|| candidates[selection]))
        }
    }
}

/// Prompt for the served weight, pre-filled with the food's standard weight.
pub fn prompt_weight(food: &FoodItem) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Weight of {} in grams", food.name))
        .default(food.weight.to_string())
        .interact_text()?;

    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if !weight.is_finite() || weight <= 0.0 {
        return Err(NutriError::InvalidServingWeight(weight));
    }
    Ok(weight)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for one food and add it to the menu.
///
/// Input mistakes are reported and yield `None`; prompt failures propagate.
pub fn prompt_menu_entry(
    menu: &mut MenuSession<'_>,
    reference: &ReferenceTable,
) -> Result<Option<EntryId>> {
    let category = prompt_category(reference)?;
    let Some(food) = prompt_food(reference, category)? else {
        return Ok(None);
    };

    let weight = match prompt_weight(food) {
        Ok(weight) => weight,
        Err(e @ (NutriError::InvalidInput(_) | NutriError::InvalidServingWeight(_))) => {
            eprintln!("{}", e);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    match menu.add_entry(&category.key, &food.name, weight) {
        Ok(id) => Ok(Some(id)),
        Err(e @ (NutriError::UnknownCategory(_) | NutriError::FoodNotFound { .. })) => {
            eprintln!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Let the user pick an entry to remove. Returns whether one was removed.
pub fn prompt_remove_entry(menu: &mut MenuSession<'_>) -> Result<bool> {
    if menu.is_empty() {
        return Ok(false);
    }

    let mut options: Vec<String> = menu
        .entries()
        .iter()
        .map(|e| format!("{} - {} g ({} kkal)", e.food.name, e.actual_weight, e.nutrition.energy))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which item?")
        .items(&options)
        .default(options.len() - 1)
        .interact()?;

    match menu.entries().get(selection).map(|e| e.id) {
        Some(id) => Ok(menu.remove_entry(id)),
        None => Ok(false),
    }
}

/// Interactive menu composition loop.
pub fn compose_menu(menu: &mut MenuSession<'_>, reference: &ReferenceTable) -> Result<()> {
    if menu.name().is_empty() {
        let name = prompt_menu_name()?;
        menu.set_name(name);
    }

    const ACTIONS: [&str; 3] = ["Add food", "Remove food", "Finish"];
    loop {
        let action = Select::new()
            .with_prompt(format!("Menu '{}' ({} items)", menu.name(), menu.len()))
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                if let Some(id) = prompt_menu_entry(menu, reference)? {
                    if let Some(entry) = menu.entries().iter().find(|e| e.id == id) {
                        eprintln!(
                            "Added: {} {} g = {} kkal",
                            entry.food.name, entry.actual_weight, entry.nutrition.energy
                        );
                    }
                }
            }
            1 => {
                if !prompt_remove_entry(menu)? {
                    eprintln!("Nothing removed.");
                }
            }
            _ => {
                if menu.is_empty() && !prompt_yes_no("Menu is empty. Finish anyway?", false)? {
                    continue;
                }
                break;
            }
        }
    }

    Ok(())
}
