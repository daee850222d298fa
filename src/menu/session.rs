use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::calculator::rounding::MENU_TOTAL_ROUNDING;
use crate::calculator::{compare_nutrition, MealOccasion, NutrientCheck};
use crate::error::{NutriError, Result};
use crate::models::{FoodItem, NutrientProfile, ServingNutrition};
use crate::reference::ReferenceTable;

/// Identity of a menu entry, unique within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One food on the menu with the nutrients of its actual weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub id: EntryId,
    pub category: String,
    pub food: FoodItem,
    /// Grams actually served.
    pub actual_weight: f64,
    pub nutrition: ServingNutrition,
}

/// An ephemeral menu being composed.
///
/// Entries keep insertion order; the same food may appear several times.
pub struct MenuSession<'a> {
    reference: &'a ReferenceTable,
    name: String,
    entries: Vec<MenuEntry>,
    next_id: u64,
}

impl<'a> MenuSession<'a> {
    pub fn new(reference: &'a ReferenceTable) -> Self {
        Self {
            reference,
            name: String::new(),
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_name(reference: &'a ReferenceTable, name: impl Into<String>) -> Self {
        let mut session = Self::new(reference);
        session.name = name.into();
        session
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Scale `food` from `category` to `actual_weight` grams and append it.
    ///
    /// Nothing is changed when the selection is incomplete, unknown, or the
    /// weight is not positive.
    pub fn add_entry(&mut self, category: &str, food: &str, actual_weight: f64) -> Result<EntryId> {
        if category.trim().is_empty() {
            return Err(NutriError::NoCategorySelected);
        }
        if food.trim().is_empty() {
            return Err(NutriError::NoFoodSelected);
        }
        if !actual_weight.is_finite() || actual_weight <= 0.0 {
            return Err(NutriError::InvalidServingWeight(actual_weight));
        }

        let standard = self.reference.require_category(category)?.standard;
        let item = self.reference.find_food(category, food)?.clone();
        let nutrition = standard.serving(actual_weight);

        let id = EntryId(self.next_id);
        self.next_id += 1;

        info!(
            %id,
            category,
            food = %item.name,
            actual_weight,
            energy = nutrition.energy,
            "added menu entry"
        );

        self.entries.push(MenuEntry {
            id,
            category: category.to_string(),
            food: item,
            actual_weight,
            nutrition,
        });
        Ok(id)
    }

    /// Remove an entry by identity. Returns whether anything was removed.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            info!(%id, "removed menu entry");
        }
        removed
    }

    /// Elementwise sum of all entries.
    ///
    /// Gram fields are re-rounded to one decimal after every addition;
    /// energy is a plain sum of whole values.
    pub fn total_nutrition(&self) -> ServingNutrition {
        let policy = MENU_TOTAL_ROUNDING;
        self.entries
            .iter()
            .fold(ServingNutrition::default(), |total, entry| {
                let n = &entry.nutrition;
                ServingNutrition {
                    energy: policy.energy.apply(total.energy + n.energy),
                    protein: policy.protein.apply(total.protein + n.protein),
                    fat: policy.fat.apply(total.fat + n.fat),
                    carbohydrate: policy.carbohydrate.apply(total.carbohydrate + n.carbohydrate),
                    fiber: policy.fiber.apply(total.fiber + n.fiber),
                }
            })
    }

    /// Tolerance check of the menu total against a full-day target.
    pub fn compare_to_target(&self, target: &NutrientProfile) -> Vec<NutrientCheck> {
        compare_nutrition(&self.total_nutrition(), target, 1.0)
    }

    /// Tolerance check of the menu total against one occasion's share of a target.
    pub fn compare_to_meal_target(
        &self,
        target: &NutrientProfile,
        occasion: MealOccasion,
    ) -> Vec<NutrientCheck> {
        compare_nutrition(&self.total_nutrition(), target, occasion.share())
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Entries grouped by category, categories in order of first appearance.
    pub fn entries_by_category(&self) -> Vec<(&str, Vec<&MenuEntry>)> {
        let mut groups: Vec<(&str, Vec<&MenuEntry>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter().position(|(key, _)| *key == entry.category) {
                Some(i) => groups[i].1.push(entry),
                None => groups.push((entry.category.as_str(), vec![entry])),
            }
        }
        groups
    }

    /// Display name of an entry's category, falling back to its key.
    pub fn category_name<'s>(&'s self, key: &'s str) -> &'s str {
        self.reference
            .category(key)
            .map(|c| c.name.as_str())
            .unwrap_or(key)
    }

    /// Drop every entry and the menu name.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.name.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
