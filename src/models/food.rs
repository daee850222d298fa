use serde::{Deserialize, Serialize};

/// Nutrient content of a serving, or of a category's reference weight.
///
/// Fat is a single scalar here; the omega split only exists on daily targets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ServingNutrition {
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub fiber: f64,
}

/// Food exchange standard for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodStandard {
    /// Weight in grams that `nutrients` refers to.
    pub reference_weight: f64,

    #[serde(flatten)]
    pub nutrients: ServingNutrition,
}

/// A catalog entry. `portion` is a household measure and purely informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub portion: String,
    /// Standard serving weight in grams.
    pub weight: f64,
}

impl FoodItem {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A food exchange group with its standard and its foods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCategory {
    pub key: String,
    pub name: String,
    pub standard: FoodStandard,
    pub foods: Vec<FoodItem>,
}

impl FoodCategory {
    /// Case-insensitive exact lookup by food name.
    pub fn find_food(&self, name: &str) -> Option<&FoodItem> {
        let wanted = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.key() == wanted)
    }
}
