use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::calculator::constants::FUZZY_MATCH_THRESHOLD;
use crate::error::{NutriError, Result};
use crate::models::{BaseNeeds, FoodCategory, FoodItem, Gender, ServingNutrition};
use crate::reference::brackets::{bracket_by_key, AgeCategory};

/// Rows of the needs table: gender → sub-table → bracket key → needs.
pub type NeedsTable = BTreeMap<Gender, BTreeMap<AgeCategory, BTreeMap<String, BaseNeeds>>>;

/// Static reference data: daily needs by gender and age, plus food exchange standards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTable {
    /// Schema version of the data file.
    #[serde(default)]
    pub version: u32,

    pub needs: NeedsTable,

    /// Food categories in display order.
    pub categories: Vec<FoodCategory>,
}

const EMBEDDED_REFERENCE: &str = include_str!("../../data/reference.json");

/// Reference data shipped with the crate, parsed on first use.
pub static DEFAULT_REFERENCE: LazyLock<ReferenceTable> = LazyLock::new(|| {
    ReferenceTable::from_json(EMBEDDED_REFERENCE).expect("embedded reference data is valid")
});

impl ReferenceTable {
    /// Parse and validate reference data from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: ReferenceTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Check structural constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        for (gender, sub_tables) in &self.needs {
            for (category, rows) in sub_tables {
                for (key, row) in rows {
                    let Some(bracket) = bracket_by_key(key) else {
                        return Err(NutriError::InvalidInput(format!(
                            "unknown age bracket '{}' for {}",
                            key, gender
                        )));
                    };
                    if bracket.category() != *category {
                        return Err(NutriError::InvalidInput(format!(
                            "age bracket '{}' for {} is filed under the wrong sub-table",
                            key, gender
                        )));
                    }
                    let values = [
                        row.energy,
                        row.protein,
                        row.fat_total,
                        row.omega3,
                        row.omega6,
                        row.carbohydrate,
                        row.fiber,
                        row.water,
                    ];
                    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                        return Err(NutriError::InvalidInput(format!(
                            "negative or non-finite needs for {} {}",
                            gender, key
                        )));
                    }
                }
            }
        }

        for category in &self.categories {
            let weight = category.standard.reference_weight;
            if !weight.is_finite() || weight <= 0.0 {
                return Err(NutriError::InvalidInput(format!(
                    "category '{}' has non-positive reference weight {}",
                    category.key, weight
                )));
            }
            if let Some(food) = category
                .foods
                .iter()
                .find(|f| !f.weight.is_finite() || f.weight <= 0.0)
            {
                return Err(NutriError::InvalidInput(format!(
                    "food '{}' in '{}' has non-positive weight",
                    food.name, category.key
                )));
            }
        }

        Ok(())
    }

    /// Exact row lookup.
    pub fn lookup(
        &self,
        gender: Gender,
        category: AgeCategory,
        bracket: &str,
    ) -> Option<&BaseNeeds> {
        self.needs.get(&gender)?.get(&category)?.get(bracket)
    }

    /// Every row stored under `bracket`, across genders and sub-tables.
    pub fn rows_for_bracket(&self, bracket: &str) -> Vec<(Gender, &BaseNeeds)> {
        let mut rows = Vec::new();
        for gender in Gender::ALL {
            for category in AgeCategory::ALL {
                if let Some(row) = self.lookup(gender, category, bracket) {
                    rows.push((gender, row));
                }
            }
        }
        rows
    }

    /// All food categories in display order.
    pub fn categories(&self) -> &[FoodCategory] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&FoodCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Find a category by key, failing with `UnknownCategory`.
    pub fn require_category(&self, key: &str) -> Result<&FoodCategory> {
        self.category(key)
            .ok_or_else(|| NutriError::UnknownCategory(key.to_string()))
    }

    /// Case-insensitive exact food lookup within a category.
    pub fn find_food(&self, category: &str, name: &str) -> Result<&FoodItem> {
        self.require_category(category)?
            .find_food(name)
            .ok_or_else(|| NutriError::FoodNotFound {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    /// Nutrients of `weight` grams of a catalog food; the food's standard
    /// weight when `weight` is `None`.
    pub fn serving_for(
        &self,
        category: &str,
        food: &str,
        weight: Option<f64>,
    ) -> Result<(&FoodItem, f64, ServingNutrition)> {
        let standard = self.require_category(category)?.standard;
        let item = self.find_food(category, food)?;
        let weight = weight.unwrap_or(item.weight);
        if !weight.is_finite() || weight <= 0.0 {
            return Err(NutriError::InvalidServingWeight(weight));
        }
        Ok((item, weight, standard.serving(weight)))
    }

    /// Foods in `category` whose names resemble `query`, best match first.
    pub fn suggest_foods(&self, category: &str, query: &str) -> Vec<&FoodItem> {
        let Some(category) = self.category(category) else {
            return Vec::new();
        };
        let query = query.trim().to_lowercase();

        let mut candidates: Vec<(&FoodItem, f64)> = category
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(f, _)| f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_reference_parses() {
        let table = &*DEFAULT_REFERENCE;
        assert_eq!(table.categories().len(), 9);
        assert!(table.lookup(Gender::Male, AgeCategory::Adult, "80+years").is_some());
    }

    #[test]
    fn test_female_adult_stops_at_19_29() {
        let table = &*DEFAULT_REFERENCE;
        assert!(table.lookup(Gender::Female, AgeCategory::Adult, "19-29years").is_some());
        assert!(table.lookup(Gender::Female, AgeCategory::Adult, "30-49years").is_none());
    }

    #[test]
    fn test_rows_for_bracket() {
        let table = &*DEFAULT_REFERENCE;
        assert_eq!(table.rows_for_bracket("7-9years").len(), 2);
        assert_eq!(table.rows_for_bracket("50-64years").len(), 1);
    }

    #[test]
    fn test_find_food() {
        let table = &*DEFAULT_REFERENCE;
        let rice = table.find_food("carbohydrate", "nasi beras giling putih").unwrap();
        assert_eq!(rice.weight, 100.0);

        assert!(matches!(
            table.find_food("carbohydrate", "Tahu"),
            Err(NutriError::FoodNotFound { .. })
        ));
        assert!(matches!(
            table.find_food("dessert", "Tahu"),
            Err(NutriError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_suggest_foods_fuzzy() {
        let table = &*DEFAULT_REFERENCE;
        let suggestions = table.suggest_foods("plantProtein", "tahu");
        assert_eq!(suggestions[0].name, "Tahu");
        assert!(table.suggest_foods("unknown", "tahu").is_empty());
    }

    #[test]
    fn test_validate_rejects_zero_reference_weight() {
        let json = r#"{
            "needs": {},
            "categories": [
                {"key": "fruit", "name": "Buah", "standard": {"reference_weight": 0, "energy": 50, "protein": 0, "fat": 0, "carbohydrate": 10, "fiber": 0}, "foods": []}
            ]
        }"#;
        assert!(matches!(
            ReferenceTable::from_json(json),
            Err(NutriError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_bracket() {
        let json = r#"{
            "needs": {"male": {"adult": {"20-25years": {"energy": 1, "protein": 1, "fat_total": 1, "omega3": 1, "omega6": 1, "carbohydrate": 1, "fiber": 1, "water": 1}}}},
            "categories": []
        }"#;
        assert!(ReferenceTable::from_json(json).is_err());
    }

    #[test]
    fn test_serving_for_defaults_to_food_weight() {
        let table = &*DEFAULT_REFERENCE;
        let (item, weight, nutrition) = table.serving_for("fruit", "pisang ambon", None).unwrap();
        assert_eq!(item.name, "Pisang Ambon");
        assert_eq!(weight, 100.0);
        assert_eq!(nutrition.energy, 50.0);

        let (_, _, half) = table.serving_for("fruit", "Pisang Ambon", Some(50.0)).unwrap();
        assert_eq!(half.energy, 25.0);
        assert_eq!(half.carbohydrate, 5.0);

        assert!(matches!(
            table.serving_for("fruit", "Pisang Ambon", Some(0.0)),
            Err(NutriError::InvalidServingWeight(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bracket_in_wrong_sub_table() {
        let json = r#"{
            "needs": {"female": {"children": {"30-49years": {"energy": 1, "protein": 1, "fat_total": 1, "omega3": 1, "omega6": 1, "carbohydrate": 1, "fiber": 1, "water": 1}}}},
            "categories": []
        }"#;
        assert!(matches!(
            ReferenceTable::from_json(json),
            Err(NutriError::InvalidInput(_))
        ));
    }
}
