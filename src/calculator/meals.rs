use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::calculator::constants::*;
use crate::calculator::rounding::MEAL_SLOT_ROUNDING;
use crate::models::NutrientProfile;

/// The five eating occasions of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum MealOccasion {
    Breakfast,
    Lunch,
    Dinner,
    MorningSnack,
    AfternoonSnack,
}

impl MealOccasion {
    pub const ALL: [MealOccasion; 5] = [
        MealOccasion::Breakfast,
        MealOccasion::Lunch,
        MealOccasion::Dinner,
        MealOccasion::MorningSnack,
        MealOccasion::AfternoonSnack,
    ];

    /// Fraction of the daily target this occasion covers.
    pub fn share(self) -> f64 {
        match self {
            MealOccasion::Breakfast => BREAKFAST_SHARE,
            MealOccasion::Lunch => LUNCH_SHARE,
            MealOccasion::Dinner => DINNER_SHARE,
            MealOccasion::MorningSnack => MORNING_SNACK_SHARE,
            MealOccasion::AfternoonSnack => AFTERNOON_SNACK_SHARE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealOccasion::Breakfast => "Sarapan",
            MealOccasion::Lunch => "Makan Siang",
            MealOccasion::Dinner => "Makan Malam",
            MealOccasion::MorningSnack => "Snack Pagi",
            MealOccasion::AfternoonSnack => "Snack Sore",
        }
    }
}

impl fmt::Display for MealOccasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One nutrient split across the five occasions.
///
/// Each slot is rounded on its own, so the slots may not add up exactly to
/// the daily value. The drift is at most one unit per slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealContribution {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub morning_snack: f64,
    pub afternoon_snack: f64,
}

impl MealContribution {
    pub fn split(value: f64) -> Self {
        let slot = |occasion: MealOccasion| MEAL_SLOT_ROUNDING.apply(value * occasion.share());
        Self {
            breakfast: slot(MealOccasion::Breakfast),
            lunch: slot(MealOccasion::Lunch),
            dinner: slot(MealOccasion::Dinner),
            morning_snack: slot(MealOccasion::MorningSnack),
            afternoon_snack: slot(MealOccasion::AfternoonSnack),
        }
    }

    pub fn get(&self, occasion: MealOccasion) -> f64 {
        match occasion {
            MealOccasion::Breakfast => self.breakfast,
            MealOccasion::Lunch => self.lunch,
            MealOccasion::Dinner => self.dinner,
            MealOccasion::MorningSnack => self.morning_snack,
            MealOccasion::AfternoonSnack => self.afternoon_snack,
        }
    }

    /// Sum of the rounded slots.
    pub fn total(&self) -> f64 {
        MealOccasion::ALL.iter().map(|&o| self.get(o)).sum()
    }
}

/// Six parallel meal splits of a daily profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDistribution {
    pub energy: MealContribution,
    pub protein: MealContribution,
    pub fat: MealContribution,
    pub carbohydrate: MealContribution,
    pub fiber: MealContribution,
    pub water: MealContribution,
}

/// Split every scalar field of `profile` across the meal occasions.
///
/// Fat uses `fat.total`; omega targets are not distributed.
pub fn distribute_meals(profile: &NutrientProfile) -> MealDistribution {
    MealDistribution {
        energy: MealContribution::split(profile.energy),
        protein: MealContribution::split(profile.protein),
        fat: MealContribution::split(profile.fat.total),
        carbohydrate: MealContribution::split(profile.carbohydrate),
        fiber: MealContribution::split(profile.fiber),
        water: MealContribution::split(profile.water),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseNeeds, ProfileSource};

    #[test]
    fn test_shares_sum_to_one() {
        let sum: f64 = MealOccasion::ALL.iter().map(|o| o.share()).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_command_line_names() {
        assert_eq!(
            MealOccasion::from_str("morningSnack", false),
            Ok(MealOccasion::MorningSnack)
        );
        assert_eq!(MealOccasion::from_str("lunch", false), Ok(MealOccasion::Lunch));
        assert!(MealOccasion::from_str("morning-snack", false).is_err());
    }

    #[test]
    fn test_split_energy() {
        let split = MealContribution::split(2650.0);
        assert_eq!(split.breakfast, 663.0); // 662.5
        assert_eq!(split.lunch, 795.0);
        assert_eq!(split.dinner, 663.0);
        assert_eq!(split.morning_snack, 265.0);
        assert_eq!(split.afternoon_snack, 265.0);
        // accepted drift: 2651 vs 2650
        assert_eq!(split.total(), 2651.0);
    }

    #[test]
    fn test_drift_bounded() {
        for value in [0.0, 1.0, 7.0, 19.0, 37.0, 62.5, 215.0, 1350.0, 2425.0, 2650.0] {
            let split = MealContribution::split(value);
            assert!(
                (split.total() - value.round()).abs() <= MealOccasion::ALL.len() as f64,
                "value {}",
                value
            );
        }
    }

    #[test]
    fn test_distribute_uses_fat_total() {
        let base = BaseNeeds {
            energy: 2000.0,
            protein: 60.0,
            fat_total: 80.0,
            omega3: 1.6,
            omega6: 16.0,
            carbohydrate: 300.0,
            fiber: 30.0,
            water: 2000.0,
        };
        let profile = NutrientProfile::from_base(&base, "test", ProfileSource::Table);
        let meals = distribute_meals(&profile);
        assert_eq!(meals.fat.lunch, 24.0);
        assert_eq!(meals.water.breakfast, 500.0);
        assert_eq!(meals.fiber.morning_snack, 3.0);
    }
}
