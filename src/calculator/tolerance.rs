use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculator::constants::{TOLERANCE_MAX_RATIO, TOLERANCE_MIN_RATIO};
use crate::calculator::meals::MealOccasion;
use crate::error::{NutriError, Result};
use crate::models::{NutrientProfile, ServingNutrition};

/// Where an actual intake falls relative to the 80-120% band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceStatus {
    /// Below the band.
    Kurang,
    /// Inside the band, edges included.
    Sesuai,
    /// Above the band.
    Berlebih,
}

impl fmt::Display for ToleranceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ToleranceStatus::Kurang => "kurang",
            ToleranceStatus::Sesuai => "sesuai",
            ToleranceStatus::Berlebih => "berlebih",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceReport {
    pub actual: f64,
    pub target: f64,
    pub min: f64,
    pub max: f64,
    pub status: ToleranceStatus,
    /// round(actual / target * 100)
    pub percentage: f64,
}

/// Classify `actual` against the tolerance band around `target`.
///
/// A zero, negative or non-finite target has no meaningful band and yields
/// [`NutriError::UndefinedTarget`].
pub fn evaluate_tolerance(actual: f64, target: f64) -> Result<ToleranceReport> {
    if !target.is_finite() || target <= 0.0 {
        warn!(actual, target, "tolerance target undefined");
        return Err(NutriError::UndefinedTarget { actual });
    }

    let min = (target * TOLERANCE_MIN_RATIO).round();
    let max = (target * TOLERANCE_MAX_RATIO).round();

    let status = if actual < min {
        ToleranceStatus::Kurang
    } else if actual > max {
        ToleranceStatus::Berlebih
    } else {
        ToleranceStatus::Sesuai
    };

    Ok(ToleranceReport {
        actual,
        target,
        min,
        max,
        status,
        percentage: (actual / target * 100.0).round(),
    })
}

/// Evaluate against the share of a daily target one meal occasion covers.
pub fn evaluate_meal_tolerance(
    actual: f64,
    daily_target: f64,
    occasion: MealOccasion,
) -> Result<ToleranceReport> {
    evaluate_tolerance(actual, daily_target * occasion.share())
}

/// Nutrients compared when checking a menu against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Energy,
    Protein,
    Fat,
    Carbohydrate,
    Fiber,
}

impl Nutrient {
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Fiber,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Energy => "Energi",
            Nutrient::Protein => "Protein",
            Nutrient::Fat => "Lemak",
            Nutrient::Carbohydrate => "Karbohidrat",
            Nutrient::Fiber => "Serat",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Energy => "kkal",
            _ => "g",
        }
    }

    pub fn of_serving(self, nutrition: &ServingNutrition) -> f64 {
        match self {
            Nutrient::Energy => nutrition.energy,
            Nutrient::Protein => nutrition.protein,
            Nutrient::Fat => nutrition.fat,
            Nutrient::Carbohydrate => nutrition.carbohydrate,
            Nutrient::Fiber => nutrition.fiber,
        }
    }

    /// Daily target for this nutrient; fat compares against `fat.total`.
    pub fn of_profile(self, profile: &NutrientProfile) -> f64 {
        match self {
            Nutrient::Energy => profile.energy,
            Nutrient::Protein => profile.protein,
            Nutrient::Fat => profile.fat.total,
            Nutrient::Carbohydrate => profile.carbohydrate,
            Nutrient::Fiber => profile.fiber,
        }
    }
}

/// Outcome of comparing one nutrient. `report` is `None` when the target is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientCheck {
    pub nutrient: Nutrient,
    pub actual: f64,
    pub target: f64,
    pub report: Option<ToleranceReport>,
}

/// Compare intake against `share` of a daily target, nutrient by nutrient.
///
/// A nutrient with a zero target (e.g. infant fiber) is reported without a
/// band instead of failing the whole comparison.
pub fn compare_nutrition(
    actual: &ServingNutrition,
    target: &NutrientProfile,
    share: f64,
) -> Vec<NutrientCheck> {
    Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            let actual = nutrient.of_serving(actual);
            let target = nutrient.of_profile(target) * share;
            NutrientCheck {
                nutrient,
                actual,
                target,
                report: evaluate_tolerance(actual, target).ok(),
            }
        })
        .collect()
}
