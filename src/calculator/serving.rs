use crate::calculator::rounding::SERVING_ROUNDING;
use crate::models::{FoodStandard, ServingNutrition};

/// Nutrients in `actual_weight` grams of a food whose `standard` nutrients
/// refer to `reference_weight` grams.
///
/// Energy is whole kcal, the gram fields keep one decimal. Weights are not
/// range-checked here; callers validate them first.
pub fn scale_serving(
    actual_weight: f64,
    reference_weight: f64,
    standard: &ServingNutrition,
) -> ServingNutrition {
    let ratio = actual_weight / reference_weight;

    ServingNutrition {
        energy: SERVING_ROUNDING.energy.apply(standard.energy * ratio),
        protein: SERVING_ROUNDING.protein.apply(standard.protein * ratio),
        fat: SERVING_ROUNDING.fat.apply(standard.fat * ratio),
        carbohydrate: SERVING_ROUNDING.carbohydrate.apply(standard.carbohydrate * ratio),
        fiber: SERVING_ROUNDING.fiber.apply(standard.fiber * ratio),
    }
}

impl FoodStandard {
    /// Nutrients in `actual_weight` grams of any food in this category.
    pub fn serving(&self, actual_weight: f64) -> ServingNutrition {
        scale_serving(actual_weight, self.reference_weight, &self.nutrients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> ServingNutrition {
        ServingNutrition {
            energy: 175.0,
            protein: 4.0,
            fat: 0.0,
            carbohydrate: 40.0,
            fiber: 0.0,
        }
    }

    #[test]
    fn test_identity_at_reference_weight() {
        let scaled = scale_serving(50.0, 50.0, &rice());
        assert_eq!(scaled, rice());
    }

    #[test]
    fn test_fifth_of_reference() {
        let scaled = scale_serving(10.0, 50.0, &rice());
        assert_eq!(scaled.energy, 35.0);
        assert_eq!(scaled.carbohydrate, 8.0);
        assert_eq!(scaled.protein, 0.8);
    }

    #[test]
    fn test_asymmetric_rounding() {
        // 37 g: energy 64.75 -> 65, protein 1.48 -> 1.5, carbohydrate 14.8
        let scaled = scale_serving(37.0, 100.0, &rice());
        assert_eq!(scaled.energy, 65.0);
        assert_eq!(scaled.protein, 1.5);
        assert_eq!(scaled.carbohydrate, 14.8);
    }

    #[test]
    fn test_standard_serving() {
        let standard = FoodStandard {
            reference_weight: 100.0,
            nutrients: rice(),
        };
        let scaled = standard.serving(150.0);
        assert_eq!(scaled.energy, 263.0);
        assert_eq!(scaled.carbohydrate, 60.0);
    }
}
