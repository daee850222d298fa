pub mod constants;
pub mod meals;
pub mod needs;
pub mod rounding;
pub mod serving;
pub mod tolerance;

pub use constants::*;
pub use meals::{distribute_meals, MealContribution, MealDistribution, MealOccasion};
pub use needs::NeedsCalculator;
pub use rounding::{ProfileRounding, Rounding, ServingRounding};
pub use serving::scale_serving;
pub use tolerance::{
    compare_nutrition, evaluate_meal_tolerance, evaluate_tolerance, Nutrient, NutrientCheck,
    ToleranceReport, ToleranceStatus,
};
