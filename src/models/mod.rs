mod food;
mod profile;

pub use food::{FoodCategory, FoodItem, FoodStandard, ServingNutrition};
pub use profile::{BaseNeeds, FatProfile, Gender, NutrientProfile, ProfileSource};
