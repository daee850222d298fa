pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod reference;

pub use calculator::NeedsCalculator;
pub use error::{NutriError, Result};
pub use menu::MenuSession;
pub use models::{FoodCategory, FoodItem, Gender, NutrientProfile, ServingNutrition};
pub use reference::{ReferenceTable, DEFAULT_REFERENCE};
