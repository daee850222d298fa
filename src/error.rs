use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No food category selected")]
    NoCategorySelected,

    #[error("No food selected")]
    NoFoodSelected,

    #[error("Unknown food category: {0}")]
    UnknownCategory(String),

    #[error("Food not found in {category}: {name}")]
    FoodNotFound { category: String, name: String },

    #[error("Serving weight must be positive, got {0}")]
    InvalidServingWeight(f64),

    #[error("Target is zero or not finite; cannot evaluate actual value {actual}")]
    UndefinedTarget { actual: f64 },
}

pub type Result<T> = std::result::Result<T, NutriError>;
