//! Per-field rounding policies.
//!
//! Output compatibility depends on these exactly: serving energy is whole kcal
//! while serving grams keep one decimal, averaged omega targets keep one
//! decimal while everything else in an averaged profile is whole.

/// How a single value is rounded. Halves round away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Nearest integer.
    Whole,
    /// Nearest tenth.
    Tenth,
    /// Left as computed.
    Exact,
}

impl Rounding {
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Whole => value.round(),
            Rounding::Tenth => (value * 10.0).round() / 10.0,
            Rounding::Exact => value,
        }
    }
}

/// Rounding for each field of a `NutrientProfile`.
#[derive(Debug, Clone, Copy)]
pub struct ProfileRounding {
    pub energy: Rounding,
    pub protein: Rounding,
    pub fat_total: Rounding,
    /// Applies to both omega-3 and omega-6.
    pub omega: Rounding,
    pub carbohydrate: Rounding,
    pub fiber: Rounding,
    pub water: Rounding,
}

/// Gender and age-range averages.
pub const AVERAGE_ROUNDING: ProfileRounding = ProfileRounding {
    energy: Rounding::Whole,
    protein: Rounding::Whole,
    fat_total: Rounding::Whole,
    omega: Rounding::Tenth,
    carbohydrate: Rounding::Whole,
    fiber: Rounding::Whole,
    water: Rounding::Whole,
};

/// Rounding for each field of a `ServingNutrition`.
#[derive(Debug, Clone, Copy)]
pub struct ServingRounding {
    pub energy: Rounding,
    pub protein: Rounding,
    pub fat: Rounding,
    pub carbohydrate: Rounding,
    pub fiber: Rounding,
}

/// Scaled servings, and menu totals after summation.
pub const SERVING_ROUNDING: ServingRounding = ServingRounding {
    energy: Rounding::Whole,
    protein: Rounding::Tenth,
    fat: Rounding::Tenth,
    carbohydrate: Rounding::Tenth,
    fiber: Rounding::Tenth,
};

/// Menu totals: energy is an integer sum of already-whole values and is not re-rounded.
pub const MENU_TOTAL_ROUNDING: ServingRounding = ServingRounding {
    energy: Rounding::Exact,
    ..SERVING_ROUNDING
};

/// Every meal slot value is whole.
pub const MEAL_SLOT_ROUNDING: Rounding = Rounding::Whole;
