use crate::models::BaseNeeds;

/// Oldest age (inclusive) that uses the children sub-table.
pub const CHILD_MAX_AGE: f64 = 9.0;

/// Bracket used when the requested bracket has no row for a gender.
pub const FALLBACK_BRACKET: &str = "19-29years";

/// Last-resort profile for individual and gender-averaged needs.
pub const DEFAULT_NEEDS: BaseNeeds = BaseNeeds {
    energy: 2650.0,
    protein: 65.0,
    fat_total: 75.0,
    omega3: 1.6,
    omega6: 17.0,
    carbohydrate: 430.0,
    fiber: 37.0,
    water: 2500.0,
};

/// Profile returned for a custom age range with no usable brackets.
pub const RANGE_FALLBACK_NEEDS: BaseNeeds = BaseNeeds {
    energy: 2000.0,
    protein: 50.0,
    fat_total: 65.0,
    omega3: 1.2,
    omega6: 12.0,
    carbohydrate: 300.0,
    fiber: 28.0,
    water: 2000.0,
};

// ─────────────────────────────────────────────────────────────────────────────
// Meal distribution
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.30;
pub const DINNER_SHARE: f64 = 0.25;
pub const MORNING_SNACK_SHARE: f64 = 0.10;
pub const AFTERNOON_SNACK_SHARE: f64 = 0.10;

// ─────────────────────────────────────────────────────────────────────────────
// Tolerance band
// ─────────────────────────────────────────────────────────────────────────────

/// Lower edge of the acceptance window, as a fraction of target.
pub const TOLERANCE_MIN_RATIO: f64 = 0.8;

/// Upper edge of the acceptance window, as a fraction of target.
pub const TOLERANCE_MAX_RATIO: f64 = 1.2;

/// Minimum Jaro-Winkler similarity for a food name suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
