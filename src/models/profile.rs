use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::rounding::ProfileRounding;
use crate::error::NutriError;

/// Biological sex used to pick a column of the needs table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Human-readable label used in profile categories.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Laki-laki",
            Gender::Female => "Perempuan",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "laki-laki" => Ok(Gender::Male),
            "female" | "f" | "perempuan" => Ok(Gender::Female),
            other => Err(NutriError::InvalidInput(format!(
                "unknown gender '{}', expected 'male' or 'female'",
                other
            ))),
        }
    }
}

/// Which lookup tier or derivation produced a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    /// Exact (gender, category, bracket) hit in the needs table.
    Table,
    /// Bracket missing; the gender's adult 19-29 years row was used.
    AdultFallback,
    /// Nothing usable in the table; the hardcoded default was used.
    Default,
    /// Mean of the male and female rows for one bracket.
    GenderAverage,
    /// Mean of every row collected over a custom age range.
    RangeAverage,
    /// No bracket overlaps the requested range.
    RangeFallback,
    /// Brackets overlap the range but none has table data.
    RangeNoData,
}

impl ProfileSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileSource::Table => "table",
            ProfileSource::AdultFallback => "adult_fallback",
            ProfileSource::Default => "default",
            ProfileSource::GenderAverage => "gender_average",
            ProfileSource::RangeAverage => "range_average",
            ProfileSource::RangeFallback => "range_fallback",
            ProfileSource::RangeNoData => "range_no_data",
        }
    }
}

/// Fat target. Omega-3 and omega-6 are independent sub-targets, not parts of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FatProfile {
    pub total: f64,
    pub omega3: f64,
    pub omega6: f64,
}

/// One row of the needs table, in the flat shape the reference data uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseNeeds {
    pub energy: f64,
    pub protein: f64,
    pub fat_total: f64,
    pub omega3: f64,
    pub omega6: f64,
    pub carbohydrate: f64,
    pub fiber: f64,
    pub water: f64,
}

/// Daily nutrient requirement.
///
/// Units: energy in kcal, protein/fat/carbohydrate/fiber in grams, water in ml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub energy: f64,
    pub protein: f64,
    pub fat: FatProfile,
    pub carbohydrate: f64,
    pub fiber: f64,
    pub water: f64,
    /// Describes how the profile was derived, e.g. "Laki-laki 25 tahun (19-29 tahun)".
    pub category: String,
    pub source: ProfileSource,
}

impl NutrientProfile {
    pub fn from_base(base: &BaseNeeds, category: impl Into<String>, source: ProfileSource) -> Self {
        Self {
            energy: base.energy,
            protein: base.protein,
            fat: FatProfile {
                total: base.fat_total,
                omega3: base.omega3,
                omega6: base.omega6,
            },
            carbohydrate: base.carbohydrate,
            fiber: base.fiber,
            water: base.water,
            category: category.into(),
            source,
        }
    }

    /// Elementwise sum. Category and source are taken from `self`.
    pub fn add(&self, other: &NutrientProfile) -> Self {
        Self {
            energy: self.energy + other.energy,
            protein: self.protein + other.protein,
            fat: FatProfile {
                total: self.fat.total + other.fat.total,
                omega3: self.fat.omega3 + other.fat.omega3,
                omega6: self.fat.omega6 + other.fat.omega6,
            },
            carbohydrate: self.carbohydrate + other.carbohydrate,
            fiber: self.fiber + other.fiber,
            water: self.water + other.water,
            category: self.category.clone(),
            source: self.source,
        }
    }

    /// Multiply every numeric field by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            energy: self.energy * factor,
            protein: self.protein * factor,
            fat: FatProfile {
                total: self.fat.total * factor,
                omega3: self.fat.omega3 * factor,
                omega6: self.fat.omega6 * factor,
            },
            carbohydrate: self.carbohydrate * factor,
            fiber: self.fiber * factor,
            water: self.water * factor,
            category: self.category.clone(),
            source: self.source,
        }
    }

    /// Unweighted elementwise mean, unrounded. Returns `None` for an empty slice.
    pub fn mean<'a, I>(profiles: I) -> Option<NutrientProfile>
    where
        I: IntoIterator<Item = &'a NutrientProfile>,
    {
        let mut iter = profiles.into_iter();
        let first = iter.next()?.clone();
        let (sum, count) = iter.fold((first, 1usize), |(acc, n), p| (acc.add(p), n + 1));
        Some(sum.scale(1.0 / count as f64))
    }

    /// Apply a per-field rounding policy.
    pub fn rounded(&self, policy: &ProfileRounding) -> Self {
        let rounded = Self {
            energy: policy.energy.apply(self.energy),
            protein: policy.protein.apply(self.protein),
            fat: FatProfile {
                total: policy.fat_total.apply(self.fat.total),
                omega3: policy.omega.apply(self.fat.omega3),
                omega6: policy.omega.apply(self.fat.omega6),
            },
            carbohydrate: policy.carbohydrate.apply(self.carbohydrate),
            fiber: policy.fiber.apply(self.fiber),
            water: policy.water.apply(self.water),
            category: self.category.clone(),
            source: self.source,
        };
        debug_assert!(rounded.is_valid(), "rounded profile out of range: {:?}", rounded);
        rounded
    }

    pub fn with_label(mut self, category: impl Into<String>, source: ProfileSource) -> Self {
        self.category = category.into();
        self.source = source;
        self
    }

    /// True when every numeric field is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [
            self.energy,
            self.protein,
            self.fat.total,
            self.fat.omega3,
            self.fat.omega6,
            self.carbohydrate,
            self.fiber,
            self.water,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}
