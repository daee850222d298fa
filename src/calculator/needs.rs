use tracing::{debug, warn};

use crate::calculator::constants::{DEFAULT_NEEDS, FALLBACK_BRACKET, RANGE_FALLBACK_NEEDS};
use crate::calculator::rounding::AVERAGE_ROUNDING;
use crate::models::{Gender, NutrientProfile, ProfileSource};
use crate::reference::{
    brackets_overlapping, resolve_bracket, AgeCategory, ReferenceTable, DEFAULT_REFERENCE,
};

/// Derives daily nutrient targets from the needs table.
///
/// Lookups never fail: a missing row falls back to the gender's adult
/// 19-29 years row, then to [`DEFAULT_NEEDS`]. The tier that answered is
/// recorded in [`NutrientProfile::source`].
#[derive(Debug, Clone, Copy)]
pub struct NeedsCalculator<'a> {
    table: &'a ReferenceTable,
}

impl NeedsCalculator<'static> {
    /// Calculator over the embedded reference data.
    pub fn embedded() -> Self {
        Self::new(&DEFAULT_REFERENCE)
    }
}

impl<'a> NeedsCalculator<'a> {
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    /// Needs for one person.
    pub fn compute_needs(&self, gender: Gender, age: f64) -> NutrientProfile {
        let (bracket, category) = resolve_bracket(age);

        if let Some(row) = self.table.lookup(gender, category, bracket.key) {
            let label = format!("{} {} tahun ({})", gender.label(), age, bracket.display);
            return NutrientProfile::from_base(row, label, ProfileSource::Table);
        }

        let label = format!("{} {} tahun", gender.label(), age);
        match self.table.lookup(gender, AgeCategory::Adult, FALLBACK_BRACKET) {
            Some(row) => {
                warn!(
                    %gender,
                    age,
                    bracket = bracket.key,
                    "no needs row, using adult {} row",
                    FALLBACK_BRACKET
                );
                NutrientProfile::from_base(row, label, ProfileSource::AdultFallback)
            }
            None => {
                warn!(%gender, age, bracket = bracket.key, "no needs row, using default profile");
                NutrientProfile::from_base(&DEFAULT_NEEDS, label, ProfileSource::Default)
            }
        }
    }

    /// Mean of the male and female rows for the bracket `age` falls in.
    ///
    /// A missing row counts as [`DEFAULT_NEEDS`].
    pub fn compute_average_needs(&self, age: f64) -> NutrientProfile {
        let (bracket, category) = resolve_bracket(age);

        let rows: Vec<NutrientProfile> = Gender::ALL
            .iter()
            .map(|&gender| match self.table.lookup(gender, category, bracket.key) {
                Some(row) => NutrientProfile::from_base(row, "", ProfileSource::Table),
                None => {
                    debug!(%gender, bracket = bracket.key, "averaging with default profile");
                    NutrientProfile::from_base(&DEFAULT_NEEDS, "", ProfileSource::Default)
                }
            })
            .collect();

        let label = format!("Rata-rata {} tahun ({})", age, bracket.display);
        let average = NutrientProfile::mean(&rows).unwrap_or_else(|| {
            NutrientProfile::from_base(&DEFAULT_NEEDS, "", ProfileSource::Default)
        });

        average
            .rounded(&AVERAGE_ROUNDING)
            .with_label(label, ProfileSource::GenderAverage)
    }

    /// Unweighted mean over every row of every bracket overlapping the range.
    ///
    /// A reversed range is swapped.
    pub fn compute_custom_range_needs(&self, start_age: f64, end_age: f64) -> NutrientProfile {
        let (start, end) = if start_age > end_age {
            (end_age, start_age)
        } else {
            (start_age, end_age)
        };

        let brackets = brackets_overlapping(start, end);
        if brackets.is_empty() {
            warn!(start, end, "no bracket overlaps age range");
            return NutrientProfile::from_base(
                &RANGE_FALLBACK_NEEDS,
                format!("Rata-rata umur {}-{} tahun (fallback)", start, end),
                ProfileSource::RangeFallback,
            );
        }

        let mut rows = Vec::new();
        let mut names = Vec::new();
        for bracket in brackets {
            let found = self.table.rows_for_bracket(bracket.key);
            if found.is_empty() {
                continue;
            }
            names.push(bracket.display);
            rows.extend(
                found
                    .into_iter()
                    .map(|(_, row)| NutrientProfile::from_base(row, "", ProfileSource::Table)),
            );
        }

        match NutrientProfile::mean(&rows) {
            Some(average) => {
                debug!(start, end, rows = rows.len(), "averaged age range");
                average.rounded(&AVERAGE_ROUNDING).with_label(
                    format!("Rata-rata umur {}-{} tahun ({})", start, end, names.join(", ")),
                    ProfileSource::RangeAverage,
                )
            }
            None => {
                warn!(start, end, "age range has no needs data");
                NutrientProfile::from_base(
                    &RANGE_FALLBACK_NEEDS,
                    format!("Rata-rata umur {}-{} tahun (no data)", start, end),
                    ProfileSource::RangeNoData,
                )
            }
        }
    }

    /// Target for menu planning: individual needs for a child with a known
    /// gender, the gender average otherwise.
    pub fn target_needs(&self, age: f64, gender: Option<Gender>) -> NutrientProfile {
        match gender {
            Some(gender) if AgeCategory::for_age(age) == AgeCategory::Child => {
                self.compute_needs(gender, age)
            }
            _ => self.compute_average_needs(age),
        }
    }
}
