use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::constants::CHILD_MAX_AGE;
use Bound::{Exclusive, Inclusive};

/// Coarse age category; selects the sub-table a bracket lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "children")]
    Child,
    #[serde(rename = "adult")]
    Adult,
}

impl AgeCategory {
    pub const ALL: [AgeCategory; 2] = [AgeCategory::Child, AgeCategory::Adult];

    /// Child up to and including age 9, adult above.
    pub fn for_age(age: f64) -> Self {
        if age <= CHILD_MAX_AGE {
            AgeCategory::Child
        } else {
            AgeCategory::Adult
        }
    }
}

/// Whether a bracket edge admits the age lying exactly on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exclusive,
    Inclusive,
}

/// A named age interval of the needs table.
///
/// Consecutive brackets share an edge, so together they cover every
/// non-negative age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBracket {
    /// Table key, e.g. "19-29years".
    pub key: &'static str,
    /// Human-readable name, e.g. "19-29 tahun".
    pub display: &'static str,
    pub min_age: f64,
    pub max_age: f64,
    pub lower: Bound,
    pub upper: Bound,
}

impl AgeBracket {
    /// Whether `age` falls at or below this bracket's upper edge.
    fn admits(&self, age: f64) -> bool {
        match self.upper {
            Bound::Exclusive => age < self.max_age,
            Bound::Inclusive => age <= self.max_age,
        }
    }

    /// Whether any age of `[start, end]` lies inside this bracket.
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        let below_end = match self.lower {
            Bound::Exclusive => self.min_age < end,
            Bound::Inclusive => self.min_age <= end,
        };
        let above_start = match self.upper {
            Bound::Exclusive => self.max_age > start,
            Bound::Inclusive => self.max_age >= start,
        };
        below_end && above_start
    }

    /// Sub-table this bracket's rows belong in.
    pub fn category(&self) -> AgeCategory {
        AgeCategory::for_age(self.max_age)
    }
}

const fn bracket(
    key: &'static str,
    display: &'static str,
    min_age: f64,
    max_age: f64,
    lower: Bound,
    upper: Bound,
) -> AgeBracket {
    AgeBracket {
        key,
        display,
        min_age,
        max_age,
        lower,
        upper,
    }
}

/// All brackets in resolution order.
///
/// Infant brackets follow the resolver: anything under 1 year is "0-5months"
/// and anything under 2 is "6-11months". From there on each bracket starts
/// just above the previous one's upper edge.
pub static BRACKETS: [AgeBracket; 13] = [
    bracket("0-5months", "0-5 bulan", 0.0, 1.0, Inclusive, Exclusive),
    bracket("6-11months", "6-11 bulan", 1.0, 2.0, Inclusive, Exclusive),
    bracket("1-3years", "1-3 tahun", 2.0, 3.0, Inclusive, Inclusive),
    bracket("4-6years", "4-6 tahun", 3.0, 6.0, Exclusive, Inclusive),
    bracket("7-9years", "7-9 tahun", 6.0, 9.0, Exclusive, Inclusive),
    bracket("10-12years", "10-12 tahun", 9.0, 12.0, Exclusive, Inclusive),
    bracket("13-15years", "13-15 tahun", 12.0, 15.0, Exclusive, Inclusive),
    bracket("16-18years", "16-18 tahun", 15.0, 18.0, Exclusive, Inclusive),
    bracket("19-29years", "19-29 tahun", 18.0, 29.0, Exclusive, Inclusive),
    bracket("30-49years", "30-49 tahun", 29.0, 49.0, Exclusive, Inclusive),
    bracket("50-64years", "50-64 tahun", 49.0, 64.0, Exclusive, Inclusive),
    bracket("65-80years", "65-80 tahun", 64.0, 80.0, Exclusive, Inclusive),
    bracket("80+years", "80+ tahun", 80.0, f64::INFINITY, Exclusive, Inclusive),
];

/// Map an age in years to its bracket and coarse category.
///
/// Total over non-negative ages; the first bracket whose upper edge admits
/// the age wins, so boundary ages resolve to the lower bracket.
pub fn resolve_bracket(age: f64) -> (&'static AgeBracket, AgeCategory) {
    let bracket = BRACKETS
        .iter()
        .find(|b| b.admits(age))
        .unwrap_or(&BRACKETS[BRACKETS.len() - 1]);
    let category = AgeCategory::for_age(age);
    debug!(age, bracket = bracket.key, ?category, "resolved age bracket");
    (bracket, category)
}

/// Look up a bracket by its table key.
pub fn bracket_by_key(key: &str) -> Option<&'static AgeBracket> {
    BRACKETS.iter().find(|b| b.key == key)
}

/// Brackets overlapping `[start, end]`, in table order.
pub fn brackets_overlapping(start: f64, end: f64) -> Vec<&'static AgeBracket> {
    BRACKETS.iter().filter(|b| b.overlaps(start, end)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_resolve_low() {
        assert_eq!(resolve_bracket(3.0).0.key, "1-3years");
        assert_eq!(resolve_bracket(6.0).0.key, "4-6years");
        assert_eq!(resolve_bracket(9.0).0.key, "7-9years");
        assert_eq!(resolve_bracket(12.0).0.key, "10-12years");
        assert_eq!(resolve_bracket(29.0).0.key, "19-29years");
        assert_eq!(resolve_bracket(80.0).0.key, "65-80years");
        assert_eq!(resolve_bracket(80.5).0.key, "80+years");
    }

    #[test]
    fn test_infants() {
        assert_eq!(resolve_bracket(0.0).0.key, "0-5months");
        assert_eq!(resolve_bracket(0.9).0.key, "0-5months");
        assert_eq!(resolve_bracket(1.0).0.key, "6-11months");
        assert_eq!(resolve_bracket(1.5).0.key, "6-11months");
        assert_eq!(resolve_bracket(2.0).0.key, "1-3years");
    }

    #[test]
    fn test_category_flag() {
        assert_eq!(resolve_bracket(9.0).1, AgeCategory::Child);
        assert_eq!(resolve_bracket(9.5).1, AgeCategory::Adult);
        assert_eq!(resolve_bracket(10.0).1, AgeCategory::Adult);
    }

    #[test]
    fn test_fractional_between_labels() {
        assert_eq!(resolve_bracket(3.5).0.key, "4-6years");
        assert_eq!(resolve_bracket(12.5).0.key, "13-15years");
    }

    #[test]
    fn test_every_bracket_resolves_to_itself() {
        for b in BRACKETS.iter() {
            let bottom = match b.lower {
                Bound::Exclusive => b.min_age + 0.01,
                Bound::Inclusive => b.min_age,
            };
            let top = if b.max_age.is_finite() { b.max_age } else { 120.0 };
            let top = match b.upper {
                Bound::Exclusive => top - 0.01,
                Bound::Inclusive => top,
            };
            let mid = (bottom + top) / 2.0;
            for age in [bottom, mid, top] {
                assert_eq!(resolve_bracket(age).0.key, b.key, "age {}", age);
            }
        }
    }

    #[test]
    fn test_brackets_are_contiguous() {
        for pair in BRACKETS.windows(2) {
            assert_eq!(pair[0].max_age, pair[1].min_age, "{}", pair[1].key);
            assert_ne!(pair[0].upper, pair[1].lower, "{}", pair[1].key);
        }
    }

    #[test]
    fn test_overlap_agrees_with_resolution() {
        for age in [0.5, 1.0, 3.5, 6.5, 9.2, 18.5, 29.5, 80.2, 95.0] {
            let overlapping = brackets_overlapping(age, age);
            assert_eq!(overlapping.len(), 1, "age {}", age);
            assert_eq!(overlapping[0].key, resolve_bracket(age).0.key, "age {}", age);
        }
    }

    #[test]
    fn test_overlap_inside_former_gap() {
        let keys: Vec<&str> = brackets_overlapping(3.2, 3.8)
            .into_iter()
            .map(|b| b.key)
            .collect();
        assert_eq!(keys, vec!["4-6years"]);
        assert!(brackets_overlapping(-5.0, -1.0).is_empty());
    }

    #[test]
    fn test_bracket_category() {
        assert_eq!(bracket_by_key("7-9years").unwrap().category(), AgeCategory::Child);
        assert_eq!(bracket_by_key("10-12years").unwrap().category(), AgeCategory::Adult);
        assert_eq!(bracket_by_key("80+years").unwrap().category(), AgeCategory::Adult);
    }

    #[test]
    fn test_overlap_seven_to_twelve() {
        let keys: Vec<&str> = brackets_overlapping(7.0, 12.0)
            .into_iter()
            .map(|b| b.key)
            .collect();
        assert_eq!(keys, vec!["7-9years", "10-12years"]);
    }

    #[test]
    fn test_bracket_by_key() {
        assert_eq!(bracket_by_key("80+years").unwrap().display, "80+ tahun");
        assert!(bracket_by_key("nope").is_none());
    }
}
