use crate::dates;
use crate::types::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Calendar days examined by the cold-streak alarm.
pub const BURN_LOOKBACK_DAYS: u32 = 3;

// ---------------------------------------------------------------------------
// Habit
// ---------------------------------------------------------------------------

/// A recurring action tracked by calendar-date completion records.
///
/// `completed_dates` has set semantics: each `YYYY-MM-DD` string appears at
/// most once and order carries no meaning. Malformed strings are stored
/// as-is — comparisons treat them as opaque, so they simply never match a
/// real calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub monthly_goal: u32,
    #[serde(default)]
    pub completed_dates: BTreeSet<String>,
    #[serde(default)]
    pub non_negotiable: bool,
}

impl Habit {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        monthly_goal: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            monthly_goal,
            completed_dates: BTreeSet::new(),
            non_negotiable: false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed_dates.len()
    }

    pub fn is_completed(&self, date: &str) -> bool {
        self.completed_dates.contains(date)
    }

    /// Completions as a percent of the monthly goal, rounded. A stored goal
    /// of 0 is treated as 1. Deliberately uncapped: over-completing a goal
    /// reads above 100.
    pub fn percent(&self) -> u32 {
        let goal = self.monthly_goal.max(1);
        ((100.0 * self.completed_count() as f64) / f64::from(goal)).round() as u32
    }

    /// Cold-streak alarm: true iff every one of the
    /// [`BURN_LOOKBACK_DAYS`] calendar days strictly before `reference` is
    /// missing from `completed_dates`. Partial misses are not risk. The
    /// lookback uses real calendar arithmetic and crosses month boundaries.
    pub fn burn_risk(&self, reference: NaiveDate) -> bool {
        let mut day = reference;
        for _ in 0..BURN_LOOKBACK_DAYS {
            day = match day.pred_opt() {
                Some(d) => d,
                None => return false,
            };
            if self.is_completed(&dates::format_date(day)) {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
