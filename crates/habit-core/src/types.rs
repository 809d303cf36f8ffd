use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Closed set of habit categories. Serialized by variant name ("Health",
/// "Productivity", ...) — the same spelling the seed data and coach summaries
/// use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Health,
    Productivity,
    Mindfulness,
    Learning,
    Other,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Health,
            Category::Productivity,
            Category::Mindfulness,
            Category::Learning,
            Category::Other,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Productivity => "Productivity",
            Category::Mindfulness => "Mindfulness",
            Category::Learning => "Learning",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::HabitError;

    /// Case-insensitive; anything outside the closed set is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "productivity" => Ok(Category::Productivity),
            "mindfulness" => Ok(Category::Mindfulness),
            "learning" => Ok(Category::Learning),
            "other" => Ok(Category::Other),
            _ => Err(crate::error::HabitError::InvalidCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Discrete level derived from the aggregate completion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Rookie,
    Contender,
    Elite,
    Supreme,
}

impl Tier {
    /// Ordered lookup, highest threshold first so ties resolve upward:
    /// >= 91 Supreme, >= 71 Elite, >= 41 Contender, else Rookie.
    pub fn from_rate(rate: u32) -> Tier {
        if rate >= 91 {
            Tier::Supreme
        } else if rate >= 71 {
            Tier::Elite
        } else if rate >= 41 {
            Tier::Contender
        } else {
            Tier::Rookie
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Rookie => "Rookie",
            Tier::Contender => "Contender",
            Tier::Elite => "Elite",
            Tier::Supreme => "Supreme",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_parses_closed_set() {
        for &cat in Category::all() {
            assert_eq!(Category::from_str(cat.as_str()).unwrap(), cat);
        }
        assert_eq!(Category::from_str("health").unwrap(), Category::Health);
        assert_eq!(Category::from_str("LEARNING").unwrap(), Category::Learning);
    }

    #[test]
    fn category_rejects_unknown() {
        assert!(Category::from_str("Fitness").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn category_serializes_by_variant_name() {
        let json = serde_json::to_string(&Category::Mindfulness).unwrap();
        assert_eq!(json, "\"Mindfulness\"");
        let parsed: Category = serde_json::from_str("\"Productivity\"").unwrap();
        assert_eq!(parsed, Category::Productivity);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::from_rate(0), Tier::Rookie);
        assert_eq!(Tier::from_rate(40), Tier::Rookie);
        assert_eq!(Tier::from_rate(41), Tier::Contender);
        assert_eq!(Tier::from_rate(70), Tier::Contender);
        assert_eq!(Tier::from_rate(71), Tier::Elite);
        assert_eq!(Tier::from_rate(90), Tier::Elite);
        assert_eq!(Tier::from_rate(91), Tier::Supreme);
        assert_eq!(Tier::from_rate(150), Tier::Supreme);
    }
}
