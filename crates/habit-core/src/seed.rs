//! Initial-data provider: the habit list and sample journal entry every
//! session starts from. Embedded as YAML so the records deserialize through
//! the same serde path as any external representation.

use crate::error::Result;
use crate::habit::Habit;
use crate::reflection::ReflectionEntry;
use serde::Deserialize;

const SEED_YAML: &str = r#"
habits:
  - id: "1"
    name: Morning Meditation (15m)
    category: Mindfulness
    monthly_goal: 25
    completed_dates:
      - "2023-10-01"
      - "2023-10-02"
      - "2023-10-04"
      - "2023-10-05"
      - "2023-10-06"
    non_negotiable: true
  - id: "2"
    name: Deep Work (2 hrs)
    category: Productivity
    monthly_goal: 20
    completed_dates:
      - "2023-10-01"
      - "2023-10-02"
      - "2023-10-03"
      - "2023-10-05"
    non_negotiable: true
  - id: "3"
    name: No Sugar
    category: Health
    monthly_goal: 28
    completed_dates:
      - "2023-10-01"
      - "2023-10-03"
      - "2023-10-04"
  - id: "4"
    name: Read 20 Pages
    category: Learning
    monthly_goal: 15
    completed_dates:
      - "2023-10-02"
      - "2023-10-06"
  - id: "5"
    name: Gym / Workout
    category: Health
    monthly_goal: 20
    completed_dates:
      - "2023-10-01"
      - "2023-10-03"
      - "2023-10-05"
    non_negotiable: true

reflection:
  date: "2023-10-06"
  screen_time:
    morning: 15
    day: 120
    evening: 45
    night: 0
  mood_score: 8
  achievements:
    - Finished project beta
    - Ran 5k in under 25 mins
  notes: Felt very energetic today. The morning meditation is really helping with focus.
"#;

#[derive(Debug, Deserialize)]
struct SeedData {
    habits: Vec<Habit>,
    reflection: ReflectionEntry,
}

fn parse_seed() -> Result<SeedData> {
    Ok(serde_yaml::from_str(SEED_YAML)?)
}

/// The seed habit list, in display order.
pub fn initial_habits() -> Result<Vec<Habit>> {
    Ok(parse_seed()?.habits)
}

/// The sample journal entry the reflection view starts from.
pub fn sample_reflection() -> Result<ReflectionEntry> {
    Ok(parse_seed()?.reflection)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn seed_parses_five_habits() {
        let habits = initial_habits().unwrap();
        assert_eq!(habits.len(), 5);
        assert_eq!(habits[0].name, "Morning Meditation (15m)");
        assert_eq!(habits[0].category, Category::Mindfulness);
        assert_eq!(habits[2].monthly_goal, 28);
    }

    #[test]
    fn seed_non_negotiable_flags() {
        let habits = initial_habits().unwrap();
        let flags: Vec<bool> = habits.iter().map(|h| h.non_negotiable).collect();
        assert_eq!(flags, vec![true, true, false, false, true]);
    }

    #[test]
    fn seed_completion_counts() {
        let habits = initial_habits().unwrap();
        let counts: Vec<usize> = habits.iter().map(|h| h.completed_count()).collect();
        assert_eq!(counts, vec![5, 4, 3, 2, 3]);
    }

    #[test]
    fn seed_reflection_entry() {
        let entry = sample_reflection().unwrap();
        assert_eq!(entry.date, "2023-10-06");
        assert_eq!(entry.mood_score, 8);
        assert_eq!(entry.screen_time.total_minutes(), 180);
        assert_eq!(entry.achievements.len(), 2);
    }

    #[test]
    fn duplicate_dates_collapse_on_parse() {
        let yaml = r#"
id: "9"
name: Dup Dates
category: Other
monthly_goal: 10
completed_dates: ["2023-10-01", "2023-10-01", "2023-10-02"]
"#;
        let habit: Habit = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(habit.completed_count(), 2);
    }
}
