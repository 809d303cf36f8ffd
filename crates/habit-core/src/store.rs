use crate::dates;
use crate::error::Result;
use crate::habit::Habit;
use crate::seed;
use crate::types::Category;

// ---------------------------------------------------------------------------
// HabitStore
// ---------------------------------------------------------------------------

/// Owner of the session's habit list. Constructed once per session from the
/// seed provider; all mutation goes through [`toggle_completion`] and
/// [`set_category`], each of which swaps in a freshly built record for the
/// one affected habit and leaves every other entry untouched.
///
/// [`toggle_completion`]: HabitStore::toggle_completion
/// [`set_category`]: HabitStore::set_category
#[derive(Debug, Clone)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    /// Construct from the built-in seed list.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(seed::initial_habits()?))
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, habit_id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == habit_id)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Cloned copy of the list for observers that outlive the next mutation.
    pub fn snapshot(&self) -> Vec<Habit> {
        self.habits.clone()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add `date` to the habit's completion set, or remove it if already
    /// present. Returns whether the store changed. Unknown ids are a silent
    /// no-op; malformed date strings are accepted and stored as-is.
    pub fn toggle_completion(&mut self, habit_id: &str, date: &str) -> bool {
        if !dates::is_iso_date(date) {
            tracing::warn!(habit_id, date, "toggling a non-ISO date string");
        }
        let Some(slot) = self.habits.iter().position(|h| h.id == habit_id) else {
            tracing::debug!(habit_id, "toggle ignored: unknown habit id");
            return false;
        };
        let mut habit = self.habits[slot].clone();
        if !habit.completed_dates.remove(date) {
            habit.completed_dates.insert(date.to_string());
        }
        self.habits[slot] = habit;
        true
    }

    /// Replace the habit's category. No other field changes. Unknown ids are
    /// a silent no-op.
    pub fn set_category(&mut self, habit_id: &str, category: Category) -> bool {
        let Some(slot) = self.habits.iter().position(|h| h.id == habit_id) else {
            tracing::debug!(habit_id, "category change ignored: unknown habit id");
            return false;
        };
        let mut habit = self.habits[slot].clone();
        habit.category = category;
        self.habits[slot] = habit;
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> HabitStore {
        let mut a = Habit::new("a", "Meditation", Category::Mindfulness, 25);
        a.completed_dates.insert("2023-10-01".to_string());
        let b = Habit::new("b", "Deep Work", Category::Productivity, 20);
        HabitStore::new(vec![a, b])
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut s = store();
        assert!(s.toggle_completion("b", "2023-10-05"));
        assert!(s.get("b").unwrap().is_completed("2023-10-05"));

        assert!(s.toggle_completion("b", "2023-10-05"));
        assert!(!s.get("b").unwrap().is_completed("2023-10-05"));
    }

    #[test]
    fn double_toggle_restores_original_set() {
        let mut s = store();
        let before = s.get("a").unwrap().completed_dates.clone();
        s.toggle_completion("a", "2023-10-09");
        s.toggle_completion("a", "2023-10-09");
        assert_eq!(s.get("a").unwrap().completed_dates, before);
    }

    #[test]
    fn toggle_touches_exactly_one_habit() {
        let mut s = store();
        let untouched = s.get("a").unwrap().clone();
        s.toggle_completion("b", "2023-10-05");
        let after = s.get("a").unwrap();
        assert_eq!(after.completed_dates, untouched.completed_dates);
        assert_eq!(after.category, untouched.category);
        assert_eq!(after.monthly_goal, untouched.monthly_goal);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut s = store();
        let before = s.snapshot();
        assert!(!s.toggle_completion("zzz", "2023-10-05"));
        assert_eq!(s.len(), before.len());
        for (a, b) in s.habits().iter().zip(before.iter()) {
            assert_eq!(a.completed_dates, b.completed_dates);
        }
    }

    #[test]
    fn toggle_stores_malformed_dates_verbatim() {
        let mut s = store();
        assert!(s.toggle_completion("a", "not-a-date"));
        assert!(s.get("a").unwrap().is_completed("not-a-date"));
        // And toggles back out cleanly.
        assert!(s.toggle_completion("a", "not-a-date"));
        assert!(!s.get("a").unwrap().is_completed("not-a-date"));
    }

    #[test]
    fn set_category_replaces_only_category() {
        let mut s = store();
        let before = s.get("a").unwrap().clone();
        assert!(s.set_category("a", Category::Health));
        let after = s.get("a").unwrap();
        assert_eq!(after.category, Category::Health);
        assert_eq!(after.name, before.name);
        assert_eq!(after.completed_dates, before.completed_dates);
        assert_eq!(after.monthly_goal, before.monthly_goal);
    }

    #[test]
    fn set_category_unknown_id_is_noop() {
        let mut s = store();
        assert!(!s.set_category("zzz", Category::Other));
        assert_eq!(s.get("a").unwrap().category, Category::Mindfulness);
        assert_eq!(s.get("b").unwrap().category, Category::Productivity);
    }

    #[test]
    fn snapshot_is_detached_from_later_mutations() {
        let mut s = store();
        let snap = s.snapshot();
        s.toggle_completion("b", "2023-10-05");
        assert!(!snap[1].is_completed("2023-10-05"));
        assert!(s.get("b").unwrap().is_completed("2023-10-05"));
    }
}
