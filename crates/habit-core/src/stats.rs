//! Derived, read-only queries over a habit list. Every function here is
//! total: well-formed input never panics, empty lists yield zeros.

use crate::habit::Habit;
use crate::types::{Category, Tier};

// ---------------------------------------------------------------------------
// Aggregate sums
// ---------------------------------------------------------------------------

pub fn total_goal(habits: &[Habit]) -> u32 {
    habits.iter().map(|h| h.monthly_goal).sum()
}

pub fn total_completed(habits: &[Habit]) -> usize {
    habits.iter().map(|h| h.completed_count()).sum()
}

/// Total completions over total monthly goals, as a rounded percent.
/// 0 when the goal sum is 0.
pub fn completion_rate(habits: &[Habit]) -> u32 {
    let goal = total_goal(habits);
    if goal == 0 {
        return 0;
    }
    ((100.0 * total_completed(habits) as f64) / f64::from(goal)).round() as u32
}

pub fn tier(habits: &[Habit]) -> Tier {
    Tier::from_rate(completion_rate(habits))
}

/// Signed delta against a previous-period rate.
pub fn improvement(rate: u32, previous_rate: u32) -> i32 {
    rate as i32 - previous_rate as i32
}

// ---------------------------------------------------------------------------
// Orderings
// ---------------------------------------------------------------------------

/// Habits by completion count, descending. The sort is stable: ties keep
/// their original list order, with no secondary key.
pub fn leaderboard(habits: &[Habit]) -> Vec<(&Habit, usize)> {
    let mut rows: Vec<(&Habit, usize)> = habits.iter().map(|h| (h, h.completed_count())).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

pub fn power_habit(habits: &[Habit]) -> Option<&Habit> {
    leaderboard(habits).first().map(|&(h, _)| h)
}

/// Display order for the today view: non-negotiable habits first, original
/// relative order preserved within each group (stable partition).
pub fn today_order(habits: &[Habit]) -> Vec<&Habit> {
    let mut ordered: Vec<&Habit> = habits.iter().collect();
    ordered.sort_by_key(|h| !h.non_negotiable);
    ordered
}

// ---------------------------------------------------------------------------
// Today
// ---------------------------------------------------------------------------

/// Percent of habits completed on `today`, rounded. 0 for an empty list.
pub fn today_win_rate(habits: &[Habit], today: &str) -> u32 {
    if habits.is_empty() {
        return 0;
    }
    let done = habits.iter().filter(|h| h.is_completed(today)).count();
    ((100.0 * done as f64) / habits.len() as f64).round() as u32
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Habits in `category`, or the whole list when `None`.
pub fn by_category(habits: &[Habit], category: Option<Category>) -> Vec<&Habit> {
    habits
        .iter()
        .filter(|h| category.map_or(true, |c| h.category == c))
        .collect()
}

/// The reduced-focus view: non-negotiable habits only.
pub fn focus(habits: &[Habit]) -> Vec<&Habit> {
    habits.iter().filter(|h| h.non_negotiable).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: &str, goal: u32, completed: usize) -> Habit {
        let mut h = Habit::new(id, format!("Habit {id}"), Category::Other, goal);
        for d in 0..completed {
            h.completed_dates.insert(format!("2023-10-{:02}", d + 1));
        }
        h
    }

    #[test]
    fn completion_rate_rounds() {
        // 17 completions over 108 goal days -> 15.74 -> 16.
        let habits = vec![
            habit("1", 25, 5),
            habit("2", 20, 4),
            habit("3", 28, 3),
            habit("4", 15, 2),
            habit("5", 20, 3),
        ];
        assert_eq!(completion_rate(&habits), 16);
        assert_eq!(tier(&habits), Tier::Rookie);
    }

    #[test]
    fn completion_rate_zero_goal_sum_is_zero() {
        let habits = vec![habit("1", 0, 3), habit("2", 0, 0)];
        assert_eq!(completion_rate(&habits), 0);
    }

    #[test]
    fn completion_rate_empty_list_is_zero() {
        assert_eq!(completion_rate(&[]), 0);
    }

    #[test]
    fn leaderboard_descending_stable_on_ties() {
        let habits = vec![
            habit("a", 30, 3),
            habit("b", 30, 5),
            habit("c", 30, 1),
            habit("d", 30, 5),
        ];
        let ids: Vec<&str> = leaderboard(&habits)
            .iter()
            .map(|(h, _)| h.id.as_str())
            .collect();
        // Both fives first, in original order, then 3, then 1.
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn power_habit_is_leaderboard_head() {
        let habits = vec![habit("a", 30, 2), habit("b", 30, 7)];
        assert_eq!(power_habit(&habits).unwrap().id, "b");
        assert!(power_habit(&[]).is_none());
    }

    #[test]
    fn today_win_rate_two_of_five() {
        let mut habits: Vec<Habit> = (1..=5).map(|i| habit(&i.to_string(), 20, 0)).collect();
        habits[0].completed_dates.insert("2023-10-10".to_string());
        habits[3].completed_dates.insert("2023-10-10".to_string());
        assert_eq!(today_win_rate(&habits, "2023-10-10"), 40);
    }

    #[test]
    fn today_win_rate_empty_list() {
        assert_eq!(today_win_rate(&[], "2023-10-10"), 0);
    }

    #[test]
    fn today_order_is_stable_partition() {
        let mut habits = vec![
            habit("a", 20, 0),
            habit("b", 20, 0),
            habit("c", 20, 0),
            habit("d", 20, 0),
        ];
        habits[1].non_negotiable = true;
        habits[3].non_negotiable = true;
        let ids: Vec<&str> = today_order(&habits).iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn category_filter() {
        let mut habits = vec![habit("a", 20, 0), habit("b", 20, 0)];
        habits[0].category = Category::Health;
        assert_eq!(by_category(&habits, Some(Category::Health)).len(), 1);
        assert_eq!(by_category(&habits, None).len(), 2);
        assert!(by_category(&habits, Some(Category::Learning)).is_empty());
    }

    #[test]
    fn focus_keeps_non_negotiables_only() {
        let mut habits = vec![habit("a", 20, 0), habit("b", 20, 0)];
        habits[1].non_negotiable = true;
        let kept = focus(&habits);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "b");
    }

    #[test]
    fn improvement_is_signed() {
        assert_eq!(improvement(60, 45), 15);
        assert_eq!(improvement(30, 45), -15);
    }
}
