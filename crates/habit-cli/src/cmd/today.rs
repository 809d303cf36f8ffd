use crate::output::{bar, print_json};
use chrono::NaiveDate;
use habit_core::dates;
use habit_core::stats;
use habit_core::store::HabitStore;

pub fn run(reference: NaiveDate, toggles: &[String], json: bool) -> anyhow::Result<()> {
    let mut store = HabitStore::seeded()?;
    let date_str = dates::format_date(reference);

    for id in toggles {
        store.toggle_completion(id, &date_str);
    }

    let habits = store.habits();
    let win_rate = stats::today_win_rate(habits, &date_str);
    let ordered = stats::today_order(habits);

    if json {
        let rows: Vec<serde_json::Value> = ordered
            .iter()
            .map(|h| {
                serde_json::json!({
                    "id": h.id,
                    "name": h.name,
                    "category": h.category,
                    "non_negotiable": h.non_negotiable,
                    "completed": h.is_completed(&date_str),
                })
            })
            .collect();
        return print_json(&serde_json::json!({
            "date": date_str,
            "win_rate": win_rate,
            "habits": rows,
        }));
    }

    println!("DAILY PROTOCOL — {}", reference.format("%A, %b %-d"));
    println!("Win rate: {win_rate}%  {}", bar(win_rate, 20));
    println!();
    for habit in &ordered {
        let mark = if habit.is_completed(&date_str) { "x" } else { " " };
        let priority = if habit.non_negotiable { "!" } else { " " };
        println!("  [{mark}] {priority} {:<28} {}", habit.name, habit.category);
    }
    if win_rate == 100 {
        println!();
        println!("SUPREME VICTORY — DAY CONQUERED");
    }
    Ok(())
}
