use crate::cmd::split_pair;
use crate::output::print_json;
use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use habit_core::dates;
use habit_core::habit::Habit;
use habit_core::stats;
use habit_core::store::HabitStore;
use habit_core::types::Category;
use std::str::FromStr;

#[allow(clippy::too_many_arguments)]
pub fn run(
    reference: NaiveDate,
    month: Option<u32>,
    year: Option<i32>,
    category: Option<&str>,
    focus: bool,
    toggles: &[String],
    set_categories: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let month = month.unwrap_or_else(|| reference.month());
    let year = year.unwrap_or_else(|| reference.year());
    anyhow::ensure!((1..=12).contains(&month), "month must be 1-12, got {month}");

    let filter = category
        .map(Category::from_str)
        .transpose()
        .context("bad --category")?;

    let mut store = HabitStore::seeded()?;
    for pair in set_categories {
        let (id, cat) = split_pair(pair, "set-category")?;
        let cat = Category::from_str(cat).context("bad --set-category")?;
        store.set_category(id, cat);
    }
    for pair in toggles {
        let (id, date) = split_pair(pair, "toggle")?;
        store.toggle_completion(id, date);
    }

    let days = dates::days_in_month(year, month);
    let visible: Vec<&Habit> = if focus {
        stats::focus(store.habits())
    } else {
        stats::by_category(store.habits(), filter)
    };

    if json {
        let rows: Vec<serde_json::Value> = visible
            .iter()
            .map(|h| {
                let completed_days: Vec<u32> = (1..=days)
                    .filter(|&d| h.is_completed(&dates::format_ymd(year, month, d)))
                    .collect();
                serde_json::json!({
                    "id": h.id,
                    "name": h.name,
                    "category": h.category,
                    "goal": h.monthly_goal,
                    "percent": h.percent(),
                    "burn_risk": h.burn_risk(reference),
                    "non_negotiable": h.non_negotiable,
                    "completed_days": completed_days,
                })
            })
            .collect();
        return print_json(&serde_json::json!({
            "year": year,
            "month": month,
            "days": days,
            "habits": rows,
        }));
    }

    println!("Tracker — {year}-{month:02} ({days} days)");
    println!();
    if visible.is_empty() {
        println!("  No protocols found.");
        return Ok(());
    }
    for habit in &visible {
        let cells: String = (1..=days)
            .map(|d| {
                if habit.is_completed(&dates::format_ymd(year, month, d)) {
                    'x'
                } else {
                    '.'
                }
            })
            .collect();
        let priority = if habit.non_negotiable { "!" } else { " " };
        let burn = if habit.burn_risk(reference) { " BURN" } else { "" };
        println!(
            "  {priority} {:<28} {:<13} goal {:>2}  {cells}  {:>3}%{burn}",
            habit.name,
            habit.category.to_string(),
            habit.monthly_goal,
            habit.percent(),
        );
    }
    Ok(())
}
