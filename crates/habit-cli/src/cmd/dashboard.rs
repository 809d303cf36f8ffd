use crate::output::{bar, print_json, print_kv};
use chrono::NaiveDate;
use habit_core::config::Config;
use habit_core::habit::Habit;
use habit_core::stats;
use habit_core::store::HabitStore;

pub fn run(config: &Config, reference: NaiveDate, json: bool) -> anyhow::Result<()> {
    let store = HabitStore::seeded()?;
    let habits = store.habits();

    let rate = stats::completion_rate(habits);
    let tier = stats::tier(habits);
    let improvement = stats::improvement(rate, config.dashboard.previous_month_rate);
    let leaderboard = stats::leaderboard(habits);
    let burn_risks: Vec<&Habit> = habits.iter().filter(|h| h.burn_risk(reference)).collect();

    if json {
        let board: Vec<serde_json::Value> = leaderboard
            .iter()
            .map(|(h, count)| serde_json::json!({ "id": h.id, "name": h.name, "count": count }))
            .collect();
        let risks: Vec<&str> = burn_risks.iter().map(|h| h.id.as_str()).collect();
        return print_json(&serde_json::json!({
            "completion_rate": rate,
            "tier": tier,
            "improvement": improvement,
            "total_completed": stats::total_completed(habits),
            "total_goal": stats::total_goal(habits),
            "power_habit": stats::power_habit(habits).map(|h| h.name.clone()),
            "leaderboard": board,
            "burn_risks": risks,
        }));
    }

    println!(
        "Status: {}  {rate}/100  {}",
        tier.as_str().to_uppercase(),
        bar(rate, 20)
    );
    println!();
    print_kv(&[
        ("Vs last month", format!("{improvement:+}%")),
        ("Total actions", stats::total_completed(habits).to_string()),
        (
            "Power habit",
            stats::power_habit(habits)
                .map(|h| h.name.clone())
                .unwrap_or_else(|| "N/A".to_string()),
        ),
    ]);
    println!();
    println!("Top performing habits:");
    for (i, (habit, count)) in leaderboard.iter().enumerate() {
        println!("  {}. {:<28} {count}", i + 1, habit.name);
    }
    println!();
    if burn_risks.is_empty() {
        println!("Burn risk: none");
    } else {
        println!("Burn risk (missed the last 3 days):");
        for habit in &burn_risks {
            println!("  - {}", habit.name);
        }
    }
    Ok(())
}
