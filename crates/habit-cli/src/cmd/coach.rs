use crate::output::print_json;
use anyhow::Context;
use coach_agent::{CoachClient, HabitSummary};
use habit_core::config::Config;
use habit_core::store::HabitStore;

pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = HabitStore::seeded()?;
    let summaries: Vec<HabitSummary> = store
        .habits()
        .iter()
        .map(|h| HabitSummary {
            name: h.name.clone(),
            goal: h.monthly_goal,
            completed_count: h.completed_count(),
            category: h.category.to_string(),
            success_rate: format!("{}%", h.percent()),
        })
        .collect();

    let api_key = std::env::var(&config.coach.api_key_env).ok();
    let client = CoachClient::new(
        &config.coach.api_base,
        &config.coach.model,
        api_key,
        &config.coach.api_key_env,
    )
    .context("advice generation failed")?;

    let rt = tokio::runtime::Runtime::new()?;
    let advice = rt
        .block_on(client.generate_advice(&summaries))
        .context("advice generation failed")?;

    if json {
        return print_json(&advice);
    }

    println!("Supreme status:");
    println!("  \"{}\"", advice.status);
    println!();
    println!(
        "Power habit:        {} ({} completions)",
        advice.power_habit.name, advice.power_habit.count
    );
    println!(
        "Growth opportunity: {} ({} completions)",
        advice.growth_opportunity.name, advice.growth_opportunity.count
    );
    println!();
    println!("Actionable directives:");
    for (i, tip) in advice.tips.iter().enumerate() {
        println!("  {}. {tip}", i + 1);
    }
    Ok(())
}
