use crate::cmd::split_pair;
use crate::output::{print_json, print_kv};
use anyhow::Context;
use chrono::NaiveDate;
use habit_core::dates;
use habit_core::reflection::DayPeriod;
use habit_core::seed;
use std::str::FromStr;

pub fn run(
    reference: NaiveDate,
    mood: Option<u8>,
    screen: &[String],
    achievements: &[String],
    notes: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut entry = seed::sample_reflection()?;
    entry.date = dates::format_date(reference);

    if let Some(score) = mood {
        entry.set_mood(score);
    }
    for pair in screen {
        let (period, minutes) = split_pair(pair, "screen")?;
        let period = DayPeriod::from_str(period).context("bad --screen")?;
        let minutes: u32 = minutes
            .parse()
            .with_context(|| format!("bad --screen minutes '{minutes}'"))?;
        entry.screen_time.set(period, minutes);
    }
    for text in achievements {
        entry.add_achievement(text);
    }
    if let Some(text) = notes {
        entry.notes = text;
    }

    if json {
        return print_json(&entry);
    }

    println!("Reflection — {}", entry.date);
    println!();
    print_kv(&[
        (
            "Screen time",
            format!(
                "morning {}m, day {}m, evening {}m, night {}m (total {})",
                entry.screen_time.morning,
                entry.screen_time.day,
                entry.screen_time.evening,
                entry.screen_time.night,
                entry.screen_time,
            ),
        ),
        ("Mood", format!("{}/10", entry.mood_score)),
    ]);
    if !entry.achievements.is_empty() {
        println!();
        println!("Achievements:");
        for text in &entry.achievements {
            println!("  - {text}");
        }
    }
    if !entry.notes.is_empty() {
        println!();
        println!("Notes: {}", entry.notes);
    }
    Ok(())
}
