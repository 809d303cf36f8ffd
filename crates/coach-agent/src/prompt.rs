use crate::types::HabitSummary;

// ─── Prompt construction ──────────────────────────────────────────────────

/// Build the coaching prompt: persona, the pretty-printed summary data, and
/// the required JSON reply shape.
pub fn build_prompt(summaries: &[HabitSummary]) -> String {
    let data =
        serde_json::to_string_pretty(summaries).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"You are an expert habit coach named "Me Supreme Coach".
Analyze the following habit tracking data for the user.

Data: {data}

Please provide:
1. A brief "Supreme Status" assessment of their overall discipline (Motivating but honest).
2. Identify the "Power Habit" (the one they are doing best at).
3. Identify the "Growth Opportunity" (the one they are struggling with).
4. Three specific, actionable, 1-sentence tips to improve their consistency based on this specific data.

Format the response as JSON with keys: "status", "powerHabit", "growthOpportunity", "tips" (array of strings)."#
    )
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, rate: &str) -> HabitSummary {
        HabitSummary {
            name: name.to_string(),
            goal: 20,
            completed_count: 4,
            category: "Health".to_string(),
            success_rate: rate.to_string(),
        }
    }

    #[test]
    fn prompt_embeds_summary_data() {
        let prompt = build_prompt(&[summary("Gym / Workout", "15%")]);
        assert!(prompt.contains("Gym / Workout"));
        assert!(prompt.contains("\"successRate\": \"15%\""));
    }

    #[test]
    fn prompt_names_reply_keys() {
        let prompt = build_prompt(&[]);
        for key in ["\"status\"", "\"powerHabit\"", "\"growthOpportunity\"", "\"tips\""] {
            assert!(prompt.contains(key), "missing key {key}");
        }
    }
}
