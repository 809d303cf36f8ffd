use serde::{Deserialize, Serialize};

// ─── Input summary ────────────────────────────────────────────────────────

/// Per-habit summary embedded in the coaching prompt. Serialized camelCase
/// to match the data block the model is instructed to analyze.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitSummary {
    pub name: String,
    pub goal: u32,
    pub completed_count: usize,
    pub category: String,
    /// Formatted percent, e.g. `"85%"`.
    pub success_rate: String,
}

// ─── Advice (the model's structured reply) ────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitHighlight {
    pub name: String,
    pub count: u32,
}

/// The coach's reply, parsed from the JSON text the model returns.
/// Keys per the interface contract: `status`, `powerHabit`,
/// `growthOpportunity`, `tips`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachAdvice {
    pub status: String,
    pub power_habit: HabitHighlight,
    pub growth_opportunity: HabitHighlight,
    pub tips: Vec<String>,
}

// ─── Wire format (generateContent) ────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub response_mime_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if any.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
