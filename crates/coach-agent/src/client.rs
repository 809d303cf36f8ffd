use crate::error::CoachAgentError;
use crate::prompt;
use crate::types::{
    CoachAdvice, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    HabitSummary, Part,
};
use crate::Result;

// ─── CoachClient ──────────────────────────────────────────────────────────

/// One-shot client for the coach endpoint. Holds the resolved credential;
/// construction fails fast when the key is absent so no request is ever
/// attempted without one.
#[derive(Debug, Clone)]
pub struct CoachClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl CoachClient {
    /// `api_key` is the value already read from the environment;
    /// `key_env` is only used to name the variable in the error message.
    pub fn new(
        api_base: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        key_env: &str,
    ) -> Result<Self> {
        let api_key = match api_key {
            Some(k) if !k.is_empty() => k,
            _ => return Err(CoachAgentError::MissingApiKey(key_env.to_string())),
        };
        Ok(Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            model: model.into(),
            api_key,
        })
    }

    /// Send one `generateContent` request and parse the JSON reply.
    ///
    /// Every failure mode maps to a [`CoachAgentError`] variant: transport
    /// errors, non-2xx statuses, an empty candidate list, and unparsable
    /// reply text. No retry is attempted.
    pub async fn generate_advice(&self, summaries: &[HabitSummary]) -> Result<CoachAdvice> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt::build_prompt(summaries),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        );
        tracing::debug!(model = %self.model, habits = summaries.len(), "requesting coach advice");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "coach request failed");
            return Err(CoachAgentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        let Some(text) = payload.text() else {
            return Err(CoachAgentError::Empty);
        };
        serde_json::from_str(text).map_err(|source| CoachAgentError::Parse {
            body: text.to_string(),
            source,
        })
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
