use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachAgentError {
    #[error("API key not found: set {0}")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("coach API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("empty response from model")]
    Empty,

    #[error("failed to parse model reply: {source}\n  body: {body}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },
}
