//! `coach-agent` — client for the generative-text habit coach.
//!
//! Takes a per-habit summary, builds a coaching prompt, sends one
//! `generateContent` request to the configured model, and parses the JSON
//! reply into a typed [`CoachAdvice`]. The crate is independent of the habit
//! store: callers hand it plain [`HabitSummary`] values.
//!
//! # Architecture
//!
//! ```text
//! [HabitSummary]
//!     │
//!     ▼
//! build_prompt      ← persona + pretty-printed JSON data block
//!     │
//!     ▼
//! CoachClient       ← POST {base}/models/{model}:generateContent
//!     │                responseMimeType: application/json
//!     ▼
//! CoachAdvice       ← status / powerHabit / growthOpportunity / tips
//! ```
//!
//! Failure is a single observable channel: any network, API, or parse
//! problem surfaces as one [`CoachAgentError`]. There is no retry.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::CoachClient;
pub use error::CoachAgentError;
pub use prompt::build_prompt;
pub use types::{CoachAdvice, HabitHighlight, HabitSummary};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, CoachAgentError>;
