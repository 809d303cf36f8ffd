use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// CoachConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Name of the environment variable holding the API credential. The key
    /// itself never appears in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Completion rate of the previous period, used by the improvement card.
    #[serde(default = "default_previous_month_rate")]
    pub previous_month_rate: u32,
}

fn default_previous_month_rate() -> u32 {
    45
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            previous_month_rate: default_previous_month_rate(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub coach: CoachConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Config {
    pub const FILE_NAME: &'static str = "habit.yaml";

    /// Load from `path`, defaulting field-by-field. A missing file yields
    /// the full default; a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&data)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(&dir.path().join("habit.yaml")).unwrap();
        assert_eq!(cfg.coach.model, "gemini-3-flash-preview");
        assert_eq!(cfg.coach.api_key_env, "GEMINI_API_KEY");
        assert_eq!(cfg.dashboard.previous_month_rate, 45);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("habit.yaml");
        std::fs::write(&path, "coach:\n  model: gemini-test\n").unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.coach.model, "gemini-test");
        assert_eq!(cfg.coach.api_key_env, "GEMINI_API_KEY");
        assert_eq!(cfg.dashboard.previous_month_rate, 45);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("habit.yaml");
        std::fs::write(&path, "coach: [not, a, map\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
