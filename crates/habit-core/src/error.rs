use thiserror::Error;

#[derive(Debug, Error)]
pub enum HabitError {
    #[error("invalid category '{0}': expected one of Health, Productivity, Mindfulness, Learning, Other")]
    InvalidCategory(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid day period '{0}': expected morning, day, evening, or night")]
    InvalidDayPeriod(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HabitError>;
