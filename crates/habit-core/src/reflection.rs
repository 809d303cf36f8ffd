use crate::error::HabitError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DayPeriod / ScreenTime
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPeriod {
    Morning,
    Day,
    Evening,
    Night,
}

impl std::str::FromStr for DayPeriod {
    type Err = HabitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morning" => Ok(DayPeriod::Morning),
            "day" => Ok(DayPeriod::Day),
            "evening" => Ok(DayPeriod::Evening),
            "night" => Ok(DayPeriod::Night),
            _ => Err(HabitError::InvalidDayPeriod(s.to_string())),
        }
    }
}

/// Screen-time minutes, bucketed by period of day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScreenTime {
    pub morning: u32,
    pub day: u32,
    pub evening: u32,
    pub night: u32,
}

impl ScreenTime {
    pub fn total_minutes(&self) -> u32 {
        self.morning + self.day + self.evening + self.night
    }

    pub fn set(&mut self, period: DayPeriod, minutes: u32) {
        match period {
            DayPeriod::Morning => self.morning = minutes,
            DayPeriod::Day => self.day = minutes,
            DayPeriod::Evening => self.evening = minutes,
            DayPeriod::Night => self.night = minutes,
        }
    }
}

impl fmt::Display for ScreenTime {
    /// Total as hours and minutes, e.g. `3h 0m`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_minutes();
        write!(f, "{}h {}m", total / 60, total % 60)
    }
}

// ---------------------------------------------------------------------------
// ReflectionEntry
// ---------------------------------------------------------------------------

/// A daily journal record. Independent of the habit store; the only derived
/// value is the screen-time total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionEntry {
    pub date: String,
    #[serde(default)]
    pub screen_time: ScreenTime,
    pub mood_score: u8,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl ReflectionEntry {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            screen_time: ScreenTime::default(),
            mood_score: 5,
            achievements: Vec::new(),
            notes: String::new(),
        }
    }

    /// Clamped to the 1-10 scale.
    pub fn set_mood(&mut self, score: u8) {
        self.mood_score = score.clamp(1, 10);
    }

    pub fn add_achievement(&mut self, text: impl Into<String>) {
        self.achievements.push(text.into());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
