//! Operating Hours Model

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Operating hours for a single weekday.
///
/// If `open` is true, both times must be present as "HH:MM" strings with
/// opening < closing. Readers treat incomplete entries as closed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub open: bool,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
}

impl DayHours {
    /// Open day with the given "HH:MM" opening and closing times.
    pub fn between(opening: impl Into<String>, closing: impl Into<String>) -> Self {
        Self {
            open: true,
            opening_time: Some(opening.into()),
            closing_time: Some(closing.into()),
        }
    }

    /// Closed day.
    pub fn closed() -> Self {
        Self::default()
    }
}

/// Weekly operating hours, one entry per weekday
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyHours {
    #[serde(default)]
    pub monday: DayHours,
    #[serde(default)]
    pub tuesday: DayHours,
    #[serde(default)]
    pub wednesday: DayHours,
    #[serde(default)]
    pub thursday: DayHours,
    #[serde(default)]
    pub friday: DayHours,
    #[serde(default)]
    pub saturday: DayHours,
    #[serde(default)]
    pub sunday: DayHours,
}

impl WeeklyHours {
    /// Hours entry for the given weekday
    pub fn for_weekday(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// All entries paired with their weekday name, Monday first.
    ///
    /// Used by write-boundary validation to report which day is malformed.
    pub fn days(&self) -> [(&'static str, &DayHours); 7] {
        [
            ("monday", &self.monday),
            ("tuesday", &self.tuesday),
            ("wednesday", &self.wednesday),
            ("thursday", &self.thursday),
            ("friday", &self.friday),
            ("saturday", &self.saturday),
            ("sunday", &self.sunday),
        ]
    }
}
