use serde::{Deserialize, Serialize};

/// One row of the event-day agenda.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleEvent {
    /// `"H:MM AM - H:MM PM"`
    #[serde(alias = "time")]
    pub time_range: String,
    #[serde(alias = "title")]
    pub label: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An ordered agenda as read from a schedule file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Schedule {
    #[serde(default)]
    pub title: Option<String>,
    pub events: Vec<ScheduleEvent>,
}
