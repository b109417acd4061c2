use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How a habit's due date advances when a cycle ends.
///
/// Daily, weekly and monthly habits reset on the anchor day itself; only
/// custom rules carry an explicit day offset. See `recurrence::next_due_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "days", rename_all = "lowercase")]
pub enum RecurrenceRule {
    Daily,
    Weekly,
    Monthly,
    Custom(u32),
}

impl RecurrenceRule {
    pub fn label(&self) -> String {
        match self {
            RecurrenceRule::Daily => "daily".to_string(),
            RecurrenceRule::Weekly => "weekly".to_string(),
            RecurrenceRule::Monthly => "monthly".to_string(),
            RecurrenceRule::Custom(days) => format!("every {days} days"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Completed,
    Missed,
}

/// One line of a habit's log. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub rule: RecurrenceRule,
    #[serde(default)]
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub next_due_date: NaiveDate,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Transient "done for this cycle" flag; reset to false as soon as the
    /// habit is rescheduled so it shows up as upcoming again.
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub last_completed_date: Option<NaiveDate>,
}

/// The whole persisted state: the habit list plus the selected theme,
/// written as a single JSON blob. Fields default so an older blob without
/// them still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            theme: default_theme(),
        }
    }
}

pub fn default_theme() -> String {
    "theme-default".to_string()
}

/// Due status derived from a habit and today's date; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    Upcoming,
    Due,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    All,
    Due,
    Completed,
}

impl FilterMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(FilterMode::All),
            "due" => Some(FilterMode::Due),
            "completed" => Some(FilterMode::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    /// "daily" | "weekly" | "monthly" | "custom"
    pub repeat: String,
    /// Raw form value for the custom day count; validated on create.
    #[serde(default)]
    pub custom_days: Option<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: String,
}

#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub id: String,
    pub name: String,
    pub repeat: String,
    pub next_due_date: NaiveDate,
    pub status: DueStatus,
    pub last_completed_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct HabitDetail {
    pub id: String,
    pub name: String,
    pub repeat: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub next_due_date: NaiveDate,
    pub status: DueStatus,
    pub last_completed_date: Option<NaiveDate>,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct HabitListResponse {
    pub habits: Vec<HabitSummary>,
    /// One-shot startup warning (corrupt data file); absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReconcileResponse {
    pub missed: usize,
}
