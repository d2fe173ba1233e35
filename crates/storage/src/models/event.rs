use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub event_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: Option<String>,
    pub attendance: Option<i32>,
    pub ufc_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum EventStatus {
    Scheduled,
    Completed,
}

impl EventStatus {
    /// Anything other than `Completed` is treated as still scheduled.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Completed") => Self::Completed,
            _ => Self::Scheduled,
        }
    }
}

impl Event {
    pub fn status(&self) -> EventStatus {
        EventStatus::from_label(self.status.as_deref())
    }

    pub fn is_completed(&self) -> bool {
        self.status() == EventStatus::Completed
    }
}
