use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventKind {
    Interview,
    Test,
    Deadline,
    #[serde(rename = "Mock Test")]
    MockTest,
    Seminar,
    Workshop,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Interview => "Interview",
            EventKind::Test => "Test",
            EventKind::Deadline => "Deadline",
            EventKind::MockTest => "Mock Test",
            EventKind::Seminar => "Seminar",
            EventKind::Workshop => "Workshop",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Upcoming,
    Today,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Today => "Today",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, EventStatus::Upcoming | EventStatus::Today)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: String,
    pub status: EventStatus,
    pub priority: Priority,
}

impl Record for CalendarEvent {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "title" => Some((&self.title).into()),
            "date" => Some(self.date.into()),
            "type" => Some(FieldValue::Text(self.kind.as_str())),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "priority" => Some(FieldValue::Text(self.priority.as_str())),
            "company" => self.company.as_ref().map(Into::into),
            "location" => self.location.as_ref().map(Into::into),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.title.as_str()];
        text.extend(self.company.as_deref());
        text.extend(self.location.as_deref());
        text
    }
}
