use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Gold,
    Silver,
    Bronze,
}

impl BadgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::Gold => "gold",
            BadgeKind::Silver => "silver",
            BadgeKind::Bronze => "bronze",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: BadgeKind,
    pub earned: bool,
    pub progress: Option<u32>,
    pub max_progress: Option<u32>,
    pub earned_on: Option<NaiveDate>,
}

impl Record for Badge {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "name" => Some((&self.name).into()),
            "kind" => Some(FieldValue::Text(self.kind.as_str())),
            "earned" => Some(self.earned.into()),
            "progress" => self.progress.map(Into::into),
            "max_progress" => self.max_progress.map(Into::into),
            "earned_on" => self.earned_on.map(Into::into),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

/// Daily practice streak shown on the student dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakData {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub weekly_goal: u32,
    pub weekly_progress: u32,
    pub total_days: u32,
}
