//! Records behind the company and placement-office dashboards.

use serde::{Deserialize, Serialize};

use crate::catalog::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PostingStatus {
    Active,
    Draft,
    Closed,
}

impl PostingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostingStatus::Active => "Active",
            PostingStatus::Draft => "Draft",
            PostingStatus::Closed => "Closed",
        }
    }
}

/// A job posted by a recruiting company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub applications: u32,
    pub status: PostingStatus,
}

impl Record for JobPosting {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "title" => Some((&self.title).into()),
            "applications" => Some(self.applications.into()),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub severity: Severity,
}

impl Record for Alert {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "type" => Some((&self.kind).into()),
            "severity" => Some(FieldValue::Text(self.severity.as_str())),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.kind.as_str(), self.message.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ApprovalStatus {
    Review,
    Pending,
    Approved,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Review => "Review",
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
        }
    }
}

/// A request waiting on the placement office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Approval {
    pub id: String,
    pub company: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: ApprovalStatus,
}

impl Record for Approval {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "company" => Some((&self.company).into()),
            "type" => Some((&self.kind).into()),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.company.as_str(), self.kind.as_str()]
    }
}
