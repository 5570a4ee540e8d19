use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::record::{FieldValue, Record};

/// An uploaded supporting document (marksheet, certificate, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    /// Free-form category such as `Academic` or `Certification`.
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub uploaded_on: NaiveDate,
    pub verified: bool,
}

impl Record for Document {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "name" => Some((&self.name).into()),
            "type" => Some((&self.kind).into()),
            "uploaded_on" => Some(self.uploaded_on.into()),
            "verified" => Some(self.verified.into()),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    Draft,
    Complete,
    Outdated,
}

impl ResumeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStatus::Draft => "draft",
            ResumeStatus::Complete => "complete",
            ResumeStatus::Outdated => "outdated",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeVersion {
    pub id: String,
    pub name: String,
    /// 0 – 100.
    pub completeness: u8,
    pub updated_on: NaiveDate,
    pub is_default: bool,
    pub status: ResumeStatus,
}

impl Record for ResumeVersion {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "name" => Some((&self.name).into()),
            "completeness" => Some(self.completeness.into()),
            "updated_on" => Some(self.updated_on.into()),
            "is_default" => Some(self.is_default.into()),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TemplateLevel {
    Beginner,
    Professional,
    Executive,
}

impl TemplateLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateLevel::Beginner => "Beginner",
            TemplateLevel::Professional => "Professional",
            TemplateLevel::Executive => "Executive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: TemplateLevel,
    pub rating: f64,
    pub downloads: u32,
}

impl Record for Template {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "name" => Some((&self.name).into()),
            "level" => Some(FieldValue::Text(self.level.as_str())),
            "rating" => Some(self.rating.into()),
            "downloads" => Some(self.downloads.into()),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}
