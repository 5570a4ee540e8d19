use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::record::{FieldValue, Record};
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Applied,
    Test,
    Shortlisted,
    Interview,
    Offer,
    Rejected,
    Joined,
}

impl ApplicationStatus {
    #[cfg(test)]
    pub const ALL: [ApplicationStatus; 7] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Test,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::Joined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Test => "Test",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Joined => "Joined",
        }
    }
}

/// Company tier. Serialized as the integer 1, 2 or 3.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    #[cfg(test)]
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    pub fn rank(&self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }

    /// Facet key: `"1"`, `"2"` or `"3"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::One => "1",
            Tier::Two => "2",
            Tier::Three => "3",
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.rank()
    }
}

impl TryFrom<u8> for Tier {
    type Error = AppError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            1 => Ok(Tier::One),
            2 => Ok(Tier::Two),
            3 => Ok(Tier::Three),
            other => Err(AppError::Validation(format!("tier must be 1, 2 or 3, got {other}"))),
        }
    }
}

/// An application the student has already submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub tier: Tier,
    pub applied_on: NaiveDate,
    pub status: ApplicationStatus,
    pub deadline: NaiveDate,
    pub description: String,
    pub requirements: Vec<String>,
    pub next_step: Option<String>,
    /// Pipeline progress, 0 – 100.
    pub progress: u8,
}

impl Record for JobApplication {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "title" => Some((&self.title).into()),
            "company" => Some((&self.company).into()),
            "location" => Some((&self.location).into()),
            "tier" => Some(FieldValue::Text(self.tier.as_str())),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "applied_on" => Some(self.applied_on.into()),
            "deadline" => Some(self.deadline.into()),
            "progress" => Some(self.progress.into()),
            "next_step" => self.next_step.as_ref().map(Into::into),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.company.as_str()]
    }
}

/// An open position the student has not applied to yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOpening {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub tier: Tier,
    pub deadline: NaiveDate,
    pub description: String,
    pub requirements: Vec<String>,
    pub applicants: u32,
    pub rating: f64,
}

impl Record for JobOpening {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "title" => Some((&self.title).into()),
            "company" => Some((&self.company).into()),
            "location" => Some((&self.location).into()),
            "tier" => Some(FieldValue::Text(self.tier.as_str())),
            "deadline" => Some(self.deadline.into()),
            "applicants" => Some(self.applicants.into()),
            "rating" => Some(self.rating.into()),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.company.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Tier::Two).unwrap(), "2");
        let tier: Tier = serde_json::from_str("3").unwrap();
        assert_eq!(tier, Tier::Three);
        assert!(serde_json::from_str::<Tier>("7").is_err());
    }

    #[test]
    fn test_unset_next_step_is_missing_field() {
        let app = JobApplication {
            id: "5".to_string(),
            title: "Full Stack Developer".to_string(),
            company: "Paytm".to_string(),
            location: "Noida".to_string(),
            salary: "₹8-12 LPA".to_string(),
            tier: Tier::Three,
            applied_on: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: ApplicationStatus::Applied,
            deadline: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: String::new(),
            requirements: vec![],
            next_step: None,
            progress: 10,
        };
        assert!(app.field("next_step").is_none());
        assert_eq!(app.field("tier").unwrap().facet_key(), "3");
        assert_eq!(app.field("status").unwrap().facet_key(), "Applied");
    }
}
