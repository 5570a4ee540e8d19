use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Which dashboard family a visitor picked on the role-selection screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Company,
    /// Training & placement office.
    Office,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Company => "company",
            Role::Office => "office",
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "company" | "recruiter" => Ok(Role::Company),
            "office" | "tpo" | "placement-office" => Ok(Role::Office),
            other => Err(AppError::Validation(format!("unknown role '{other}'"))),
        }
    }
}
