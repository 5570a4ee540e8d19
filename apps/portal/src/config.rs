use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, Utc};

use crate::models::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub role: Role,
    /// Page to mount. `None` mounts the role's dashboard.
    pub page: Option<String>,
    pub selection: String,
    /// Reference date for "upcoming" computations.
    pub today: NaiveDate,
    pub output: OutputFormat,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let role = match lookup("PORTAL_ROLE") {
            Some(raw) => raw
                .parse::<Role>()
                .context("PORTAL_ROLE must be one of student, company, office")?,
            None => Role::Student,
        };

        let today = match lookup("PORTAL_TODAY") {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .with_context(|| format!("PORTAL_TODAY '{raw}' must be a YYYY-MM-DD date"))?,
            None => Utc::now().date_naive(),
        };

        let output = match lookup("PORTAL_OUTPUT").as_deref().map(str::trim) {
            None | Some("pretty") => OutputFormat::Pretty,
            Some("compact") => OutputFormat::Compact,
            Some(other) => {
                return Err(anyhow!(
                    "PORTAL_OUTPUT must be 'pretty' or 'compact', got '{other}'"
                ))
            }
        };

        Ok(Config {
            role,
            page: lookup("PORTAL_PAGE")
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            selection: lookup("PORTAL_SELECTION").unwrap_or_default(),
            today,
            output,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
