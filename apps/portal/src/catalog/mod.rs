// Record Store: immutable in-memory collections seeded once at startup.

pub mod record;
pub mod seed;

use anyhow::Result;
use tracing::info;

use crate::models::application::{JobApplication, JobOpening};
use crate::models::event::CalendarEvent;
use crate::models::exam::MockTest;
use crate::models::office::{Alert, Approval, JobPosting};
use crate::models::progress::{Badge, StreakData};
use crate::models::resume::{Document, ResumeVersion, Template};

/// Every collection the portal pages read from. Never mutated after seeding.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pub applications: Vec<JobApplication>,
    pub openings: Vec<JobOpening>,
    pub mock_tests: Vec<MockTest>,
    pub events: Vec<CalendarEvent>,
    pub documents: Vec<Document>,
    pub resumes: Vec<ResumeVersion>,
    pub templates: Vec<Template>,
    pub badges: Vec<Badge>,
    pub streak: StreakData,
    pub postings: Vec<JobPosting>,
    pub alerts: Vec<Alert>,
    pub approvals: Vec<Approval>,
}

impl RecordStore {
    pub fn seeded() -> Result<Self> {
        let store = RecordStore {
            applications: seed::applications()?,
            openings: seed::openings()?,
            mock_tests: seed::mock_tests(),
            events: seed::calendar_events()?,
            documents: seed::documents()?,
            resumes: seed::resume_versions()?,
            templates: seed::templates(),
            badges: seed::badges()?,
            streak: seed::streak(),
            postings: seed::job_postings(),
            alerts: seed::alerts(),
            approvals: seed::approvals(),
        };

        info!(
            "Record store seeded: {} applications, {} openings, {} tests, {} events",
            store.applications.len(),
            store.openings.len(),
            store.mock_tests.len(),
            store.events.len()
        );
        Ok(store)
    }
}
