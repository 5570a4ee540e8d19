// Pages: role-owned views that wire a facet schema, the filter engine, the
// aggregator and the presentation tokens together.

pub mod company;
pub mod office;
pub mod rows;
pub mod schemas;
pub mod student;
pub mod view;

use std::str::FromStr;

use serde::Serialize;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::errors::AppError;
use crate::facets::{FacetSchema, FacetSelection};
use crate::models::role::Role;
use crate::state::AppState;

pub use view::{FacetState, PageView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Applications,
    Openings,
    Exams,
    Calendar,
    Documents,
    Resumes,
    Templates,
    Badges,
    CompanyDashboard,
    OfficeDashboard,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Dashboard,
        Page::Applications,
        Page::Openings,
        Page::Exams,
        Page::Calendar,
        Page::Documents,
        Page::Resumes,
        Page::Templates,
        Page::Badges,
        Page::CompanyDashboard,
        Page::OfficeDashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Applications => "applications",
            Page::Openings => "openings",
            Page::Exams => "exams",
            Page::Calendar => "calendar",
            Page::Documents => "documents",
            Page::Resumes => "resumes",
            Page::Templates => "templates",
            Page::Badges => "badges",
            Page::CompanyDashboard => "company-dashboard",
            Page::OfficeDashboard => "office-dashboard",
        }
    }

    pub fn owner(&self) -> Role {
        match self {
            Page::CompanyDashboard => Role::Company,
            Page::OfficeDashboard => Role::Office,
            _ => Role::Student,
        }
    }

    /// Landing page for a role.
    pub fn home(role: Role) -> Page {
        match role {
            Role::Student => Page::Dashboard,
            Role::Company => Page::CompanyDashboard,
            Role::Office => Page::OfficeDashboard,
        }
    }

    pub fn schema(&self) -> &'static FacetSchema {
        match self {
            Page::Dashboard => &schemas::DASHBOARD,
            Page::Applications => &schemas::APPLICATIONS,
            Page::Openings => &schemas::OPENINGS,
            Page::Exams => &schemas::EXAMS,
            Page::Calendar => &schemas::CALENDAR,
            Page::Documents => &schemas::DOCUMENTS,
            Page::Resumes => &schemas::RESUMES,
            Page::Templates => &schemas::TEMPLATES,
            Page::Badges => &schemas::BADGES,
            Page::CompanyDashboard => &schemas::COMPANY_DASHBOARD,
            Page::OfficeDashboard => &schemas::OFFICE_DASHBOARD,
        }
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Page::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| AppError::NotFound(format!("page '{}' does not exist", s.trim())))
    }
}

/// Mounts `page` for the configured role.
///
/// Stats are computed over each page's full collection; the selection only
/// narrows the listed rows.
pub fn render(state: &AppState, page: &str, selection: &str) -> Result<PageView, AppError> {
    let page: Page = page.parse()?;
    let role = state.config.role;
    if page.owner() != role {
        return Err(AppError::NotFound(format!(
            "page '{}' is not available to the {} role",
            page.as_str(),
            role.as_str()
        )));
    }

    let session_id = Uuid::new_v4();
    let span = info_span!("page", page = page.as_str(), session = %session_id);
    let _guard = span.enter();

    let schema = page.schema();
    let selection = FacetSelection::parse(schema, selection)?;
    let store = &state.store;

    let content = match page {
        Page::Dashboard => student::dashboard(store, state.config.today),
        Page::Applications => student::applications(store, &selection),
        Page::Openings => student::openings(store, &selection),
        Page::Exams => student::exams(store, &selection),
        Page::Calendar => student::calendar(store, &selection),
        Page::Documents => student::documents(store, &selection),
        Page::Resumes => student::resumes(store, &selection),
        Page::Templates => student::templates(store, &selection),
        Page::Badges => student::badges(store, &selection),
        Page::CompanyDashboard => company::dashboard(store, &selection),
        Page::OfficeDashboard => office::dashboard(store, &selection),
    };

    info!(
        role = role.as_str(),
        sections = content.sections.len(),
        rows = content.sections.iter().map(|s| s.rows.len()).sum::<usize>(),
        filtered = !selection.is_unconstrained(),
        active_facets = selection.active().count(),
        "Page rendered"
    );

    Ok(PageView {
        page,
        role,
        session_id,
        facets: FacetState::for_schema(schema, &selection),
        sections: content.sections,
        stats: content.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state(role: &str) -> AppState {
        let role = role.to_string();
        let config = Config::from_lookup(move |key| match key {
            "PORTAL_ROLE" => Some(role.clone()),
            "PORTAL_TODAY" => Some("2024-03-11".to_string()),
            _ => None,
        })
        .unwrap();
        AppState::new(config).unwrap()
    }

    #[test]
    fn test_page_names_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
        assert_eq!("Company_Dashboard".parse::<Page>().unwrap(), Page::CompanyDashboard);
    }

    #[test]
    fn test_unknown_page_is_not_found() {
        let err = render(&state("student"), "settings", "").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_page_of_other_role_is_not_found() {
        let err = render(&state("student"), "office-dashboard", "").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("student")));
    }

    #[test]
    fn test_every_role_reaches_its_home() {
        for role in ["student", "company", "office"] {
            let state = state(role);
            let home = Page::home(state.config.role);
            let view = render(&state, home.as_str(), "").unwrap();
            assert_eq!(view.page, home);
            assert_eq!(view.role.as_str(), role);
        }
    }

    #[test]
    fn test_render_reports_facet_state() {
        let view = render(&state("student"), "applications", "tier=Tier 1; status=all").unwrap();
        let tier = view.facets.iter().find(|f| f.name == "tier").unwrap();
        assert_eq!(tier.value.as_deref(), Some("1"));
        assert_eq!(tier.label, "Tier 1");
        assert_eq!(tier.options[0], "All Tiers");

        let status = view.facets.iter().find(|f| f.name == "status").unwrap();
        assert_eq!(status.value, None);
        assert_eq!(status.label, "All");

        assert_eq!(view.section("applications").unwrap().ids(), vec!["1", "2"]);
    }

    #[test]
    fn test_bad_selection_is_validation_error() {
        let err = render(&state("student"), "exams", "difficulty=Brutal").unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_rendering_twice_gives_same_rows_and_stats() {
        let state = state("student");
        let a = render(&state, "calendar", "priority=high").unwrap();
        let b = render(&state, "calendar", "priority=high").unwrap();
        assert_ne!(a.session_id, b.session_id);
        assert_eq!(a.stats, b.stats);
        assert_eq!(
            a.section("events").unwrap().ids(),
            b.section("events").unwrap().ids()
        );
    }

    #[test]
    fn test_page_view_serializes_kebab_page_name() {
        let view = render(&state("office"), "office-dashboard", "").unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["page"], "office-dashboard");
        assert_eq!(json["role"], "office");
        assert_eq!(json["stats"]["pending_approvals"], 2);
    }
}
