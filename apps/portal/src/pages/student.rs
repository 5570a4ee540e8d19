use chrono::NaiveDate;

use crate::catalog::RecordStore;
use crate::facets::{filter, FacetSelection};
use crate::models::event::CalendarEvent;
use crate::pages::rows;
use crate::pages::schemas;
use crate::pages::view::{Content, Row, Section};
use crate::presentation::streak_token;
use crate::stats::{aggregate, percentage, AggregationSpec, Metric, Predicate, StatValue, Stats};

const NO_MATCHES: &str = "No results match the current filters.";

/// Replaces an average with its rounded value.
fn rounded(stats: Stats, name: &str) -> Stats {
    let avg = stats.average(name).map(f64::round);
    stats.with(name, StatValue::Average(avg))
}

/// Events from `today` on, earliest first.
fn upcoming_from(events: &[CalendarEvent], today: NaiveDate, limit: usize) -> Vec<&CalendarEvent> {
    let mut upcoming: Vec<&CalendarEvent> = events.iter().filter(|e| e.date >= today).collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming.truncate(limit);
    upcoming
}

pub fn dashboard(store: &RecordStore, today: NaiveDate) -> Content {
    let applications = aggregate(
        &store.applications,
        &AggregationSpec::new()
            .metric("applications", Metric::Total)
            .metric(
                "interviews",
                Metric::Count(Predicate::Equals {
                    field: "status",
                    value: "Interview",
                }),
            ),
    );
    let tests = aggregate(
        &store.mock_tests,
        &AggregationSpec::new()
            .metric(
                "tests_attempted",
                Metric::Count(Predicate::Flag { field: "attempted" }),
            )
            .metric(
                "average_test_score",
                Metric::RatioAverage {
                    numerator: "score",
                    denominator: "max_score",
                },
            ),
    );
    let profile = aggregate(
        &store.resumes,
        &AggregationSpec::new().metric(
            "profile_score",
            Metric::Average {
                field: "completeness",
            },
        ),
    );
    let badges = aggregate(
        &store.badges,
        &AggregationSpec::new().metric(
            "badges_earned",
            Metric::Count(Predicate::Flag { field: "earned" }),
        ),
    );

    let streak = &store.streak;
    let weekly = percentage(streak.weekly_progress as usize, streak.weekly_goal as usize);
    let stats = applications
        .merge(rounded(tests, "average_test_score"))
        .merge(rounded(profile, "profile_score"))
        .merge(badges)
        .with("current_streak", StatValue::Count(streak.current_streak as usize))
        .with("longest_streak", StatValue::Count(streak.longest_streak as usize))
        .with("weekly_progress", StatValue::Percentage(weekly));

    let streak_row = Row {
        id: "streak".to_string(),
        title: format!("{} day streak", streak.current_streak),
        subtitle: format!(
            "longest {} days, {} of {} this week",
            streak.longest_streak, streak.weekly_progress, streak.weekly_goal
        ),
        tokens: vec![streak_token(streak.current_streak)],
        progress: Some(weekly),
        detail: Some(format!("{} active days in total", streak.total_days)),
    };

    let upcoming = upcoming_from(&store.events, today, 3)
        .into_iter()
        .map(rows::event)
        .collect();
    let recent = store
        .applications
        .iter()
        .take(3)
        .map(rows::application)
        .collect();

    Content {
        sections: vec![
            Section::fixed("upcoming", upcoming, "No upcoming events."),
            Section::fixed("recent_applications", recent, "No applications yet."),
            Section::fixed("streak", vec![streak_row], ""),
        ],
        stats,
    }
}

pub fn applications(store: &RecordStore, selection: &FacetSelection) -> Content {
    let matches = filter(&store.applications, &schemas::APPLICATIONS, selection);
    let stats = aggregate(
        &store.applications,
        &AggregationSpec::new()
            .metric("total", Metric::Total)
            .metric(
                "pending",
                Metric::Count(Predicate::NoneOf {
                    field: "status",
                    values: &["Rejected", "Joined"],
                }),
            )
            .metric(
                "shortlisted",
                Metric::Count(Predicate::OneOf {
                    field: "status",
                    values: &["Shortlisted", "Interview", "Offer"],
                }),
            )
            .metric(
                "offers",
                Metric::Count(Predicate::Equals {
                    field: "status",
                    value: "Offer",
                }),
            )
            .metric("average_progress", Metric::Average { field: "progress" }),
    );

    Content {
        sections: vec![Section::filtered(
            "applications",
            &matches,
            rows::application,
            NO_MATCHES,
        )],
        stats,
    }
}

pub fn openings(store: &RecordStore, selection: &FacetSelection) -> Content {
    let matches = filter(&store.openings, &schemas::OPENINGS, selection);
    let stats = aggregate(
        &store.openings,
        &AggregationSpec::new()
            .metric("total", Metric::Total)
            .metric(
                "tier_1",
                Metric::Count(Predicate::Equals {
                    field: "tier",
                    value: "1",
                }),
            )
            .metric("applicants", Metric::Sum { field: "applicants" }),
    );

    Content {
        sections: vec![Section::filtered(
            "openings",
            &matches,
            rows::opening,
            "No openings match the current filters.",
        )],
        stats,
    }
}

pub fn exams(store: &RecordStore, selection: &FacetSelection) -> Content {
    let matches = filter(&store.mock_tests, &schemas::EXAMS, selection);
    let stats = aggregate(
        &store.mock_tests,
        &AggregationSpec::new()
            .metric("total", Metric::Total)
            .metric(
                "attempted",
                Metric::Count(Predicate::Flag { field: "attempted" }),
            )
            .metric("average_score", Metric::Average { field: "score" })
            .metric(
                "completed",
                Metric::Count(Predicate::All(vec![
                    Predicate::Flag { field: "attempted" },
                    Predicate::AtLeast {
                        field: "score",
                        threshold: 70.0,
                    },
                ])),
            )
            .metric(
                "attempted_percentage",
                Metric::Percentage(Predicate::Flag { field: "attempted" }),
            ),
    );

    Content {
        sections: vec![Section::filtered(
            "tests",
            &matches,
            rows::mock_test,
            "No mock tests match the current filters.",
        )],
        stats: rounded(stats, "average_score"),
    }
}

pub fn calendar(store: &RecordStore, selection: &FacetSelection) -> Content {
    let matches = filter(&store.events, &schemas::CALENDAR, selection);
    let stats = aggregate(
        &store.events,
        &AggregationSpec::new()
            .metric("total", Metric::Total)
            .metric(
                "today",
                Metric::Count(Predicate::Equals {
                    field: "status",
                    value: "Today",
                }),
            )
            .metric(
                "upcoming",
                Metric::Count(Predicate::Equals {
                    field: "status",
                    value: "Upcoming",
                }),
            )
            .metric(
                "interviews",
                Metric::Count(Predicate::Equals {
                    field: "type",
                    value: "Interview",
                }),
            )
            .metric(
                "deadlines",
                Metric::Count(Predicate::Equals {
                    field: "type",
                    value: "Deadline",
                }),
            ),
    );

    // Follows the list filters, unlike the stat cards.
    let mut next: Vec<&CalendarEvent> = matches.iter().filter(|e| e.status.is_pending()).collect();
    next.sort_by_key(|e| e.date);
    let next_up = next.into_iter().take(5).map(rows::event).collect();

    Content {
        sections: vec![
            Section::filtered("events", &matches, rows::event, NO_MATCHES),
            Section::fixed("next_up", next_up, "Nothing scheduled."),
        ],
        stats,
    }
}

pub fn documents(store: &RecordStore, selection: &FacetSelection) -> Content {
    let matches = filter(&store.documents, &schemas::DOCUMENTS, selection);
    let stats = aggregate(
        &store.documents,
        &AggregationSpec::new()
            .metric("total", Metric::Total)
            .metric(
                "verified",
                Metric::Count(Predicate::Flag { field: "verified" }),
            )
            .metric(
                "verified_percentage",
                Metric::Percentage(Predicate::Flag { field: "verified" }),
            ),
    );

    Content {
        sections: vec![Section::filtered(
            "documents",
            &matches,
            rows::document,
            "No documents match the current filters.",
        )],
        stats,
    }
}

pub fn resumes(store: &RecordStore, selection: &FacetSelection) -> Content {
    let matches = filter(&store.resumes, &schemas::RESUMES, selection);
    let stats = aggregate(
        &store.resumes,
        &AggregationSpec::new()
            .metric("versions", Metric::Total)
            .metric(
                "complete",
                Metric::Count(Predicate::Equals {
                    field: "status",
                    value: "complete",
                }),
            )
            .metric(
                "average_completeness",
                Metric::Average {
                    field: "completeness",
                },
            ),
    );

    Content {
        sections: vec![Section::filtered(
            "resumes",
            &matches,
            rows::resume,
            NO_MATCHES,
        )],
        stats: rounded(stats, "average_completeness"),
    }
}

pub fn templates(store: &RecordStore, selection: &FacetSelection) -> Content {
    let matches = filter(&store.templates, &schemas::TEMPLATES, selection);
    let stats = aggregate(
        &store.templates,
        &AggregationSpec::new()
            .metric("total", Metric::Total)
            .metric(
                "professional",
                Metric::Count(Predicate::Equals {
                    field: "level",
                    value: "Professional",
                }),
            )
            .metric("average_rating", Metric::Average { field: "rating" }),
    );

    Content {
        sections: vec![Section::filtered(
            "templates",
            &matches,
            rows::template,
            "No templates match the current filters.",
        )],
        stats,
    }
}

pub fn badges(store: &RecordStore, selection: &FacetSelection) -> Content {
    let matches = filter(&store.badges, &schemas::BADGES, selection);
    let stats = aggregate(
        &store.badges,
        &AggregationSpec::new()
            .metric("total", Metric::Total)
            .metric("earned", Metric::Count(Predicate::Flag { field: "earned" }))
            .metric(
                "in_progress",
                Metric::Count(Predicate::All(vec![
                    Predicate::Equals {
                        field: "earned",
                        value: "false",
                    },
                    Predicate::Defined {
                        field: "max_progress",
                    },
                ])),
            )
            .metric(
                "earned_percentage",
                Metric::Percentage(Predicate::Flag { field: "earned" }),
            ),
    );

    Content {
        sections: vec![Section::filtered(
            "badges",
            &matches,
            rows::badge,
            NO_MATCHES,
        )],
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        RecordStore::seeded().unwrap()
    }

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_application_stats_cover_full_collection() {
        let store = store();
        let offers_only = FacetSelection::all().only("status", "Offer");
        let content = applications(&store, &offers_only);

        assert_eq!(content.sections[0].ids(), vec!["6"]);
        assert_eq!(content.stats.count("total"), 6);
        assert_eq!(content.stats.count("pending"), 5);
        assert_eq!(content.stats.count("shortlisted"), 3);
        assert_eq!(content.stats.count("offers"), 1);
    }

    #[test]
    fn test_no_match_sets_empty_message() {
        let store = store();
        let sel = FacetSelection::all().only("query", "nonexistent corp");
        let content = applications(&store, &sel);
        assert!(content.sections[0].rows.is_empty());
        assert!(content.sections[0].empty_message.is_some());
    }

    #[test]
    fn test_exam_stats() {
        let content = exams(&store(), &FacetSelection::all());
        assert_eq!(content.stats.count("total"), 6);
        assert_eq!(content.stats.count("attempted"), 3);
        assert_eq!(content.stats.average("average_score"), Some(85.0));
        assert_eq!(content.stats.count("completed"), 3);
        assert_eq!(content.stats.percentage("attempted_percentage"), 50);
    }

    #[test]
    fn test_calendar_next_up_is_sorted_and_capped() {
        let content = calendar(&store(), &FacetSelection::all());
        assert_eq!(content.stats.count("total"), 7);
        assert_eq!(content.stats.count("today"), 1);
        assert_eq!(content.stats.count("upcoming"), 5);
        assert_eq!(content.stats.count("interviews"), 2);
        assert_eq!(content.stats.count("deadlines"), 1);

        let next = &content.sections[1];
        assert_eq!(next.rows.len(), 5);
        assert!(next.rows[0].subtitle.starts_with("2024-03-10"));
        assert!(next.rows[4].subtitle.starts_with("2024-03-20"));
    }

    #[test]
    fn test_calendar_next_up_follows_type_filter() {
        let content = calendar(&store(), &FacetSelection::all().only("type", "Deadline"));
        let events = &content.sections[0];
        let next = &content.sections[1];
        assert_eq!(events.rows.len(), 1);
        assert_eq!(next.ids(), events.ids());
        assert!(next.rows[0].subtitle.starts_with("2024-03-10"));
        // Stat cards still cover every event.
        assert_eq!(content.stats.count("total"), 7);
    }

    #[test]
    fn test_templates_professional_count() {
        let content = templates(&store(), &FacetSelection::all().only("level", "Beginner"));
        assert_eq!(content.sections[0].rows.len(), 2);
        assert_eq!(content.stats.count("professional"), 3);
    }

    #[test]
    fn test_dashboard_upcoming_from_today() {
        let content = dashboard(&store(), day("2024-03-11"));
        let upcoming = &content.sections[0];
        let dates: Vec<&str> = upcoming.rows.iter().map(|r| &r.subtitle[..10]).collect();
        assert_eq!(dates, vec!["2024-03-12", "2024-03-15", "2024-03-18"]);
        assert_eq!(content.stats.count("applications"), 6);
        assert_eq!(content.stats.average("average_test_score"), Some(85.0));
        assert_eq!(content.stats.percentage("weekly_progress"), 80);
    }

    #[test]
    fn test_dashboard_after_every_event_is_empty() {
        let content = dashboard(&store(), day("2030-01-01"));
        assert!(content.sections[0].rows.is_empty());
        assert_eq!(
            content.sections[0].empty_message.as_deref(),
            Some("No upcoming events.")
        );
    }

    #[test]
    fn test_badge_stats_and_summary() {
        let content = badges(&store(), &FacetSelection::all().only("kind", "gold"));
        assert_eq!(content.stats.count("total"), 6);
        assert_eq!(content.stats.count("earned"), 3);
        assert_eq!(content.stats.count("in_progress"), 3);
        assert_eq!(content.stats.percentage("earned_percentage"), 50);
        assert_eq!(content.sections[0].summary.as_deref(), Some("Showing 2 of 6"));
    }

    #[test]
    fn test_documents_verified_percentage() {
        let content = documents(&store(), &FacetSelection::all().only("verified", "false"));
        assert_eq!(content.sections[0].rows.len(), 1);
        assert_eq!(content.stats.count("total"), 5);
        assert_eq!(content.stats.percentage("verified_percentage"), 80);
    }
}
