//! Binds domain records to list rows.

use crate::models::application::{JobApplication, JobOpening};
use crate::models::event::CalendarEvent;
use crate::models::exam::MockTest;
use crate::models::office::{Alert, Approval, JobPosting};
use crate::models::progress::Badge;
use crate::models::resume::{Document, ResumeVersion, Template};
use crate::pages::view::Row;
use crate::presentation::{
    badge_token, completeness_token, label, score_token, DisplayToken, Vocabulary,
};
use crate::stats::percentage;

fn row(id: &str, title: &str, subtitle: String, tokens: Vec<DisplayToken>) -> Row {
    Row {
        id: id.to_string(),
        title: title.to_string(),
        subtitle,
        tokens,
        progress: None,
        detail: None,
    }
}

pub fn application(a: &JobApplication) -> Row {
    Row {
        progress: Some(a.progress.min(100)),
        detail: a.next_step.clone(),
        ..row(
            &a.id,
            &a.title,
            format!("{}, {}", a.company, a.location),
            vec![
                label(Vocabulary::ApplicationStatus, a.status.as_str()),
                label(Vocabulary::Tier, a.tier.as_str()),
            ],
        )
    }
}

pub fn opening(o: &JobOpening) -> Row {
    Row {
        detail: Some(format!(
            "{} applicants, rated {:.1}, apply by {}",
            o.applicants, o.rating, o.deadline
        )),
        ..row(
            &o.id,
            &o.title,
            format!("{}, {}, {}", o.company, o.location, o.salary),
            vec![label(Vocabulary::Tier, o.tier.as_str())],
        )
    }
}

/// Score as a share of the test's maximum, 0 – 100.
fn score_percent(score: f64, max_score: f64) -> Option<u8> {
    (max_score > 0.0).then(|| (score * 100.0 / max_score).round().clamp(0.0, 100.0) as u8)
}

pub fn mock_test(t: &MockTest) -> Row {
    let mut tokens = vec![
        label(Vocabulary::Subject, t.subject.as_str()),
        label(Vocabulary::Difficulty, t.difficulty.as_str()),
    ];
    let progress = t.score.and_then(|s| score_percent(s, t.max_score));
    if let Some(pct) = progress {
        tokens.push(score_token(f64::from(pct)));
    }

    Row {
        progress,
        detail: t.company.as_ref().map(|c| format!("{c} pattern")),
        ..row(
            &t.id,
            &t.title,
            format!("{} questions, {} min", t.questions, t.duration_minutes),
            tokens,
        )
    }
}

pub fn event(e: &CalendarEvent) -> Row {
    let detail = match (&e.company, &e.location) {
        (Some(c), Some(l)) => Some(format!("{c}, {l}")),
        (Some(x), None) | (None, Some(x)) => Some(x.clone()),
        (None, None) => None,
    };
    Row {
        detail,
        ..row(
            &e.id,
            &e.title,
            format!("{} {}", e.date, e.time),
            vec![
                label(Vocabulary::EventType, e.kind.as_str()),
                label(Vocabulary::Priority, e.priority.as_str()),
                label(Vocabulary::EventStatus, e.status.as_str()),
            ],
        )
    }
}

pub fn document(d: &Document) -> Row {
    row(
        &d.id,
        &d.name,
        format!("{}, {}, uploaded {}", d.kind, d.size, d.uploaded_on),
        vec![label(
            Vocabulary::Verification,
            if d.verified { "true" } else { "false" },
        )],
    )
}

pub fn resume(r: &ResumeVersion) -> Row {
    Row {
        progress: Some(r.completeness.min(100)),
        detail: r.is_default.then(|| "Default".to_string()),
        ..row(
            &r.id,
            &r.name,
            format!("updated {}", r.updated_on),
            vec![
                label(Vocabulary::ResumeStatus, r.status.as_str()),
                completeness_token(f64::from(r.completeness)),
            ],
        )
    }
}

pub fn template(t: &Template) -> Row {
    Row {
        detail: Some(format!("{:.1} rating, {} downloads", t.rating, t.downloads)),
        ..row(
            &t.id,
            &t.name,
            t.description.clone(),
            vec![label(Vocabulary::TemplateLevel, t.level.as_str())],
        )
    }
}

pub fn badge(b: &Badge) -> Row {
    let progress = match (b.earned, b.progress, b.max_progress) {
        (true, _, _) => Some(100),
        (false, Some(done), Some(max)) => Some(percentage(done as usize, max as usize)),
        _ => None,
    };
    Row {
        progress,
        detail: b.earned_on.map(|d| format!("earned {d}")),
        ..row(
            &b.id,
            &b.name,
            b.description.clone(),
            vec![badge_token(b.kind.as_str(), b.earned)],
        )
    }
}

pub fn posting(p: &JobPosting) -> Row {
    row(
        &p.id,
        &p.title,
        format!("{} applications", p.applications),
        vec![label(Vocabulary::PostingStatus, p.status.as_str())],
    )
}

pub fn alert(a: &Alert) -> Row {
    row(
        &a.id,
        &a.kind,
        a.message.clone(),
        vec![label(Vocabulary::Severity, a.severity.as_str())],
    )
}

pub fn approval(a: &Approval) -> Row {
    row(
        &a.id,
        &a.company,
        a.kind.clone(),
        vec![label(Vocabulary::ApprovalStatus, a.status.as_str())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::models::event::EventStatus;
    use crate::presentation::tokens::Tone;

    #[test]
    fn test_in_progress_badge_shows_percentage() {
        let badges = seed::badges().unwrap();
        let pending = badges.iter().find(|b| !b.earned).unwrap();
        let r = badge(pending);
        let expected = percentage(
            pending.progress.unwrap() as usize,
            pending.max_progress.unwrap() as usize,
        );
        assert_eq!(r.progress, Some(expected));
        assert_eq!(r.tokens[0].tone, Tone::Muted);
    }

    #[test]
    fn test_unattempted_test_has_no_score_token() {
        let tests = seed::mock_tests();
        let fresh = tests.iter().find(|t| !t.attempted).unwrap();
        let r = mock_test(fresh);
        assert_eq!(r.progress, None);
        assert_eq!(r.tokens.len(), 2);
    }

    #[test]
    fn test_event_row_colors_status() {
        let events = seed::calendar_events().unwrap();
        let today = events
            .iter()
            .find(|e| e.status == EventStatus::Today)
            .unwrap();
        let r = event(today);
        assert_eq!(r.tokens[2].label, "Today");
        assert_eq!(r.tokens[2].tone, Tone::Tier1);
    }

    #[test]
    fn test_application_row_tokens() {
        let apps = seed::applications().unwrap();
        let r = application(&apps[0]);
        assert_eq!(r.tokens[0].label, "Interview");
        assert_eq!(r.tokens[1].label, "Tier 1");
        assert_eq!(r.progress, Some(75));
    }
}
