use serde::Serialize;

/// Colour family used by badges, chips and progress text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Muted,
    Primary,
    Success,
    Warning,
    Destructive,
    Tier1,
    Tier2,
    Tier3,
    Gold,
    Silver,
    Bronze,
    StreakFire,
}

impl Tone {
    /// Chip class string: tinted background, text and border.
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Muted => "bg-muted text-muted-foreground",
            Tone::Primary => "bg-primary/20 text-primary border-primary/30",
            Tone::Success => "bg-success/20 text-success border-success/30",
            Tone::Warning => "bg-warning/20 text-warning border-warning/30",
            Tone::Destructive => "bg-destructive/20 text-destructive border-destructive/30",
            Tone::Tier1 => "bg-tier1/20 text-tier1 border-tier1/30",
            Tone::Tier2 => "bg-tier2/20 text-tier2 border-tier2/30",
            Tone::Tier3 => "bg-tier3/20 text-tier3 border-tier3/30",
            Tone::Gold => "bg-badge-gold/20 text-badge-gold border-badge-gold/30",
            Tone::Silver => "bg-badge-silver/20 text-badge-silver border-badge-silver/30",
            Tone::Bronze => "bg-badge-bronze/20 text-badge-bronze border-badge-bronze/30",
            Tone::StreakFire => "text-streak-fire",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayToken {
    pub label: String,
    pub tone: Tone,
    pub class: &'static str,
}

impl DisplayToken {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
            class: tone.class(),
        }
    }

    /// Token for a value no table knows: raw value, muted.
    pub fn fallback(value: &str) -> Self {
        Self::new(value, Tone::Muted)
    }
}

type Table = &'static [(&'static str, &'static str, Tone)];

const APPLICATION_STATUS: Table = &[
    ("Applied", "Applied", Tone::Muted),
    ("Test", "Test", Tone::Warning),
    ("Shortlisted", "Shortlisted", Tone::Primary),
    ("Interview", "Interview", Tone::Success),
    ("Offer", "Offer", Tone::Tier1),
    ("Rejected", "Rejected", Tone::Destructive),
    ("Joined", "Joined", Tone::Success),
];

const TIER: Table = &[
    ("1", "Tier 1", Tone::Tier1),
    ("2", "Tier 2", Tone::Tier2),
    ("3", "Tier 3", Tone::Tier3),
];

const DIFFICULTY: Table = &[
    ("Easy", "Easy", Tone::Success),
    ("Medium", "Medium", Tone::Warning),
    ("Hard", "Hard", Tone::Destructive),
];

const SUBJECT: Table = &[
    ("Aptitude", "Aptitude", Tone::Primary),
    ("Reasoning", "Reasoning", Tone::Tier2),
    ("Coding", "Coding", Tone::Success),
    ("English", "English", Tone::Warning),
    ("Interview", "Interview", Tone::Gold),
];

const EVENT_TYPE: Table = &[
    ("Interview", "Interview", Tone::Success),
    ("Test", "Test", Tone::Primary),
    ("Deadline", "Deadline", Tone::Destructive),
    ("Mock Test", "Mock Test", Tone::Warning),
    ("Seminar", "Seminar", Tone::Tier2),
    ("Workshop", "Workshop", Tone::Tier3),
];

const EVENT_STATUS: Table = &[
    ("Today", "Today", Tone::Tier1),
    ("Upcoming", "Upcoming", Tone::Primary),
    ("Completed", "Completed", Tone::Success),
    ("Cancelled", "Cancelled", Tone::Muted),
];

const PRIORITY: Table = &[
    ("High", "High", Tone::Destructive),
    ("Medium", "Medium", Tone::Warning),
    ("Low", "Low", Tone::Success),
];

const TEMPLATE_LEVEL: Table = &[
    ("Beginner", "Beginner", Tone::Success),
    ("Professional", "Professional", Tone::Primary),
    ("Executive", "Executive", Tone::Tier1),
];

const RESUME_STATUS: Table = &[
    ("complete", "Complete", Tone::Success),
    ("draft", "Draft", Tone::Warning),
    ("outdated", "Outdated", Tone::Destructive),
];

const BADGE_KIND: Table = &[
    ("gold", "Gold", Tone::Gold),
    ("silver", "Silver", Tone::Silver),
    ("bronze", "Bronze", Tone::Bronze),
];

const VERIFICATION: Table = &[
    ("true", "Verified", Tone::Success),
    ("false", "Pending", Tone::Warning),
];

const SEVERITY: Table = &[
    ("high", "High", Tone::Destructive),
    ("medium", "Medium", Tone::Warning),
    ("low", "Low", Tone::Success),
];

const APPROVAL_STATUS: Table = &[
    ("Review", "Review", Tone::Primary),
    ("Pending", "Pending", Tone::Warning),
    ("Approved", "Approved", Tone::Success),
];

const POSTING_STATUS: Table = &[
    ("Active", "Active", Tone::Success),
    ("Draft", "Draft", Tone::Muted),
    ("Closed", "Closed", Tone::Destructive),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    ApplicationStatus,
    Tier,
    Difficulty,
    Subject,
    EventType,
    EventStatus,
    Priority,
    TemplateLevel,
    ResumeStatus,
    BadgeKind,
    Verification,
    Severity,
    ApprovalStatus,
    PostingStatus,
}

impl Vocabulary {
    fn table(&self) -> Table {
        match self {
            Vocabulary::ApplicationStatus => APPLICATION_STATUS,
            Vocabulary::Tier => TIER,
            Vocabulary::Difficulty => DIFFICULTY,
            Vocabulary::Subject => SUBJECT,
            Vocabulary::EventType => EVENT_TYPE,
            Vocabulary::EventStatus => EVENT_STATUS,
            Vocabulary::Priority => PRIORITY,
            Vocabulary::TemplateLevel => TEMPLATE_LEVEL,
            Vocabulary::ResumeStatus => RESUME_STATUS,
            Vocabulary::BadgeKind => BADGE_KIND,
            Vocabulary::Verification => VERIFICATION,
            Vocabulary::Severity => SEVERITY,
            Vocabulary::ApprovalStatus => APPROVAL_STATUS,
            Vocabulary::PostingStatus => POSTING_STATUS,
        }
    }
}

/// Looks up the display token for `value`. Never fails: unknown values get
/// [`DisplayToken::fallback`].
pub fn label(vocabulary: Vocabulary, value: &str) -> DisplayToken {
    vocabulary
        .table()
        .iter()
        .find(|(key, _, _)| *key == value)
        .map(|(_, label, tone)| DisplayToken::new(*label, *tone))
        .unwrap_or_else(|| DisplayToken::fallback(value))
}

/// Threshold band: applies when the value is at least `min`.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub min: f64,
    pub label: &'static str,
    pub tone: Tone,
}

// Bands are ordered highest threshold first.
const SCORE_BANDS: &[Band] = &[
    Band {
        min: 90.0,
        label: "Excellent",
        tone: Tone::Success,
    },
    Band {
        min: 70.0,
        label: "Good",
        tone: Tone::Warning,
    },
    Band {
        min: f64::NEG_INFINITY,
        label: "Needs Practice",
        tone: Tone::Destructive,
    },
];

const COMPLETENESS_BANDS: &[Band] = &[
    Band {
        min: 80.0,
        label: "Strong",
        tone: Tone::Success,
    },
    Band {
        min: 60.0,
        label: "Fair",
        tone: Tone::Warning,
    },
    Band {
        min: f64::NEG_INFINITY,
        label: "Incomplete",
        tone: Tone::Destructive,
    },
];

const STREAK_BANDS: &[Band] = &[
    Band {
        min: 30.0,
        label: "Legend",
        tone: Tone::Gold,
    },
    Band {
        min: 14.0,
        label: "Champion",
        tone: Tone::Silver,
    },
    Band {
        min: 7.0,
        label: "Rockstar",
        tone: Tone::StreakFire,
    },
    Band {
        min: f64::NEG_INFINITY,
        label: "Getting Started",
        tone: Tone::Primary,
    },
];

pub fn band(bands: &[Band], value: f64) -> DisplayToken {
    bands
        .iter()
        .find(|b| value >= b.min)
        .map(|b| DisplayToken::new(b.label, b.tone))
        .unwrap_or_else(|| DisplayToken::fallback("Unknown"))
}

pub fn score_token(score: f64) -> DisplayToken {
    band(SCORE_BANDS, score)
}

pub fn completeness_token(completeness: f64) -> DisplayToken {
    band(COMPLETENESS_BANDS, completeness)
}

pub fn streak_token(days: u32) -> DisplayToken {
    band(STREAK_BANDS, f64::from(days))
}

/// Unearned badges always render muted regardless of kind.
pub fn badge_token(kind: &str, earned: bool) -> DisplayToken {
    let token = label(Vocabulary::BadgeKind, kind);
    if earned {
        token
    } else {
        DisplayToken::new(token.label, Tone::Muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::application::{ApplicationStatus, Tier};

    #[test]
    fn test_every_application_status_has_a_token() {
        for status in ApplicationStatus::ALL {
            let token = label(Vocabulary::ApplicationStatus, status.as_str());
            assert_eq!(token.label, status.as_str());
        }
        assert_eq!(
            label(Vocabulary::ApplicationStatus, "Offer").tone,
            Tone::Tier1
        );
    }

    #[test]
    fn test_tier_tokens() {
        for tier in Tier::ALL {
            let token = label(Vocabulary::Tier, tier.as_str());
            assert_eq!(token.label, format!("Tier {}", tier.rank()));
        }
    }

    #[test]
    fn test_event_status_tokens() {
        use crate::models::event::EventStatus;

        let today = label(Vocabulary::EventStatus, EventStatus::Today.as_str());
        assert_eq!(today.tone, Tone::Tier1);
        assert_eq!(today.class, "bg-tier1/20 text-tier1 border-tier1/30");
        assert_eq!(
            label(Vocabulary::EventStatus, EventStatus::Upcoming.as_str()).tone,
            Tone::Primary
        );
        assert_eq!(
            label(Vocabulary::EventStatus, EventStatus::Completed.as_str()).tone,
            Tone::Success
        );
        assert_eq!(
            label(Vocabulary::EventStatus, EventStatus::Cancelled.as_str()).tone,
            Tone::Muted
        );
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let token = label(Vocabulary::Difficulty, "Impossible");
        assert_eq!(token.label, "Impossible");
        assert_eq!(token.tone, Tone::Muted);
        assert_eq!(token.class, "bg-muted text-muted-foreground");
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_token(92.0).tone, Tone::Success);
        assert_eq!(score_token(90.0).tone, Tone::Success);
        assert_eq!(score_token(78.0).tone, Tone::Warning);
        assert_eq!(score_token(12.0).tone, Tone::Destructive);
    }

    #[test]
    fn test_nan_score_falls_back() {
        assert_eq!(score_token(f64::NAN).tone, Tone::Muted);
    }

    #[test]
    fn test_streak_bands() {
        assert_eq!(streak_token(45).label, "Legend");
        assert_eq!(streak_token(14).label, "Champion");
        assert_eq!(streak_token(7).label, "Rockstar");
        assert_eq!(streak_token(0).label, "Getting Started");
    }

    #[test]
    fn test_unearned_badge_is_muted() {
        assert_eq!(badge_token("gold", true).tone, Tone::Gold);
        let pending = badge_token("gold", false);
        assert_eq!(pending.tone, Tone::Muted);
        assert_eq!(pending.label, "Gold");
    }

    #[test]
    fn test_completeness_bands() {
        assert_eq!(completeness_token(85.0).label, "Strong");
        assert_eq!(completeness_token(60.0).label, "Fair");
        assert_eq!(completeness_token(45.0).label, "Incomplete");
    }
}
