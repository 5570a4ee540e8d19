use crate::facets::{FacetDef, FacetOption, FacetSchema};

const STATUS_OPTIONS: &[FacetOption] = &[
    FacetOption::plain("Applied"),
    FacetOption::plain("Test"),
    FacetOption::plain("Shortlisted"),
    FacetOption::plain("Interview"),
    FacetOption::plain("Offer"),
    FacetOption::plain("Rejected"),
    FacetOption::plain("Joined"),
];

const TIERS: FacetDef = FacetDef::exact(
    "tier",
    "All Tiers",
    &[
        FacetOption::new("1", "Tier 1"),
        FacetOption::new("2", "Tier 2"),
        FacetOption::new("3", "Tier 3"),
    ],
);

pub static DASHBOARD: FacetSchema = FacetSchema {
    page: "dashboard",
    facets: &[],
};

pub static APPLICATIONS: FacetSchema = FacetSchema {
    page: "applications",
    facets: &[
        FacetDef::text("query"),
        FacetDef::exact("status", "All", STATUS_OPTIONS),
        TIERS,
    ],
};

pub static OPENINGS: FacetSchema = FacetSchema {
    page: "openings",
    facets: &[FacetDef::text("query"), TIERS],
};

pub static EXAMS: FacetSchema = FacetSchema {
    page: "exams",
    facets: &[
        FacetDef::text("query"),
        FacetDef::exact(
            "subject",
            "All Subjects",
            &[
                FacetOption::plain("Aptitude"),
                FacetOption::plain("Reasoning"),
                FacetOption::plain("Coding"),
                FacetOption::plain("English"),
                FacetOption::plain("Interview"),
            ],
        ),
        FacetDef::exact(
            "difficulty",
            "All Levels",
            &[
                FacetOption::plain("Easy"),
                FacetOption::plain("Medium"),
                FacetOption::plain("Hard"),
            ],
        ),
    ],
};

pub static CALENDAR: FacetSchema = FacetSchema {
    page: "calendar",
    facets: &[
        FacetDef::text("query"),
        FacetDef::exact(
            "type",
            "All Types",
            &[
                FacetOption::plain("Interview"),
                FacetOption::plain("Test"),
                FacetOption::plain("Deadline"),
                FacetOption::plain("Mock Test"),
                FacetOption::plain("Seminar"),
                FacetOption::plain("Workshop"),
            ],
        ),
        FacetDef::exact(
            "status",
            "All",
            &[
                FacetOption::plain("Upcoming"),
                FacetOption::plain("Today"),
                FacetOption::plain("Completed"),
                FacetOption::plain("Cancelled"),
            ],
        ),
        FacetDef::exact(
            "priority",
            "All Priorities",
            &[
                FacetOption::plain("High"),
                FacetOption::plain("Medium"),
                FacetOption::plain("Low"),
            ],
        ),
        FacetDef::date("date"),
    ],
};

pub static DOCUMENTS: FacetSchema = FacetSchema {
    page: "documents",
    facets: &[
        FacetDef::text("query"),
        // Document categories are free-form.
        FacetDef::exact("type", "All Types", &[]),
        FacetDef::exact(
            "verified",
            "All",
            &[
                FacetOption::new("true", "Verified"),
                FacetOption::new("false", "Pending"),
            ],
        ),
    ],
};

pub static RESUMES: FacetSchema = FacetSchema {
    page: "resumes",
    facets: &[FacetDef::exact(
        "status",
        "All",
        &[
            FacetOption::new("complete", "Complete"),
            FacetOption::new("draft", "Draft"),
            FacetOption::new("outdated", "Outdated"),
        ],
    )],
};

pub static TEMPLATES: FacetSchema = FacetSchema {
    page: "templates",
    facets: &[
        FacetDef::text("query"),
        FacetDef::exact(
            "level",
            "All Levels",
            &[
                FacetOption::plain("Beginner"),
                FacetOption::plain("Professional"),
                FacetOption::plain("Executive"),
            ],
        ),
    ],
};

pub static BADGES: FacetSchema = FacetSchema {
    page: "badges",
    facets: &[
        FacetDef::exact(
            "kind",
            "All Badges",
            &[
                FacetOption::new("gold", "Gold"),
                FacetOption::new("silver", "Silver"),
                FacetOption::new("bronze", "Bronze"),
            ],
        ),
        FacetDef::exact(
            "earned",
            "All",
            &[
                FacetOption::new("true", "Earned"),
                FacetOption::new("false", "In Progress"),
            ],
        ),
    ],
};

pub static COMPANY_DASHBOARD: FacetSchema = FacetSchema {
    page: "company-dashboard",
    facets: &[
        FacetDef::text("query"),
        FacetDef::exact(
            "status",
            "All",
            &[
                FacetOption::plain("Active"),
                FacetOption::plain("Draft"),
                FacetOption::plain("Closed"),
            ],
        ),
    ],
};

const SEVERITY: FacetDef = FacetDef::exact(
    "severity",
    "All",
    &[
        FacetOption::new("high", "High"),
        FacetOption::new("medium", "Medium"),
        FacetOption::new("low", "Low"),
    ],
);

const APPROVAL_STATUS: FacetDef = FacetDef::exact(
    "status",
    "All",
    &[
        FacetOption::plain("Review"),
        FacetOption::plain("Pending"),
        FacetOption::plain("Approved"),
    ],
);

/// Everything the office dashboard accepts. Each list filters through its own
/// sub-schema below.
pub static OFFICE_DASHBOARD: FacetSchema = FacetSchema {
    page: "office-dashboard",
    facets: &[SEVERITY, APPROVAL_STATUS],
};

pub static OFFICE_ALERTS: FacetSchema = FacetSchema {
    page: "office-dashboard",
    facets: &[SEVERITY],
};

pub static OFFICE_APPROVALS: FacetSchema = FacetSchema {
    page: "office-dashboard",
    facets: &[APPROVAL_STATUS],
};
