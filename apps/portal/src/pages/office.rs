use crate::catalog::RecordStore;
use crate::facets::{filter, FacetSelection};
use crate::pages::rows;
use crate::pages::schemas;
use crate::pages::view::{Content, Section};
use crate::stats::{aggregate, AggregationSpec, Metric, Predicate};

/// Alerts and approvals share one selection; each list only sees its own
/// facets, so `status` never constrains alerts.
pub fn dashboard(store: &RecordStore, selection: &FacetSelection) -> Content {
    let alerts = filter(
        &store.alerts,
        &schemas::OFFICE_ALERTS,
        &selection.restricted_to(&schemas::OFFICE_ALERTS),
    );
    let approvals = filter(
        &store.approvals,
        &schemas::OFFICE_APPROVALS,
        &selection.restricted_to(&schemas::OFFICE_APPROVALS),
    );

    let alert_stats = aggregate(
        &store.alerts,
        &AggregationSpec::new()
            .metric("alerts", Metric::Total)
            .metric(
                "high_severity",
                Metric::Count(Predicate::Equals {
                    field: "severity",
                    value: "high",
                }),
            ),
    );
    let approval_stats = aggregate(
        &store.approvals,
        &AggregationSpec::new().metric(
            "pending_approvals",
            Metric::Count(Predicate::NoneOf {
                field: "status",
                values: &["Approved"],
            }),
        ),
    );

    Content {
        sections: vec![
            Section::filtered("alerts", &alerts, rows::alert, "No alerts."),
            Section::filtered(
                "approvals",
                &approvals,
                rows::approval,
                "No approvals match the current filters.",
            ),
        ],
        stats: alert_stats.merge(approval_stats),
    }
}
