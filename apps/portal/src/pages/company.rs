use crate::catalog::RecordStore;
use crate::facets::{filter, FacetSelection};
use crate::pages::rows;
use crate::pages::schemas;
use crate::pages::view::{Content, Section};
use crate::stats::{aggregate, AggregationSpec, Metric, Predicate};

pub fn dashboard(store: &RecordStore, selection: &FacetSelection) -> Content {
    let matches = filter(&store.postings, &schemas::COMPANY_DASHBOARD, selection);
    let stats = aggregate(
        &store.postings,
        &AggregationSpec::new()
            .metric("postings", Metric::Total)
            .metric(
                "active",
                Metric::Count(Predicate::Equals {
                    field: "status",
                    value: "Active",
                }),
            )
            .metric(
                "total_applications",
                Metric::Sum {
                    field: "applications",
                },
            ),
    );

    Content {
        sections: vec![Section::filtered(
            "postings",
            &matches,
            rows::posting,
            "No job postings match the current filters.",
        )],
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_stats() {
        let store = RecordStore::seeded().unwrap();
        let content = dashboard(&store, &FacetSelection::all().only("status", "Draft"));
        assert_eq!(content.sections[0].ids(), vec!["3"]);
        assert_eq!(content.stats.count("postings"), 3);
        assert_eq!(content.stats.count("active"), 2);
        assert_eq!(content.stats.sum("total_applications"), 105.0);
    }
}
