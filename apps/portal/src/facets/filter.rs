use tracing::debug;

use crate::catalog::record::Record;
use crate::facets::schema::{FacetKind, FacetSchema};
use crate::facets::selection::FacetSelection;

/// Result of applying a selection to a collection.
///
/// Only exists once a filter has run, so an empty `Filtered` means "nothing
/// matched" rather than "not filtered yet".
#[derive(Debug)]
pub struct Filtered<'a, R> {
    pub matches: Vec<&'a R>,
    /// Size of the input collection.
    pub considered: usize,
}

impl<'a, R> Filtered<'a, R> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.matches.iter().copied()
    }
}

enum Constraint<'s> {
    Exact { field: &'s str, value: &'s str },
    Text { needle: String },
}

impl Constraint<'_> {
    fn admits<R: Record>(&self, record: &R) -> bool {
        match self {
            Constraint::Exact { field, value } => record
                .field(field)
                .map(|v| v.facet_key() == *value)
                .unwrap_or(false),
            Constraint::Text { needle } => record
                .search_text()
                .iter()
                .any(|t| t.to_lowercase().contains(needle.as_str())),
        }
    }
}

/// Keeps the records that satisfy every active facet of `selection`.
///
/// Facets combine with AND, input order is preserved, and a record missing a
/// constrained field never matches.
pub fn filter<'a, R: Record>(
    records: &'a [R],
    schema: &FacetSchema,
    selection: &FacetSelection,
) -> Filtered<'a, R> {
    let constraints: Vec<Constraint<'_>> = selection
        .active()
        .filter_map(|(name, value)| match schema.kind_of(name) {
            // A blank query constrains nothing.
            FacetKind::Text if value.trim().is_empty() => None,
            FacetKind::Text => Some(Constraint::Text {
                needle: value.trim().to_lowercase(),
            }),
            FacetKind::Exact | FacetKind::Date => Some(Constraint::Exact { field: name, value }),
        })
        .collect();

    let matches: Vec<&R> = records
        .iter()
        .filter(|r| constraints.iter().all(|c| c.admits(*r)))
        .collect();

    debug!(
        page = schema.page,
        considered = records.len(),
        matched = matches.len(),
        active = constraints.len(),
        "facet filter applied"
    );

    Filtered {
        matches,
        considered: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::testing::MapRecord;
    use crate::facets::schema::{FacetDef, FacetOption};
    use crate::facets::selection::Choice;
    use proptest::prelude::*;
    use proptest::test_runner::Config;

    const SCHEMA: FacetSchema = FacetSchema {
        page: "applications",
        facets: &[
            FacetDef::text("query"),
            FacetDef::exact(
                "status",
                "All",
                &[
                    FacetOption::plain("Applied"),
                    FacetOption::plain("Offer"),
                    FacetOption::plain("Rejected"),
                ],
            ),
            FacetDef::exact(
                "tier",
                "All Tiers",
                &[
                    FacetOption::new("1", "Tier 1"),
                    FacetOption::new("2", "Tier 2"),
                ],
            ),
        ],
    };

    fn status(s: &str) -> MapRecord {
        MapRecord::new().text("status", s)
    }

    #[test]
    fn test_single_status_facet() {
        let records = vec![status("Applied"), status("Offer"), status("Rejected")];
        let sel = FacetSelection::all().only("status", "Offer");
        let out = filter(&records, &SCHEMA, &sel);
        assert_eq!(out.len(), 1);
        assert_eq!(out.matches[0], &records[1]);
    }

    #[test]
    fn test_empty_collection() {
        let records: Vec<MapRecord> = vec![];
        let out = filter(&records, &SCHEMA, &FacetSelection::all().only("status", "Offer"));
        assert!(out.is_empty());
        assert_eq!(out.considered, 0);
    }

    #[test]
    fn test_text_query_is_case_insensitive_substring() {
        let records = vec![
            MapRecord::new().searchable("Software Engineer").searchable("Google"),
            MapRecord::new().searchable("Data Scientist").searchable("Microsoft"),
        ];
        let out = filter(&records, &SCHEMA, &FacetSelection::all().only("query", "gOOg"));
        assert_eq!(out.len(), 1);
        assert_eq!(out.matches[0], &records[0]);
    }

    #[test]
    fn test_blank_query_keeps_records_without_search_text() {
        let records = vec![MapRecord::new(), MapRecord::new().searchable("x")];
        for blank in ["", "   "] {
            let out = filter(&records, &SCHEMA, &FacetSelection::all().only("query", blank));
            assert_eq!(out.len(), 2, "query {blank:?}");
        }
    }

    #[test]
    fn test_facets_combine_with_and() {
        let records = vec![
            status("Offer").number("tier", 1.0),
            status("Offer").number("tier", 2.0),
            status("Applied").number("tier", 1.0),
        ];
        let sel = FacetSelection::all()
            .only("status", "Offer")
            .only("tier", "1");
        let out = filter(&records, &SCHEMA, &sel);
        assert_eq!(out.len(), 1);
        assert_eq!(out.matches[0], &records[0]);
    }

    #[test]
    fn test_missing_field_never_matches_specific_value() {
        let records = vec![MapRecord::new(), status("Offer")];
        let out = filter(&records, &SCHEMA, &FacetSelection::all().only("status", "Offer"));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_missing_field_passes_all() {
        let records = vec![MapRecord::new(), status("Offer")];
        let sel = FacetSelection::all().with("status", Choice::All);
        assert_eq!(filter(&records, &SCHEMA, &sel).len(), 2);
    }

    #[test]
    fn test_unknown_facet_filters_on_field_of_same_name() {
        let records = vec![
            MapRecord::new().text("location", "Delhi"),
            MapRecord::new().text("location", "Noida"),
        ];
        let out = filter(&records, &SCHEMA, &FacetSelection::all().only("location", "Noida"));
        assert_eq!(out.len(), 1);
        assert_eq!(out.matches[0], &records[1]);
    }

    fn arb_record() -> impl Strategy<Value = MapRecord> {
        (
            prop::option::of(prop::sample::select(vec!["Applied", "Offer", "Rejected"])),
            prop::option::of(1u8..=2),
            "[a-zA-Z ]{0,12}",
        )
            .prop_map(|(st, tier, title)| {
                let mut r = MapRecord::new().searchable(&title);
                if let Some(st) = st {
                    r = r.text("status", st);
                }
                if let Some(tier) = tier {
                    r = r.number("tier", f64::from(tier));
                }
                r
            })
    }

    fn arb_selection() -> impl Strategy<Value = FacetSelection> {
        (
            prop::option::of(prop::sample::select(vec!["Applied", "Offer", "Rejected"])),
            prop::option::of(prop::sample::select(vec!["1", "2"])),
            prop::option::of("[a-z]{1,3}"),
        )
            .prop_map(|(st, tier, q)| {
                let mut sel = FacetSelection::all();
                if let Some(st) = st {
                    sel = sel.only("status", st);
                }
                if let Some(tier) = tier {
                    sel = sel.only("tier", tier);
                }
                if let Some(q) = q {
                    sel = sel.only("query", &q);
                }
                sel
            })
    }

    proptest! {
        #![proptest_config(Config::with_cases(256))]

        #[test]
        fn all_selection_is_identity(records in prop::collection::vec(arb_record(), 0..20)) {
            let out = filter(&records, &SCHEMA, &FacetSelection::all());
            let expected: Vec<&MapRecord> = records.iter().collect();
            prop_assert_eq!(out.matches, expected);
        }

        #[test]
        fn output_is_ordered_subsequence(
            records in prop::collection::vec(arb_record(), 0..20),
            sel in arb_selection(),
        ) {
            let out = filter(&records, &SCHEMA, &sel);
            let mut cursor = 0usize;
            for m in &out.matches {
                let pos = records[cursor..]
                    .iter()
                    .position(|r| std::ptr::eq(r, *m));
                prop_assert!(pos.is_some());
                cursor += pos.unwrap() + 1;
            }
        }

        #[test]
        fn narrowing_never_grows_result(
            records in prop::collection::vec(arb_record(), 0..20),
            broad in arb_selection(),
            extra_status in prop::sample::select(vec!["Applied", "Offer", "Rejected"]),
            suffix in "[a-z]{0,2}",
        ) {
            let mut narrow = broad.clone();
            if broad.choice("status").is_all() {
                narrow = narrow.only("status", extra_status);
            }
            if let Some(q) = broad.choice("query").value() {
                narrow = narrow.only("query", &format!("{q}{suffix}"));
            }
            prop_assert!(narrow.narrows(&broad, &SCHEMA));

            let wide = filter(&records, &SCHEMA, &broad);
            let tight = filter(&records, &SCHEMA, &narrow);
            for m in &tight.matches {
                prop_assert!(wide.matches.iter().any(|w| std::ptr::eq(*w, *m)));
            }
        }
    }
}
