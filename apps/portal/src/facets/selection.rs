use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::AppError;
use crate::facets::schema::{FacetKind, FacetSchema};

/// A single facet's selected value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// No constraint for this facet.
    All,
    Only(String),
}

impl Choice {
    pub fn value(&self) -> Option<&str> {
        match self {
            Choice::All => None,
            Choice::Only(v) => Some(v.as_str()),
        }
    }

    #[cfg(test)]
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

static ALL: Choice = Choice::All;

/// Immutable snapshot of the active filter values for one list view.
///
/// Facets absent from the mapping are `All`. Updates return a new snapshot;
/// the engine never mutates a selection it was handed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetSelection {
    choices: BTreeMap<String, Choice>,
}

impl FacetSelection {
    /// The mount-time default: every facet `All`.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with(&self, facet: &str, choice: Choice) -> Self {
        let mut next = self.clone();
        next.choices.insert(facet.to_string(), choice);
        next
    }

    #[cfg(test)]
    pub fn only(&self, facet: &str, value: &str) -> Self {
        self.with(facet, Choice::Only(value.to_string()))
    }

    pub fn choice(&self, facet: &str) -> &Choice {
        self.choices.get(facet).unwrap_or(&ALL)
    }

    /// Facets carrying a real constraint, in name order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices
            .iter()
            .filter_map(|(name, choice)| choice.value().map(|v| (name.as_str(), v)))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }

    /// Keeps only the facets `schema` knows about. Used when one page hosts
    /// several lists, each with its own schema.
    pub fn restricted_to(&self, schema: &FacetSchema) -> Self {
        Self {
            choices: self
                .choices
                .iter()
                .filter(|(name, _)| schema.facet(name).is_some())
                .map(|(name, choice)| (name.clone(), choice.clone()))
                .collect(),
        }
    }

    /// Parses `name=value` pairs separated by `;`, e.g.
    /// `status=Offer; tier=Tier 1; query=google`.
    pub fn parse(schema: &FacetSchema, input: &str) -> Result<Self, AppError> {
        let mut selection = Self::all();

        for pair in input.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, raw) = pair.split_once('=').ok_or_else(|| {
                AppError::Validation(format!("facet '{pair}' must be written as name=value"))
            })?;
            let name = name.trim();
            let def = schema.facet(name).ok_or_else(|| {
                let known: Vec<&str> = schema.facets.iter().map(|f| f.name).collect();
                AppError::Validation(format!(
                    "unknown facet '{name}' for the {} page (known: {})",
                    schema.page,
                    known.join(", ")
                ))
            })?;
            selection = selection.with(def.name, def.resolve(raw)?);
        }

        Ok(selection)
    }

    /// True when every constraint of `broader` is also imposed by `self`,
    /// which guarantees `self` filters to a subset of what `broader` keeps.
    #[allow(dead_code)]
    pub fn narrows(&self, broader: &FacetSelection, schema: &FacetSchema) -> bool {
        broader.active().all(|(name, wanted)| match self.choice(name).value() {
            None => false,
            Some(ours) if schema.kind_of(name) == FacetKind::Text => {
                ours.to_lowercase().contains(&wanted.to_lowercase())
            }
            Some(ours) => ours == wanted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::schema::{FacetDef, FacetOption};

    const SCHEMA: FacetSchema = FacetSchema {
        page: "applications",
        facets: &[
            FacetDef::text("query"),
            FacetDef::exact(
                "status",
                "All",
                &[FacetOption::plain("Applied"), FacetOption::plain("Offer")],
            ),
        ],
    };

    #[test]
    fn test_with_returns_new_snapshot() {
        let base = FacetSelection::all();
        let next = base.only("status", "Offer");
        assert!(base.is_unconstrained());
        assert_eq!(next.choice("status"), &Choice::Only("Offer".into()));
    }

    #[test]
    fn test_missing_facet_reads_as_all() {
        assert!(FacetSelection::all().choice("tier").is_all());
    }

    #[test]
    fn test_parse_pairs() {
        let sel = FacetSelection::parse(&SCHEMA, "status = offer ; query=Goo").unwrap();
        let active: Vec<_> = sel.active().collect();
        assert_eq!(active, vec![("query", "Goo"), ("status", "Offer")]);
    }

    #[test]
    fn test_parse_all_clears_constraint() {
        let sel = FacetSelection::parse(&SCHEMA, "status=Offer;status=All").unwrap();
        assert!(sel.is_unconstrained());
    }

    #[test]
    fn test_parse_rejects_unknown_facet() {
        let err = FacetSelection::parse(&SCHEMA, "colour=red").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("colour")));
    }

    #[test]
    fn test_parse_rejects_missing_equals() {
        assert!(FacetSelection::parse(&SCHEMA, "status").is_err());
    }

    #[test]
    fn test_parse_empty_input_is_unconstrained() {
        assert!(FacetSelection::parse(&SCHEMA, " ; ").unwrap().is_unconstrained());
    }

    #[test]
    fn test_narrows_same_or_more_constraints() {
        let broad = FacetSelection::all().only("query", "goo");
        let narrow = broad.only("query", "Google").only("status", "Offer");
        assert!(narrow.narrows(&broad, &SCHEMA));
        assert!(!broad.narrows(&narrow, &SCHEMA));
        assert!(broad.narrows(&FacetSelection::all(), &SCHEMA));
    }

    #[test]
    fn test_restricted_to_drops_foreign_facets() {
        const STATUS_ONLY: FacetSchema = FacetSchema {
            page: "applications",
            facets: &[FacetDef::exact("status", "All", &[])],
        };
        let sel = FacetSelection::all().only("query", "goo").only("status", "Offer");
        let restricted = sel.restricted_to(&STATUS_ONLY);
        let kept: Vec<_> = restricted.active().collect();
        assert_eq!(kept, vec![("status", "Offer")]);
    }

    #[test]
    fn test_different_exact_value_does_not_narrow() {
        let a = FacetSelection::all().only("status", "Offer");
        let b = FacetSelection::all().only("status", "Applied");
        assert!(!a.narrows(&b, &SCHEMA));
    }
}
