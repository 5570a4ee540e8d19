use chrono::NaiveDate;

use crate::errors::AppError;
use crate::facets::selection::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    /// Case-insensitive substring match over the record's search text.
    Text,
    /// Record field facet key must equal the selected value.
    Exact,
    /// Like `Exact`, with the value validated as `YYYY-MM-DD`.
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetOption {
    /// Compared against record facet keys.
    pub key: &'static str,
    pub label: &'static str,
}

impl FacetOption {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }

    /// Option whose key doubles as its label.
    pub const fn plain(key: &'static str) -> Self {
        Self { key, label: key }
    }
}

/// One filterable dimension of a page's list.
/// For `Exact` and `Date` facets, `name` is also the record field name.
#[derive(Debug, Clone, Copy)]
pub struct FacetDef {
    pub name: &'static str,
    pub kind: FacetKind,
    pub all_label: &'static str,
    /// Allowed values. Empty means any value is accepted.
    pub options: &'static [FacetOption],
}

impl FacetDef {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FacetKind::Text,
            all_label: "",
            options: &[],
        }
    }

    pub const fn exact(
        name: &'static str,
        all_label: &'static str,
        options: &'static [FacetOption],
    ) -> Self {
        Self {
            name,
            kind: FacetKind::Exact,
            all_label,
            options,
        }
    }

    pub const fn date(name: &'static str) -> Self {
        Self {
            name,
            kind: FacetKind::Date,
            all_label: "All Dates",
            options: &[],
        }
    }

    /// Resolves user input to a canonical choice.
    ///
    /// Exact values match option keys or labels ignoring case, whitespace and
    /// punctuation, so `Tier 1`, `tier1` and `1` all resolve to key `1`.
    pub fn resolve(&self, raw: &str) -> Result<Choice, AppError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Choice::All);
        }

        match self.kind {
            FacetKind::Text => Ok(Choice::Only(raw.to_string())),
            _ if raw.eq_ignore_ascii_case(self.all_label) || normalize(raw) == "all" => {
                Ok(Choice::All)
            }
            FacetKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| Choice::Only(d.format("%Y-%m-%d").to_string()))
                .map_err(|_| {
                    AppError::Validation(format!(
                        "facet '{}' expects a YYYY-MM-DD date, got '{raw}'",
                        self.name
                    ))
                }),
            FacetKind::Exact if self.options.is_empty() => Ok(Choice::Only(raw.to_string())),
            FacetKind::Exact => {
                let wanted = normalize(raw);
                self.options
                    .iter()
                    .find(|o| normalize(o.key) == wanted || normalize(o.label) == wanted)
                    .map(|o| Choice::Only(o.key.to_string()))
                    .ok_or_else(|| {
                        let labels: Vec<&str> = self.options.iter().map(|o| o.label).collect();
                        AppError::Validation(format!(
                            "'{raw}' is not a valid {} (expected one of: {})",
                            self.name,
                            labels.join(", ")
                        ))
                    })
            }
        }
    }

    /// Display label for a canonical choice.
    pub fn label_for<'a>(&'a self, choice: &'a Choice) -> &'a str {
        match choice {
            Choice::All if self.kind == FacetKind::Text => "",
            Choice::All => self.all_label,
            Choice::Only(key) => self
                .options
                .iter()
                .find(|o| o.key == key.as_str())
                .map(|o| o.label)
                .unwrap_or(key.as_str()),
        }
    }
}

/// The facets a page's list can be filtered by.
#[derive(Debug, Clone, Copy)]
pub struct FacetSchema {
    pub page: &'static str,
    pub facets: &'static [FacetDef],
}

impl FacetSchema {
    pub fn facet(&self, name: &str) -> Option<&FacetDef> {
        self.facets.iter().find(|f| f.name == name)
    }

    /// Facets unknown to the schema behave as exact field facets.
    pub fn kind_of(&self, name: &str) -> FacetKind {
        self.facet(name).map(|f| f.kind).unwrap_or(FacetKind::Exact)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: FacetDef = FacetDef::exact(
        "tier",
        "All Tiers",
        &[
            FacetOption::new("1", "Tier 1"),
            FacetOption::new("2", "Tier 2"),
            FacetOption::new("3", "Tier 3"),
        ],
    );

    #[test]
    fn test_resolve_tier_spellings() {
        for raw in ["Tier 2", "tier2", "2", " TIER-2 "] {
            assert_eq!(TIERS.resolve(raw).unwrap(), Choice::Only("2".into()), "{raw:?}");
        }
    }

    #[test]
    fn test_resolve_all_sentinels() {
        assert_eq!(TIERS.resolve("All Tiers").unwrap(), Choice::All);
        assert_eq!(TIERS.resolve("all").unwrap(), Choice::All);
        assert_eq!(TIERS.resolve("").unwrap(), Choice::All);
    }

    #[test]
    fn test_resolve_unknown_option_lists_labels() {
        let err = TIERS.resolve("Tier 9").unwrap_err().to_string();
        assert!(err.contains("Tier 1, Tier 2, Tier 3"), "{err}");
    }

    #[test]
    fn test_text_keeps_raw_query() {
        let query = FacetDef::text("query");
        assert_eq!(query.resolve(" Goo ").unwrap(), Choice::Only("Goo".into()));
        assert_eq!(query.resolve("   ").unwrap(), Choice::All);
    }

    #[test]
    fn test_date_is_canonicalized_and_validated() {
        let on = FacetDef::date("date");
        assert_eq!(
            on.resolve("2024-3-15").unwrap(),
            Choice::Only("2024-03-15".into())
        );
        assert!(on.resolve("15/03/2024").is_err());
    }

    #[test]
    fn test_label_for_uses_option_label() {
        assert_eq!(TIERS.label_for(&Choice::Only("1".into())), "Tier 1");
        assert_eq!(TIERS.label_for(&Choice::All), "All Tiers");
    }
}
