use serde::Serialize;
use uuid::Uuid;

use crate::facets::{FacetSchema, FacetSelection, Filtered};
use crate::models::role::Role;
use crate::pages::Page;
use crate::presentation::DisplayToken;
use crate::stats::Stats;

/// Everything a mounted page shows: facet controls, list sections and stat
/// cards.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub page: Page,
    pub role: Role,
    /// Correlates this render with its log lines.
    pub session_id: Uuid,
    pub facets: Vec<FacetState>,
    pub sections: Vec<Section>,
    pub stats: Stats,
}

#[cfg(test)]
impl PageView {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

/// Current state of one facet control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetState {
    pub name: &'static str,
    /// Canonical selected value; `None` when the facet is `All`.
    pub value: Option<String>,
    pub label: String,
    /// Labels offered by the control, the "all" label first.
    pub options: Vec<&'static str>,
}

impl FacetState {
    pub fn for_schema(schema: &FacetSchema, selection: &FacetSelection) -> Vec<FacetState> {
        schema
            .facets
            .iter()
            .map(|def| {
                let choice = selection.choice(def.name);
                let mut options = Vec::with_capacity(def.options.len() + 1);
                if !def.all_label.is_empty() {
                    options.push(def.all_label);
                }
                options.extend(def.options.iter().map(|o| o.label));
                FacetState {
                    name: def.name,
                    value: choice.value().map(str::to_string),
                    label: def.label_for(choice).to_string(),
                    options,
                }
            })
            .collect()
    }
}

/// One rendered list on a page.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub rows: Vec<Row>,
    /// "Showing N of M" for filtered lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Set when the list rendered nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl Section {
    /// Binds a filter result. An empty result carries `empty_message`.
    pub fn filtered<R>(
        name: &'static str,
        filtered: &Filtered<'_, R>,
        bind: impl Fn(&R) -> Row,
        empty_message: &str,
    ) -> Self {
        Self {
            name,
            rows: filtered.iter().map(bind).collect(),
            summary: Some(format!("Showing {} of {}", filtered.len(), filtered.considered)),
            empty_message: filtered.is_empty().then(|| empty_message.to_string()),
        }
    }

    pub fn fixed(name: &'static str, rows: Vec<Row>, empty_message: &str) -> Self {
        let empty_message = rows.is_empty().then(|| empty_message.to_string());
        Self {
            name,
            rows,
            summary: None,
            empty_message,
        }
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub tokens: Vec<DisplayToken>,
    /// Progress bar value, 0 – 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// List and stats produced by one page builder.
#[derive(Debug, Clone)]
pub struct Content {
    pub sections: Vec<Section>,
    pub stats: Stats,
}
