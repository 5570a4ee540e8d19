// Facet Filter Engine: per-page facet schemas, selection snapshots and the
// AND-combining stable filter.

pub mod filter;
pub mod schema;
pub mod selection;

pub use filter::{filter, Filtered};
pub use schema::{FacetDef, FacetOption, FacetSchema};
pub use selection::FacetSelection;
