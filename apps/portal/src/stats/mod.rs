// Derived Statistics Aggregator: counts, sums, averages and percentages over
// a record collection, described by an AggregationSpec.

pub mod aggregate;

pub use aggregate::{
    aggregate, percentage, AggregationSpec, Metric, Predicate, StatValue, Stats,
};
