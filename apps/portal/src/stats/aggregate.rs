use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::catalog::record::Record;

/// Record-level condition used by count and percentage metrics.
/// A predicate naming a field the record lacks is false.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Equals {
        field: &'static str,
        value: &'static str,
    },
    OneOf {
        field: &'static str,
        values: &'static [&'static str],
    },
    NoneOf {
        field: &'static str,
        values: &'static [&'static str],
    },
    AtLeast {
        field: &'static str,
        threshold: f64,
    },
    Flag {
        field: &'static str,
    },
    Defined {
        field: &'static str,
    },
    All(Vec<Predicate>),
}

impl Predicate {
    pub fn holds<R: Record>(&self, record: &R) -> bool {
        match self {
            Predicate::Equals { field, value } => record
                .field(field)
                .map(|v| v.facet_key() == *value)
                .unwrap_or(false),
            Predicate::OneOf { field, values } => record
                .field(field)
                .map(|v| values.iter().any(|x| *x == v.facet_key()))
                .unwrap_or(false),
            Predicate::NoneOf { field, values } => record
                .field(field)
                .map(|v| !values.iter().any(|x| *x == v.facet_key()))
                .unwrap_or(false),
            Predicate::AtLeast { field, threshold } => record
                .field(field)
                .and_then(|v| v.as_number())
                .map(|n| n >= *threshold)
                .unwrap_or(false),
            Predicate::Flag { field } => record
                .field(field)
                .and_then(|v| v.as_flag())
                .unwrap_or(false),
            Predicate::Defined { field } => record.field(field).is_some(),
            Predicate::All(parts) => parts.iter().all(|p| p.holds(record)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Metric {
    /// Number of records.
    Total,
    Count(Predicate),
    /// Sum of a numeric field, skipping records without it.
    Sum { field: &'static str },
    /// Mean of a numeric field over the records that define it.
    Average { field: &'static str },
    /// Mean of `100 * numerator / denominator` over records defining both
    /// with a non-zero denominator.
    RatioAverage {
        numerator: &'static str,
        denominator: &'static str,
    },
    /// `round(100 * count(predicate) / total)`, 0 for an empty collection.
    Percentage(Predicate),
}

/// Named metrics to compute over one collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationSpec {
    metrics: Vec<(&'static str, Metric)>,
}

impl AggregationSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metric(mut self, name: &'static str, metric: Metric) -> Self {
        self.metrics.push((name, metric));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(usize),
    Sum(f64),
    /// `None` when no record defined the field.
    Average(Option<f64>),
    Percentage(u8),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stats {
    values: BTreeMap<String, StatValue>,
}

impl Stats {
    pub fn get(&self, name: &str) -> Option<StatValue> {
        self.values.get(name).copied()
    }

    pub fn average(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(StatValue::Average(a)) => a,
            _ => None,
        }
    }

    /// Adds a value computed outside `aggregate` (e.g. from a single record).
    pub fn with(mut self, name: &str, value: StatValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    /// Combines stats from several collections; `other` wins on name clashes.
    pub fn merge(mut self, other: Stats) -> Self {
        self.values.extend(other.values);
        self
    }
}

#[cfg(test)]
impl Stats {
    pub fn count(&self, name: &str) -> usize {
        match self.get(name) {
            Some(StatValue::Count(n)) => n,
            _ => 0,
        }
    }

    pub fn sum(&self, name: &str) -> f64 {
        match self.get(name) {
            Some(StatValue::Sum(s)) => s,
            _ => 0.0,
        }
    }

    pub fn percentage(&self, name: &str) -> u8 {
        match self.get(name) {
            Some(StatValue::Percentage(p)) => p,
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// `round(100 * part / total)` clamped to 0 – 100; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 * 100.0) / total as f64).round().clamp(0.0, 100.0) as u8
}

/// Arithmetic mean, `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0_f64, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

fn numbers<'r, R: Record + 'r>(
    records: &'r [R],
    field: &'static str,
) -> impl Iterator<Item = f64> + 'r {
    records
        .iter()
        .filter_map(move |r| r.field(field).and_then(|v| v.as_number()))
}

/// Computes every metric of `spec` over `records`. Pure and deterministic.
pub fn aggregate<R: Record>(records: &[R], spec: &AggregationSpec) -> Stats {
    let total = records.len();
    let mut values = BTreeMap::new();

    for (name, metric) in &spec.metrics {
        let value = match metric {
            Metric::Total => StatValue::Count(total),
            Metric::Count(pred) => {
                StatValue::Count(records.iter().filter(|r| pred.holds(*r)).count())
            }
            Metric::Sum { field } => StatValue::Sum(numbers(records, *field).sum()),
            Metric::Average { field } => StatValue::Average(mean(numbers(records, *field))),
            Metric::RatioAverage {
                numerator,
                denominator,
            } => StatValue::Average(mean(records.iter().filter_map(|r| {
                let num = r.field(numerator)?.as_number()?;
                let den = r.field(denominator)?.as_number()?;
                (den != 0.0).then(|| num * 100.0 / den)
            }))),
            Metric::Percentage(pred) => {
                let hits = records.iter().filter(|r| pred.holds(*r)).count();
                StatValue::Percentage(percentage(hits, total))
            }
        };
        values.insert(name.to_string(), value);
    }

    debug!(records = total, metrics = values.len(), "aggregated stats");
    Stats { values }
}
