//! Generic record view shared by every domain type.
//!
//! The filter engine and the aggregator never see concrete types; they ask a
//! record for a field by name and get back a [`FieldValue`], or `None` when
//! the record does not define that field.

use std::borrow::Cow;

use chrono::NaiveDate;

/// A scalar value read from a record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Flag(bool),
    Date(NaiveDate),
}

impl<'a> FieldValue<'a> {
    /// Canonical string form compared against facet selection values.
    ///
    /// Whole numbers drop their fractional part so tier `1.0` keys as `"1"`.
    pub fn facet_key(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                Cow::Owned(format!("{}", n as i64))
            }
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Flag(b) => Cow::Borrowed(if b { "true" } else { "false" }),
            FieldValue::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match *self {
            FieldValue::Flag(b) => Some(b),
            _ => None,
        }
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(n: u32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<u8> for FieldValue<'_> {
    fn from(n: u8) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<NaiveDate> for FieldValue<'_> {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Text(s)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(s: &'a String) -> Self {
        FieldValue::Text(s.as_str())
    }
}

/// An immutable domain item viewed as a mapping from field name to value.
pub trait Record {
    /// Returns the value of `name`, or `None` if the field is unknown or unset.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Text fields searched by a free-text query facet.
    fn search_text(&self) -> Vec<&str>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }

    fn search_text(&self) -> Vec<&str> {
        (**self).search_text()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_key_without_fraction() {
        assert_eq!(FieldValue::Number(1.0).facet_key(), "1");
        assert_eq!(FieldValue::Number(4.5).facet_key(), "4.5");
    }

    #[test]
    fn test_flag_and_date_keys() {
        assert_eq!(FieldValue::Flag(true).facet_key(), "true");
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(FieldValue::Date(d).facet_key(), "2024-03-05");
    }

    #[test]
    fn test_as_number_only_for_numbers() {
        assert_eq!(FieldValue::Number(70.0).as_number(), Some(70.0));
        assert_eq!(FieldValue::Text("70").as_number(), None);
    }
}
