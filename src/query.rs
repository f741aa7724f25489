//! Query parameter encoding for Graph requests
//!
//! Parameters are held in an ordered map so the encoded query string is
//! deterministic. Encoding rules (datetimes, booleans, repeated values) are
//! part of the library's contract, not incidental.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use url::form_urlencoded;

use crate::QUERY_DATETIME_FORMAT;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    String(String),
    Int(i64),
    Bool(bool),
    /// Rendered as RFC3339 UTC without fractional seconds.
    DateTime(DateTime<Utc>),
    /// Repeats the key once per element, preserving element order.
    List(Vec<QueryValue>),
}

impl QueryValue {
    fn render(&self) -> String {
        match self {
            QueryValue::String(s) => s.clone(),
            QueryValue::Int(i) => i.to_string(),
            QueryValue::Bool(b) => b.to_string(),
            QueryValue::DateTime(dt) => dt.format(QUERY_DATETIME_FORMAT).to_string(),
            QueryValue::List(items) => items
                .iter()
                .map(QueryValue::render)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::String(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        QueryValue::DateTime(value)
    }
}

/// Request parameters, keyed by parameter name. Iteration order is the map's
/// lexicographic key order, which fixes the encoded output.
pub type QueryParams = BTreeMap<String, QueryValue>;

/// Serializes the parameters into a percent-encoded query string.
pub fn encode(params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        append_pair(&mut serializer, key, value);
    }
    serializer.finish()
}

fn append_pair(
    serializer: &mut form_urlencoded::Serializer<'_, String>,
    key: &str,
    value: &QueryValue,
) {
    match value {
        QueryValue::List(items) => {
            for item in items {
                append_pair(serializer, key, item);
            }
        }
        scalar => {
            serializer.append_pair(key, &scalar.render());
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn encodes_scalars() {
        let mut params = QueryParams::new();
        params.insert("$top".to_string(), QueryValue::Int(10));
        params.insert("includeHidden".to_string(), QueryValue::Bool(true));

        assert_eq!(encode(&params), "%24top=10&includeHidden=true");
    }

    #[test]
    fn encodes_datetimes_as_utc_without_fractional_seconds() {
        let start = Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        let mut params = QueryParams::new();
        params.insert("startDateTime".to_string(), QueryValue::from(start));

        assert_eq!(encode(&params), "startDateTime=2023-04-05T06%3A07%3A08Z");
    }

    #[test]
    fn repeats_key_for_list_values() {
        let mut params = QueryParams::new();
        params.insert(
            "id".to_string(),
            QueryValue::List(vec![QueryValue::from("b"), QueryValue::from("a")]),
        );

        assert_eq!(encode(&params), "id=b&id=a");
    }

    #[test]
    fn output_is_deterministic_across_insertion_orders() {
        let mut first = QueryParams::new();
        first.insert("b".to_string(), QueryValue::from("2"));
        first.insert("a".to_string(), QueryValue::from("1"));

        let mut second = QueryParams::new();
        second.insert("a".to_string(), QueryValue::from("1"));
        second.insert("b".to_string(), QueryValue::from("2"));

        assert_eq!(encode(&first), encode(&second));
        assert_eq!(encode(&first), "a=1&b=2");
    }

    #[test]
    fn percent_encodes_reserved_characters() {
        let mut params = QueryParams::new();
        params.insert(
            "$filter".to_string(),
            QueryValue::from("subject eq 'hello world'"),
        );

        assert_eq!(
            encode(&params),
            "%24filter=subject+eq+%27hello+world%27"
        );
    }
}
