//! Query objects and their flattened request parameters.
//!
//! A query object is a per-endpoint bag of optional fields. Before a request
//! is sent it is flattened into [`QueryParams`]: one string value per set
//! field, unset fields dropped.
//!
//! ## Examples
//!
//! ```rust
//! use ccb_api::QueryObject;
//!
//! #[derive(serde::Serialize)]
//! struct GroupQuery {
//!     #[serde(rename = "GroupID")]
//!     group_id: Option<u32>,
//!     #[serde(rename = "Name")]
//!     name: Option<String>,
//! }
//!
//! impl QueryObject for GroupQuery {}
//!
//! let params = GroupQuery { group_id: Some(7), name: None }.flatten().unwrap();
//! assert_eq!(params.get("GroupID"), Some("7"));
//! assert!(!params.contains_key("Name"));
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::ConfigError;

/// Flat mapping of request parameter names to string values.
///
/// Keys are unique; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merges `other` into `self` with last-writer-wins semantics.
    ///
    /// Returns the keys that were already present and got overwritten.
    pub fn merge(&mut self, other: QueryParams) -> Vec<String> {
        let mut collisions = Vec::new();
        for (key, value) in other.0 {
            if self.0.contains_key(&key) {
                collisions.push(key.clone());
            }
            self.0.insert(key, value);
        }
        collisions
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A per-endpoint parameter bag that can flatten itself to [`QueryParams`].
///
/// Implementors only need `Serialize`; the provided [`flatten`](Self::flatten)
/// does the rest. Field names on the wire are the serialized names, so use
/// `#[serde(rename = "...")]` to match the remote service.
pub trait QueryObject: Serialize {
    /// Flattens the set fields into string parameters.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidQueryObject`] if the type does not
    /// serialize to a record (a sequence or a bare scalar, for instance).
    fn flatten(&self) -> Result<QueryParams, ConfigError> {
        flatten(self)
    }
}

impl QueryObject for () {}

impl QueryObject for QueryParams {}

/// Flattens any serializable record into [`QueryParams`].
///
/// `null` fields are skipped. Strings are passed through unquoted, numbers
/// and booleans use their display form (whole-valued floats drop the `.0`),
/// and nested values are passed through as compact JSON text without
/// validation.
pub fn flatten<T: Serialize + ?Sized>(value: &T) -> Result<QueryParams, ConfigError> {
    let value =
        serde_json::to_value(value).map_err(|e| ConfigError::invalid_query(e.to_string()))?;

    match value {
        Value::Null => Ok(QueryParams::new()),
        Value::Object(fields) => Ok(fields
            .into_iter()
            .filter_map(|(name, value)| render(value).map(|v| (name, v)))
            .collect()),
        other => Err(ConfigError::invalid_query(format!(
            "expected a record of fields, got {}",
            kind(&other)
        ))),
    }
}

fn render(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(render_number(&n)),
        nested => Some(nested.to_string()),
    }
}

fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a record",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct IndividualQuery {
        #[serde(rename = "IndividualID")]
        individual_id: Option<u64>,
        #[serde(rename = "FirstName")]
        first_name: Option<String>,
        #[serde(rename = "IncludeInactive")]
        include_inactive: Option<bool>,
    }

    impl QueryObject for IndividualQuery {}

    #[test]
    fn test_flatten_skips_unset_fields() {
        let query = IndividualQuery {
            individual_id: Some(42),
            first_name: None,
            include_inactive: Some(false),
        };

        let params = query.flatten().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("IndividualID"), Some("42"));
        assert_eq!(params.get("IncludeInactive"), Some("false"));
        assert!(!params.contains_key("FirstName"));
    }

    #[test]
    fn test_flatten_all_unset_is_empty() {
        let query = IndividualQuery {
            individual_id: None,
            first_name: None,
            include_inactive: None,
        };
        assert!(query.flatten().unwrap().is_empty());
    }

    #[test]
    fn test_strings_are_not_quoted() {
        let query = IndividualQuery {
            individual_id: None,
            first_name: Some("Ruth Ann".to_string()),
            include_inactive: None,
        };
        assert_eq!(query.flatten().unwrap().get("FirstName"), Some("Ruth Ann"));
    }

    #[test]
    fn test_values_pass_through_unvalidated() {
        let query = IndividualQuery {
            individual_id: None,
            first_name: Some("<script>&=?".to_string()),
            include_inactive: None,
        };
        assert_eq!(
            query.flatten().unwrap().get("FirstName"),
            Some("<script>&=?")
        );
    }

    #[test]
    fn test_nested_values_render_as_json() {
        #[derive(Serialize)]
        struct Nested {
            ids: Vec<u32>,
        }
        let params = flatten(&Nested { ids: vec![1, 2] }).unwrap();
        assert_eq!(params.get("ids"), Some("[1,2]"));
    }

    #[test]
    fn test_whole_floats_render_without_fraction() {
        #[derive(Serialize)]
        struct Amounts {
            whole: f64,
            fractional: f64,
            negative: f64,
            integer: i64,
        }
        let params = flatten(&Amounts {
            whole: 1.0,
            fractional: 2.5,
            negative: -40.0,
            integer: 7,
        })
        .unwrap();
        assert_eq!(params.get("whole"), Some("1"));
        assert_eq!(params.get("fractional"), Some("2.5"));
        assert_eq!(params.get("negative"), Some("-40"));
        assert_eq!(params.get("integer"), Some("7"));
    }

    #[test]
    fn test_unit_flattens_to_nothing() {
        assert!(().flatten().unwrap().is_empty());
    }

    #[test]
    fn test_sequence_is_rejected() {
        let err = flatten(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQueryObject { .. }));
        assert!(err.to_string().contains("a sequence"));
    }

    #[test]
    fn test_merge_reports_collisions() {
        let mut base: QueryParams = [("srv", "groups")].into_iter().collect();
        let overlay: QueryParams = [("srv", "other"), ("GroupID", "3")].into_iter().collect();

        let collisions = base.merge(overlay);
        assert_eq!(collisions, vec!["srv".to_string()]);
        assert_eq!(base.get("srv"), Some("other"));
        assert_eq!(base.get("GroupID"), Some("3"));
    }

    #[test]
    fn test_query_params_flatten_to_themselves() {
        let params: QueryParams = [("a", "1"), ("b", "two")].into_iter().collect();
        assert_eq!(params.flatten().unwrap(), params);
    }
}
