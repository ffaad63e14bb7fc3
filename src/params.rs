//! The user-submitted parameter map.
//!
//! Parameters arrive as an arbitrary-depth JSON object, usually decoded
//! from a request's JSON-encoded `filter` query parameter. This module
//! owns path-style lookup into that tree and the presence check every
//! search operation gates on.

use serde_json::{Map, Value};

use crate::sort::OrderSpec;

/// Reserved parameter key holding the list of [`OrderSpec`] entries.
pub const ORDER_BY_KEY: &str = "orderBy";

/// Read-only view over user-submitted search parameters.
///
/// # Example
/// ```
/// use searchcrate::SearchParams;
/// use serde_json::json;
///
/// let params = SearchParams::from_value(json!({
///     "name": "shoe",
///     "spu": {"sn": "A1"},
/// }));
/// assert_eq!(params.get("spu.sn"), Some(&json!("A1")));
/// assert!(params.is_present("name"));
/// assert!(!params.is_present("missing"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    map: Map<String, Value>,
}

impl SearchParams {
    #[must_use]
    pub fn new(map: Map<String, Value>) -> Self {
        Self { map }
    }

    /// Build from any JSON value. Non-object values yield an empty map.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self { map },
            _ => Self::default(),
        }
    }

    /// Parse a JSON-encoded filter string, e.g. the `filter` query
    /// parameter of a list endpoint. Invalid JSON logs a warning and
    /// yields an empty map rather than failing the request.
    #[must_use]
    pub fn from_filter_str(filter: Option<&str>) -> Self {
        filter.map_or_else(Self::default, |raw| {
            match serde_json::from_str::<Map<String, Value>>(raw) {
                Ok(map) => Self { map },
                Err(err) => {
                    tracing::warn!(%err, "invalid JSON in filter string");
                    Self::default()
                }
            }
        })
    }

    /// Resolve a dotted path into the parameter tree.
    ///
    /// Path segments traverse nested objects; numeric segments index into
    /// arrays. Any miss along the way resolves to `None`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.map.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(object) => object.get(segment)?,
                Value::Array(array) => array.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Whether the parameter at `path` resolves to a present value.
    #[must_use]
    pub fn is_present(&self, path: &str) -> bool {
        self.get(path).is_some_and(value_present)
    }

    /// The entries of the reserved `orderBy` parameter, in declaration
    /// order. Malformed entries are skipped with a warning.
    #[must_use]
    pub fn order_by(&self) -> Vec<OrderSpec> {
        let Some(Value::Array(entries)) = self.map.get(ORDER_BY_KEY) else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|entry| match serde_json::from_value(entry.clone()) {
                Ok(spec) => Some(spec),
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed orderBy entry");
                    None
                }
            })
            .collect()
    }
}

impl From<Map<String, Value>> for SearchParams {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(map)
    }
}

impl From<Value> for SearchParams {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// The tri-state presence check.
///
/// A value is present when non-empty and non-null, or when it is literally
/// zero. `0` and `"0"` are meaningful filter values (an integer status, a
/// flag) and must not be dropped by truthiness.
#[must_use]
pub fn value_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            n.as_i64().is_some() || n.as_u64().is_some() || n.as_f64().is_some_and(|f| f != 0.0)
        }
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
