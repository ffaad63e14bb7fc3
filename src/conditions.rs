//! Predicate construction.
//!
//! Pure functions from a column name and a parameter value to a sea-query
//! expression. Every function returns `Option<SimpleExpr>`; `None` means
//! no predicate is appended. Malformed values degrade to a simpler
//! predicate shape or to nothing, never to an error.

use sea_orm::sea_query::{Alias, Expr, SimpleExpr, Value as QueryValue};
use serde_json::Value;
use uuid::Uuid;

use crate::filters::FilterMethod;

/// Split a comma-list parameter into trimmed, non-empty tokens.
///
/// Full-width commas (`，`) and ASCII spaces both act as delimiters, so
/// `"1, 2，3"` and `"1 2 3"` tokenize the same way. Numbers coerce to a
/// single token; other value types produce no tokens.
#[must_use]
pub fn comma_tokens(value: &Value) -> Vec<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return Vec::new(),
    };
    raw.replace('，', ",")
        .replace(' ', ",")
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Convert a scalar JSON value to a typed sea-query value.
///
/// Strings that parse as UUIDs bind as UUIDs so equality filters work
/// against UUID-typed columns. Arrays, objects and null have no scalar
/// binding.
#[must_use]
pub fn scalar_value(value: &Value) -> Option<QueryValue> {
    match value {
        Value::Bool(b) => Some((*b).into()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.into())
            } else if let Some(u) = n.as_u64() {
                Some(u.into())
            } else {
                n.as_f64().map(Into::into)
            }
        }
        Value::String(s) => {
            if let Ok(uuid) = Uuid::parse_str(s.trim()) {
                Some(uuid.into())
            } else {
                Some(s.clone().into())
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn like_operand(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Equality predicate for a scalar value.
#[must_use]
pub fn equals(column: &str, value: &Value) -> Option<SimpleExpr> {
    scalar_value(value).map(|v| Expr::col(Alias::new(column)).eq(v))
}

/// Comma-list predicate: one token compares equal, several become `IN`.
#[must_use]
pub fn comma(column: &str, value: &Value) -> Option<SimpleExpr> {
    let mut tokens = comma_tokens(value);
    match tokens.len() {
        0 => None,
        1 => {
            let single = tokens.remove(0);
            Some(Expr::col(Alias::new(column)).eq(single))
        }
        _ => Some(Expr::col(Alias::new(column)).is_in(tokens)),
    }
}

/// `LIKE 'value%'`, or `LIKE '%value%'` when `left` is set.
#[must_use]
pub fn fuzzy(column: &str, value: &Value, left: bool) -> Option<SimpleExpr> {
    like_operand(value).map(|operand| {
        let pattern = if left {
            format!("%{operand}%")
        } else {
            format!("{operand}%")
        };
        Expr::col(Alias::new(column)).like(pattern)
    })
}

/// Range predicate over a two-element bound pair.
///
/// A present scalar degrades to equality; an array without both bounds
/// appends nothing.
#[must_use]
pub fn between(column: &str, value: &Value) -> Option<SimpleExpr> {
    match value {
        Value::Array(bounds) => {
            let low = scalar_value(bounds.first()?)?;
            let high = scalar_value(bounds.get(1)?)?;
            Some(Expr::col(Alias::new(column)).between(low, high))
        }
        _ => equals(column, value),
    }
}

/// Membership predicate over an array value, equality fallback for
/// scalars.
#[must_use]
pub fn is_in(column: &str, value: &Value) -> Option<SimpleExpr> {
    match value {
        Value::Array(values) => {
            let values: Vec<QueryValue> = values.iter().filter_map(scalar_value).collect();
            if values.is_empty() {
                None
            } else {
                Some(Expr::col(Alias::new(column)).is_in(values))
            }
        }
        _ => equals(column, value),
    }
}

/// Dispatch a method tag to its predicate builder.
#[must_use]
pub fn dispatch(method: FilterMethod, column: &str, value: &Value) -> Option<SimpleExpr> {
    match method {
        FilterMethod::Comma => comma(column, value),
        FilterMethod::Fuzzy => fuzzy(column, value, false),
        FilterMethod::FuzzyLeft => fuzzy(column, value, true),
        FilterMethod::In => is_in(column, value),
        FilterMethod::Between => between(column, value),
        FilterMethod::Equals => equals(column, value),
    }
}
