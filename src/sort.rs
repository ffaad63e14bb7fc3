//! Sort order entries.

use sea_orm::Order;
use serde::Deserialize;
use utoipa::ToSchema;

/// One entry of the reserved `orderBy` parameter.
///
/// `field` is matched against the parameter-side key of a column spec;
/// `order` is the requested direction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct OrderSpec {
    /// Parameter-side field name, e.g. `created_at`.
    pub field: String,
    /// Requested direction, `asc` or `desc`. An empty direction skips the
    /// entry.
    #[serde(default)]
    pub order: String,
}

/// Convert a requested direction to a sea-query [`Order`].
///
/// Case-insensitive `asc` sorts ascending; anything else descending.
#[must_use]
pub fn parse_order(order: &str) -> Order {
    if order.eq_ignore_ascii_case("asc") {
        Order::Asc
    } else {
        Order::Desc
    }
}
