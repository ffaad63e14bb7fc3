//! # searchcrate
//!
//! Chainable search-parameter filtering for Sea-ORM query builders.
//!
//! Given a map of user-submitted search parameters and a declarative list
//! of column specs, the applier appends `WHERE`, `WHERE IN`,
//! `WHERE BETWEEN`, `LIKE`, `ORDER BY` and relation-existence clauses to
//! an existing query. It never constructs SQL text and never executes
//! anything; Sea-ORM and sea-query remain the query layer.
//!
//! ## Column specs
//!
//! A spec is a `"param:column"` string pairing a request field with a
//! physical column. Without a colon, parameter and column share a name:
//!
//! ```rust,ignore
//! // ?filter={"menu_name": "Settings", "shop_id": 3}
//! .fuzzy_search(&["menu_name:name"])
//! .exact_search(&["shop_id:id"])
//! ```
//!
//! ## Operations
//!
//! ```rust,ignore
//! use searchcrate::{SearchExt, SearchParams};
//!
//! let params = SearchParams::from_filter_str(options.filter.as_deref());
//! let products = products::Entity::find()
//!     .search(&params)
//!     .comma_search(&["sn"])           // "A1, B2，C3" -> IN ('A1','B2','C3')
//!     .exact_search(&["status"])       // 0 and "0" are present values
//!     .fuzzy_search(&["name"])         // LIKE 'shoe%'
//!     .between_search(&["price"])      // [10, 20] -> BETWEEN 10 AND 20
//!     .in_search(&["id"])              // array -> IN, scalar -> equality
//!     .sort(&["created_at", "price"])  // orderBy: [{field, order}, ..]
//!     .into_inner()
//!     .all(&db)
//!     .await?;
//! ```
//!
//! ## Relation filters
//!
//! Relation filters apply nested predicates to a related table, guarded
//! by an existence pre-check: if none of the referenced parameters is
//! present, no subquery is emitted at all.
//!
//! ```rust,ignore
//! use searchcrate::{RelationFilter, RelationTarget, SearchExt};
//!
//! let category = RelationFilter::new(RelationTarget::new(
//!     "products", "category_id", "categories", "id",
//! ))
//! .comma(&["category_sn:sn"])
//! .fuzzy(&["category_name:name"]);
//!
//! // EXISTS (SELECT 1 FROM categories WHERE categories.id = products.category_id AND ..)
//! let query = products::Entity::find()
//!     .search(&params)
//!     .where_has_search(&[category])
//!     .into_inner();
//! ```
//!
//! `where_has_in_search` emits `products.category_id IN (SELECT id FROM
//! categories WHERE ..)` instead, which some planners handle better on
//! large parent tables.
//!
//! ## Silent degradation
//!
//! Absent or empty parameters append nothing. Malformed values degrade to
//! a simpler predicate shape (a scalar handed to `between_search` becomes
//! an equality) rather than failing; invalid filter JSON logs a
//! `tracing` warning and yields an empty parameter map.

pub mod conditions;
pub mod filters;
pub mod params;
pub mod search;
pub mod sort;

pub use filters::{ColumnSpec, FilterMethod, RelationFilter, RelationTarget};
pub use params::{ORDER_BY_KEY, SearchParams, value_present};
pub use search::{Search, SearchExt};
pub use sort::{OrderSpec, parse_order};
