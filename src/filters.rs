//! Declarative filter descriptions.
//!
//! Column specs pair a request parameter name with a physical column via
//! `"param:column"` notation. Relation filters describe the nested
//! predicates applied to a related table, keyed by [`FilterMethod`].

/// A request-parameter-to-column mapping parsed from `"param:column"`.
///
/// Without a colon the parameter name and the column name are the same.
/// With more than one colon the first segment is the parameter key and the
/// last segment is the column, everything in between is ignored.
///
/// # Example
/// ```
/// use searchcrate::ColumnSpec;
///
/// let spec = ColumnSpec::parse("category_name:name");
/// assert_eq!(spec.param, "category_name");
/// assert_eq!(spec.column, "name");
///
/// let spec = ColumnSpec::parse("status");
/// assert_eq!(spec.param, "status");
/// assert_eq!(spec.column, "status");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Lookup key into the parameter map. May be a dotted path.
    pub param: String,
    /// Physical column name handed to the query builder.
    pub column: String,
}

impl ColumnSpec {
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut segments = spec.split(':');
        let param = segments.next().unwrap_or(spec).to_string();
        let column = segments
            .next_back()
            .map_or_else(|| param.clone(), ToString::to_string);
        Self { param, column }
    }
}

/// How a parameter value is turned into a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMethod {
    /// Comma-delimited list: one token compares equal, several become `IN`.
    Comma,
    /// `LIKE 'value%'`
    Fuzzy,
    /// `LIKE '%value%'`
    FuzzyLeft,
    /// Membership over an array value, equality fallback for scalars.
    In,
    /// `BETWEEN` over a two-element bound pair.
    Between,
    /// Plain equality.
    Equals,
}

/// The key pair linking a parent table to a related table.
///
/// Relations are described by name, not by typed entity relations, so the
/// same filter list works against any query selecting from the parent
/// table. Field naming follows Sea-ORM's `RelationDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTarget {
    /// Table the filtered query selects from (e.g. `products`).
    pub from_table: String,
    /// Key column on the parent side (e.g. `category_id`).
    pub from_column: String,
    /// Related table the existence check runs against (e.g. `categories`).
    pub to_table: String,
    /// Key column on the related side (e.g. `id`).
    pub to_column: String,
}

impl RelationTarget {
    #[must_use]
    pub fn new(from_table: &str, from_column: &str, to_table: &str, to_column: &str) -> Self {
        Self {
            from_table: from_table.to_string(),
            from_column: from_column.to_string(),
            to_table: to_table.to_string(),
            to_column: to_column.to_string(),
        }
    }
}

/// Nested predicates on a related table, applied only when at least one
/// referenced parameter is present.
///
/// Entries keep their declaration order, which is also the order the
/// predicates are emitted in.
///
/// # Example
/// ```
/// use searchcrate::{RelationFilter, RelationTarget};
///
/// let filter = RelationFilter::new(RelationTarget::new(
///     "products", "category_id", "categories", "id",
/// ))
/// .comma(&["category_sn:sn"])
/// .fuzzy(&["category_name:name", "value", "desc"]);
/// ```
#[derive(Debug, Clone)]
pub struct RelationFilter {
    pub(crate) target: RelationTarget,
    pub(crate) entries: Vec<(FilterMethod, Vec<ColumnSpec>)>,
}

impl RelationFilter {
    #[must_use]
    pub fn new(target: RelationTarget) -> Self {
        Self {
            target,
            entries: Vec::new(),
        }
    }

    /// Comma-delimited list filter on the given column specs.
    #[must_use]
    pub fn comma(self, specs: &[&str]) -> Self {
        self.entry(FilterMethod::Comma, specs)
    }

    /// Suffix-wildcard `LIKE` on the given column specs.
    #[must_use]
    pub fn fuzzy(self, specs: &[&str]) -> Self {
        self.entry(FilterMethod::Fuzzy, specs)
    }

    /// Both-sides `LIKE` on the given column specs.
    #[must_use]
    pub fn fuzzy_left(self, specs: &[&str]) -> Self {
        self.entry(FilterMethod::FuzzyLeft, specs)
    }

    /// Membership filter on the given column specs.
    #[must_use]
    pub fn is_in(self, specs: &[&str]) -> Self {
        self.entry(FilterMethod::In, specs)
    }

    /// Range filter on the given column specs.
    #[must_use]
    pub fn between(self, specs: &[&str]) -> Self {
        self.entry(FilterMethod::Between, specs)
    }

    /// Equality filter on the given column specs.
    #[must_use]
    pub fn equals(self, specs: &[&str]) -> Self {
        self.entry(FilterMethod::Equals, specs)
    }

    fn entry(mut self, method: FilterMethod, specs: &[&str]) -> Self {
        self.entries
            .push((method, specs.iter().map(|s| ColumnSpec::parse(s)).collect()));
        self
    }

    /// Every parameter key referenced across all entries.
    pub(crate) fn param_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, specs)| specs.iter().map(|spec| spec.param.as_str()))
    }
}
