//! The chainable search applier.
//!
//! [`Search`] wraps an owned Sea-ORM query together with a borrowed
//! parameter map. Each operation scans an ordered list of column specs,
//! appends the matching predicates to the query, and returns the applier
//! for further chaining. Absent parameters are silently skipped.

use sea_orm::sea_query::{Alias, Condition, ConditionalStatement, Expr, Query, SimpleExpr};
use sea_orm::{QueryFilter, QueryOrder};

use crate::conditions;
use crate::params::{SearchParams, value_present};
use crate::sort::parse_order;
use crate::filters::{ColumnSpec, FilterMethod, RelationFilter, RelationTarget};

/// Which existence strategy a relation filter compiles to.
#[derive(Debug, Clone, Copy)]
enum RelationStrategy {
    /// Correlated `EXISTS (SELECT 1 FROM related WHERE ..)`.
    Exists,
    /// `parent.key IN (SELECT related.key FROM related WHERE ..)`.
    InSubquery,
}

/// Chainable applier of search parameters to a Sea-ORM query.
///
/// # Example
/// ```rust,ignore
/// use searchcrate::{SearchExt, SearchParams};
///
/// let params = SearchParams::from_filter_str(Some(r#"{"name": "shoe", "status": 0}"#));
/// let results = products::Entity::find()
///     .search(&params)
///     .fuzzy_search(&["name"])
///     .exact_search(&["status"])
///     .sort(&["created_at", "price"])
///     .into_inner()
///     .all(&db)
///     .await?;
/// ```
#[derive(Debug)]
pub struct Search<'a, Q> {
    query: Q,
    params: &'a SearchParams,
}

impl<'a, Q> Search<'a, Q> {
    pub fn new(query: Q, params: &'a SearchParams) -> Self {
        Self { query, params }
    }

    /// Release the underlying query.
    pub fn into_inner(self) -> Q {
        self.query
    }
}

impl<Q: QueryFilter> Search<'_, Q> {
    /// Comma-delimited list filter. One token compares equal, several
    /// become `IN`; both ASCII and full-width commas and spaces delimit.
    #[must_use]
    pub fn comma_search(self, specs: &[&str]) -> Self {
        self.scalar_search(FilterMethod::Comma, specs)
    }

    /// Equality filter. `0` and `"0"` are present values and produce a
    /// predicate.
    #[must_use]
    pub fn exact_search(self, specs: &[&str]) -> Self {
        self.scalar_search(FilterMethod::Equals, specs)
    }

    /// Suffix-wildcard `LIKE` filter (`value%`).
    #[must_use]
    pub fn fuzzy_search(self, specs: &[&str]) -> Self {
        self.scalar_search(FilterMethod::Fuzzy, specs)
    }

    /// Both-sides `LIKE` filter (`%value%`).
    #[must_use]
    pub fn left_fuzzy_search(self, specs: &[&str]) -> Self {
        self.scalar_search(FilterMethod::FuzzyLeft, specs)
    }

    /// Range filter over a two-element bound pair. A scalar value
    /// degrades to equality.
    #[must_use]
    pub fn between_search(self, specs: &[&str]) -> Self {
        self.scalar_search(FilterMethod::Between, specs)
    }

    /// Membership filter over an array value, equality fallback for
    /// scalars.
    #[must_use]
    pub fn in_search(self, specs: &[&str]) -> Self {
        self.scalar_search(FilterMethod::In, specs)
    }

    /// Relation filter compiled to a correlated `EXISTS` subquery.
    ///
    /// A relation whose referenced parameters are all absent appends
    /// nothing at all.
    #[must_use]
    pub fn where_has_search(mut self, relations: &[RelationFilter]) -> Self {
        for relation in relations {
            if let Some(expr) = self.relation_expr(relation, RelationStrategy::Exists) {
                self.query = self.query.filter(expr);
            }
        }
        self
    }

    /// Relation filter compiled to a key-membership subquery
    /// (`parent.key IN (SELECT ..)`), the plan-friendly alternative to
    /// [`where_has_search`](Self::where_has_search) on large tables.
    #[must_use]
    pub fn where_has_in_search(mut self, relations: &[RelationFilter]) -> Self {
        for relation in relations {
            if let Some(expr) = self.relation_expr(relation, RelationStrategy::InSubquery) {
                self.query = self.query.filter(expr);
            }
        }
        self
    }

    fn scalar_search(mut self, method: FilterMethod, specs: &[&str]) -> Self {
        for raw in specs {
            let spec = ColumnSpec::parse(raw);
            let expr = self
                .params
                .get(&spec.param)
                .filter(|value| value_present(value))
                .and_then(|value| conditions::dispatch(method, &spec.column, value));
            if let Some(expr) = expr {
                self.query = self.query.filter(expr);
            }
        }
        self
    }

    fn relation_expr(
        &self,
        relation: &RelationFilter,
        strategy: RelationStrategy,
    ) -> Option<SimpleExpr> {
        // Existence pre-check: no present parameter anywhere in the
        // relation's entries means no nested scope is opened at all.
        if !relation.param_keys().any(|key| self.params.is_present(key)) {
            return None;
        }

        let mut nested = Condition::all();
        for (method, specs) in &relation.entries {
            for spec in specs {
                let Some(value) = self.params.get(&spec.param) else {
                    continue;
                };
                if !value_present(value) {
                    continue;
                }
                if let Some(expr) = conditions::dispatch(*method, &spec.column, value) {
                    nested = nested.add(expr);
                }
            }
        }

        Some(match strategy {
            RelationStrategy::Exists => exists_expr(&relation.target, nested),
            RelationStrategy::InSubquery => in_subquery_expr(&relation.target, nested),
        })
    }
}

impl<Q: QueryFilter + QueryOrder> Search<'_, Q> {
    /// Multi-column sort driven by the `orderBy` parameter.
    ///
    /// Order entries iterate outer and column specs inner, so the final
    /// `ORDER BY` sequence follows the declared order entries, not the
    /// column spec list.
    #[must_use]
    pub fn sort(mut self, specs: &[&str]) -> Self {
        let entries = self.params.order_by();
        if entries.is_empty() {
            return self;
        }
        let specs: Vec<ColumnSpec> = specs.iter().map(|raw| ColumnSpec::parse(raw)).collect();
        for entry in &entries {
            if entry.order.is_empty() {
                continue;
            }
            for spec in &specs {
                if entry.field == spec.param {
                    let column: SimpleExpr = Expr::col(Alias::new(spec.column.as_str())).into();
                    self.query = self.query.order_by(column, parse_order(&entry.order));
                }
            }
        }
        self
    }
}

fn exists_expr(target: &RelationTarget, nested: Condition) -> SimpleExpr {
    let mut subquery = Query::select();
    subquery
        .expr(Expr::val(1))
        .from(Alias::new(target.to_table.as_str()))
        .and_where(
            Expr::col((
                Alias::new(target.to_table.as_str()),
                Alias::new(target.to_column.as_str()),
            ))
            .equals((
                Alias::new(target.from_table.as_str()),
                Alias::new(target.from_column.as_str()),
            )),
        )
        .cond_where(nested);
    Expr::exists(subquery)
}

fn in_subquery_expr(target: &RelationTarget, nested: Condition) -> SimpleExpr {
    let mut subquery = Query::select();
    subquery
        .column(Alias::new(target.to_column.as_str()))
        .from(Alias::new(target.to_table.as_str()))
        .cond_where(nested);
    Expr::col((
        Alias::new(target.from_table.as_str()),
        Alias::new(target.from_column.as_str()),
    ))
    .in_subquery(subquery)
}

/// Entry point: start a search chain on any filterable query.
pub trait SearchExt: Sized {
    fn search(self, params: &SearchParams) -> Search<'_, Self>;
}

impl<Q: QueryFilter> SearchExt for Q {
    fn search(self, params: &SearchParams) -> Search<'_, Self> {
        Search::new(self, params)
    }
}
