use sea_orm::{DbBackend, EntityTrait, QueryTrait};
use searchcrate::{RelationFilter, RelationTarget, SearchExt, SearchParams};
use serde_json::{Value, json};

mod common;
use common::products;

fn category_target() -> RelationTarget {
    RelationTarget::new("products", "category_id", "categories", "id")
}

fn where_has_sql(params: Value, relation: RelationFilter) -> String {
    let params = SearchParams::from_value(params);
    products::Entity::find()
        .search(&params)
        .where_has_search(&[relation])
        .into_inner()
        .build(DbBackend::MySql)
        .to_string()
}

fn where_has_in_sql(params: Value, relation: RelationFilter) -> String {
    let params = SearchParams::from_value(params);
    products::Entity::find()
        .search(&params)
        .where_has_in_search(&[relation])
        .into_inner()
        .build(DbBackend::MySql)
        .to_string()
}

#[test]
fn fuzzy_entry_opens_nested_scope() {
    let relation = RelationFilter::new(category_target()).fuzzy(&["category_name:name"]);
    let sql = where_has_sql(json!({"category_name": "shoe"}), relation);
    assert!(sql.contains("EXISTS"), "{sql}");
    assert!(
        sql.contains("`categories`.`id` = `products`.`category_id`"),
        "{sql}"
    );
    assert!(sql.contains("`name` LIKE 'shoe%'"), "{sql}");
}

#[test]
fn absent_parameters_open_no_scope_at_all() {
    let relation = RelationFilter::new(category_target())
        .comma(&["category_sn:sn"])
        .fuzzy(&["category_name:name"]);
    let sql = where_has_sql(json!({"unrelated": "x"}), relation);
    assert!(!sql.contains("WHERE"), "{sql}");
    assert!(!sql.contains("EXISTS"), "{sql}");
}

#[test]
fn partial_presence_emits_only_present_predicates() {
    let relation = RelationFilter::new(category_target())
        .comma(&["category_sn:sn"])
        .fuzzy(&["category_name:name"]);
    let sql = where_has_sql(json!({"category_name": "shoe"}), relation);
    assert!(sql.contains("`name` LIKE 'shoe%'"), "{sql}");
    assert!(!sql.contains("`sn` ="), "{sql}");
    assert!(!sql.contains("`sn` IN"), "{sql}");
}

#[test]
fn entries_dispatch_by_method() {
    let relation = RelationFilter::new(category_target())
        .comma(&["category_sn:sn"])
        .fuzzy_left(&["category_name:name"])
        .between(&["category_value:value"]);
    let sql = where_has_sql(
        json!({
            "category_sn": "S1, S2",
            "category_name": "shoe",
            "category_value": [1, 5],
        }),
        relation,
    );
    assert!(sql.contains("`sn` IN ('S1', 'S2')"), "{sql}");
    assert!(sql.contains("`name` LIKE '%shoe%'"), "{sql}");
    assert!(sql.contains("`value` BETWEEN 1 AND 5"), "{sql}");
}

#[test]
fn default_entry_is_equality() {
    let relation = RelationFilter::new(category_target()).equals(&["category_sn:sn"]);
    let sql = where_has_sql(json!({"category_sn": "S1"}), relation);
    assert!(sql.contains("`sn` = 'S1'"), "{sql}");
}

#[test]
fn present_but_tokenless_value_still_opens_scope() {
    // Delimiter-only comma input is a present value; the existence check
    // runs with no extra predicate, as in a bare relation-existence test.
    let relation = RelationFilter::new(category_target()).comma(&["category_sn:sn"]);
    let sql = where_has_sql(json!({"category_sn": " , "}), relation);
    assert!(sql.contains("EXISTS"), "{sql}");
    assert!(!sql.contains("`sn` ="), "{sql}");
    assert!(!sql.contains("`sn` IN"), "{sql}");
}

#[test]
fn where_has_in_uses_key_membership() {
    let relation = RelationFilter::new(category_target()).fuzzy(&["category_name:name"]);
    let sql = where_has_in_sql(json!({"category_name": "shoe"}), relation);
    assert!(
        sql.contains("`products`.`category_id` IN (SELECT `id` FROM `categories`"),
        "{sql}"
    );
    assert!(sql.contains("`name` LIKE 'shoe%'"), "{sql}");
    assert!(!sql.contains("EXISTS"), "{sql}");
}

#[test]
fn multiple_relations_apply_independently() {
    let category = RelationFilter::new(category_target()).fuzzy(&["category_name:name"]);
    let supplier = RelationFilter::new(RelationTarget::new(
        "products",
        "supplier_id",
        "suppliers",
        "id",
    ))
    .equals(&["supplier_sn:sn"]);
    let sql = where_has_sql(json!({"category_name": "shoe"}), category.clone());
    assert!(sql.contains("`categories`"), "{sql}");

    let params = SearchParams::from_value(json!({"category_name": "shoe"}));
    let sql = products::Entity::find()
        .search(&params)
        .where_has_search(&[category, supplier])
        .into_inner()
        .build(DbBackend::MySql)
        .to_string();
    // Only the category relation has a present parameter.
    assert!(sql.contains("`categories`"), "{sql}");
    assert!(!sql.contains("`suppliers`"), "{sql}");
}
