//! Tests for query module

use super::*;
use crate::page::PaginationParams;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn params(page: u64, limit: u64, offset: u64) -> PaginationParams {
    PaginationParams {
        page,
        limit,
        offset,
    }
}

fn parse(query: &str) -> PaginationParams {
    parse_pagination_params(
        &PaginationQuery::from_query_string(query),
        &PaginationOptions::default(),
    )
}

// ============================================================================
// parse_query_number Tests
// ============================================================================

#[test_case(None, 7 ; "absent")]
#[test_case(Some(QueryValue::from("12")), 12 ; "plain text")]
#[test_case(Some(QueryValue::from(" 12 ")), 12 ; "padded text")]
#[test_case(Some(QueryValue::from("12.9")), 12 ; "fraction is floored")]
#[test_case(Some(QueryValue::from("-3")), -3 ; "negative text")]
#[test_case(Some(QueryValue::from("abc")), 7 ; "garbage")]
#[test_case(Some(QueryValue::from("")), 7 ; "empty text")]
#[test_case(Some(QueryValue::from("Infinity")), 7 ; "infinite text")]
#[test_case(Some(QueryValue::from("NaN")), 7 ; "nan text")]
#[test_case(Some(QueryValue::Number(4.7)), 4 ; "number is floored")]
#[test_case(Some(QueryValue::Number(-1.5)), -2 ; "negative number floors down")]
#[test_case(Some(QueryValue::Number(f64::NAN)), 7 ; "nan number")]
#[test_case(Some(QueryValue::Number(f64::INFINITY)), 7 ; "infinite number")]
#[test_case(Some(QueryValue::List(vec!["5".into(), "9".into()])), 5 ; "list uses first")]
#[test_case(Some(QueryValue::List(vec![])), 7 ; "empty list")]
#[test_case(Some(QueryValue::List(vec!["x".into(), "9".into()])), 7 ; "list first malformed")]
#[test_case(Some(QueryValue::Malformed), 7 ; "malformed shape")]
fn test_parse_query_number(value: Option<QueryValue>, expected: i64) {
    assert_eq!(parse_query_number(value.as_ref(), 7), expected);
}

// ============================================================================
// parse_pagination_params Tests
// ============================================================================

#[test]
fn test_defaults_for_empty_query() {
    assert_eq!(parse(""), params(1, 20, 0));
}

#[test]
fn test_garbage_page_and_oversized_limit() {
    assert_eq!(parse("page=abc&limit=9999"), params(1, 100, 0));
}

#[test]
fn test_offset_derives_page() {
    assert_eq!(parse("offset=50&limit=10"), params(6, 10, 50));
}

#[test]
fn test_unaligned_offset_is_kept() {
    assert_eq!(parse("offset=55&limit=10"), params(6, 10, 55));
}

#[test]
fn test_offset_wins_over_page() {
    assert_eq!(parse("page=9&offset=20&limit=10"), params(3, 10, 20));
}

#[test]
fn test_negative_offset_clamped() {
    assert_eq!(parse("offset=-40&limit=10"), params(1, 10, 0));
}

#[test]
fn test_malformed_offset_counts_as_zero() {
    assert_eq!(parse("page=4&offset=oops&limit=10"), params(1, 10, 0));
}

#[test]
fn test_page_computes_offset() {
    assert_eq!(parse("page=3&limit=25"), params(3, 25, 50));
}

#[test_case("page=0", 1 ; "zero page")]
#[test_case("page=-5", 1 ; "negative page")]
#[test_case("page=2.9", 2 ; "fractional page")]
fn test_page_clamped(query: &str, page: u64) {
    assert_eq!(parse(query).page, page);
}

#[test_case("limit=0", 1 ; "zero limit")]
#[test_case("limit=-10", 1 ; "negative limit")]
#[test_case("limit=101", 100 ; "above max")]
#[test_case("limit=100", 100 ; "at max")]
fn test_limit_clamped(query: &str, limit: u64) {
    assert_eq!(parse(query).limit, limit);
}

#[test_case("per_page=30", 30 ; "per_page")]
#[test_case("perPage=31", 31 ; "perPage")]
#[test_case("pageSize=32", 32 ; "pageSize")]
#[test_case("page_size=33", 33 ; "page_size")]
#[test_case("limit=10&per_page=30&page_size=33", 10 ; "limit first")]
#[test_case("page_size=33&perPage=31", 31 ; "perPage before page_size")]
#[test_case("pageSize=32&page_size=33", 32 ; "pageSize before page_size")]
fn test_limit_aliases(query: &str, limit: u64) {
    assert_eq!(parse(query).limit, limit);
}

#[test]
fn test_malformed_limit_does_not_fall_through() {
    // A present-but-bad `limit` still shadows later aliases
    assert_eq!(parse("limit=abc&per_page=30").limit, 20);
}

#[test]
fn test_repeated_key_uses_first_value() {
    assert_eq!(parse("page=4&page=9&limit=5"), params(4, 5, 15));
}

#[test]
fn test_custom_options() {
    let options = PaginationOptions::new()
        .with_default_limit(50)
        .with_max_limit(500)
        .with_default_page(2);

    let query = PaginationQuery::new();
    assert_eq!(parse_pagination_params(&query, &options), params(2, 50, 50));

    let query = PaginationQuery::new().with("limit", "400");
    assert_eq!(parse_pagination_params(&query, &options).limit, 400);
}

#[test]
fn test_zero_max_limit_option_is_tolerated() {
    let options = PaginationOptions::new().with_max_limit(0);
    let query = PaginationQuery::new().with("limit", "30");
    assert_eq!(parse_pagination_params(&query, &options).limit, 1);
}

#[test]
fn test_numeric_json_query() {
    let query: PaginationQuery = serde_json::from_value(json!({
        "page": 2,
        "perPage": 15.5,
    }))
    .unwrap();
    assert_eq!(
        parse_pagination_params(&query, &PaginationOptions::default()),
        params(2, 15, 15)
    );
}

// ============================================================================
// PaginationQuery Tests
// ============================================================================

#[test]
fn test_from_query_string() {
    let query = PaginationQuery::from_query_string("?page=2&per_page=50&sort=title&page=3");
    assert_eq!(
        query.page,
        Some(QueryValue::List(vec!["2".to_string(), "3".to_string()]))
    );
    assert_eq!(query.per_page, Some(QueryValue::from("50")));
    assert!(query.limit.is_none());
}

#[test]
fn test_from_query_string_percent_decoding() {
    let query = PaginationQuery::from_query_string("cursor=MjAyNC0wMS0xNQ%3D%3D&direction=backward");
    assert_eq!(query.cursor, Some(QueryValue::from("MjAyNC0wMS0xNQ==")));
    assert_eq!(query.direction, Some(QueryValue::from("backward")));
}

#[test]
fn test_set_unknown_key() {
    let mut query = PaginationQuery::new();
    assert!(!query.set("sort", "title"));
    assert!(query.set("pageSize", "12"));
    assert_eq!(query, PaginationQuery::new().with("pageSize", "12"));
}

#[test]
fn test_json_list_value() {
    let query: PaginationQuery = serde_json::from_value(json!({
        "page": ["3", "4"],
        "limit": null,
    }))
    .unwrap();
    assert_eq!(
        query.page,
        Some(QueryValue::List(vec!["3".to_string(), "4".to_string()]))
    );
    assert!(query.limit.is_none());
}

#[test_case(json!({"page": true, "limit": "10"}), params(1, 10, 0) ; "boolean page")]
#[test_case(json!({"page": {"x": 1}}), params(1, 20, 0) ; "object page")]
#[test_case(json!({"limit": [10, 20]}), params(1, 10, 0) ; "numeric list limit")]
#[test_case(json!({"page": [3, "x"], "limit": 5}), params(3, 5, 10) ; "mixed list page")]
#[test_case(json!({"offset": [{"a": 1}], "page": 4}), params(1, 20, 0) ; "nested list offset")]
fn test_odd_json_shapes_fall_back(body: serde_json::Value, expected: PaginationParams) {
    let query: PaginationQuery = serde_json::from_value(body).unwrap();
    assert_eq!(
        parse_pagination_params(&query, &PaginationOptions::default()),
        expected
    );
}

#[test]
fn test_query_value_from_json() {
    assert_eq!(QueryValue::from_json(json!(false)), QueryValue::Malformed);
    assert_eq!(QueryValue::from_json(json!(null)), QueryValue::Malformed);
    assert_eq!(QueryValue::from_json(json!(7)), QueryValue::Number(7.0));
    assert_eq!(
        QueryValue::from_json(json!([1, 2.5, "x"])),
        QueryValue::List(vec!["1".to_string(), "2.5".to_string(), "x".to_string()])
    );
    assert_eq!(QueryValue::from_json(json!([[1]])), QueryValue::Malformed);
}

#[test]
fn test_query_value_as_text() {
    assert_eq!(QueryValue::from("a").as_text(), Some("a".to_string()));
    assert_eq!(QueryValue::from(3_i64).as_text(), Some("3".to_string()));
    assert_eq!(QueryValue::List(vec![]).as_text(), None);
    assert_eq!(QueryValue::Malformed.as_text(), None);
}
