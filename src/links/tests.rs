//! Tests for links module

use super::*;
use crate::page::calculate_pagination;
use pretty_assertions::assert_eq;

fn base() -> Url {
    Url::parse("https://api.example.com/books?genre=poetry&page=9&limit=3").unwrap()
}

#[test]
fn test_build_middle_page() {
    let links = PageLinks::build(&base(), &calculate_pagination(3, 20, 95));

    assert_eq!(
        links,
        PageLinks {
            first: "https://api.example.com/books?genre=poetry&page=1&limit=20".to_string(),
            prev: Some("https://api.example.com/books?genre=poetry&page=2&limit=20".to_string()),
            next: Some("https://api.example.com/books?genre=poetry&page=4&limit=20".to_string()),
            last: "https://api.example.com/books?genre=poetry&page=5&limit=20".to_string(),
        }
    );
}

#[test]
fn test_build_first_page_has_no_prev() {
    let links = PageLinks::build(&base(), &calculate_pagination(1, 20, 95));
    assert!(links.prev.is_none());
    assert!(links.next.is_some());
}

#[test]
fn test_build_last_page_has_no_next() {
    let links = PageLinks::build(&base(), &calculate_pagination(5, 20, 95));
    assert!(links.next.is_none());
    assert!(links.prev.is_some());
}

#[test]
fn test_build_empty_result() {
    let links = PageLinks::build(&base(), &calculate_pagination(1, 20, 0));
    assert_eq!(links.first, links.last);
    assert!(links.prev.is_none());
    assert!(links.next.is_none());
}

#[test]
fn test_prev_from_past_last_page_points_at_last() {
    let links = PageLinks::build(&base(), &calculate_pagination(40, 20, 95));
    assert_eq!(links.prev.as_ref(), Some(&links.last));
}

#[test]
fn test_offset_param_is_dropped() {
    let base = Url::parse("https://api.example.com/books?offset=40").unwrap();
    let links = PageLinks::build(&base, &calculate_pagination(1, 10, 5));
    assert_eq!(links.first, "https://api.example.com/books?page=1&limit=10");
}

#[test]
fn test_from_base_url_invalid() {
    let result = PageLinks::from_base_url("/books", &calculate_pagination(1, 10, 5));
    assert!(result.is_err());
}

#[test]
fn test_link_header_round_trip() {
    let links = PageLinks::build(&base(), &calculate_pagination(3, 20, 95));
    let header = links.to_link_header();

    assert!(header.starts_with('<'));
    assert_eq!(parse_link_header(&header, "first"), Some(links.first.clone()));
    assert_eq!(parse_link_header(&header, "prev"), links.prev.clone());
    assert_eq!(parse_link_header(&header, "next"), links.next.clone());
    assert_eq!(parse_link_header(&header, "last"), Some(links.last.clone()));
}

#[test]
fn test_link_header_omits_missing_rels() {
    let links = PageLinks::build(&base(), &calculate_pagination(1, 20, 10));
    let header = links.to_link_header();
    assert!(!header.contains("rel=\"prev\""));
    assert!(!header.contains("rel=\"next\""));
    assert_eq!(parse_link_header(&header, "next"), None);
}

#[test]
fn test_parse_link_header_github_style() {
    let header = r#"<https://api.github.com/repos?page=2>; rel="next", <https://api.github.com/repos?page=5>; rel="last""#;
    assert_eq!(
        parse_link_header(header, "next"),
        Some("https://api.github.com/repos?page=2".to_string())
    );
    assert_eq!(
        parse_link_header(header, "last"),
        Some("https://api.github.com/repos?page=5".to_string())
    );
    assert_eq!(parse_link_header(header, "prev"), None);
}

#[test]
fn test_parse_link_header_multiple_rels() {
    let header = r#"<https://example.com/a?page=1>; rel="first prev""#;
    assert_eq!(
        parse_link_header(header, "prev"),
        Some("https://example.com/a?page=1".to_string())
    );
}
