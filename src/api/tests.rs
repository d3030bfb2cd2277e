use super::*;
use crate::models::{Book, User};

#[test]
fn base_url_is_trimmed() {
    let api = Api::new("https://api.example.com///", "t");
    assert_eq!(api.url("book"), "https://api.example.com/book");
}

#[test]
fn url_joins_with_and_without_leading_slash() {
    let api = Api::new("https://api.example.com", "t");
    assert_eq!(api.url("book"), "https://api.example.com/book");
    assert_eq!(api.url("/book"), "https://api.example.com/book");
}

#[test]
fn bearer_header_format() {
    let api = Api::new(DEFAULT_BASE_URL, "abc123");
    assert_eq!(api.bearer(), "Bearer abc123");
}

#[test]
fn resource_endpoints_feed_item_paths() {
    assert_eq!(Book::ENDPOINT, "book");
    assert_eq!(User::ENDPOINT, "users");
    let api = Api::new("https://api.example.com", "t");
    let path = format!("{}/{}", Book::ENDPOINT, "42");
    assert_eq!(api.url(&path), "https://api.example.com/book/42");
}
