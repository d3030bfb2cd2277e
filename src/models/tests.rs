use super::*;

#[test]
fn book_deserializes_from_api_shape() {
    let json = r#"{
        "_id": "66f0a1",
        "title": "Dune",
        "description": "Desert planet",
        "originalPrice": 20.0,
        "discountPercentage": 25.0,
        "discountedPrice": 15.0,
        "category": "Sci-Fi",
        "author": "Frank Herbert",
        "coverImage": "https://cdn.example/dune.jpg",
        "samplePdf": "https://cdn.example/dune-sample.pdf",
        "sourcePath": "https://cdn.example/dune.pdf",
        "createdAt": "2024-01-02T03:04:05Z"
    }"#;

    let book: Book = serde_json::from_str(json).unwrap();
    assert_eq!(book.id, "66f0a1");
    assert_eq!(book.title, "Dune");
    assert_eq!(book.original_price, 20.0);
    assert_eq!(book.discounted_price, 15.0);
    assert_eq!(book.author, "Frank Herbert");
}

#[test]
fn book_tolerates_missing_created_at() {
    let json = r#"{
        "_id": "1", "title": "t", "description": "d",
        "originalPrice": 1.0, "discountPercentage": 0.0, "discountedPrice": 1.0,
        "category": "c", "author": "a",
        "coverImage": "", "samplePdf": "", "sourcePath": ""
    }"#;
    let book: Book = serde_json::from_str(json).unwrap();
    assert_eq!(book.created_at, "");
}

#[test]
fn login_response_uses_is_admin_key() {
    let json = r#"{"token": "abc123", "isAdmin": true}"#;
    let res: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(res.token, "abc123");
    assert!(res.is_admin);
}

#[test]
fn user_status_is_a_bool() {
    let json = r#"{"_id": "u1", "username": "ada", "email": "ada@example.com", "status": false}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert!(!user.status);
}

#[test]
fn review_carries_linked_display_fields() {
    let json = r#"{"_id": "r1", "comment": "great", "rating": 5, "bookTitle": "Dune", "username": "ada"}"#;
    let review: Review = serde_json::from_str(json).unwrap();
    assert_eq!(review.book_title, "Dune");
    assert_eq!(review.username, "ada");
}

#[test]
fn category_payload_serializes_title_only() {
    let body = CategoryPayload {
        title: "Poetry".to_string(),
    };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"title":"Poetry"}"#);
}
