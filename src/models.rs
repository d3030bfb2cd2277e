//! Local mirrors of the records exchanged with the bookstore API.
//!
//! The server speaks camelCase JSON with Mongo-style `_id` keys; every model
//! here is a plain record the client never persists itself. The [`Resource`]
//! trait ties each record type to its endpoint so the API client can be
//! written once instead of once per resource.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One entity type exposed by the remote API.
///
/// `ENDPOINT` is the path segment under the API base URL. List, create,
/// update and delete for every resource are derived from it by the client.
pub trait Resource: DeserializeOwned + 'static {
    const ENDPOINT: &'static str;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub original_price: f64,
    pub discount_percentage: f64,
    /// Derived server-side from price and discount.
    pub discounted_price: f64,
    /// Category by title, author by name.
    pub category: String,
    pub author: String,
    pub cover_image: String,
    pub sample_pdf: String,
    pub source_path: String,
    #[serde(default)]
    pub created_at: String,
}

impl Resource for Book {
    const ENDPOINT: &'static str = "book";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub created_at: String,
}

impl Resource for Author {
    const ENDPOINT: &'static str = "author";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub created_at: String,
}

impl Resource for Category {
    const ENDPOINT: &'static str = "category";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub comment: String,
    pub rating: u8,
    pub book_title: String,
    pub username: String,
}

impl Resource for Review {
    const ENDPOINT: &'static str = "review";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    /// true = active, false = blocked.
    pub status: bool,
}

impl Resource for User {
    const ENDPOINT: &'static str = "users";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub book: String,
    pub total_amount: f64,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

impl Resource for Order {
    const ENDPOINT: &'static str = "order";
}

// =========================================================
// Request / response bodies
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// JSON body for category create and update. Books and authors carry file
/// attachments and go through multipart instead.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    pub title: String,
}

#[cfg(test)]
mod tests;
