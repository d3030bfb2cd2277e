//! API gateway client.
//!
//! One generic, typed client instead of a fetch function per resource: every
//! CRUD call is derived from [`Resource::ENDPOINT`]. All requests except
//! login carry the bearer token; reads and writes are uniformly
//! authenticated. A call is a single attempt: no retries, no timeout, no
//! backoff.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, Resource};

/// Fallback API origin, overridable through a LocalStorage key (see
/// `session::base_url`).
pub const DEFAULT_BASE_URL: &str = "https://book-store-backend-sigma-one.vercel.app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Api {
    base_url: String,
    token: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Turn a response into `T`, mapping non-2xx statuses to
    /// [`ApiError::Api`] with whatever message the body carried.
    async fn parse<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        if !res.ok() {
            return Err(ApiError::Api {
                status: res.status(),
                message: res.text().await.unwrap_or_default(),
            });
        }
        res.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn check(res: Response) -> Result<(), ApiError> {
        if !res.ok() {
            return Err(ApiError::Api {
                status: res.status(),
                message: res.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    // =========================================================
    // Generic CRUD
    // =========================================================

    /// Fetch the full collection for a resource.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let res = Request::get(&self.url(R::ENDPOINT))
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse(res).await
    }

    /// Create a record from a JSON body.
    pub async fn create<R: Resource, B: Serialize>(&self, body: &B) -> Result<R, ApiError> {
        let res = Request::post(&self.url(R::ENDPOINT))
            .header("Authorization", &self.bearer())
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse(res).await
    }

    /// Update a record from a JSON body.
    pub async fn update<R: Resource, B: Serialize>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let path = format!("{}/{}", R::ENDPOINT, id);
        let res = Request::put(&self.url(&path))
            .header("Authorization", &self.bearer())
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse(res).await
    }

    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", R::ENDPOINT, id);
        let res = Request::delete(&self.url(&path))
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check(res).await
    }

    // =========================================================
    // Multipart variants (book and author writes carry files)
    // =========================================================

    pub async fn create_multipart<R: Resource>(&self, form: Multipart) -> Result<R, ApiError> {
        let res = Request::post(&self.url(R::ENDPOINT))
            .header("Authorization", &self.bearer())
            .body(form.into_inner())
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse(res).await
    }

    pub async fn update_multipart<R: Resource>(
        &self,
        id: &str,
        form: Multipart,
    ) -> Result<R, ApiError> {
        let path = format!("{}/{}", R::ENDPOINT, id);
        let res = Request::put(&self.url(&path))
            .header("Authorization", &self.bearer())
            .body(form.into_inner())
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse(res).await
    }

    // =========================================================
    // Bespoke calls
    // =========================================================

    /// Authenticate against the login endpoint. The only unauthenticated
    /// call the client makes.
    pub async fn login(
        base_url: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/users/login", base_url.trim_end_matches('/'));
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let res = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::parse(res).await
    }

    /// Block or unblock a user account.
    pub async fn set_user_status(&self, id: &str, status: bool) -> Result<(), ApiError> {
        let path = format!("users/{}/status", id);
        let res = Request::patch(&self.url(&path))
            .header("Authorization", &self.bearer())
            .json(&json!({ "status": status }))
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check(res).await
    }
}

/// Thin wrapper over `web_sys::FormData` so form components never touch the
/// raw JS error values.
pub struct Multipart {
    inner: web_sys::FormData,
}

impl Multipart {
    pub fn new() -> Result<Self, ApiError> {
        web_sys::FormData::new()
            .map(|inner| Self { inner })
            .map_err(|e| ApiError::Request(format!("{e:?}")))
    }

    pub fn text(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.inner
            .append_with_str(key, value)
            .map_err(|e| ApiError::Request(format!("{e:?}")))
    }

    pub fn file(&self, key: &str, file: &web_sys::File) -> Result<(), ApiError> {
        self.inner
            .append_with_blob_and_filename(key, file, &file.name())
            .map_err(|e| ApiError::Request(format!("{e:?}")))
    }

    fn into_inner(self) -> web_sys::FormData {
        self.inner
    }
}

#[cfg(test)]
mod tests;
