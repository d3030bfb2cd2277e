//! Session lifecycle.
//!
//! One explicit context object instead of ambient token lookups: the token
//! lives in LocalStorage under a single key, the in-memory state (including
//! the constructed API client) lives in a signal pair shared through
//! Context. A stored token is treated as authenticated until logout; there
//! is no client-side expiry check.

use leptos::prelude::*;

use crate::api::{Api, DEFAULT_BASE_URL};
use crate::web::LocalStore;

pub const TOKEN_KEY: &str = "bookstore_token";
pub const THEME_KEY: &str = "bookstore_theme";
/// Optional override for the API origin, mostly useful against a staging
/// backend.
pub const BASE_URL_KEY: &str = "bookstore_api_url";

#[derive(Clone, Default)]
pub struct SessionState {
    /// API client, present only while authenticated.
    pub api: Option<Api>,
    pub is_authenticated: bool,
    /// True until the stored token has been checked on startup.
    pub is_loading: bool,
    pub is_admin: bool,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState {
            is_loading: true,
            ..SessionState::default()
        });
        Self { state, set_state }
    }

    /// For injection into the router service.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

pub fn base_url() -> String {
    LocalStore::get(BASE_URL_KEY).unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Rehydrate from LocalStorage on startup. Only admin logins are ever
/// persisted, so a present token means an admin session.
pub fn init_session(ctx: &SessionContext) {
    let token = LocalStore::get(TOKEN_KEY);
    ctx.set_state.update(|state| {
        if let Some(token) = token {
            state.api = Some(Api::new(base_url(), token));
            state.is_authenticated = true;
            state.is_admin = true;
        }
        state.is_loading = false;
    });
}

/// Authenticate and persist. Non-admin accounts are rejected and nothing is
/// stored for them.
pub async fn login(ctx: &SessionContext, email: String, password: String) -> Result<(), String> {
    let base = base_url();
    let res = Api::login(&base, &email, &password)
        .await
        .map_err(|e| e.to_string())?;

    if !res.is_admin {
        return Err("Access denied. You are not an admin.".to_string());
    }

    LocalStore::set(TOKEN_KEY, &res.token);
    ctx.set_state.update(|state| {
        state.api = Some(Api::new(base, res.token));
        state.is_authenticated = true;
        state.is_admin = true;
    });
    Ok(())
}

/// Clear storage and state. Navigation is handled by the router's
/// auth-change effect, not here.
pub fn logout(ctx: &SessionContext) {
    LocalStore::delete(TOKEN_KEY);
    ctx.set_state.update(|state| {
        state.api = None;
        state.is_authenticated = false;
        state.is_admin = false;
    });
}

pub fn theme() -> String {
    LocalStore::get(THEME_KEY).unwrap_or_else(|| "light".to_string())
}

pub fn set_theme(theme: &str) {
    LocalStore::set(THEME_KEY, theme);
}
