//! Route table - the domain model of navigation.
//!
//! Pure logic, no DOM or web_sys: every management screen has one path, plus
//! the login path and a catch-all NotFound. The guard decision itself lives
//! in [`resolve`] so the router service and the popstate listener share one
//! implementation.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Login,
    /// Admin panel with the stat cards, at `/`.
    Dashboard,
    Books,
    Users,
    Authors,
    Categories,
    Reviews,
    Orders,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Self::Login,
            "/" => Self::Dashboard,
            "/books" => Self::Books,
            "/users" => Self::Users,
            "/authors" => Self::Authors,
            "/categories" => Self::Categories,
            "/reviews" => Self::Reviews,
            "/orders" => Self::Orders,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Books => "/books",
            Self::Users => "/users",
            Self::Authors => "/authors",
            Self::Categories => "/categories",
            Self::Reviews => "/reviews",
            Self::Orders => "/orders",
            Self::NotFound => "/404",
        }
    }

    /// Everything except the login page sits behind authentication; the 404
    /// view included, so an anonymous visitor only ever sees the login form.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// An authenticated user has no business on the login page.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// A known protected screen: drives chrome (header) visibility, which is
    /// deliberately conditioned on route-match success, not just on
    /// authentication. The 404 view renders without chrome.
    pub fn is_protected_match(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

/// Resolve one navigation attempt against the current session state.
///
/// Unauthenticated access to a protected route lands on Login; an
/// authenticated visit to the login page lands on the dashboard; anything
/// else passes through (including NotFound for unknown paths).
pub fn resolve(target: AppRoute, is_authenticated: bool) -> AppRoute {
    if target.requires_auth() && !is_authenticated {
        return AppRoute::auth_failure_redirect();
    }
    if target.should_redirect_when_authenticated() && is_authenticated {
        return AppRoute::auth_success_redirect();
    }
    target
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
