//! Thin wrappers over the browser APIs the app touches directly:
//! LocalStorage and the History-based router. Everything else goes through
//! `gloo-net`.

pub mod route;
pub mod router;
mod storage;

pub use storage::LocalStore;
