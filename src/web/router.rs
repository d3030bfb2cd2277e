//! Router service - the core engine behind the route guard.
//!
//! All History API access is concentrated here. The service owns the
//! current-route signal, runs every navigation attempt through
//! [`route::resolve`], listens for browser back/forward, and redirects
//! automatically when the injected authentication signal flips.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{self, AppRoute};

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects so the denied URL does not pollute history.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Route state plus navigation, shared through Context.
///
/// Authentication is injected as a signal so the router knows nothing about
/// the session layer.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // The guard covers the very first route too: a cold load of a
        // protected path without a session must never mount the protected
        // view, not even for the tick before the auth-redirect effect runs.
        let target = AppRoute::from_path(&current_path());
        let initial_route = route::resolve(target.clone(), is_authenticated.get_untracked());
        if initial_route != target {
            replace_history_state(initial_route.to_path());
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a path, running the guard first.
    pub fn navigate(&self, path: &str) {
        self.apply(AppRoute::from_path(path), true);
    }

    /// Resolve the guard and commit the outcome to History and the route
    /// signal. `use_push` selects pushState over replaceState.
    fn apply(&self, target: AppRoute, use_push: bool) {
        let resolved = route::resolve(target.clone(), self.is_authenticated.get_untracked());
        if resolved != target {
            web_sys::console::log_1(
                &format!("[Router] guard redirected {} -> {}", target, resolved).into(),
            );
        }
        if use_push {
            push_history_state(resolved.to_path());
        } else {
            replace_history_state(resolved.to_path());
        }
        self.set_route.set(resolved);
    }

    /// Browser back/forward runs through the same guard.
    fn init_popstate_listener(&self) {
        let service = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            service.apply(AppRoute::from_path(&current_path()), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the app lifetime.
        closure.forget();
    }

    /// Login and logout redirect without any component navigating by hand:
    /// this effect watches the auth signal and moves off the login page or
    /// off protected pages accordingly.
    fn setup_auth_redirect(&self) {
        let service = *self;
        Effect::new(move |_| {
            let is_auth = service.is_authenticated.get();
            let current = service.current_route.get_untracked();
            let resolved = route::resolve(current.clone(), is_auth);
            if resolved != current {
                web_sys::console::log_1(
                    &format!("[Router] auth change: {} -> {}", current, resolved).into(),
                );
                // a redirect, so replaceState: Back must not land on the
                // denied URL
                replace_history_state(resolved.to_path());
                service.set_route.set(resolved);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Root router component; provides the service to everything below it.
#[component]
pub fn Router(
    /// Injected authentication signal.
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders whatever view the matcher returns for the current route.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
