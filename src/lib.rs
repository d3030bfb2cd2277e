//! Bookstore admin dashboard.
//!
//! Context-driven architecture:
//! - `web::route` / `web::router`: route table and guarded navigation
//! - `session`: authentication state and token persistence
//! - `api`: generic typed client for the bookstore REST API
//! - `list`: the fetch/filter/paginate/mutate pattern shared by all screens
//! - `components`: UI layer

pub mod api;
pub mod error;
pub mod list;
pub mod models;
pub mod session;
pub mod validate;
pub mod web;

mod components {
    pub mod admin_panel;
    pub mod authors;
    pub mod book_form;
    pub mod books;
    pub mod categories;
    pub mod confirm;
    pub mod header;
    pub mod icons;
    pub mod login;
    pub mod orders;
    pub mod pagination;
    pub mod reviews;
    pub mod toast;
    pub mod users;
}

use leptos::prelude::*;

use crate::components::admin_panel::AdminPanel;
use crate::components::authors::ManageAuthors;
use crate::components::books::ManageBooks;
use crate::components::categories::ManageCategories;
use crate::components::header::Header;
use crate::components::login::LoginPage;
use crate::components::orders::ManageOrders;
use crate::components::reviews::ManageReviews;
use crate::components::users::ManageUsers;
use crate::session::{SessionContext, init_session, use_session};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet, use_router};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <AdminPanel /> }.into_any(),
        AppRoute::Books => view! { <ManageBooks /> }.into_any(),
        AppRoute::Users => view! { <ManageUsers /> }.into_any(),
        AppRoute::Authors => view! { <ManageAuthors /> }.into_any(),
        AppRoute::Categories => view! { <ManageCategories /> }.into_any(),
        AppRoute::Reviews => view! { <ManageReviews /> }.into_any(),
        AppRoute::Orders => view! { <ManageOrders /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);

    // Rehydrate the stored token before the router resolves the first route.
    init_session(&session);

    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Shell />
        </Router>
    }
}

/// Top-level chrome. The header renders only when the guard resolved to a
/// known protected route: on the login page and on the 404 view the screen
/// stands alone.
#[component]
fn Shell() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let chrome = Signal::derive(move || {
        session.state.get().is_authenticated
            && router.current_route().get().is_protected_match()
    });

    view! {
        <Show
            when=move || !session.state.get().is_loading
            fallback=|| view! { <div></div> }
        >
            <div class="flex min-h-screen bg-base-100">
                <Show when=move || chrome.get()>
                    <Header />
                </Show>
                <div class=move || {
                    if chrome.get() { "flex-grow p-8" } else { "flex-grow" }
                }>
                    <RouterOutlet matcher=route_matcher />
                </div>
            </div>
        </Show>
    }
}
