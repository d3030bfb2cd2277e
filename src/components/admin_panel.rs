//! Landing dashboard: headline counts, the most recently added records, and
//! shortcut cards to the management screens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Author, Book, Category, Review, User};
use crate::session::use_session;
use crate::web::router::use_router;

const SHORTCUTS: [(&str, &str, &str); 6] = [
    ("Manage Books", "Add, edit and remove books", "/books"),
    ("Manage Users", "Block, unblock and remove users", "/users"),
    ("Manage Authors", "Maintain the author catalogue", "/authors"),
    ("Manage Categories", "Maintain the category list", "/categories"),
    ("Manage Reviews", "Moderate customer reviews", "/reviews"),
    ("Manage Orders", "Browse customer orders", "/orders"),
];

#[component]
pub fn AdminPanel() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let books = RwSignal::new(Vec::<Book>::new());
    let authors = RwSignal::new(Vec::<Author>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let users = RwSignal::new(Vec::<User>::new());
    let reviews = RwSignal::new(Vec::<Review>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(true);

    Effect::new(move |_| {
        let state = session.state.get();
        if !state.is_authenticated {
            return;
        }
        let Some(api) = state.api else { return };

        spawn_local(async move {
            // one failed list surfaces as a banner, the rest still render
            let mut first_error = None;
            match api.list::<Book>().await {
                Ok(data) => books.set(data),
                Err(e) => first_error = first_error.or(Some(e.to_string())),
            }
            match api.list::<Author>().await {
                Ok(data) => authors.set(data),
                Err(e) => first_error = first_error.or(Some(e.to_string())),
            }
            match api.list::<Category>().await {
                Ok(data) => categories.set(data),
                Err(e) => first_error = first_error.or(Some(e.to_string())),
            }
            match api.list::<User>().await {
                Ok(data) => users.set(data),
                Err(e) => first_error = first_error.or(Some(e.to_string())),
            }
            match api.list::<Review>().await {
                Ok(data) => reviews.set(data),
                Err(e) => first_error = first_error.or(Some(e.to_string())),
            }
            error.set(first_error);
            loading.set(false);
        });
    });

    let stat = |label: &'static str, value: Signal<String>| {
        view! {
            <div class="stat bg-base-200 rounded-lg shadow">
                <div class="stat-title">{label}</div>
                <div class="stat-value text-primary">{move || value.get()}</div>
            </div>
        }
    };

    view! {
        <div class="py-6 bg-base-100 font-sans p-4 lg:p-8 shadow-lg rounded-lg">
            <h2 class="text-3xl font-bold mb-6">"Dashboard"</h2>

            <Show when=move || error.with(|e| e.is_some())>
                <div class="alert alert-error mb-4">
                    {move || {
                        let msg = error.with(|e| e.clone().unwrap_or_default());
                        format!("Failed to load dashboard data: {msg}")
                    }}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center py-16">
                            <span class="loading loading-bars loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <div class="stats-grid grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-4 mb-8">
                    {stat("Books", Signal::derive(move || books.with(|b| b.len().to_string())))}
                    {stat(
                        "Authors",
                        Signal::derive(move || authors.with(|a| a.len().to_string())),
                    )}
                    {stat(
                        "Categories",
                        Signal::derive(move || categories.with(|c| c.len().to_string())),
                    )}
                    {stat("Users", Signal::derive(move || users.with(|u| u.len().to_string())))}
                    {stat(
                        "Reviews",
                        Signal::derive(move || reviews.with(|r| r.len().to_string())),
                    )}
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-4 mb-8">
                    {stat(
                        "Last added book",
                        Signal::derive(move || {
                            books
                                .with(|b| b.last().map(|book| book.title.clone()))
                                .unwrap_or_else(|| "-".to_string())
                        }),
                    )}
                    {stat(
                        "Last added category",
                        Signal::derive(move || {
                            categories
                                .with(|c| c.last().map(|category| category.title.clone()))
                                .unwrap_or_else(|| "-".to_string())
                        }),
                    )}
                    {stat(
                        "Last added author",
                        Signal::derive(move || {
                            authors
                                .with(|a| a.last().map(|author| author.name.clone()))
                                .unwrap_or_else(|| "-".to_string())
                        }),
                    )}
                </div>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {SHORTCUTS
                    .into_iter()
                    .map(|(title, subtitle, path)| {
                        view! {
                            <div
                                class="card bg-base-200 shadow hover:shadow-lg cursor-pointer transition-shadow"
                                on:click=move |_| router.navigate(path)
                            >
                                <div class="card-body">
                                    <h3 class="card-title">{title}</h3>
                                    <p class="text-sm opacity-70">{subtitle}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
