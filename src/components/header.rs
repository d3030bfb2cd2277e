//! Navigation chrome: sidebar links, theme toggle, logout.
//!
//! Rendered by the shell only on known protected routes.

use leptos::prelude::*;

use crate::components::icons::{BookOpen, LogOut, Moon, Sun};
use crate::session::{self, logout, use_session};
use crate::web::router::use_router;

const NAV_ITEMS: [(&str, &str); 7] = [
    ("Dashboard", "/"),
    ("Books", "/books"),
    ("Users", "/users"),
    ("Authors", "/authors"),
    ("Categories", "/categories"),
    ("Reviews", "/reviews"),
    ("Orders", "/orders"),
];

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (theme, set_theme) = signal(session::theme());

    // Persist and apply the theme on every change, including the stored one
    // on first render.
    Effect::new(move |_| {
        let theme = theme.get();
        session::set_theme(&theme);
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", &theme);
        }
    });

    let toggle_theme = move |_| {
        set_theme.update(|t| {
            *t = if t == "dark" {
                "light".to_string()
            } else {
                "dark".to_string()
            }
        });
    };

    let on_logout = move |_| {
        // the router's auth-change effect handles the redirect to login
        logout(&session);
    };

    view! {
        <aside class="w-56 min-h-screen bg-base-200 flex flex-col shadow-lg">
            <div class="flex items-center gap-2 p-4 text-primary">
                <BookOpen class="h-6 w-6" />
                <span class="text-lg font-bold">"Bookstore Admin"</span>
            </div>

            <ul class="menu flex-grow px-2">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, path)| {
                        view! {
                            <li>
                                <a
                                    class=move || {
                                        if router.current_route().get().to_path() == path {
                                            "active font-semibold"
                                        } else {
                                            ""
                                        }
                                    }
                                    on:click=move |_| router.navigate(path)
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="p-4 flex items-center justify-between">
                <button class="btn btn-ghost btn-sm btn-square" on:click=toggle_theme>
                    <Show
                        when=move || theme.get() == "dark"
                        fallback=|| view! { <Moon class="h-5 w-5" /> }
                    >
                        <Sun class="h-5 w-5" />
                    </Show>
                </button>
                <button class="btn btn-outline btn-error btn-sm gap-2" on:click=on_logout>
                    <LogOut class="h-4 w-4" />
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
