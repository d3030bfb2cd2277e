//! Numbered page buttons under each table.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] pages: Signal<usize>,
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { pages.get() > 1 }>
            <div class="join flex justify-center gap-1 mt-4">
                <For
                    each=move || 1..=pages.get()
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class=move || {
                                    if page == current.get() {
                                        "join-item btn btn-sm btn-primary"
                                    } else {
                                        "join-item btn btn-sm"
                                    }
                                }
                                on:click=move |_| on_select.run(page)
                            >
                                {page}
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}
