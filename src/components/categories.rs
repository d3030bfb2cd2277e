//! Category management: inline add/edit form (title only, JSON body) above a
//! searchable, paginated table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirm::ConfirmDialog;
use crate::components::icons::{Pencil, Trash};
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::list::ListController;
use crate::models::{Category, CategoryPayload};
use crate::session::use_session;
use crate::validate::{FieldErrors, validate_category};

#[component]
pub fn ManageCategories() -> impl IntoView {
    let session = use_session();
    let list: ListController<Category> =
        ListController::new(|category| vec![category.title.clone()]);

    let notification = RwSignal::new(Option::<(String, bool)>::None);
    let pending_delete = RwSignal::new(Option::<Category>::None);
    let confirm_open = RwSignal::new(false);

    let title = RwSignal::new(String::new());
    let editing_id = RwSignal::new(Option::<String>::None);
    let errors = RwSignal::new(FieldErrors::default());
    let saving = RwSignal::new(false);

    let api = move || session.state.get_untracked().api.clone();

    let load = move || {
        if let Some(api) = api() {
            let seq = list.begin_fetch();
            spawn_local(async move {
                list.resolve(seq, api.list::<Category>().await);
            });
        }
    };

    Effect::new(move |_| {
        if session.state.get().is_authenticated {
            load();
        }
    });

    let reset_form = move || {
        title.set(String::new());
        editing_id.set(None);
        errors.set(FieldErrors::default());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let found = validate_category(&title.get_untracked());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        saving.set(true);

        let Some(api) = api() else {
            saving.set(false);
            return;
        };
        let body = CategoryPayload {
            title: title.get_untracked().trim().to_string(),
        };
        let editing = editing_id.get_untracked();

        spawn_local(async move {
            let result = match editing {
                Some(id) => api.update::<Category, _>(&id, &body).await.map(|_| ()),
                None => api.create::<Category, _>(&body).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    notification.set(Some(("Category saved successfully".to_string(), false)));
                    reset_form();
                    load();
                }
                Err(e) => {
                    notification.set(Some((format!("Failed to save category: {e}"), true)));
                }
            }
            saving.set(false);
        });
    };

    let on_delete_confirm = move |()| {
        let (Some(api), Some(category)) = (api(), pending_delete.get_untracked()) else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api.delete::<Category>(&category.id).await {
                Ok(()) => {
                    list.remove_where(|c| c.id == category.id);
                    notification.set(Some(("Category deleted successfully".to_string(), false)));
                }
                Err(e) => {
                    notification.set(Some((format!("Failed to delete category: {e}"), true)));
                }
            }
        });
    };

    view! {
        <div class="py-6 bg-base-100 font-sans p-4 lg:p-8 flex flex-col items-center shadow-lg rounded-lg">
            <Toast notification=notification />

            <div class="w-full">
                <h2 class="text-3xl font-bold">"Manage Categories"</h2>

                <form class="card bg-base-200 p-4 my-4" on:submit=on_submit>
                    <div class="flex flex-wrap gap-4 items-start">
                        <div class="flex-grow">
                            <input
                                type="text"
                                placeholder="Category title"
                                prop:value=title
                                on:input=move |ev| title.set(event_target_value(&ev))
                                class="input input-bordered w-full"
                            />
                            <Show when=move || errors.with(|e| e.get("title").is_some())>
                                <p class="text-error text-sm mt-1">
                                    {move || {
                                        errors.with(|e| e.get("title").unwrap_or("").to_string())
                                    }}
                                </p>
                            </Show>
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary w-28"
                            disabled=move || saving.get()
                        >
                            {move || {
                                if saving.get() {
                                    view! {
                                        <span class="loading loading-spinner loading-sm"></span>
                                    }
                                        .into_any()
                                } else if editing_id.get().is_some() {
                                    "Update".into_any()
                                } else {
                                    "Add".into_any()
                                }
                            }}
                        </button>
                        <Show when=move || editing_id.get().is_some()>
                            <button type="button" class="btn btn-ghost" on:click=move |_| reset_form()>
                                "Cancel"
                            </button>
                        </Show>
                    </div>
                </form>

                <div class="my-4">
                    <input
                        type="text"
                        placeholder="Search by title"
                        prop:value=move || list.search_term()
                        on:input=move |ev| list.set_search(event_target_value(&ev))
                        class="input input-bordered w-full"
                    />
                </div>
            </div>

            {move || {
                if let Some(err) = list.error() {
                    view! {
                        <div class="alert alert-error w-full">
                            {format!("Failed to load categories: {err}")}
                        </div>
                    }
                        .into_any()
                } else if list.loading() {
                    view! {
                        <div class="flex justify-center py-16">
                            <span class="loading loading-bars loading-lg text-primary"></span>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full mb-3">
                                <thead>
                                    <tr class="text-sm">
                                        <th>"#"</th>
                                        <th>"Title"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || list.is_empty()>
                                        <tr>
                                            <td colspan="3" class="text-center py-4">
                                                "No categories found"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || {
                                            list.visible().into_iter().enumerate().collect::<Vec<_>>()
                                        }
                                        key=|(_, category)| category.id.clone()
                                        children=move |(index, category)| {
                                            let edit_target = category.clone();
                                            let delete_target = category.clone();
                                            view! {
                                                <tr class="hover">
                                                    <td>{list.offset() + index + 1}</td>
                                                    <td>{category.title.clone()}</td>
                                                    <td>
                                                        <div class="flex gap-2">
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-square"
                                                                title="Edit Category"
                                                                on:click=move |_| {
                                                                    editing_id.set(Some(edit_target.id.clone()));
                                                                    title.set(edit_target.title.clone());
                                                                    errors.set(FieldErrors::default());
                                                                }
                                                            >
                                                                <Pencil class="h-4 w-4" />
                                                            </button>
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-square text-error"
                                                                title="Delete Category"
                                                                on:click=move |_| {
                                                                    pending_delete.set(Some(delete_target.clone()));
                                                                    confirm_open.set(true);
                                                                }
                                                            >
                                                                <Trash class="h-4 w-4" />
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                        <Pagination
                            pages=Signal::derive(move || list.pages())
                            current=Signal::derive(move || list.page())
                            on_select=move |page| list.set_page(page)
                        />
                    }
                        .into_any()
                }
            }}

            <ConfirmDialog
                open=confirm_open
                title="Delete Confirmation"
                message="Are you sure you want to delete this category?"
                on_confirm=on_delete_confirm
            />
        </div>
    }
}
