//! Author management: inline add/edit form (name + portrait image) above a
//! searchable, paginated table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Multipart;
use crate::components::confirm::ConfirmDialog;
use crate::components::icons::{Pencil, Trash};
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::error::ApiError;
use crate::list::ListController;
use crate::models::Author;
use crate::session::use_session;
use crate::validate::{FieldErrors, FileKind, check_file, validate_author};

#[component]
pub fn ManageAuthors() -> impl IntoView {
    let session = use_session();
    let list: ListController<Author> = ListController::new(|author| vec![author.name.clone()]);

    let notification = RwSignal::new(Option::<(String, bool)>::None);
    let pending_delete = RwSignal::new(Option::<Author>::None);
    let confirm_open = RwSignal::new(false);

    // inline form state
    let name = RwSignal::new(String::new());
    let image = RwSignal::new_local(Option::<web_sys::File>::None);
    let editing_id = RwSignal::new(Option::<String>::None);
    let errors = RwSignal::new(FieldErrors::default());
    let saving = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let api = move || session.state.get_untracked().api.clone();

    let load = move || {
        if let Some(api) = api() {
            let seq = list.begin_fetch();
            spawn_local(async move {
                list.resolve(seq, api.list::<Author>().await);
            });
        }
    };

    Effect::new(move |_| {
        if session.state.get().is_authenticated {
            load();
        }
    });

    let reset_form = move || {
        name.set(String::new());
        image.set(None);
        editing_id.set(None);
        errors.set(FieldErrors::default());
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let on_image_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        match check_file(FileKind::Image, &file.type_(), file.size() as u64) {
            Ok(()) => {
                errors.update(|e| e.clear_field("image"));
                image.set(Some(file));
            }
            Err(msg) => errors.update(|e| e.insert("image", msg)),
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let editing = editing_id.get_untracked();
        // other authors' names, for the uniqueness check
        let existing: Vec<String> = list
            .all_untracked()
            .into_iter()
            .filter(|author| editing.as_deref() != Some(author.id.as_str()))
            .map(|author| author.name)
            .collect();

        let found = validate_author(
            &name.get_untracked(),
            image.with_untracked(|f| f.is_some()),
            editing.is_none(),
            &existing,
        );
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        saving.set(true);

        let build = move || -> Result<Multipart, ApiError> {
            let form = Multipart::new()?;
            form.text("name", name.get_untracked().trim())?;
            if let Some(file) = image.get_untracked() {
                form.file("image", &file)?;
            }
            Ok(form)
        };

        let form = match build() {
            Ok(form) => form,
            Err(e) => {
                notification.set(Some((e.to_string(), true)));
                saving.set(false);
                return;
            }
        };

        let Some(api) = api() else {
            saving.set(false);
            return;
        };

        spawn_local(async move {
            let result = match editing {
                Some(id) => api.update_multipart::<Author>(&id, form).await.map(|_| ()),
                None => api.create_multipart::<Author>(form).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    notification.set(Some(("Author saved successfully".to_string(), false)));
                    reset_form();
                    load();
                }
                Err(e) => {
                    notification.set(Some((format!("Failed to save author: {e}"), true)));
                }
            }
            saving.set(false);
        });
    };

    let on_delete_confirm = move |()| {
        let (Some(api), Some(author)) = (api(), pending_delete.get_untracked()) else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api.delete::<Author>(&author.id).await {
                Ok(()) => {
                    list.remove_where(|a| a.id == author.id);
                    notification.set(Some(("Author deleted successfully".to_string(), false)));
                }
                Err(e) => {
                    notification.set(Some((format!("Failed to delete author: {e}"), true)));
                }
            }
        });
    };

    view! {
        <div class="py-6 bg-base-100 font-sans p-4 lg:p-8 flex flex-col items-center shadow-lg rounded-lg">
            <Toast notification=notification />

            <div class="w-full">
                <h2 class="text-3xl font-bold">"Manage Authors"</h2>

                <form class="card bg-base-200 p-4 my-4 space-y-2" on:submit=on_submit>
                    <div class="flex flex-wrap gap-4 items-start">
                        <div class="flex-grow">
                            <input
                                type="text"
                                placeholder="Author name"
                                prop:value=name
                                on:input=move |ev| name.set(event_target_value(&ev))
                                class="input input-bordered w-full"
                            />
                            <Show when=move || errors.with(|e| e.get("name").is_some())>
                                <p class="text-error text-sm mt-1">
                                    {move || {
                                        errors.with(|e| e.get("name").unwrap_or("").to_string())
                                    }}
                                </p>
                            </Show>
                        </div>
                        <div class="flex-grow">
                            <input
                                type="file"
                                accept="image/*"
                                node_ref=file_input
                                on:change=on_image_change
                                class="file-input w-full"
                            />
                            <Show when=move || errors.with(|e| e.get("image").is_some())>
                                <p class="text-error text-sm mt-1">
                                    {move || {
                                        errors.with(|e| e.get("image").unwrap_or("").to_string())
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
                        placeholder="Search by name"
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
                            {format!("Failed to load authors: {err}")}
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
                                        <th>"Name"</th>
                                        <th>"Image"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || list.is_empty()>
                                        <tr>
                                            <td colspan="4" class="text-center py-4">
                                                "No authors found"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || {
                                            list.visible().into_iter().enumerate().collect::<Vec<_>>()
                                        }
                                        key=|(_, author)| author.id.clone()
                                        children=move |(index, author)| {
                                            let edit_target = author.clone();
                                            let delete_target = author.clone();
                                            view! {
                                                <tr class="hover">
                                                    <td>{list.offset() + index + 1}</td>
                                                    <td>{author.name.clone()}</td>
                                                    <td>
                                                        <img
                                                            src=author.image.clone()
                                                            alt="author"
                                                            class="w-12 h-12 object-cover rounded-full"
                                                        />
                                                    </td>
                                                    <td>
                                                        <div class="flex gap-2">
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-square"
                                                                title="Edit Author"
                                                                on:click=move |_| {
                                                                    editing_id.set(Some(edit_target.id.clone()));
                                                                    name.set(edit_target.name.clone());
                                                                    image.set(None);
                                                                    errors.set(FieldErrors::default());
                                                                }
                                                            >
                                                                <Pencil class="h-4 w-4" />
                                                            </button>
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-square text-error"
                                                                title="Delete Author"
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
                message="Are you sure you want to delete this author?"
                on_confirm=on_delete_confirm
            />
        </div>
    }
}
