//! Add/edit book modal.
//!
//! One signal per entity attribute, reference lists (authors, categories)
//! fetched once on mount, file checks on selection, full validation at
//! submit, multipart upload. On edit, omitted files keep the existing
//! uploads.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Multipart;
use crate::error::ApiError;
use crate::models::{Author, Book, Category};
use crate::session::use_session;
use crate::validate::{BookDraft, FieldErrors, FileKind, check_file, validate_book};

/// Per-change check for a file input: reject bad MIME or oversize on the
/// spot and only store an accepted file in the slot.
fn file_handler(
    field: &'static str,
    kind: FileKind,
    slot: RwSignal<Option<web_sys::File>, LocalStorage>,
    errors: RwSignal<FieldErrors>,
) -> impl FnMut(web_sys::Event) {
    move |ev| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        match check_file(kind, &file.type_(), file.size() as u64) {
            Ok(()) => {
                errors.update(|e| e.clear_field(field));
                slot.set(Some(file));
            }
            Err(msg) => errors.update(|e| e.insert(field, msg)),
        }
    }
}

#[component]
pub fn BookForm(
    /// Present when editing, absent when creating.
    #[prop(into, optional)]
    book: Option<Book>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let is_edit = book.is_some();
    let book_id = StoredValue::new(book.as_ref().map(|b| b.id.clone()));
    let initial = book.unwrap_or_default();

    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let price = RwSignal::new(if is_edit {
        initial.original_price.to_string()
    } else {
        String::new()
    });
    let discount = RwSignal::new(if is_edit {
        initial.discount_percentage.to_string()
    } else {
        "0".to_string()
    });
    let category = RwSignal::new(initial.category);
    let author = RwSignal::new(initial.author);

    let source = RwSignal::new_local(Option::<web_sys::File>::None);
    let cover = RwSignal::new_local(Option::<web_sys::File>::None);
    let sample = RwSignal::new_local(Option::<web_sys::File>::None);

    let errors = RwSignal::new(FieldErrors::default());
    let submit_error = RwSignal::new(Option::<String>::None);
    let uploading = RwSignal::new(false);

    let categories = RwSignal::new(Vec::<Category>::new());
    let authors = RwSignal::new(Vec::<Author>::new());

    // reference lists, fetched once on mount
    Effect::new(move |_| {
        let Some(api) = session.state.get_untracked().api.clone() else {
            return;
        };
        spawn_local(async move {
            if let Ok(list) = api.list::<Category>().await {
                categories.set(list);
            }
            if let Ok(list) = api.list::<Author>().await {
                authors.set(list);
            }
        });
    });

    let field_error = move |field: &'static str| {
        view! {
            <Show when=move || errors.with(|e| e.get(field).is_some())>
                <p class="text-error text-sm mt-1">
                    {move || errors.with(|e| e.get(field).unwrap_or("").to_string())}
                </p>
            </Show>
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = BookDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            discount: discount.get_untracked(),
            category: category.get_untracked(),
            author: author.get_untracked(),
            has_source: source.with_untracked(|f| f.is_some()),
            has_cover: cover.with_untracked(|f| f.is_some()),
            has_sample: sample.with_untracked(|f| f.is_some()),
            require_files: !is_edit,
        };

        let found = validate_book(&draft);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        submit_error.set(None);
        uploading.set(true);

        let build = move || -> Result<Multipart, ApiError> {
            let form = Multipart::new()?;
            form.text("title", draft.title.trim())?;
            form.text("description", draft.description.trim())?;
            form.text("originalPrice", draft.price.trim())?;
            let discount = draft.discount.trim();
            form.text(
                "discountPercentage",
                if discount.is_empty() { "0" } else { discount },
            )?;
            form.text("category", &draft.category)?;
            form.text("author", &draft.author)?;
            if let Some(file) = source.get_untracked() {
                form.file("sourcePath", &file)?;
            }
            if let Some(file) = cover.get_untracked() {
                form.file("coverImage", &file)?;
            }
            if let Some(file) = sample.get_untracked() {
                form.file("samplePdf", &file)?;
            }
            Ok(form)
        };

        let form = match build() {
            Ok(form) => form,
            Err(e) => {
                submit_error.set(Some(e.to_string()));
                uploading.set(false);
                return;
            }
        };

        let Some(api) = session.state.get_untracked().api.clone() else {
            uploading.set(false);
            return;
        };

        spawn_local(async move {
            let result = match book_id.get_value() {
                Some(id) => api.update_multipart::<Book>(&id, form).await.map(|_| ()),
                None => api.create_multipart::<Book>(form).await.map(|_| ()),
            };
            match result {
                // parent re-fetches and closes; entered values are gone with
                // the modal
                Ok(()) => on_saved.run(()),
                // form stays open with entered values intact
                Err(e) => submit_error.set(Some(e.to_string())),
            }
            uploading.set(false);
        });
    };

    view! {
        <div class="bg-base-100 rounded-xl p-8 w-full shadow-2xl">
            <form on:submit=on_submit>
                <h2 class="text-3xl text-center font-bold mb-5">
                    {if is_edit { "Edit Book" } else { "Add a New Book" }}
                </h2>

                <Show when=move || submit_error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2 mb-4">
                        <span>{move || submit_error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <input
                            type="text"
                            placeholder="Title"
                            prop:value=title
                            on:input=move |ev| title.set(event_target_value(&ev))
                            class="input input-bordered w-full"
                        />
                        {field_error("title")}
                    </div>

                    <div>
                        <input
                            type="number"
                            placeholder="Price"
                            prop:value=price
                            on:input=move |ev| price.set(event_target_value(&ev))
                            class="input input-bordered w-full"
                        />
                        {field_error("price")}
                    </div>

                    <div>
                        <input
                            type="number"
                            placeholder="Discount Percentage"
                            prop:value=discount
                            on:input=move |ev| discount.set(event_target_value(&ev))
                            class="input input-bordered w-full"
                        />
                        {field_error("discount")}
                    </div>

                    <div>
                        <select
                            class="select select-bordered w-full"
                            prop:value=category
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            <option value="">"Select Category"</option>
                            <For
                                each=move || categories.get()
                                key=|c| c.id.clone()
                                children=move |c: Category| {
                                    let value = c.title.clone();
                                    let is_selected = {
                                        let value = value.clone();
                                        move || category.get() == value
                                    };
                                    view! {
                                        <option value=value selected=is_selected>
                                            {c.title.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        {field_error("category")}
                    </div>

                    <div>
                        <select
                            class="select select-bordered w-full"
                            prop:value=author
                            on:change=move |ev| author.set(event_target_value(&ev))
                        >
                            <option value="">"Select Author"</option>
                            <For
                                each=move || authors.get()
                                key=|a| a.id.clone()
                                children=move |a: Author| {
                                    let value = a.name.clone();
                                    let is_selected = {
                                        let value = value.clone();
                                        move || author.get() == value
                                    };
                                    view! {
                                        <option value=value selected=is_selected>
                                            {a.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        {field_error("author")}
                    </div>

                    <div class="md:col-span-2">
                        <textarea
                            placeholder="Description"
                            prop:value=description
                            on:input=move |ev| description.set(event_target_value(&ev))
                            class="textarea textarea-bordered w-full resize-none h-24"
                        ></textarea>
                        {field_error("description")}
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-6">
                    <div>
                        <label class="block mb-2" for="sourcePath">
                            "The Full Book"
                        </label>
                        <input
                            id="sourcePath"
                            type="file"
                            accept="application/pdf"
                            on:change=file_handler("sourcePath", FileKind::Pdf, source, errors)
                            class="file-input w-full"
                        />
                        {field_error("sourcePath")}
                    </div>

                    <div>
                        <label class="block mb-2" for="samplePdf">
                            "Sample"
                        </label>
                        <input
                            id="samplePdf"
                            type="file"
                            accept="application/pdf"
                            on:change=file_handler("samplePdf", FileKind::Pdf, sample, errors)
                            class="file-input w-full"
                        />
                        {field_error("samplePdf")}
                    </div>

                    <div>
                        <label class="block mb-2" for="coverImage">
                            "Cover"
                        </label>
                        <input
                            id="coverImage"
                            type="file"
                            accept="image/*"
                            on:change=file_handler("coverImage", FileKind::Image, cover, errors)
                            class="file-input w-full"
                        />
                        {field_error("coverImage")}
                    </div>
                </div>

                <div class="flex justify-center gap-2 mt-6">
                    <button
                        type="button"
                        class="btn btn-ghost w-28"
                        on:click=move |_| on_close.run(())
                    >
                        "Close"
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary w-28"
                        disabled=move || uploading.get()
                    >
                        {move || {
                            if uploading.get() {
                                view! {
                                    <span class="loading loading-spinner loading-sm"></span>
                                    "Uploading..."
                                }
                                    .into_any()
                            } else if is_edit {
                                "Update".into_any()
                            } else {
                                "Add".into_any()
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
