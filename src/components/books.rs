//! Book management screen: searchable, paginated table with add/edit modals
//! and confirmed deletes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::book_form::BookForm;
use crate::components::confirm::ConfirmDialog;
use crate::components::icons::{Pencil, Plus, Trash};
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::list::ListController;
use crate::models::Book;
use crate::session::use_session;

#[component]
pub fn ManageBooks() -> impl IntoView {
    let session = use_session();
    let list: ListController<Book> = ListController::new(|book| vec![book.title.clone()]);

    let notification = RwSignal::new(Option::<(String, bool)>::None);
    let editing = RwSignal::new(Option::<Book>::None);
    let show_add = RwSignal::new(false);
    let pending_delete = RwSignal::new(Option::<Book>::None);
    let confirm_open = RwSignal::new(false);

    let api = move || session.state.get_untracked().api.clone();

    let load = move || {
        if let Some(api) = api() {
            let seq = list.begin_fetch();
            spawn_local(async move {
                list.resolve(seq, api.list::<Book>().await);
            });
        }
    };

    Effect::new(move |_| {
        if session.state.get().is_authenticated {
            load();
        }
    });

    // create/update re-fetch the full collection; no optimistic merge
    let on_saved = move |()| {
        show_add.set(false);
        editing.set(None);
        notification.set(Some(("Book saved successfully".to_string(), false)));
        load();
    };

    // delete is optimistic: splice locally, no re-fetch
    let on_delete_confirm = move |()| {
        let (Some(api), Some(book)) = (api(), pending_delete.get_untracked()) else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api.delete::<Book>(&book.id).await {
                Ok(()) => {
                    list.remove_where(|b| b.id == book.id);
                    notification.set(Some(("Book deleted successfully".to_string(), false)));
                }
                Err(e) => {
                    notification.set(Some((format!("Failed to delete book: {e}"), true)));
                }
            }
        });
    };

    view! {
        <div class="py-6 bg-base-100 font-sans p-4 lg:p-8 flex flex-col items-center shadow-lg rounded-lg">
            <Toast notification=notification />

            <div class="w-full">
                <div class="flex flex-wrap justify-between items-center">
                    <h2 class="text-3xl font-bold">"Manage Books"</h2>
                    <button class="btn btn-primary gap-2" on:click=move |_| show_add.set(true)>
                        <Plus class="h-4 w-4" />
                        "Add Book"
                    </button>
                </div>

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
                            {format!("Failed to load books: {err}")}
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
                                        <th>"Description"</th>
                                        <th>"Original"</th>
                                        <th>"Discount"</th>
                                        <th>"Total"</th>
                                        <th>"Category"</th>
                                        <th>"Author"</th>
                                        <th>"Cover"</th>
                                        <th>"PDF"</th>
                                        <th>"Link"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || list.is_empty()>
                                        <tr>
                                            <td colspan="12" class="text-center py-4">
                                                "No books found"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || {
                                            list.visible().into_iter().enumerate().collect::<Vec<_>>()
                                        }
                                        key=|(_, book)| book.id.clone()
                                        children=move |(index, book)| {
                                            let edit_target = book.clone();
                                            let delete_target = book.clone();
                                            view! {
                                                <tr class="hover">
                                                    <td>{list.offset() + index + 1}</td>
                                                    <td class="max-w-28">{book.title.clone()}</td>
                                                    <td class="truncate max-w-48">
                                                        {book.description.clone()}
                                                    </td>
                                                    <td>{format!("${:.2}", book.original_price)}</td>
                                                    <td>{format!("{}%", book.discount_percentage)}</td>
                                                    <td>{format!("${:.2}", book.discounted_price)}</td>
                                                    <td class="max-w-24">{book.category.clone()}</td>
                                                    <td class="max-w-24">{book.author.clone()}</td>
                                                    <td>
                                                        <img
                                                            src=book.cover_image.clone()
                                                            alt="cover"
                                                            class="w-14 min-h-12 object-cover rounded"
                                                        />
                                                    </td>
                                                    <td>
                                                        <a
                                                            href=book.sample_pdf.clone()
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class="link link-primary"
                                                        >
                                                            "Sample"
                                                        </a>
                                                    </td>
                                                    <td>
                                                        <a
                                                            href=book.source_path.clone()
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class="link link-primary"
                                                        >
                                                            "Book"
                                                        </a>
                                                    </td>
                                                    <td>
                                                        <div class="flex gap-2 justify-center">
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-square"
                                                                title="Edit Book"
                                                                on:click=move |_| {
                                                                    editing.set(Some(edit_target.clone()))
                                                                }
                                                            >
                                                                <Pencil class="h-4 w-4" />
                                                            </button>
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-square text-error"
                                                                title="Delete Book"
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

            <Show when=move || show_add.get()>
                <div class="fixed inset-0 flex items-center justify-center bg-black/80 z-30">
                    <div class="p-3 rounded-xl max-w-2xl w-full mx-4">
                        <BookForm on_saved=on_saved on_close=move |()| show_add.set(false) />
                    </div>
                </div>
            </Show>

            {move || {
                editing
                    .get()
                    .map(|book| {
                        view! {
                            <div class="fixed inset-0 flex items-center justify-center bg-black/80 z-30">
                                <div class="p-3 rounded-xl max-w-2xl w-full mx-4">
                                    <BookForm
                                        book=book
                                        on_saved=on_saved
                                        on_close=move |()| editing.set(None)
                                    />
                                </div>
                            </div>
                        }
                    })
            }}

            <ConfirmDialog
                open=confirm_open
                title="Delete Confirmation"
                message="Are you sure you want to delete this book?"
                on_confirm=on_delete_confirm
            />
        </div>
    }
}
