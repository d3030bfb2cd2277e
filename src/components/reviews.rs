//! Review moderation: search matches the comment or the linked book title;
//! the only mutation is a confirmed delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirm::ConfirmDialog;
use crate::components::icons::Trash;
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::list::ListController;
use crate::models::Review;
use crate::session::use_session;

#[component]
pub fn ManageReviews() -> impl IntoView {
    let session = use_session();
    let list: ListController<Review> =
        ListController::new(|review| vec![review.comment.clone(), review.book_title.clone()]);

    let notification = RwSignal::new(Option::<(String, bool)>::None);
    let pending_delete = RwSignal::new(Option::<Review>::None);
    let confirm_open = RwSignal::new(false);

    let api = move || session.state.get_untracked().api.clone();

    let load = move || {
        if let Some(api) = api() {
            let seq = list.begin_fetch();
            spawn_local(async move {
                list.resolve(seq, api.list::<Review>().await);
            });
        }
    };

    Effect::new(move |_| {
        if session.state.get().is_authenticated {
            load();
        }
    });

    let on_delete_confirm = move |()| {
        let (Some(api), Some(review)) = (api(), pending_delete.get_untracked()) else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api.delete::<Review>(&review.id).await {
                Ok(()) => {
                    list.remove_where(|r| r.id == review.id);
                    notification.set(Some(("Review deleted successfully".to_string(), false)));
                }
                Err(e) => {
                    notification.set(Some((format!("Failed to delete review: {e}"), true)));
                }
            }
        });
    };

    view! {
        <div class="py-6 bg-base-100 font-sans p-4 lg:p-8 flex flex-col items-center shadow-lg rounded-lg">
            <Toast notification=notification />

            <div class="w-full">
                <h2 class="text-3xl font-bold">"Manage Reviews"</h2>

                <div class="my-4">
                    <input
                        type="text"
                        placeholder="Search by comment or book title"
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
                            {format!("Failed to load reviews: {err}")}
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
                                        <th>"Comment"</th>
                                        <th>"Rating"</th>
                                        <th>"Book"</th>
                                        <th>"User"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || list.is_empty()>
                                        <tr>
                                            <td colspan="6" class="text-center py-4">
                                                "No reviews found"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || {
                                            list.visible().into_iter().enumerate().collect::<Vec<_>>()
                                        }
                                        key=|(_, review)| review.id.clone()
                                        children=move |(index, review)| {
                                            let delete_target = review.clone();
                                            view! {
                                                <tr class="hover">
                                                    <td>{list.offset() + index + 1}</td>
                                                    <td class="max-w-64 truncate">
                                                        {review.comment.clone()}
                                                    </td>
                                                    <td>{format!("{}/5", review.rating)}</td>
                                                    <td>{review.book_title.clone()}</td>
                                                    <td>{review.username.clone()}</td>
                                                    <td>
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-square text-error"
                                                            title="Delete Review"
                                                            on:click=move |_| {
                                                                pending_delete.set(Some(delete_target.clone()));
                                                                confirm_open.set(true);
                                                            }
                                                        >
                                                            <Trash class="h-4 w-4" />
                                                        </button>
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
                message="Are you sure you want to delete this review?"
                on_confirm=on_delete_confirm
            />
        </div>
    }
}
