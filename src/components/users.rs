//! User management: block/unblock toggle (optimistic patch) and confirmed
//! delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirm::ConfirmDialog;
use crate::components::icons::{Ban, Check, Trash};
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::list::ListController;
use crate::models::User;
use crate::session::use_session;

#[component]
pub fn ManageUsers() -> impl IntoView {
    let session = use_session();
    let list: ListController<User> = ListController::new(|user| vec![user.username.clone()]);

    let notification = RwSignal::new(Option::<(String, bool)>::None);
    let pending_delete = RwSignal::new(Option::<User>::None);
    let confirm_open = RwSignal::new(false);
    // id of the user whose status toggle is in flight; its control is
    // disabled until the call resolves
    let toggling = RwSignal::new(Option::<String>::None);

    let api = move || session.state.get_untracked().api.clone();

    let load = move || {
        if let Some(api) = api() {
            let seq = list.begin_fetch();
            spawn_local(async move {
                list.resolve(seq, api.list::<User>().await);
            });
        }
    };

    Effect::new(move |_| {
        if session.state.get().is_authenticated {
            load();
        }
    });

    let on_toggle_status = move |id: String, new_status: bool| {
        let Some(api) = api() else { return };
        toggling.set(Some(id.clone()));
        spawn_local(async move {
            match api.set_user_status(&id, new_status).await {
                Ok(()) => {
                    // optimistic local patch, no re-fetch
                    list.patch_where(|u| u.id == id, |u| u.status = new_status);
                    let label = if new_status { "active" } else { "blocked" };
                    notification.set(Some((format!("User status updated to {label}"), false)));
                }
                Err(e) => {
                    notification.set(Some((format!("Failed to update user status: {e}"), true)));
                }
            }
            toggling.set(None);
        });
    };

    let on_delete_confirm = move |()| {
        let (Some(api), Some(user)) = (api(), pending_delete.get_untracked()) else {
            return;
        };
        pending_delete.set(None);
        spawn_local(async move {
            match api.delete::<User>(&user.id).await {
                Ok(()) => {
                    list.remove_where(|u| u.id == user.id);
                    notification.set(Some(("User deleted successfully".to_string(), false)));
                }
                Err(e) => {
                    notification.set(Some((format!("Failed to delete user: {e}"), true)));
                }
            }
        });
    };

    view! {
        <div class="py-6 bg-base-100 font-sans p-4 lg:p-8 flex flex-col items-center shadow-lg rounded-lg">
            <Toast notification=notification />

            <div class="w-full">
                <h2 class="text-3xl font-bold">"Manage Users"</h2>

                <div class="my-4">
                    <input
                        type="text"
                        placeholder="Search by username"
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
                            {format!("Failed to load users: {err}")}
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
                                        <th>"Username"</th>
                                        <th>"Email"</th>
                                        <th>"Status"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || list.is_empty()>
                                        <tr>
                                            <td colspan="5" class="text-center py-4">
                                                "No users found"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || {
                                            list.visible().into_iter().enumerate().collect::<Vec<_>>()
                                        }
                                        key=|(_, user)| (user.id.clone(), user.status)
                                        children=move |(index, user)| {
                                            let toggle_id = user.id.clone();
                                            let busy_id = user.id.clone();
                                            let delete_target = user.clone();
                                            let status = user.status;
                                            view! {
                                                <tr class="hover">
                                                    <td>{list.offset() + index + 1}</td>
                                                    <td>{user.username.clone()}</td>
                                                    <td>{user.email.clone()}</td>
                                                    <td>
                                                        <span class=move || {
                                                            if status {
                                                                "badge badge-success"
                                                            } else {
                                                                "badge badge-error"
                                                            }
                                                        }>
                                                            {if status { "active" } else { "blocked" }}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <div class="flex gap-2">
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-square"
                                                                title=if status { "Block User" } else { "Unblock User" }
                                                                disabled=move || {
                                                                    toggling.get().as_deref() == Some(busy_id.as_str())
                                                                }
                                                                on:click=move |_| {
                                                                    on_toggle_status(toggle_id.clone(), !status)
                                                                }
                                                            >
                                                                <Show
                                                                    when=move || status
                                                                    fallback=|| view! { <Check class="h-5 w-5" /> }
                                                                >
                                                                    <Ban class="h-5 w-5" />
                                                                </Show>
                                                            </button>
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-square text-error"
                                                                title="Delete User"
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
                message="Are you sure you want to delete this user?"
                on_confirm=on_delete_confirm
            />
        </div>
    }
}
