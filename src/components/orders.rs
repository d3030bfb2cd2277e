//! Order overview: a read-only table, searchable by customer name.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::pagination::Pagination;
use crate::list::ListController;
use crate::models::Order;
use crate::session::use_session;

#[component]
pub fn ManageOrders() -> impl IntoView {
    let session = use_session();
    let list: ListController<Order> = ListController::new(|order| vec![order.user.clone()]);

    let api = move || session.state.get_untracked().api.clone();

    let load = move || {
        if let Some(api) = api() {
            let seq = list.begin_fetch();
            spawn_local(async move {
                list.resolve(seq, api.list::<Order>().await);
            });
        }
    };

    Effect::new(move |_| {
        if session.state.get().is_authenticated {
            load();
        }
    });

    view! {
        <div class="py-6 bg-base-100 font-sans p-4 lg:p-8 flex flex-col items-center shadow-lg rounded-lg">
            <div class="w-full">
                <h2 class="text-3xl font-bold">"Manage Orders"</h2>

                <div class="my-4">
                    <input
                        type="text"
                        placeholder="Search by user"
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
                            {format!("Failed to load orders: {err}")}
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
                                        <th>"User"</th>
                                        <th>"Book"</th>
                                        <th>"Total Amount"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || list.is_empty()>
                                        <tr>
                                            <td colspan="5" class="text-center py-4">
                                                "No orders found"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || {
                                            list.visible().into_iter().enumerate().collect::<Vec<_>>()
                                        }
                                        key=|(_, order)| order.id.clone()
                                        children=move |(index, order)| {
                                            view! {
                                                <tr class="hover">
                                                    <td>{list.offset() + index + 1}</td>
                                                    <td>{order.user.clone()}</td>
                                                    <td>{order.book.clone()}</td>
                                                    <td>{format!("${:.2}", order.total_amount)}</td>
                                                    <td>
                                                        <span class="badge badge-outline">
                                                            {order.status.clone()}
                                                        </span>
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
        </div>
    }
}
