// Orders Page - filterable, searchable order table with detail modal
use gloo_timers::callback::Timeout;
use kofi_admin_shared::config::{ORDERS_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use kofi_admin_shared::debounce::Debouncer;
use kofi_admin_shared::format::short_date;
use kofi_admin_shared::orders::{search_orders, OrderFilter, OrderQuery};
use kofi_admin_shared::{DashboardStats, Order, Page};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::components::create_order::CreateOrderModal;
use crate::components::order_detail::OrderDetailModal;
use crate::components::AuthContext;
use crate::services;
use crate::utils::{input_value, status_badge_class};

#[function_component(OrdersPage)]
pub fn orders_page() -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let stats = use_state(DashboardStats::default);
    // What the controls show, and what was last fetched.
    let query = use_state(|| OrderQuery::new(ORDERS_PAGE_SIZE));
    let fetched = use_state(|| OrderQuery::new(ORDERS_PAGE_SIZE));
    let page = use_state(Page::<Order>::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let selected = use_state(|| None::<String>);
    let creating = use_state(|| false);
    let reload = use_state(|| 0u32);
    let debouncer = use_mut_ref(|| Debouncer::<OrderQuery>::new(SEARCH_DEBOUNCE_MS));
    let timer = use_mut_ref(|| None::<Timeout>);

    {
        let stats = stats.clone();
        let auth = auth.clone();
        use_mount(move || {
            spawn_local(async move {
                match services::api().dashboard_stats().await {
                    Ok(fetched) => stats.set(fetched),
                    Err(err) => auth.report("loading order stats", &err),
                }
            });
        });
    }

    // Every control change restarts the quiet period; only the last value
    // reaches the backend.
    {
        let fetched = fetched.clone();
        let debouncer = debouncer.clone();
        let timer = timer.clone();
        use_effect_with((*query).clone(), move |current| {
            let ticket = debouncer.borrow_mut().push(current.clone());
            let delay = debouncer.borrow().delay_ms();
            let pending = debouncer.clone();
            *timer.borrow_mut() = Some(Timeout::new(delay, move || {
                if let Some(ready) = pending.borrow_mut().fire(ticket) {
                    fetched.set(ready);
                }
            }));
            move || {
                timer.borrow_mut().take();
                debouncer.borrow_mut().cancel();
            }
        });
    }

    {
        let page = page.clone();
        let loading = loading.clone();
        let error = error.clone();
        let auth = auth.clone();
        use_effect_with(((*fetched).clone(), *reload), move |(current, _)| {
            let current = current.clone();
            loading.set(true);
            spawn_local(async move {
                let result = services::api()
                    .orders(current.pager.page, current.pager.limit, current.filter)
                    .await;
                match result {
                    Ok(fresh) => {
                        error.set(None);
                        page.set(fresh);
                    }
                    Err(err) => {
                        auth.report("loading orders", &err);
                        error.set(Some(err.message_or("Failed to load orders")));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let pager = query.pager.with_total(page.total);
    let visible = search_orders(page.items.clone(), &fetched.search);

    let on_filter = |filter: OrderFilter| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set(query.with_filter(filter)))
    };
    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| query.set(query.with_search(input_value(&e))))
    };
    let on_previous = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set(query.with_pager(pager.previous())))
    };
    let on_next = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set(query.with_pager(pager.next())))
    };
    let open = |id: String| {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(id.clone())))
    };
    let close_detail = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };
    let on_updated = {
        let page = page.clone();
        Callback::from(move |updated: Order| {
            let mut next = (*page).clone();
            if let Some(slot) = next.items.iter_mut().find(|o| o.id == updated.id) {
                *slot = updated;
            }
            page.set(next);
        })
    };
    let toggle_create = |open: bool| {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(open))
    };
    let on_created = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let first_shown = if visible.is_empty() { 0 } else { u64::from(pager.page - 1) * u64::from(pager.limit) + 1 };
    let last_shown = (u64::from(pager.page) * u64::from(pager.limit)).min(pager.total);

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-end">
                <div>
                    <h1 class="text-4xl font-black text-white tracking-tight uppercase italic">{"Order Management"}</h1>
                    <p class="text-slate-500 mt-2 text-sm">{"Track every commission from quote to delivery."}</p>
                </div>
                <button onclick={toggle_create(true).reform(|_: MouseEvent| ())}
                    class="bg-blue-600 hover:bg-blue-500 text-white px-6 py-3 rounded-xl text-sm font-bold">
                    {"New Order"}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="bg-[#1c1c1c] border border-white/5 rounded-2xl p-6">
                    <p class="text-slate-500 text-xs font-bold uppercase tracking-widest">{"Urgent (Rush)"}</p>
                    <p class="text-3xl font-black text-rose-500 mt-2">{stats.rush_orders_count.to_string()}</p>
                </div>
                <div class="bg-[#1c1c1c] border border-white/5 rounded-2xl p-6">
                    <p class="text-slate-500 text-xs font-bold uppercase tracking-widest">{"Ready to Ship"}</p>
                    <p class="text-3xl font-black text-emerald-500 mt-2">{stats.ready_orders_count.to_string()}</p>
                </div>
            </div>

            <div class="bg-[#1c1c1c] border border-white/5 rounded-2xl overflow-hidden">
                <div class="p-4 border-b border-white/5 flex flex-col md:flex-row gap-4 justify-between">
                    <div class="flex gap-2">
                        { for OrderFilter::TABS.iter().map(|filter| {
                            let class = if query.filter == *filter {
                                "bg-blue-600 text-white"
                            } else {
                                "text-slate-400 hover:bg-white/5 hover:text-white"
                            };
                            html! {
                                <button onclick={on_filter(*filter)}
                                    class={format!("px-4 py-2 rounded-lg text-sm font-bold {}", class)}>
                                    {filter.label()}
                                </button>
                            }
                        }) }
                    </div>
                    <input
                        type="text"
                        placeholder="Search Order ID or Telegram ID..."
                        class="w-full md:w-80 bg-[#0f172a]/50 border border-white/10 rounded-xl px-4 py-2 text-sm text-white placeholder-slate-600 focus:outline-none focus:border-blue-500/50"
                        value={query.search.clone()}
                        oninput={on_search}
                    />
                </div>

                if let Some(message) = (*error).clone() {
                    <div class="px-6 py-3 bg-red-500/10 text-red-400 text-sm font-bold">{message}</div>
                }

                <table class="w-full text-left">
                    <thead class="text-[10px] uppercase tracking-widest text-slate-500 border-b border-white/5">
                        <tr>
                            <th class="px-6 py-4">{"Order"}</th>
                            <th class="px-6 py-4">{"Client"}</th>
                            <th class="px-6 py-4">{"Type"}</th>
                            <th class="px-6 py-4">{"Deadline"}</th>
                            <th class="px-6 py-4">{"Status"}</th>
                            <th class="px-6 py-4">{"Revisions"}</th>
                            <th class="px-6 py-4"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-white/5">
                        if *loading {
                            <tr><td colspan="7" class="px-6 py-12 text-center text-slate-500">{"Loading orders..."}</td></tr>
                        } else if visible.is_empty() {
                            <tr><td colspan="7" class="px-6 py-12 text-center text-slate-500">{"No orders found"}</td></tr>
                        } else {
                            { for visible.iter().map(|order| html! {
                                <tr key={order.id.clone()} class="hover:bg-white/[0.02]">
                                    <td class="px-6 py-4">
                                        <span class="text-white font-bold text-sm">{order.display_id()}</span>
                                        if order.is_rush() {
                                            <span class="ml-2 px-2 py-0.5 rounded-full text-[10px] font-bold bg-red-500/10 text-red-400">{"RUSH"}</span>
                                        }
                                    </td>
                                    <td class="px-6 py-4">
                                        <p class="text-white text-sm font-medium">{order.client_name().to_string()}</p>
                                        <p class="text-slate-500 text-xs">{order.telegram_handle()}</p>
                                    </td>
                                    <td class="px-6 py-4 text-slate-300 text-sm">{order.type_label()}</td>
                                    <td class="px-6 py-4 text-slate-300 text-sm">{short_date(order.event_date.as_deref())}</td>
                                    <td class="px-6 py-4">
                                        <span class={format!("px-2 py-1 rounded-full text-[10px] font-bold uppercase border {}", status_badge_class(&order.status))}>
                                            {order.status.list_label()}
                                        </span>
                                    </td>
                                    <td class="px-6 py-4 text-slate-400 text-sm">{order.revision_count.to_string()}</td>
                                    <td class="px-6 py-4 text-right">
                                        <button onclick={open(order.id.clone())}
                                            class="px-3 py-1.5 rounded-lg text-xs font-bold text-slate-400 hover:bg-white/10 hover:text-white">
                                            {"View"}
                                        </button>
                                    </td>
                                </tr>
                            }) }
                        }
                    </tbody>
                </table>

                <div class="px-6 py-4 border-t border-white/5 flex items-center justify-between">
                    <p class="text-sm text-slate-500">
                        {format!("Showing {} to {} of {} results", first_shown, last_shown, pager.total)}
                    </p>
                    <div class="flex gap-2">
                        <button onclick={on_previous} disabled={!pager.has_previous()}
                            class="px-3 py-1.5 text-sm text-slate-400 hover:text-white disabled:opacity-50">
                            {"Previous"}
                        </button>
                        <span class="px-3 py-1.5 text-sm text-white font-bold">{pager.page.to_string()}</span>
                        <button onclick={on_next} disabled={!pager.has_next()}
                            class="px-3 py-1.5 text-sm text-slate-400 hover:text-white disabled:opacity-50">
                            {"Next"}
                        </button>
                    </div>
                </div>
            </div>

            if let Some(id) = (*selected).clone() {
                <OrderDetailModal order_id={id} on_close={close_detail} {on_updated} />
            }
            if *creating {
                <CreateOrderModal on_close={toggle_create(false)} {on_created} />
            }
        </div>
    }
}
