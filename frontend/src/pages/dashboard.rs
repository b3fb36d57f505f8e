// Dashboard - headline stats and the latest order activity
use kofi_admin_shared::config::DASHBOARD_RECENT_ORDERS;
use kofi_admin_shared::format::{birr_fixed, time_of_day};
use kofi_admin_shared::orders::OrderFilter;
use kofi_admin_shared::{DashboardStats, Order, OrderStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::create_order::CreateOrderModal;
use crate::components::AuthContext;
use crate::services;
use crate::utils::{heading_date, now};

fn activity_label(order: &Order) -> &'static str {
    if order.status == OrderStatus::FormSubmitted {
        "New Quote Requested"
    } else {
        "Order Update"
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let stats = use_state(DashboardStats::default);
    let recent = use_state(Vec::<Order>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let creating = use_state(|| false);
    let refresh = use_state(|| 0u32);

    {
        let stats = stats.clone();
        let recent = recent.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*refresh, move |_| {
            loading.set(true);
            spawn_local(async move {
                let api = services::api();
                match api.dashboard_stats().await {
                    Ok(fetched) => stats.set(fetched),
                    Err(err) => {
                        auth.report("loading dashboard stats", &err);
                        error.set(Some(err.message_or("Failed to load dashboard")));
                    }
                }
                match api.orders(1, DASHBOARD_RECENT_ORDERS, OrderFilter::All).await {
                    Ok(page) => recent.set(page.items),
                    Err(err) => auth.report("loading recent orders", &err),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let open_create = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };
    let close_create = {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(false))
    };
    let on_created = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| refresh.set(*refresh + 1))
    };

    html! {
        <div class="space-y-12">
            <div class="flex justify-between items-end border-b border-white/5 pb-8">
                <div>
                    <p class="text-xs font-bold uppercase tracking-widest text-slate-500">{heading_date(now())}</p>
                    <h1 class="text-4xl font-black text-white tracking-tight uppercase italic">{"Analytics Overview"}</h1>
                    <p class="text-slate-500 mt-2 text-sm font-medium">{"Performance insights and atelier activity."}</p>
                </div>
                <button onclick={open_create}
                    class="bg-blue-600 hover:bg-blue-500 text-white px-6 py-3 rounded-xl text-sm font-bold shadow-lg shadow-blue-600/20">
                    {"Create New Order"}
                </button>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="p-4 bg-red-500/10 border border-red-500/20 rounded-2xl text-red-400 text-sm font-bold">{message}</div>
            }

            if *loading {
                <div class="flex items-center justify-center p-20">
                    <div class="w-12 h-12 border-4 border-blue-500 border-t-transparent rounded-full animate-spin" />
                </div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    <StatCard label="Active Orders" value={stats.active_orders_count.to_string()} accent="text-amber-500" />
                    <StatCard label="Pending Quotes" value={stats.pending_quotes_count.to_string()} accent="text-blue-500" />
                    <StatCard
                        label="Total Revenue"
                        value={birr_fixed(stats.total_revenue)}
                        sub={Some(format!("Bal: {}", birr_fixed(stats.balance_due)))}
                        accent="text-emerald-500"
                    />
                    <StatCard label="Rush Orders" value={stats.rush_orders_count.to_string()} accent="text-rose-500" />
                </div>

                <section class="bg-[#1c1c1c] border border-white/5 rounded-2xl p-8">
                    <h2 class="text-lg font-black text-white uppercase italic tracking-tight mb-6">{"High Priority Activity"}</h2>
                    if recent.is_empty() {
                        <p class="text-slate-500 text-sm">{"No recent activity"}</p>
                    } else {
                        <ul class="space-y-4">
                            { for recent.iter().map(|order| {
                                let tone = if order.status == OrderStatus::FormSubmitted {
                                    "text-blue-500 bg-blue-500/10"
                                } else {
                                    "text-emerald-500 bg-emerald-500/10"
                                };
                                html! {
                                    <li key={order.id.clone()} class="flex items-center justify-between p-4 rounded-xl hover:bg-white/5">
                                        <div class="flex items-center gap-4">
                                            <span class={format!("px-3 py-1 rounded-lg text-[10px] font-bold uppercase {}", tone)}>
                                                {activity_label(order)}
                                            </span>
                                            <div>
                                                <p class="text-white font-bold text-sm">
                                                    {format!("{} · {}", order.client_name(), order.type_label())}
                                                </p>
                                                <p class="text-slate-500 text-xs">{order.display_id()}</p>
                                            </div>
                                        </div>
                                        <div class="text-right">
                                            <p class="text-slate-400 text-xs font-bold">{time_of_day(order.created_at.as_deref())}</p>
                                            <p class="text-slate-600 text-[10px] uppercase tracking-widest">{"via Telegram"}</p>
                                        </div>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </section>
            }

            if *creating {
                <CreateOrderModal on_close={close_create} {on_created} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: &'static str,
    pub value: String,
    #[prop_or_default]
    pub sub: Option<String>,
    pub accent: &'static str,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-[#1c1c1c] border border-white/5 rounded-2xl p-6 hover:border-white/10 transition-colors">
            <p class="text-slate-500 text-xs font-bold uppercase tracking-widest">{props.label}</p>
            <p class={format!("text-3xl font-black mt-3 {}", props.accent)}>{props.value.clone()}</p>
            if let Some(sub) = props.sub.clone() {
                <p class="text-slate-500 text-xs mt-1">{sub}</p>
            }
        </div>
    }
}
