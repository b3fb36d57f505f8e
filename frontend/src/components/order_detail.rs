use kofi_admin_shared::collections::media_url;
use kofi_admin_shared::format::{birr, long_date};
use kofi_admin_shared::lifecycle::{parse_quote, OrderStatus, StatusAction};
use kofi_admin_shared::models::{CollectionRef, Order};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::AuthContext;
use crate::pages::revisions::RevisionLog;
use crate::services;
use crate::utils::{input_value, status_badge_class};

#[derive(Properties, PartialEq)]
pub struct OrderDetailProps {
    pub order_id: String,
    pub on_close: Callback<()>,
    /// Fired with the server's copy after a successful status change.
    #[prop_or_default]
    pub on_updated: Callback<Order>,
}

fn action_class(action: &StatusAction) -> &'static str {
    match action {
        StatusAction::SendQuote => "bg-blue-600 hover:bg-blue-500 shadow-blue-600/20",
        StatusAction::ConfirmDeposit => "bg-emerald-600 hover:bg-emerald-500 shadow-emerald-900/20",
        StatusAction::Advance(OrderStatus::InProgress) => "bg-amber-600 hover:bg-amber-500 shadow-amber-900/20",
        StatusAction::Advance(OrderStatus::Ready) => "bg-purple-600 hover:bg-purple-500 shadow-purple-900/20",
        StatusAction::Advance(_) => "bg-green-600 hover:bg-green-500 shadow-green-900/20",
    }
}

#[function_component(OrderDetailModal)]
pub fn order_detail_modal(props: &OrderDetailProps) -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let order = use_state(|| None::<Order>);
    let loading = use_state(|| true);
    let quote = use_state(String::new);
    let acting = use_state(|| false);
    let action_error = use_state(|| None::<String>);

    {
        let order = order.clone();
        let loading = loading.clone();
        let quote = quote.clone();
        let auth = auth.clone();
        use_effect_with(props.order_id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            spawn_local(async move {
                match services::api().order(&id).await {
                    Ok(fetched) => {
                        quote.set(fetched.base_price.map(|p| p.to_string()).unwrap_or_default());
                        order.set(Some(fetched));
                    }
                    Err(err) => {
                        auth.report("loading order", &err);
                        order.set(None);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_quote_input = {
        let quote = quote.clone();
        Callback::from(move |e: InputEvent| quote.set(input_value(&e)))
    };

    let run_action = {
        let order = order.clone();
        let quote = quote.clone();
        let acting = acting.clone();
        let action_error = action_error.clone();
        let on_updated = props.on_updated.clone();
        let auth = auth.clone();
        Callback::from(move |action: StatusAction| {
            let Some(current) = (*order).clone() else {
                return;
            };
            // `perform` refuses a missing or non-positive quote with a message.
            let price = parse_quote(&quote);
            acting.set(true);
            action_error.set(None);

            let order = order.clone();
            let acting = acting.clone();
            let action_error = action_error.clone();
            let on_updated = on_updated.clone();
            let auth = auth.clone();
            spawn_local(async move {
                match services::api().perform(&current.id, &action, price).await {
                    Ok(updated) => {
                        tracing::info!(order = %updated.display_id(), status = %updated.status, "order status changed");
                        order.set(Some(updated.clone()));
                        on_updated.emit(updated);
                    }
                    Err(err) => {
                        auth.report(action.label(), &err);
                        action_error.set(Some(err.message_or("Could not update the order")));
                    }
                }
                acting.set(false);
            });
        })
    };

    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/70 backdrop-blur-sm" onclick={close.clone()} />

            <div class="relative bg-[#0f172a] border border-white/10 rounded-2xl w-full max-w-3xl max-h-[90vh] overflow-hidden shadow-2xl">
                <div class="px-6 py-4 border-b border-white/10 flex items-center justify-between bg-[#1c1c1c]">
                    <div>
                        <h2 class="font-bold text-white text-lg">
                            {format!("Order {}", (*order).as_ref().map(|o| o.display_id()).unwrap_or_else(|| "Loading...".to_string()))}
                        </h2>
                        if let Some(o) = (*order).as_ref() {
                            <span class={format!("inline-flex px-2 py-0.5 rounded-full text-[10px] font-medium border mt-1 {}", status_badge_class(&o.status))}>
                                {o.status.badge_label()}
                            </span>
                        }
                    </div>
                    <button onclick={close} class="p-2 hover:bg-white/10 rounded-lg text-slate-400 hover:text-white">{"✕"}</button>
                </div>

                <div class="p-6 overflow-y-auto max-h-[calc(90vh-80px)]">
                    if *loading {
                        <div class="flex items-center justify-center p-12">
                            <div class="w-10 h-10 border-4 border-blue-500 border-t-transparent rounded-full animate-spin" />
                        </div>
                    } else if let Some(o) = (*order).as_ref() {
                        <div class="space-y-6">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <ClientCard order={o.clone()} />
                                <ReferencePhoto order={o.clone()} />
                            </div>

                            <OrderFacts order={o.clone()} />

                            <div class="bg-[#1c1c1c] border border-white/5 rounded-xl p-5">
                                <h3 class="text-xs font-bold text-slate-500 uppercase tracking-widest mb-4">{"Pricing Engine"}</h3>
                                if o.status == OrderStatus::FormSubmitted {
                                    <div class="mb-4">
                                        <label class="text-xs text-slate-500 mb-1 block">{"Base Price (Birr)"}</label>
                                        <input
                                            type="number" min="0" placeholder="Enter base price"
                                            class="w-full bg-slate-900 border border-white/10 rounded-lg py-2 px-3 text-white focus:outline-none focus:border-blue-500"
                                            value={(*quote).clone()}
                                            oninput={on_quote_input}
                                        />
                                    </div>
                                } else {
                                    <div class="grid grid-cols-3 gap-4 mb-6">
                                        <PriceFigure label="Base Price" value={birr(o.base_price)} />
                                        <PriceFigure label="Total" value={birr(o.total_price)} />
                                        <PriceFigure label="Deposit (30%)" value={birr(o.deposit_amount)} />
                                    </div>
                                }

                                if let Some(action) = o.status.action() {
                                    <button
                                        disabled={*acting}
                                        onclick={run_action.reform({
                                            let action = action.clone();
                                            move |_: MouseEvent| action.clone()
                                        })}
                                        class={format!("w-full text-white font-bold py-3 rounded-xl transition-all shadow-lg disabled:opacity-50 {}", action_class(&action))}
                                    >
                                        {if *acting { "Working..." } else { action.label() }}
                                    </button>
                                }

                                if let Some(error) = (*action_error).clone() {
                                    <p class="mt-3 text-xs font-bold text-red-400">{error}</p>
                                }
                            </div>

                            <div class="bg-[#1c1c1c] border border-white/5 rounded-xl p-5">
                                <h3 class="text-xs font-bold text-slate-500 uppercase tracking-widest mb-4">
                                    {format!("Revisions ({})", o.revision_count)}
                                </h3>
                                <RevisionLog order_id={Some(o.id.clone())} />
                            </div>

                            <div class="flex items-center gap-4 text-xs text-slate-500 pt-4 border-t border-white/5">
                                <span>{format!("Created: {}", long_date(o.created_at.as_deref()))}</span>
                                <span>{format!("Updated: {}", long_date(o.updated_at.as_deref()))}</span>
                            </div>
                        </div>
                    } else {
                        <div class="text-center text-slate-500 p-12">{"Order not found"}</div>
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct OrderProps {
    order: Order,
}

#[function_component(ClientCard)]
fn client_card(props: &OrderProps) -> Html {
    let order = &props.order;
    let profile = order.client_profile.clone().unwrap_or_default();
    let initial = order.client_name().chars().next().unwrap_or('?');

    html! {
        <div class="bg-[#1c1c1c] border border-white/5 rounded-xl p-5 space-y-4">
            <h3 class="text-xs font-bold text-slate-500 uppercase tracking-widest">{"Client Information"}</h3>
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 rounded-full bg-blue-500/10 flex items-center justify-center">
                    <span class="text-blue-400 font-bold">{initial.to_string()}</span>
                </div>
                <div>
                    <p class="font-bold text-white">{order.client_name()}</p>
                    <p class="text-xs text-slate-500">{order.telegram_handle()}</p>
                </div>
            </div>
            <p class="text-sm text-slate-400">{profile.phone_number.unwrap_or_default()}</p>
            <p class="text-sm text-slate-400">{profile.city.unwrap_or_default()}</p>
        </div>
    }
}

#[function_component(ReferencePhoto)]
fn reference_photo(props: &OrderProps) -> Html {
    let order = &props.order;
    let heading = if order.collection_id.is_some() { "Collection Item" } else { "Inspiration Photo" };
    let base = &services::config().api_base_url;

    html! {
        <div class="bg-[#1c1c1c] border border-white/5 rounded-xl p-5">
            <h3 class="text-xs font-bold text-slate-500 uppercase tracking-widest mb-4">{heading}</h3>
            if let Some(image) = order.reference_image() {
                <div class="aspect-[4/5] rounded-lg overflow-hidden border border-white/10">
                    <img src={media_url(base, image)} class="w-full h-full object-cover" alt="Reference" />
                </div>
            } else {
                <div class="aspect-[4/5] rounded-lg border border-dashed border-white/10 flex items-center justify-center text-slate-600 text-sm">
                    {"No photo provided"}
                </div>
            }
            if let Some(title) = order.collection_id.as_ref().and_then(CollectionRef::title) {
                <p class="mt-3 text-sm text-white font-medium">{title.to_string()}</p>
            }
        </div>
    }
}

#[function_component(OrderFacts)]
fn order_facts(props: &OrderProps) -> Html {
    let order = &props.order;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <div class="bg-[#1c1c1c] border border-white/5 rounded-xl p-5 space-y-3">
                <h3 class="text-xs font-bold text-slate-500 uppercase tracking-widest">{"Order Details"}</h3>
                <Fact label="Type" value={order.type_label()} />
                <Fact label="Occasion" value={order.occasion.clone().unwrap_or_default()} />
                <Fact label="Event Date" value={long_date(order.event_date.as_deref())} />
                <Fact label="Preferred Delivery" value={long_date(order.preferred_delivery_date.as_deref())} />
                if order.is_rush() {
                    <span class="inline-block px-2 py-0.5 rounded-full text-[10px] font-bold bg-red-500/10 border border-red-500/20 text-red-400">
                        {format!("RUSH x{}", order.rush_multiplier.unwrap_or(1.0))}
                    </span>
                }
                if let Some(color) = order.color_preference.clone() {
                    <Fact label="Colour" value={color} />
                }
                if let Some(concerns) = order.body_concerns.clone() {
                    <Fact label="Body Concerns" value={concerns} />
                }
            </div>
            <div class="bg-[#1c1c1c] border border-white/5 rounded-xl p-5">
                <h3 class="text-xs font-bold text-slate-500 uppercase tracking-widest mb-4">{"Measurements (cm)"}</h3>
                <div class="grid grid-cols-2 gap-3">
                    { for order.measurement_entries().into_iter().map(|(label, value)| html! {
                        <div class="bg-slate-900/50 rounded-lg px-3 py-2">
                            <p class="text-[10px] text-slate-500 uppercase">{label}</p>
                            <p class="text-sm font-bold text-white">{value.to_string()}</p>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FactProps {
    label: &'static str,
    value: String,
}

#[function_component(Fact)]
fn fact(props: &FactProps) -> Html {
    html! {
        <div class="flex justify-between text-sm">
            <span class="text-slate-500">{props.label}</span>
            <span class="text-white font-medium">{props.value.clone()}</span>
        </div>
    }
}

#[function_component(PriceFigure)]
fn price_figure(props: &FactProps) -> Html {
    html! {
        <div>
            <span class="text-xs text-slate-500">{props.label}</span>
            <p class="text-xl font-bold text-white">{props.value.clone()}</p>
        </div>
    }
}
