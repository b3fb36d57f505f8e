use kofi_admin_shared::models::{CreateOrderRequest, MeasurementInputs, Measurements, OCCASIONS, ORDER_TYPES};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::AuthContext;
use crate::services;
use crate::utils::{input_value, select_value};

#[derive(Properties, PartialEq)]
pub struct CreateOrderProps {
    pub on_close: Callback<()>,
    pub on_created: Callback<()>,
}

const FIELD_CLASS: &str = "w-full bg-slate-900 border border-white/10 rounded-lg py-2.5 px-3 text-white text-sm focus:outline-none focus:border-blue-500";

/// Walk-in order form posted to `/orders/manual`.
#[function_component(CreateOrderModal)]
pub fn create_order_modal(props: &CreateOrderProps) -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let form = use_state(CreateOrderRequest::default);
    let sizes = use_state(MeasurementInputs::default);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let form = form.clone();
        let sizes = sizes.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_created = props.on_created.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            loading.set(true);
            error.set(None);

            let mut request = (*form).clone();
            request.measurements = sizes.parse();
            let loading = loading.clone();
            let error = error.clone();
            let on_created = on_created.clone();
            let on_close = on_close.clone();
            let auth = auth.clone();
            spawn_local(async move {
                match services::api().create_order(&request).await {
                    Ok(()) => {
                        tracing::info!(client = %request.full_name, "manual order created");
                        loading.set(false);
                        on_created.emit(());
                        on_close.emit(());
                    }
                    Err(err) => {
                        auth.report("creating order", &err);
                        error.set(Some(err.message_or("Failed to create order")));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let text = |apply: fn(&mut CreateOrderRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
        })
    };

    let choice = |apply: fn(&mut CreateOrderRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            apply(&mut next, select_value(&e));
            form.set(next);
        })
    };

    let measurement = |field: &'static str| {
        let sizes = sizes.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*sizes).clone();
            next.set_raw(field, input_value(&e));
            sizes.set(next);
        })
    };

    html! {
        <div class="fixed inset-0 bg-black/80 backdrop-blur-sm z-50 flex items-center justify-center p-4">
            <div class="bg-[#0f172a] border border-white/10 rounded-2xl w-full max-w-2xl max-h-[90vh] flex flex-col shadow-2xl">
                <div class="flex items-center justify-between p-6 border-b border-white/5">
                    <div>
                        <h2 class="text-lg font-bold text-white">{"New Manual Order"}</h2>
                        <p class="text-xs text-slate-500">{"Walk-in or phone client"}</p>
                    </div>
                    <button onclick={props.on_close.reform(|_: MouseEvent| ())} class="p-2 hover:bg-white/10 rounded-lg text-slate-400">{"✕"}</button>
                </div>

                <form class="flex-1 overflow-y-auto p-6 space-y-8" {onsubmit}>
                    <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <label class="space-y-1">
                            <span class="text-xs text-slate-400">{"Full Name"}</span>
                            <input type="text" required=true placeholder="e.g. Jane Doe" class={FIELD_CLASS}
                                value={form.full_name.clone()} oninput={text(|f, v| f.full_name = v)} />
                        </label>
                        <label class="space-y-1">
                            <span class="text-xs text-slate-400">{"Phone Number"}</span>
                            <input type="tel" required=true placeholder="e.g. +251 911 234 567" class={FIELD_CLASS}
                                value={form.phone_number.clone()} oninput={text(|f, v| f.phone_number = v)} />
                        </label>
                        <label class="space-y-1">
                            <span class="text-xs text-slate-400">{"City"}</span>
                            <input type="text" required=true placeholder="e.g. Addis Ababa" class={FIELD_CLASS}
                                value={form.city.clone()} oninput={text(|f, v| f.city = v)} />
                        </label>
                    </section>

                    <section class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <label class="space-y-1">
                            <span class="text-xs text-slate-400">{"Type"}</span>
                            <select class={FIELD_CLASS} onchange={choice(|f, v| f.order_type = v)}>
                                { for ORDER_TYPES.iter().map(|(value, label)| html! {
                                    <option value={*value} selected={form.order_type == *value}>{*label}</option>
                                }) }
                            </select>
                        </label>
                        <label class="space-y-1">
                            <span class="text-xs text-slate-400">{"Occasion"}</span>
                            <select class={FIELD_CLASS} onchange={choice(|f, v| f.occasion = v)}>
                                { for OCCASIONS.iter().map(|(value, label)| html! {
                                    <option value={*value} selected={form.occasion == *value}>{*label}</option>
                                }) }
                            </select>
                        </label>
                        <label class="space-y-1">
                            <span class="text-xs text-slate-400">{"Event Date"}</span>
                            <input type="date" class={FIELD_CLASS}
                                value={form.event_date.clone()} oninput={text(|f, v| f.event_date = v)} />
                        </label>
                        <label class="space-y-1">
                            <span class="text-xs text-slate-400">{"Delivery Date"}</span>
                            <input type="date" class={FIELD_CLASS}
                                value={form.preferred_delivery_date.clone()} oninput={text(|f, v| f.preferred_delivery_date = v)} />
                        </label>
                    </section>

                    <section>
                        <h3 class="text-xs font-bold text-slate-500 uppercase tracking-widest mb-3">{"Measurements (cm)"}</h3>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            { for Measurements::FIELDS.iter().map(|(field, label)| html! {
                                <label class="space-y-1">
                                    <span class="text-xs text-slate-400">{*label}</span>
                                    <input type="number" min="0" step="0.1" class={FIELD_CLASS}
                                        value={sizes.raw(field).to_string()}
                                        oninput={measurement(*field)} />
                                </label>
                            }) }
                        </div>
                    </section>

                    if let Some(message) = (*error).clone() {
                        <p class="text-xs font-bold text-red-400">{message}</p>
                    }

                    <div class="flex justify-end gap-3 pt-4 border-t border-white/5">
                        <button type="button" onclick={props.on_close.reform(|_: MouseEvent| ())}
                            class="px-5 py-2.5 rounded-xl text-sm font-bold text-slate-400 hover:text-white">
                            {"Cancel"}
                        </button>
                        <button type="submit" disabled={*loading}
                            class="px-5 py-2.5 rounded-xl text-sm font-bold bg-blue-600 hover:bg-blue-500 text-white disabled:opacity-50">
                            {if *loading { "Creating..." } else { "Create Order" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
