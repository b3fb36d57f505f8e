// Client Directory - everyone who has ordered through the bot or in person
use kofi_admin_shared::config::CLIENTS_PAGE_SIZE;
use kofi_admin_shared::format::short_date;
use kofi_admin_shared::{ClientProfile, LatestRequest, Pager};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::AuthContext;
use crate::services;

#[function_component(ClientsPage)]
pub fn clients_page() -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let pager = use_state(|| Pager::new(CLIENTS_PAGE_SIZE));
    let total = use_state(|| 0u64);
    let clients = use_state(Vec::<ClientProfile>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let latest = use_mut_ref(LatestRequest::<u32>::default);

    {
        let clients = clients.clone();
        let total = total.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(pager.page, move |page| {
            let page = *page;
            latest.borrow_mut().begin(page);
            loading.set(true);
            spawn_local(async move {
                let result = services::api().clients(page, CLIENTS_PAGE_SIZE).await;
                if !latest.borrow().is_current(&page) {
                    tracing::debug!(page, "dropping reply for a page no longer shown");
                    return;
                }
                match result {
                    Ok(fetched) => {
                        error.set(None);
                        total.set(fetched.total);
                        clients.set(fetched.items);
                    }
                    Err(err) => {
                        auth.report("loading clients", &err);
                        error.set(Some(err.message_or("Failed to load clients")));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let current = pager.with_total(*total);
    let go = |target: Pager| {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.set(target))
    };

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-end border-b border-white/5 pb-8">
                <div>
                    <h1 class="text-4xl font-black text-white tracking-tight uppercase italic">{"Client Directory"}</h1>
                    <p class="text-slate-500 mt-2 text-sm font-medium">{format!("{} registered clients", current.total)}</p>
                </div>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="p-4 bg-red-500/10 border border-red-500/20 rounded-2xl text-red-400 text-sm font-bold">{message}</div>
            }

            if *loading {
                <div class="flex items-center justify-center p-20">
                    <div class="w-12 h-12 border-4 border-blue-500 border-t-transparent rounded-full animate-spin" />
                </div>
            } else if clients.is_empty() {
                <div class="flex flex-col items-center justify-center p-20 text-center space-y-4">
                    <h2 class="text-2xl font-bold text-white">{"No Clients Yet"}</h2>
                    <p class="text-slate-500 max-w-md">
                        {"When clients submit orders through the Telegram bot, they'll appear here."}
                    </p>
                </div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for clients.iter().map(|client| html! {
                        <ClientCard key={client.id.clone()} client={client.clone()} />
                    }) }
                </div>

                if current.page_count() > 1 {
                    <div class="flex justify-center items-center gap-2 pt-8">
                        <button onclick={go(current.previous())} disabled={!current.has_previous()}
                            class="px-4 py-2 rounded-xl text-sm font-bold text-slate-400 hover:bg-white/5 disabled:opacity-30">
                            {"Previous"}
                        </button>
                        { for current.page_buttons().into_iter().map(|number| {
                            let class = if number == current.page {
                                "bg-blue-600 text-white"
                            } else {
                                "text-slate-400 hover:bg-white/5"
                            };
                            html! {
                                <button key={number} onclick={go(current.goto(number))}
                                    class={format!("w-10 h-10 rounded-xl text-sm font-bold {}", class)}>
                                    {number.to_string()}
                                </button>
                            }
                        }) }
                        <button onclick={go(current.next())} disabled={!current.has_next()}
                            class="px-4 py-2 rounded-xl text-sm font-bold text-slate-400 hover:bg-white/5 disabled:opacity-30">
                            {"Next"}
                        </button>
                    </div>
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ClientCardProps {
    client: ClientProfile,
}

#[function_component(ClientCard)]
fn client_card(props: &ClientCardProps) -> Html {
    let client = &props.client;
    html! {
        <div class="bg-[#1c1c1c] border border-white/5 rounded-2xl p-6 hover:border-white/10 transition-colors">
            <div class="flex items-start justify-between mb-6">
                <div class="flex items-center gap-4">
                    <div class="w-12 h-12 rounded-full bg-blue-600/20 flex items-center justify-center text-blue-400 font-black text-lg">
                        {client.initial().to_string()}
                    </div>
                    <div>
                        <h3 class="font-bold text-white text-lg">{client.full_name.clone()}</h3>
                        <p class="text-slate-500 text-xs">{format!("@{}", client.telegram_id)}</p>
                    </div>
                </div>
                <span class="px-3 py-1 rounded-full bg-white/5 text-slate-400 text-[10px] font-bold uppercase">
                    {format!("{} orders", client.total_orders)}
                </span>
            </div>
            <div class="space-y-2 text-sm">
                <p class="text-slate-300">{client.phone_number.clone()}</p>
                <p class="text-slate-300">{client.city.clone()}</p>
                if let Some(handle) = client.instagram_handle.clone() {
                    <p class="text-slate-300">{format!("@{}", handle)}</p>
                }
                <p class="text-slate-500 text-xs pt-2">{format!("Joined {}", short_date(client.created_at.as_deref()))}</p>
            </div>
        </div>
    }
}
