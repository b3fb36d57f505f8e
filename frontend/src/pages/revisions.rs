// Revision log - client modification requests for one order
use kofi_admin_shared::collections::media_url;
use kofi_admin_shared::format::short_date;
use kofi_admin_shared::Revision;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::AuthContext;
use crate::services;

/// Status written when the admin closes a pending request.
const RESOLVED_STATUS: &str = "COMPLETED";

#[derive(Properties, PartialEq)]
pub struct RevisionLogProps {
    #[prop_or_default]
    pub order_id: Option<String>,
}

#[function_component(RevisionLog)]
pub fn revision_log(props: &RevisionLogProps) -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let revisions = use_state(Vec::<Revision>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    {
        let revisions = revisions.clone();
        let loading = loading.clone();
        let error = error.clone();
        let auth = auth.clone();
        use_effect_with((props.order_id.clone(), *reload), move |(order_id, _)| {
            if let Some(order_id) = order_id.clone() {
                loading.set(true);
                spawn_local(async move {
                    match services::api().revisions(&order_id).await {
                        Ok(list) => {
                            error.set(None);
                            revisions.set(list);
                        }
                        Err(err) => {
                            auth.report("loading revisions", &err);
                            error.set(Some(err.message_or("Failed to load revisions")));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let resolve = |revision_id: String| {
        let reload = reload.clone();
        let error = error.clone();
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            let revision_id = revision_id.clone();
            let reload = reload.clone();
            let error = error.clone();
            let auth = auth.clone();
            spawn_local(async move {
                match services::api().update_revision_status(&revision_id, RESOLVED_STATUS).await {
                    Ok(()) => reload.set(*reload + 1),
                    Err(err) => {
                        auth.report("updating revision", &err);
                        error.set(Some(err.message_or("Failed to update revision")));
                    }
                }
            });
        })
    };

    if props.order_id.is_none() {
        return html! {
            <div class="flex flex-col items-center justify-center p-20 text-center space-y-4">
                <h2 class="text-3xl font-black text-white uppercase italic tracking-tighter">{"No Revision Data"}</h2>
                <p class="text-slate-500 max-w-md mx-auto">
                    {"Open an order to view its revision history and client modification requests."}
                </p>
            </div>
        };
    }

    let base = &services::config().api_base_url;

    html! {
        <div class="space-y-6">
            if let Some(message) = (*error).clone() {
                <p class="text-xs font-bold text-red-400">{message}</p>
            }
            if *loading {
                <p class="text-slate-500 text-sm">{"Loading revisions..."}</p>
            } else if revisions.is_empty() {
                <p class="text-slate-500 text-xs font-bold uppercase tracking-widest">{"No revisions recorded for this order yet."}</p>
            } else {
                { for revisions.iter().enumerate().map(|(idx, rev)| {
                    let badge = if rev.is_pending() {
                        "bg-amber-500/10 text-amber-500 border-amber-500/20"
                    } else {
                        "bg-emerald-500/10 text-emerald-500 border-emerald-500/20"
                    };
                    html! {
                        <div key={rev.id.clone()} class="bg-[#0b1120]/40 border border-white/5 rounded-2xl p-6 space-y-4">
                            <div class="flex justify-between items-start">
                                <div>
                                    <span class="text-[10px] font-black text-blue-400 uppercase tracking-[0.3em]">
                                        {format!("Iteration {}", idx + 1)}
                                    </span>
                                    <h3 class="text-lg font-black text-white uppercase tracking-tighter">{"Client Request"}</h3>
                                </div>
                                <div class="flex items-center gap-3">
                                    <span class="text-[10px] font-bold text-slate-300 uppercase tracking-widest">
                                        {short_date(rev.created_at.as_deref())}
                                    </span>
                                    <span class={format!("px-3 py-1 rounded-full text-[10px] font-black uppercase border {}", badge)}>
                                        {rev.status.clone()}
                                    </span>
                                </div>
                            </div>
                            <p class="text-slate-300 font-medium leading-relaxed italic">
                                {format!("\"{}\"", rev.changes_requested)}
                            </p>
                            if !rev.revision_photos.is_empty() {
                                <div class="flex gap-3 flex-wrap">
                                    { for rev.revision_photos.iter().map(|photo| html! {
                                        <img src={media_url(base, photo)} class="w-24 h-24 object-cover rounded-xl border border-white/10" alt="Revision" />
                                    }) }
                                </div>
                            }
                            if rev.is_pending() {
                                <button onclick={resolve(rev.id.clone())}
                                    class="px-4 py-2 rounded-xl text-xs font-bold bg-emerald-600/20 text-emerald-400 hover:bg-emerald-600/30">
                                    {"Mark Addressed"}
                                </button>
                            }
                        </div>
                    }
                }) }
            }
        </div>
    }
}

/// The revisions tab. With no order open it shows the empty state.
#[function_component(RevisionsPage)]
pub fn revisions_page() -> Html {
    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-4xl font-black text-white tracking-tighter uppercase italic">{"Creative Iterations"}</h1>
                <p class="text-slate-500 text-sm font-medium">{"Design modifications, fabric changes and fitting adjustments."}</p>
            </div>
            <RevisionLog />
        </div>
    }
}
