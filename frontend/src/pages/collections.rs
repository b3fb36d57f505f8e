// Collection Manager - the public portfolio shown on the storefront
use gloo::dialogs::confirm;
use gloo::file::callbacks::{read_as_data_url, FileReader};
use kofi_admin_shared::collections::{media_url, CollectionDraft, SaveTarget};
use kofi_admin_shared::CollectionItem;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::AuthContext;
use crate::services;
use crate::utils::{input_value, selected_file};

type Draft = CollectionDraft<web_sys::File>;

const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

#[function_component(CollectionsPage)]
pub fn collections_page() -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let items = use_state(Vec::<CollectionItem>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);
    let adding = use_state(|| false);
    let draft = use_state(Draft::default);
    let tag_input = use_state(String::new);
    let submitting = use_state(|| false);
    // Kept alive until the preview arrives; dropping it aborts the read.
    let reader = use_mut_ref(|| None::<FileReader>);

    {
        let items = items.clone();
        let loading = loading.clone();
        let error = error.clone();
        let auth = auth.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            spawn_local(async move {
                match services::api().collections().await {
                    Ok(list) => {
                        error.set(None);
                        items.set(list);
                    }
                    Err(err) => {
                        auth.report("loading collections", &err);
                        error.set(Some(err.message_or("Failed to load collections")));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let reset = {
        let draft = draft.clone();
        let tag_input = tag_input.clone();
        let adding = adding.clone();
        move || {
            draft.set(Draft::default());
            tag_input.set(String::new());
            adding.set(false);
        }
    };

    let toggle_form = {
        let adding = adding.clone();
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| {
            if *adding {
                reset();
            } else {
                adding.set(true);
            }
        })
    };

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.title = input_value(&e);
            draft.set(next);
        })
    };

    let on_tag_input = {
        let tag_input = tag_input.clone();
        Callback::from(move |e: InputEvent| tag_input.set(input_value(&e)))
    };

    let add_tag = {
        let draft = draft.clone();
        let tag_input = tag_input.clone();
        move || {
            let mut next = (*draft).clone();
            if next.add_tag(&tag_input) {
                draft.set(next);
                tag_input.set(String::new());
            }
        }
    };
    let on_tag_key = {
        let add_tag = add_tag.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add_tag();
            }
        })
    };
    let on_tag_click = Callback::from(move |_: MouseEvent| add_tag());

    let remove_tag = |tag: String| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.remove_tag(&tag);
            draft.set(next);
        })
    };

    let on_file = {
        let draft = draft.clone();
        let reader = reader.clone();
        Callback::from(move |e: Event| {
            let Some(file) = selected_file(&e) else {
                return;
            };
            let mut next = (*draft).clone();
            next.attach(file.clone(), None);
            draft.set(next.clone());

            let draft = draft.clone();
            let blob = gloo::file::File::from(file);
            let task = read_as_data_url(&blob, move |result| match result {
                Ok(data_url) => {
                    let mut next = next.clone();
                    next.preview = Some(data_url);
                    draft.set(next);
                }
                Err(err) => tracing::warn!(error = %err, "could not preview the selected image"),
            });
            *reader.borrow_mut() = Some(task);
        })
    };

    let edit = |item: CollectionItem| {
        let draft = draft.clone();
        let adding = adding.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(Draft::editing(&item, &services::config().api_base_url));
            adding.set(true);
        })
    };

    let delete = |id: String| {
        let reload = reload.clone();
        let error = error.clone();
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            if !confirm(DELETE_PROMPT) {
                return;
            }
            let id = id.clone();
            let reload = reload.clone();
            let error = error.clone();
            let auth = auth.clone();
            spawn_local(async move {
                match services::api().delete_collection_item(&id).await {
                    Ok(()) => {
                        tracing::info!(item = %id, "collection item deleted");
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        auth.report("deleting collection item", &err);
                        error.set(Some(err.message_or("Failed to delete item")));
                    }
                }
            });
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let reload = reload.clone();
        let error = error.clone();
        let auth = auth.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !draft.can_submit() || *submitting {
                return;
            }
            submitting.set(true);

            let current = (*draft).clone();
            let submitting = submitting.clone();
            let reload = reload.clone();
            let error = error.clone();
            let auth = auth.clone();
            let reset = reset.clone();
            spawn_local(async move {
                let api = services::api();
                let parts = current.form_parts();
                let result = match current.target() {
                    SaveTarget::Create => api.create_collection_item(parts).await,
                    SaveTarget::Update(id) => api.update_collection_item(&id, parts).await,
                };
                match result {
                    Ok(()) => {
                        tracing::info!(title = %current.title, "collection item saved");
                        reset();
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        auth.report("saving collection item", &err);
                        error.set(Some(err.message_or("Failed to save collection item")));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let base = &services::config().api_base_url;
    let can_submit = draft.can_submit() && !*submitting;

    html! {
        <div class="space-y-12 pb-20">
            <header class="flex justify-between items-center">
                <div>
                    <h1 class="text-4xl font-black text-white tracking-tight uppercase italic">{"Collection Manager"}</h1>
                    <p class="text-slate-500 mt-2 text-sm font-medium">{"Curate the public portfolio displayed on the client storefront."}</p>
                </div>
                <button onclick={toggle_form}
                    class={format!("px-10 py-4 rounded-xl font-black uppercase tracking-widest text-xs {}",
                        if *adding { "bg-slate-800 text-white hover:bg-slate-700" } else { "bg-blue-600 text-white hover:bg-blue-500" })}>
                    {if *adding { "Cancel" } else { "Add Masterpiece" }}
                </button>
            </header>

            if let Some(message) = (*error).clone() {
                <div class="p-4 bg-red-500/10 border border-red-500/20 rounded-2xl text-red-400 text-sm font-bold">{message}</div>
            }

            if *adding {
                <div class="bg-[#0b1120] border border-blue-500/30 rounded-3xl p-10">
                    <form {onsubmit} class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                        <div class="space-y-8">
                            <label class="block space-y-2">
                                <span class="text-[10px] font-bold text-slate-500 uppercase tracking-widest">{"Masterpiece Title"}</span>
                                <input type="text" placeholder="e.g., Midnight Silk Evening Gown"
                                    class="w-full bg-[#0f172a] border border-slate-800 rounded-xl py-4 px-6 text-white text-lg font-bold focus:outline-none focus:border-blue-500"
                                    value={draft.title.clone()} oninput={on_title} />
                            </label>

                            <div class="space-y-2">
                                <span class="text-[10px] font-bold text-slate-500 uppercase tracking-widest">{"Discovery Tags"}</span>
                                <div class="flex gap-2">
                                    <input type="text" placeholder="Add tag (e.g., Silk, 2024, Evening)"
                                        class="flex-1 bg-[#0f172a] border border-slate-800 rounded-xl py-3 px-4 text-white text-sm focus:outline-none focus:border-blue-500"
                                        value={(*tag_input).clone()} oninput={on_tag_input} onkeydown={on_tag_key} />
                                    <button type="button" onclick={on_tag_click}
                                        class="px-4 rounded-xl bg-slate-800 text-white text-sm font-bold hover:bg-slate-700">{"Add"}</button>
                                </div>
                                <div class="flex flex-wrap gap-2">
                                    { for draft.tags.iter().map(|tag| html! {
                                        <span key={tag.clone()} class="flex items-center gap-2 px-3 py-1 rounded-lg bg-blue-500/10 text-blue-400 text-xs font-bold">
                                            {tag.clone()}
                                            <button type="button" onclick={remove_tag(tag.clone())} class="hover:text-white">{"✕"}</button>
                                        </span>
                                    }) }
                                </div>
                            </div>

                            <button type="submit" disabled={!can_submit}
                                class="w-full py-4 rounded-xl bg-blue-600 hover:bg-blue-500 text-white font-black uppercase tracking-widest text-xs disabled:opacity-50">
                                {match (*submitting, draft.is_editing()) {
                                    (true, _) => "Saving...",
                                    (false, true) => "Update Piece",
                                    (false, false) => "Publish to Gallery",
                                }}
                            </button>
                        </div>

                        <label class="space-y-2 block">
                            <span class="text-[10px] font-bold text-slate-500 uppercase tracking-widest">{"Visual Piece"}</span>
                            <div class="relative aspect-[3/4] rounded-3xl border-2 border-dashed border-slate-800 overflow-hidden flex items-center justify-center cursor-pointer hover:border-blue-500/50">
                                if let Some(preview) = draft.preview.clone() {
                                    <img src={preview} class="absolute inset-0 w-full h-full object-cover" alt="Preview" />
                                } else {
                                    <span class="text-slate-600 text-xs font-bold uppercase tracking-widest">{"Click to upload image"}</span>
                                }
                                <input type="file" accept="image/*" class="absolute inset-0 opacity-0 cursor-pointer" onchange={on_file} />
                            </div>
                        </label>
                    </form>
                </div>
            }

            if *loading {
                <div class="flex items-center justify-center p-20">
                    <div class="w-12 h-12 border-4 border-blue-500 border-t-transparent rounded-full animate-spin" />
                </div>
            } else if items.is_empty() {
                <div class="text-center py-32 text-slate-600">
                    <h3 class="text-3xl font-black uppercase italic tracking-tighter">{"Your gallery is empty"}</h3>
                    <p class="mt-2 font-bold uppercase text-[10px] tracking-widest">{"Start adding your best works to inspire clients"}</p>
                </div>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    { for items.iter().map(|item| html! {
                        <div key={item.id.clone()} class="group bg-[#0b1120] border border-white/5 rounded-3xl overflow-hidden">
                            <div class="relative aspect-[3/4] bg-slate-900">
                                if let Some(image) = item.image.as_deref() {
                                    <img src={media_url(base, image)} alt={item.title.clone()} class="w-full h-full object-cover" />
                                }
                                <div class="absolute top-4 right-4 flex gap-2 opacity-0 group-hover:opacity-100 transition-opacity">
                                    <button onclick={edit(item.clone())}
                                        class="px-3 py-2 rounded-xl bg-white/90 text-slate-900 text-xs font-bold">{"Edit"}</button>
                                    <button onclick={delete(item.id.clone())}
                                        class="px-3 py-2 rounded-xl bg-red-600 text-white text-xs font-bold">{"Delete"}</button>
                                </div>
                            </div>
                            <div class="p-6 space-y-3">
                                <h3 class="text-white font-black uppercase tracking-tight">{item.title.clone()}</h3>
                                <div class="flex flex-wrap gap-2">
                                    { for item.tags.iter().map(|tag| html! {
                                        <span class="px-2 py-0.5 rounded bg-white/5 text-slate-400 text-[10px] font-bold uppercase">{format!("#{}", tag)}</span>
                                    }) }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
