// Security & Settings - password change and the recovery question
use kofi_admin_shared::settings::{
    PasswordForm, SecurityForm, PASSWORD_FAILED, PASSWORD_UPDATED, SECURITY_FAILED, SECURITY_QUESTIONS,
    SECURITY_UPDATED,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::components::AuthContext;
use crate::services;
use crate::utils::{input_value, select_value};

const FIELD_CLASS: &str = "w-full bg-black/40 border border-white/10 rounded-xl py-4 px-6 text-white text-sm font-medium focus:outline-none focus:border-blue-500";
const LABEL_CLASS: &str = "text-[10px] font-bold text-slate-500 uppercase tracking-widest ml-1";

/// Outcome banner of a settings form.
#[derive(Clone, PartialEq)]
enum Notice {
    Success(&'static str),
    Failure(String),
}

fn notice_view(notice: &Option<Notice>) -> Html {
    match notice {
        Some(Notice::Success(message)) => html! {
            <div class="p-4 bg-emerald-500/10 border border-emerald-500/20 rounded-2xl text-emerald-500 text-sm font-medium">{*message}</div>
        },
        Some(Notice::Failure(message)) => html! {
            <div class="p-4 bg-red-500/10 border border-red-500/20 rounded-2xl text-red-500 text-sm font-medium">{message.clone()}</div>
        },
        None => html! {},
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let password = use_state(PasswordForm::default);
    let password_loading = use_state(|| false);
    let password_notice = use_state(|| None::<Notice>);
    let security = use_state(SecurityForm::default);
    let security_loading = use_state(|| false);
    let security_notice = use_state(|| None::<Notice>);
    let configured = use_state(|| false);

    {
        let configured = configured.clone();
        let auth = auth.clone();
        use_mount(move || {
            spawn_local(async move {
                match services::api().me().await {
                    Ok(profile) => configured.set(profile.has_security_question()),
                    Err(err) => auth.report("loading admin profile", &err),
                }
            });
        });
    }

    let password_field = |apply: fn(&mut PasswordForm, String)| {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*password).clone();
            apply(&mut next, input_value(&e));
            password.set(next);
        })
    };

    let on_password = {
        let password = password.clone();
        let loading = password_loading.clone();
        let notice = password_notice.clone();
        let auth = auth.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match password.request() {
                Ok(request) => request,
                Err(message) => {
                    notice.set(Some(Notice::Failure(message.to_string())));
                    return;
                }
            };
            loading.set(true);
            notice.set(None);

            let password = password.clone();
            let loading = loading.clone();
            let notice = notice.clone();
            let auth = auth.clone();
            spawn_local(async move {
                match services::api().change_password(&request).await {
                    Ok(()) => {
                        tracing::info!("admin password changed");
                        notice.set(Some(Notice::Success(PASSWORD_UPDATED)));
                        password.set(PasswordForm::default());
                    }
                    Err(err) => {
                        auth.report("changing password", &err);
                        notice.set(Some(Notice::Failure(err.message_or(PASSWORD_FAILED))));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_question = {
        let security = security.clone();
        Callback::from(move |e: Event| {
            let mut next = (*security).clone();
            next.question = select_value(&e);
            security.set(next);
        })
    };
    let on_answer = {
        let security = security.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*security).clone();
            next.answer = input_value(&e);
            security.set(next);
        })
    };

    let on_security = {
        let security = security.clone();
        let loading = security_loading.clone();
        let notice = security_notice.clone();
        let configured = configured.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !security.is_complete() {
                return;
            }
            loading.set(true);
            notice.set(None);

            let request = security.request();
            let security = security.clone();
            let loading = loading.clone();
            let notice = notice.clone();
            let configured = configured.clone();
            let auth = auth.clone();
            spawn_local(async move {
                match services::api().setup_security(&request).await {
                    Ok(()) => {
                        tracing::info!("recovery question configured");
                        notice.set(Some(Notice::Success(SECURITY_UPDATED)));
                        configured.set(true);
                        security.set(SecurityForm::default());
                    }
                    Err(err) => {
                        auth.report("setting security question", &err);
                        notice.set(Some(Notice::Failure(err.message_or(SECURITY_FAILED))));
                    }
                }
                loading.set(false);
            });
        })
    };

    let show_shield = *configured && !matches!(*security_notice, Some(Notice::Success(_)));

    html! {
        <div class="space-y-12">
            <div class="border-b border-white/5 pb-8">
                <h1 class="text-4xl font-black text-white tracking-tight uppercase italic">{"Security & Settings"}</h1>
                <p class="text-slate-500 mt-2 text-sm font-medium">{"Protect your atelier command center with enhanced verification."}</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-10">
                <section class="bg-[#1c1c1c] border border-white/5 rounded-[2.5rem] p-10 space-y-8">
                    <h2 class="text-2xl font-bold text-white tracking-tight">{"Access Credentials"}</h2>
                    <form onsubmit={on_password} class="space-y-6">
                        { notice_view(&password_notice) }
                        <label class="block space-y-2">
                            <span class={LABEL_CLASS}>{"Current Password"}</span>
                            <input type="password" required=true placeholder="••••••••" class={FIELD_CLASS}
                                value={password.old_password.clone()} oninput={password_field(|f, v| f.old_password = v)} />
                        </label>
                        <div class="grid grid-cols-2 gap-4">
                            <label class="block space-y-2">
                                <span class={LABEL_CLASS}>{"New Password"}</span>
                                <input type="password" required=true placeholder="••••••••" class={FIELD_CLASS}
                                    value={password.new_password.clone()} oninput={password_field(|f, v| f.new_password = v)} />
                            </label>
                            <label class="block space-y-2">
                                <span class={LABEL_CLASS}>{"Confirm New"}</span>
                                <input type="password" required=true placeholder="••••••••" class={FIELD_CLASS}
                                    value={password.confirm_password.clone()} oninput={password_field(|f, v| f.confirm_password = v)} />
                            </label>
                        </div>
                        <button type="submit" disabled={*password_loading}
                            class="w-full py-4 rounded-xl bg-blue-600 hover:bg-blue-500 text-white font-black uppercase tracking-widest text-xs disabled:opacity-50">
                            {if *password_loading { "Updating..." } else { "Update Password" }}
                        </button>
                    </form>
                </section>

                <section class="bg-[#1c1c1c] border border-white/5 rounded-[2.5rem] p-10 space-y-8">
                    <h2 class="text-2xl font-bold text-white tracking-tight">{"Recovery Shield"}</h2>
                    if show_shield {
                        <div class="text-center py-10 space-y-4">
                            <h3 class="text-xl font-bold text-white tracking-tight">{"Shield Active"}</h3>
                            <p class="text-slate-500 text-sm max-w-[240px] mx-auto font-medium">
                                {"Your recovery challenge has been securely configured."}
                            </p>
                            <span class="inline-block px-4 py-1.5 rounded-full bg-emerald-500/10 text-emerald-500 text-[10px] font-black uppercase tracking-widest">
                                {"Account Protected"}
                            </span>
                        </div>
                    } else {
                        <form onsubmit={on_security} class="space-y-6">
                            { notice_view(&security_notice) }
                            <label class="block space-y-2">
                                <span class={LABEL_CLASS}>{"Recovery Question"}</span>
                                <select required=true class={FIELD_CLASS} onchange={on_question}>
                                    <option value="" disabled=true selected={security.question.is_empty()}>{"Select a challenge question"}</option>
                                    { for SECURITY_QUESTIONS.iter().map(|question| html! {
                                        <option value={*question} selected={security.question == *question}>{*question}</option>
                                    }) }
                                </select>
                            </label>
                            <label class="block space-y-2">
                                <span class={LABEL_CLASS}>{"Secret Answer"}</span>
                                <input type="text" required=true placeholder="Answer (case-insensitive)" class={FIELD_CLASS}
                                    value={security.answer.clone()} oninput={on_answer} />
                            </label>
                            <button type="submit" disabled={*security_loading}
                                class="w-full py-4 rounded-xl bg-emerald-600 hover:bg-emerald-500 text-white font-black uppercase tracking-widest text-xs disabled:opacity-50">
                                {if *security_loading { "Saving..." } else { "Save Recovery Question" }}
                            </button>
                        </form>
                    }
                </section>
            </div>
        </div>
    }
}
