use kofi_admin_shared::recovery::{Mode, RecoveryFlow, Step};
use kofi_admin_shared::{ApiError, Session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{self, BrowserTokenStore};
use crate::utils::input_value;

// Auth context for managing the session across the console
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub session: Session,
    pub login: Callback<()>,
    pub logout: Callback<()>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self {
            session: Session::SignedOut,
            login: Callback::noop(),
            logout: Callback::noop(),
        }
    }
}

impl AuthContext {
    /// Log a failed call. A 401 means the token went stale, so the admin is
    /// sent back to the login screen.
    pub fn report(&self, what: &str, err: &ApiError) {
        tracing::warn!(code = %err.code(), error = %err, "{} failed", what);
        if self.session.after_error(err) == Session::SignedOut {
            self.logout.emit(());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let session = use_state(|| Session::restore(&BrowserTokenStore));

    let login = {
        let session = session.clone();
        Callback::from(move |_| session.set(Session::SignedIn))
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_| session.set(session.sign_out(&services::api())))
    };

    let context = AuthContext {
        session: *session,
        login,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> {context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

const INPUT_CLASS: &str = "w-full bg-slate-900/50 border border-slate-800 rounded-2xl py-4 px-5 text-white placeholder-slate-600 focus:outline-none focus:border-blue-500/50 transition-all";
const SUBMIT_CLASS: &str = "w-full bg-blue-600 hover:bg-blue-500 text-white font-black uppercase tracking-widest text-xs py-5 rounded-2xl transition-all disabled:opacity-50 disabled:cursor-not-allowed";

/// Login screen with the security-question recovery forms.
#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let flow = use_state(RecoveryFlow::default);

    let onsubmit = {
        let flow = flow.clone();
        let on_login = auth.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if flow.loading {
                return;
            }
            let mut pending = (*flow).clone();
            pending.begin();
            flow.set(pending.clone());

            let flow = flow.clone();
            let on_login = on_login.clone();
            spawn_local(async move {
                match pending.submit(&services::api()).await {
                    Step::SignedIn => on_login.emit(()),
                    Step::Stay(next) => flow.set(next),
                }
            });
        })
    };

    let switch_to = |mode: Mode| {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*flow).clone();
            next.switch(mode);
            flow.set(next);
        })
    };

    let edit = |apply: fn(&mut RecoveryFlow, String)| {
        let flow = flow.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*flow).clone();
            apply(&mut next, input_value(&e));
            flow.set(next);
        })
    };

    let (title, button) = match flow.mode {
        Mode::Login => ("Sign in to the console", if flow.loading { "Verifying..." } else { "Access Command" }),
        Mode::Forgot => ("Find your security question", if flow.loading { "Searching..." } else { "Get Question" }),
        Mode::Reset => ("Answer to reset your password", if flow.loading { "Resetting..." } else { "Reset Password" }),
    };

    html! {
        <div class="min-h-screen bg-[#020617] flex items-center justify-center p-6">
            <div class="w-full max-w-md bg-[#0b1120] border border-slate-800 rounded-[2.5rem] p-10 shadow-2xl">
                <header class="text-center mb-10 space-y-2">
                    <h1 class="text-3xl font-black text-white uppercase italic tracking-tighter">{"Kofi's Command"}</h1>
                    <p class="text-slate-500 font-bold uppercase text-[10px] tracking-[0.3em]">{"Authorized Personnel Only"}</p>
                    <p class="text-slate-400 text-sm pt-2">{title}</p>
                </header>

                if let Some(error) = flow.error.clone() {
                    <div class="mb-8 p-4 bg-red-500/10 border border-red-500/20 rounded-2xl text-red-500 text-xs font-bold">
                        {error}
                    </div>
                }

                if let Some(banner) = flow.banner() {
                    <div class="mb-8 p-4 bg-emerald-500/10 border border-emerald-500/20 rounded-2xl text-emerald-500 text-xs font-bold">
                        {banner.to_string()}
                    </div>
                }

                <form class="space-y-6" {onsubmit}>
                    {match flow.mode {
                        Mode::Login => html! {
                            <>
                                <input
                                    type="email" required=true placeholder="admin@kofidesign.com"
                                    class={INPUT_CLASS}
                                    value={flow.email.clone()}
                                    oninput={edit(|f, v| f.email = v)}
                                />
                                <input
                                    type="password" required=true placeholder="Password"
                                    class={INPUT_CLASS}
                                    value={flow.password.clone()}
                                    oninput={edit(|f, v| f.password = v)}
                                />
                                <div class="flex justify-end">
                                    <button type="button" onclick={switch_to(Mode::Forgot)}
                                        class="text-[10px] font-bold uppercase tracking-widest text-slate-500 hover:text-blue-400">
                                        {"Forgot Password?"}
                                    </button>
                                </div>
                            </>
                        },
                        Mode::Forgot => html! {
                            <>
                                <input
                                    type="email" required=true placeholder="Registered email"
                                    class={INPUT_CLASS}
                                    value={flow.email.clone()}
                                    oninput={edit(|f, v| f.email = v)}
                                />
                                <button type="button" onclick={switch_to(Mode::Login)}
                                    class="text-[10px] font-bold uppercase tracking-widest text-slate-500 hover:text-white">
                                    {"Back to Login"}
                                </button>
                            </>
                        },
                        Mode::Reset => html! {
                            <>
                                <div class="p-4 bg-blue-500/5 border border-blue-500/20 rounded-2xl">
                                    <p class="text-[10px] font-bold uppercase tracking-widest text-blue-400 mb-1">{"Security Question"}</p>
                                    <p class="text-white text-sm font-medium">{flow.question.clone()}</p>
                                </div>
                                <input
                                    type="text" required=true placeholder="Your answer"
                                    class={INPUT_CLASS}
                                    value={flow.secret_answer.clone()}
                                    oninput={edit(|f, v| f.secret_answer = v)}
                                />
                                <input
                                    type="password" required=true placeholder="New password"
                                    class={INPUT_CLASS}
                                    value={flow.new_password.clone()}
                                    oninput={edit(|f, v| f.new_password = v)}
                                />
                                <button type="button" onclick={switch_to(Mode::Login)}
                                    class="text-[10px] font-bold uppercase tracking-widest text-slate-500 hover:text-white">
                                    {"Cancel Reset"}
                                </button>
                            </>
                        },
                    }}

                    <button type="submit" disabled={flow.loading} class={SUBMIT_CLASS}>
                        {button}
                    </button>
                </form>
            </div>
        </div>
    }
}
