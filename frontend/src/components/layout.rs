use yew::prelude::*;

use super::AuthContext;

/// Console sections. `OrdersTop` is the top-bar entry for the orders view; it
/// renders the same page but keeps its own highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Orders,
    OrdersTop,
    Revisions,
    Collections,
    Clients,
    Settings,
}

impl Tab {
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Orders => "orders",
            Tab::OrdersTop => "orders_top",
            Tab::Revisions => "revisions",
            Tab::Collections => "collections",
            Tab::Clients => "clients",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Orders | Tab::OrdersTop => "Orders",
            Tab::Revisions => "Revisions",
            Tab::Collections => "Collections",
            Tab::Clients => "Clients",
            Tab::Settings => "Settings",
        }
    }
}

const SIDEBAR: [Tab; 4] = [Tab::Orders, Tab::Revisions, Tab::Collections, Tab::Settings];
const TOP_BAR: [Tab; 3] = [Tab::Dashboard, Tab::OrdersTop, Tab::Clients];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
    pub children: Html,
}

/// Sidebar plus top bar around the active section. Selecting a tab only
/// changes which view is mounted.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let auth_ctx = use_context::<AuthContext>().unwrap_or_default();

    let select = |tab: Tab| props.on_select.reform(move |_: MouseEvent| tab);

    html! {
        <div class="min-h-screen bg-[#020617] text-slate-200 flex">
            <aside class="w-64 flex-shrink-0 bg-[#020617] border-r border-white/5 flex flex-col">
                <div class="h-20 flex items-center px-8 border-b border-white/5">
                    <span class="text-white font-black italic uppercase tracking-tighter text-xl">{"Kofi Design"}</span>
                </div>
                <nav class="flex-1 py-6 px-4 space-y-1">
                    { for SIDEBAR.iter().map(|tab| html! {
                        <NavButton
                            label={tab.label()}
                            active={props.active == *tab}
                            onclick={select(*tab)}
                        />
                    }) }
                </nav>
            </aside>

            <div class="flex-1 flex flex-col min-w-0">
                <header class="h-20 flex-shrink-0 border-b border-white/5 flex items-center justify-between px-10">
                    <nav class="flex items-center space-x-2">
                        { for TOP_BAR.iter().map(|tab| html! {
                            <NavButton
                                label={tab.label()}
                                active={props.active == *tab}
                                onclick={select(*tab)}
                            />
                        }) }
                    </nav>
                    <button
                        onclick={auth_ctx.logout.reform(|_: MouseEvent| ())}
                        class="text-xs font-bold uppercase tracking-widest text-red-400 hover:text-red-300 px-4 py-2 rounded-xl hover:bg-red-500/10"
                    >
                        {"Sign Out"}
                    </button>
                </header>

                <main class="flex-1 overflow-y-auto p-10" data-tab={props.active.key()}>
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavButtonProps {
    label: &'static str,
    active: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(NavButton)]
fn nav_button(props: &NavButtonProps) -> Html {
    let class = if props.active {
        "bg-blue-600 text-white shadow-lg shadow-blue-600/20"
    } else {
        "text-slate-400 hover:bg-white/5 hover:text-white"
    };
    html! {
        <button
            onclick={props.onclick.clone()}
            class={format!("px-4 py-2.5 rounded-xl text-sm font-bold transition-all text-left {}", class)}
        >
            {props.label}
        </button>
    }
}
