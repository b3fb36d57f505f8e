use yew::prelude::*;

mod components;
mod logging;
mod pages;
mod services;
mod utils;

use components::layout::{Layout, Tab};
use components::{AuthContext, AuthProvider, LoginScreen};
use pages::{
    clients::ClientsPage,
    collections::CollectionsPage,
    dashboard::DashboardPage,
    orders::OrdersPage,
    revisions::RevisionsPage,
    settings::SettingsPage,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const FONTS_CSS: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;700;900&display=swap";

fn view(tab: Tab) -> Html {
    match tab {
        Tab::Dashboard => html! { <DashboardPage /> },
        Tab::Orders | Tab::OrdersTop => html! { <OrdersPage /> },
        Tab::Revisions => html! { <RevisionsPage /> },
        Tab::Collections => html! { <CollectionsPage /> },
        Tab::Clients => html! { <ClientsPage /> },
        Tab::Settings => html! { <SettingsPage /> },
    }
}

#[function_component(Console)]
fn console() -> Html {
    let auth_ctx = use_context::<AuthContext>().unwrap_or_default();
    let active = use_state(|| Tab::Dashboard);

    // If not authenticated, show the login screen
    if !auth_ctx.session.is_signed_in() {
        return html! { <LoginScreen /> };
    }

    let on_select = {
        let active = active.clone();
        Callback::from(move |tab: Tab| {
            tracing::debug!(tab = tab.key(), "switching section");
            active.set(tab);
        })
    };

    html! {
        <Layout active={*active} {on_select}>
            { view(*active) }
        </Layout>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <AuthProvider>
            <Console />
        </AuthProvider>
    }
}

/// Append a `<script>` or `<link>` to the document head.
fn inject(tag: &str, attributes: &[(&str, &str)]) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };
    let Ok(element) = document.create_element(tag) else {
        return;
    };
    for (name, value) in attributes {
        if element.set_attribute(name, value).is_err() {
            tracing::warn!(tag, attribute = *name, "could not set attribute");
        }
    }
    if head.append_child(&element).is_err() {
        tracing::warn!(tag, "could not append to <head>");
    }
}

fn main() {
    let config = services::config();
    logging::init(&config.log_level);
    tracing::info!(api = %config.api_base_url, "starting admin console");

    inject("script", &[("src", TAILWIND_CDN)]);
    inject("link", &[("href", FONTS_CSS), ("rel", "stylesheet")]);

    yew::Renderer::<App>::new().render();
}
