// Browser side of the API client: gloo-net transport and localStorage token
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};
use kofi_admin_shared::config::{Config, TOKEN_STORAGE_KEY};
use kofi_admin_shared::http::{FormPart, HttpClient, HttpRequest, HttpResponse, Method, RequestBody, TokenStore, Transport};
use kofi_admin_shared::AdminApi;
use std::sync::OnceLock;
use web_sys::FormData;

pub type Api = AdminApi<FetchTransport, BrowserTokenStore>;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Build-time configuration (`KOFI_API_URL`, `KOFI_LOG_LEVEL`).
pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        Config::from_lookup(|key| match key {
            "KOFI_API_URL" => option_env!("KOFI_API_URL").map(str::to_string),
            "KOFI_LOG_LEVEL" => option_env!("KOFI_LOG_LEVEL").map(str::to_string),
            _ => None,
        })
    })
}

pub fn api() -> Api {
    AdminApi::new(HttpClient::new(
        config().api_base_url.clone(),
        FetchTransport,
        BrowserTokenStore,
    ))
}

// ============================================
// TOKEN STORAGE
// ============================================

/// Raw string under `admin_token`, no JSON quoting.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        if LocalStorage::raw().set_item(TOKEN_STORAGE_KEY, token).is_err() {
            tracing::warn!("could not persist the session token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }
}

// ============================================
// HTTP TRANSPORT
// ============================================

#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

fn form_data(parts: Vec<(String, FormPart<web_sys::File>)>) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{:?}", e))?;
    for (name, part) in parts {
        match part {
            FormPart::Text(value) => form.append_with_str(&name, &value),
            FormPart::File(file) => form.append_with_blob_and_filename(&name, &file, &file.name()),
        }
        .map_err(|e| format!("{:?}", e))?;
    }
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    type File = web_sys::File;

    async fn send(&self, request: HttpRequest<web_sys::File>) -> Result<HttpResponse, String> {
        let mut req = builder(request.method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }

        // The browser sets the multipart boundary itself.
        let response = match request.body {
            RequestBody::Empty => req.send().await,
            RequestBody::Json(value) => req.body(value.to_string()).map_err(|e| e.to_string())?.send().await,
            RequestBody::Multipart(parts) => req.body(form_data(parts)?).map_err(|e| e.to_string())?.send().await,
        }
        .map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(HttpResponse { status, body })
    }
}
