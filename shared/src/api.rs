//! Typed facade over the admin REST backend: one method per endpoint.
//!
//! Calls that require a session go through [`AdminApi::guarded`]. A 401 from
//! one of them clears the stored token so the caller can drop back to the
//! login screen. Login and password recovery are unguarded since their 401s
//! carry a message meant for the form.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::http::{ApiRequest, FormPart, HttpClient, Method, TokenStore, Transport};
use crate::lifecycle::{OrderStatus, StatusAction};
use crate::models::{
    AdminProfile, ClientProfile, CollectionItem, CreateOrderRequest, DashboardStats, Order, Revision,
};
use crate::orders::OrderFilter;
use crate::pagination::Page;

/// Shown when a quote is sent without a positive base price.
pub const QUOTE_REQUIRED: &str = "Enter a base price greater than zero";

// ============================================
// REQUEST BODIES
// ============================================

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySetupRequest {
    pub secret_question: String,
    pub secret_answer: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub secret_answer: String,
    pub new_password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRequest {
    #[serde(with = "rust_decimal::serde::float")]
    base_price: Decimal,
}

#[derive(Serialize)]
struct StatusRequest<'a> {
    status: &'a str,
}

// ============================================
// REPLY SHAPES
// ============================================

#[derive(Deserialize)]
struct LoginReply {
    token: Option<String>,
}

#[derive(Deserialize)]
struct MeReply {
    #[serde(default)]
    admin: AdminProfile,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionReply {
    secret_question: Option<String>,
}

#[derive(Deserialize)]
struct DataReply<T> {
    data: Option<T>,
}

#[derive(Deserialize)]
struct ListReply<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
    meta: Option<Totals>,
    pagination: Option<Totals>,
}

#[derive(Deserialize)]
struct Totals {
    #[serde(default)]
    total: u64,
}

impl<T> ListReply<T> {
    fn into_page(self) -> Page<T> {
        let total = self
            .meta
            .or(self.pagination)
            .map(|t| t.total)
            .unwrap_or(self.data.len() as u64);
        Page {
            items: self.data,
            total,
        }
    }
}

fn required<T>(value: Option<T>, what: &str) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::Decode(format!("reply is missing {}", what)))
}

// ============================================
// FACADE
// ============================================

pub struct AdminApi<T, S> {
    http: HttpClient<T, S>,
}

impl<T, S> AdminApi<T, S>
where
    T: Transport,
    S: TokenStore,
{
    pub fn new(http: HttpClient<T, S>) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient<T, S> {
        &self.http
    }

    /// Forget the stored session token.
    pub fn logout(&self) {
        self.http.tokens().clear();
        tracing::info!("admin signed out");
    }

    async fn guarded<R: DeserializeOwned>(&self, request: ApiRequest<T::File>) -> ApiResult<R> {
        let result = self.http.call(request).await;
        if let Err(err) = &result {
            if err.is_unauthorized() {
                tracing::info!("session rejected by backend, clearing token");
                self.http.tokens().clear();
            }
        }
        result
    }

    // Auth

    /// Sign in. The token is stored only when the backend reports success and
    /// hands one back.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Post, "/admin/login").json(credentials)?;
        let reply: LoginReply = self.http.call(request).await?;
        let token = required(reply.token.filter(|t| !t.is_empty()), "token")?;
        self.http.tokens().save(&token);
        tracing::info!(email = %credentials.email, "admin signed in");
        Ok(())
    }

    pub async fn me(&self) -> ApiResult<AdminProfile> {
        let reply: MeReply = self.guarded(ApiRequest::get("/admin/me")).await?;
        Ok(reply.admin)
    }

    pub async fn change_password(&self, body: &ChangePasswordRequest) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Post, "/admin/change-password").json(body)?;
        self.guarded::<serde_json::Value>(request).await.map(|_| ())
    }

    pub async fn setup_security(&self, body: &SecuritySetupRequest) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Post, "/admin/setup-security").json(body)?;
        self.guarded::<serde_json::Value>(request).await.map(|_| ())
    }

    /// Security question for `email`. A reply without a question counts as a
    /// rejection with no message.
    pub async fn secret_question(&self, email: &str) -> ApiResult<String> {
        let request = ApiRequest::new(Method::Post, "/admin/forgot-password/question")
            .json(&serde_json::json!({ "email": email }))?;
        let reply: QuestionReply = self.http.call(request).await?;
        reply
            .secret_question
            .filter(|q| !q.trim().is_empty())
            .ok_or(ApiError::Rejected { message: None })
    }

    pub async fn reset_password(&self, body: &ResetPasswordRequest) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Post, "/admin/forgot-password/reset").json(body)?;
        self.http.execute(request).await.map(|_| ())
    }

    // Orders

    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        let reply: DataReply<DashboardStats> = self.guarded(ApiRequest::get("/orders/stats")).await?;
        Ok(reply.data.unwrap_or_default())
    }

    pub async fn orders(&self, page: u32, limit: u32, filter: OrderFilter) -> ApiResult<Page<Order>> {
        let mut request = ApiRequest::get("/orders").query("page", page).query("limit", limit);
        if let Some(status) = filter.status_param() {
            request = request.query("status", status);
        }
        if filter.is_rush() {
            request = request.query("rush", "true");
        }
        let reply: ListReply<Order> = self.guarded(request).await?;
        Ok(reply.into_page())
    }

    pub async fn order(&self, id: &str) -> ApiResult<Order> {
        let reply: DataReply<Order> = self.guarded(ApiRequest::get(format!("/orders/{}", id))).await?;
        required(reply.data, "order")
    }

    pub async fn create_order(&self, body: &CreateOrderRequest) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Post, "/orders/manual").json(body)?;
        self.guarded::<serde_json::Value>(request).await.map(|_| ())
    }

    pub async fn send_quote(&self, id: &str, base_price: Decimal) -> ApiResult<Order> {
        let request = ApiRequest::new(Method::Patch, format!("/orders/{}/quote", id))
            .json(&QuoteRequest { base_price })?;
        self.updated_order(request).await
    }

    pub async fn confirm_deposit(&self, id: &str) -> ApiResult<Order> {
        let request = ApiRequest::new(Method::Patch, format!("/orders/{}/confirm-deposit", id));
        self.updated_order(request).await
    }

    pub async fn update_status(&self, id: &str, status: &OrderStatus) -> ApiResult<Order> {
        let request = ApiRequest::new(Method::Patch, format!("/orders/{}/status", id))
            .json(&StatusRequest { status: status.as_str() })?;
        self.updated_order(request).await
    }

    /// Run the lifecycle action offered by the detail view. `SendQuote` needs a
    /// strictly positive base price and is refused locally without one.
    pub async fn perform(&self, id: &str, action: &StatusAction, base_price: Option<Decimal>) -> ApiResult<Order> {
        let updated = match action {
            StatusAction::SendQuote => match base_price.filter(|p| *p > Decimal::ZERO) {
                Some(price) => self.send_quote(id, price).await,
                None => Err(ApiError::Invalid(QUOTE_REQUIRED.to_string())),
            },
            StatusAction::ConfirmDeposit => self.confirm_deposit(id).await,
            StatusAction::Advance(next) => self.update_status(id, next).await,
        }?;
        let expected = action.expected_status();
        if updated.status != expected {
            tracing::warn!(order = %id, expected = %expected, reported = %updated.status, "backend reported an unexpected status");
        }
        Ok(updated)
    }

    async fn updated_order(&self, request: ApiRequest<T::File>) -> ApiResult<Order> {
        let reply: DataReply<Order> = self.guarded(request).await?;
        required(reply.data, "order")
    }

    // Clients

    pub async fn clients(&self, page: u32, limit: u32) -> ApiResult<Page<ClientProfile>> {
        let request = ApiRequest::get("/users").query("page", page).query("limit", limit);
        let reply: ListReply<ClientProfile> = self.guarded(request).await?;
        Ok(reply.into_page())
    }

    // Revisions

    pub async fn revisions(&self, order_id: &str) -> ApiResult<Vec<Revision>> {
        let request = ApiRequest::get(format!("/revisions/order/{}", order_id));
        let reply: ListReply<Revision> = self.guarded(request).await?;
        Ok(reply.data)
    }

    pub async fn update_revision_status(&self, revision_id: &str, status: &str) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Patch, format!("/revisions/admin/status/{}", revision_id))
            .json(&StatusRequest { status })?;
        self.guarded::<serde_json::Value>(request).await.map(|_| ())
    }

    // Collections

    pub async fn collections(&self) -> ApiResult<Vec<CollectionItem>> {
        let reply: ListReply<CollectionItem> = self.guarded(ApiRequest::get("/collections")).await?;
        Ok(reply.data)
    }

    pub async fn create_collection_item(&self, parts: Vec<(String, FormPart<T::File>)>) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Post, "/collections").multipart(parts);
        self.guarded::<serde_json::Value>(request).await.map(|_| ())
    }

    pub async fn update_collection_item(
        &self,
        id: &str,
        parts: Vec<(String, FormPart<T::File>)>,
    ) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Put, format!("/collections/{}", id)).multipart(parts);
        self.guarded::<serde_json::Value>(request).await.map(|_| ())
    }

    pub async fn delete_collection_item(&self, id: &str) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Delete, format!("/collections/{}", id));
        self.guarded::<serde_json::Value>(request).await.map(|_| ())
    }
}
