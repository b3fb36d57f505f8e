//! HTTP client wrapper: base URL handling, bearer token injection and reply
//! classification. The actual I/O sits behind [`Transport`] so the same
//! client drives `gloo-net` in the browser and a recording fake in tests.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::error::{ApiError, ApiResult, ReplyStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

/// One part of a multipart form. `F` is the platform's file handle.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart<F> {
    Text(String),
    File(F),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<(String, FormPart<F>)>),
}

/// Fully resolved request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest<F> {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody<F>,
}

impl<F> HttpRequest<F> {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Raw request execution. Futures are not `Send` because browser fetch
/// futures are not.
#[async_trait(?Send)]
pub trait Transport {
    type File: Clone;

    /// Only transport failures are errors here; any HTTP status is a response.
    async fn send(&self, request: HttpRequest<Self::File>) -> Result<HttpResponse, String>;
}

/// Persistent home of the session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Relative endpoint plus query and body, before the base URL and auth
/// header are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest<F> {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody<F>,
}

impl<F> ApiRequest<F> {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, parts: Vec<(String, FormPart<F>)>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }
}

pub struct HttpClient<T, S> {
    base_url: String,
    transport: T,
    tokens: S,
}

impl<T, S> HttpClient<T, S>
where
    T: Transport,
    S: TokenStore,
{
    pub fn new(base_url: impl Into<String>, transport: T, tokens: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            tokens,
        }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Execute a request and return the raw JSON reply. Non-2xx replies and
    /// `success: false` bodies become errors carrying the backend message.
    pub async fn execute(&self, request: ApiRequest<T::File>) -> ApiResult<serde_json::Value> {
        let url = self.url_for(&request.path, &request.query);
        let mut headers = Vec::new();
        if matches!(request.body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.tokens.load() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        tracing::debug!(method = %request.method, %url, "sending request");

        let response = self
            .transport
            .send(HttpRequest {
                method: request.method,
                url: url.clone(),
                headers,
                body: request.body,
            })
            .await
            .map_err(|e| {
                tracing::warn!(method = %request.method, %url, error = %e, "transport failure");
                ApiError::Network(e)
            })?;

        let body: serde_json::Value = if response.body.trim().is_empty() {
            serde_json::Value::Null
        } else if response.ok() {
            serde_json::from_str(&response.body)?
        } else {
            serde_json::from_str(&response.body).unwrap_or(serde_json::Value::Null)
        };
        let reply: ReplyStatus = serde_json::from_value(body.clone()).unwrap_or_default();

        if !response.ok() {
            tracing::warn!(status = response.status, %url, "request failed");
            return Err(ApiError::Status {
                status: response.status,
                message: reply.message,
            });
        }
        if reply.success == Some(false) {
            tracing::warn!(%url, message = ?reply.message, "request rejected by backend");
            return Err(ApiError::Rejected {
                message: reply.message,
            });
        }
        Ok(body)
    }

    /// Execute and decode the reply into `R`.
    pub async fn call<R: DeserializeOwned>(&self, request: ApiRequest<T::File>) -> ApiResult<R> {
        let body = self.execute(request).await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Canned {
        status: u16,
        body: &'static str,
        seen: RefCell<Vec<HttpRequest<()>>>,
    }

    #[async_trait(?Send)]
    impl Transport for Canned {
        type File = ();

        async fn send(&self, request: HttpRequest<()>) -> Result<HttpResponse, String> {
            self.seen.borrow_mut().push(request);
            Ok(HttpResponse {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    struct Fixed(Option<&'static str>);

    impl TokenStore for Fixed {
        fn load(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
        fn save(&self, _token: &str) {}
        fn clear(&self) {}
    }

    fn client(status: u16, body: &'static str, token: Option<&'static str>) -> HttpClient<Canned, Fixed> {
        let transport = Canned {
            status,
            body,
            seen: RefCell::new(Vec::new()),
        };
        HttpClient::new("http://localhost:5000/api/", transport, Fixed(token))
    }

    #[test]
    fn test_url_building_encodes_query() {
        let client = client(200, "{}", None);
        let url = client.url_for(
            "/orders",
            &[("page".into(), "1".into()), ("status".into(), "in progress&x".into())],
        );
        assert_eq!(url, "http://localhost:5000/api/orders?page=1&status=in%20progress%26x");
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        let with = client(200, "{\"success\":true}", Some("tok"));
        tokio_test::block_on(with.execute(ApiRequest::get("/admin/me"))).unwrap();
        let seen = with.transport.seen.borrow();
        assert_eq!(seen[0].header("authorization"), Some("Bearer tok"));
        assert_eq!(seen[0].header("content-type"), None);

        let without = client(200, "{}", None);
        tokio_test::block_on(without.execute(ApiRequest::get("/collections"))).unwrap();
        assert_eq!(without.transport.seen.borrow()[0].header("Authorization"), None);
    }

    #[test]
    fn test_status_and_rejection_classification() {
        let failed = client(401, "{\"success\":false,\"message\":\"Invalid credentials\"}", None);
        let err = tokio_test::block_on(failed.execute(ApiRequest::get("/x"))).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 401, message: Some("Invalid credentials".into()) });

        let html = client(502, "<html>bad gateway</html>", None);
        let err = tokio_test::block_on(html.execute(ApiRequest::get("/x"))).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502, message: None });

        let rejected = client(200, "{\"success\":false,\"message\":\"Nope\"}", None);
        let err = tokio_test::block_on(rejected.execute(ApiRequest::get("/x"))).unwrap_err();
        assert_eq!(err, ApiError::Rejected { message: Some("Nope".into()) });

        let garbage = client(200, "not json", None);
        let err = tokio_test::block_on(garbage.execute(ApiRequest::get("/x"))).unwrap_err();
        assert_eq!(err.code(), "PARSE_ERROR");
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let client = client(200, "", None);
        let request = ApiRequest::new(Method::Patch, "/orders/1/status")
            .json(&serde_json::json!({ "status": "ready" }))
            .unwrap();
        let body = tokio_test::block_on(client.execute(request)).unwrap();
        assert_eq!(body, serde_json::Value::Null);

        let seen = client.transport.seen.borrow();
        assert_eq!(seen[0].method, Method::Patch);
        assert_eq!(seen[0].header("Content-Type"), Some("application/json"));
        assert_eq!(seen[0].body, RequestBody::Json(serde_json::json!({ "status": "ready" })));
    }
}
