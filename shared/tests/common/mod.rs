// Fakes and logging setup shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use kofi_admin_shared::http::{HttpClient, HttpRequest, HttpResponse, TokenStore, Transport};
use kofi_admin_shared::AdminApi;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init()
            .ok();
    });
}

/// Replays queued responses in order and records every request. Files are
/// plain names.
#[derive(Default)]
pub struct Recording {
    replies: RefCell<VecDeque<Result<HttpResponse, String>>>,
    pub seen: RefCell<Vec<HttpRequest<String>>>,
}

impl Recording {
    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, error: &str) -> &Self {
        self.replies.borrow_mut().push_back(Err(error.to_string()));
        self
    }

    pub fn requests(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn last(&self) -> HttpRequest<String> {
        self.seen.borrow().last().cloned().expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for Recording {
    type File = String;

    async fn send(&self, request: HttpRequest<String>) -> Result<HttpResponse, String> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no reply queued".to_string()))
    }
}

/// Token store whose contents the test can inspect while the client owns it.
#[derive(Clone, Default)]
pub struct MemoryTokens(Rc<RefCell<Option<String>>>);

impl MemoryTokens {
    pub fn with(token: &str) -> Self {
        Self(Rc::new(RefCell::new(Some(token.to_string()))))
    }

    pub fn current(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

pub const BASE_URL: &str = "http://localhost:5000/api";

pub fn api(tokens: MemoryTokens) -> AdminApi<Recording, MemoryTokens> {
    init_test_logging();
    AdminApi::new(HttpClient::new(BASE_URL, Recording::default(), tokens))
}
