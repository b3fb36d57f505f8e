//! Target-independent core of the Kofi Design admin console: domain models,
//! the admin API client and the UI state machines that do not need a browser.

pub mod api;
pub mod collections;
pub mod config;
pub mod debounce;
pub mod error;
pub mod format;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod orders;
pub mod pagination;
pub mod recovery;
pub mod session;
pub mod settings;

pub use api::AdminApi;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use http::{HttpClient, TokenStore, Transport};
pub use lifecycle::{OrderStatus, StatusAction};
pub use models::*;
pub use pagination::{LatestRequest, Page, Pager};
pub use session::Session;
