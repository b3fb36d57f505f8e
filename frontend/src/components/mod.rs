pub mod auth;
pub mod create_order;
pub mod layout;
pub mod order_detail;

pub use auth::*;
