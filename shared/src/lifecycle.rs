//! Order lifecycle: the fixed status set and the single outbound action each
//! status offers in the order detail view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage reported by the backend. Unknown strings survive as
/// `Other` so a newer backend never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    FormSubmitted,
    BillSent,
    Paid,
    InProgress,
    Ready,
    Delivered,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::FormSubmitted => "form_submitted",
            OrderStatus::BillSent => "bill_sent",
            OrderStatus::Paid => "paid",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// Badge text in the detail modal, e.g. `IN PROGRESS`.
    pub fn badge_label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }

    /// Short status shown in the orders table.
    pub fn list_label(&self) -> String {
        match self.as_str() {
            "form_submitted" => "Pending".to_string(),
            "deposit_paid" => "In Progress".to_string(),
            "shipped" => "Shipped".to_string(),
            other => other.replace('_', " "),
        }
    }

    /// The one action offered for this status, if any. Total over every
    /// status: terminal and unrecognised stages map to `None`.
    pub fn action(&self) -> Option<StatusAction> {
        match self {
            OrderStatus::FormSubmitted => Some(StatusAction::SendQuote),
            OrderStatus::BillSent => Some(StatusAction::ConfirmDeposit),
            OrderStatus::Paid => Some(StatusAction::Advance(OrderStatus::InProgress)),
            OrderStatus::InProgress => Some(StatusAction::Advance(OrderStatus::Ready)),
            OrderStatus::Ready => Some(StatusAction::Advance(OrderStatus::Delivered)),
            OrderStatus::Delivered | OrderStatus::Other(_) => None,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "form_submitted" => OrderStatus::FormSubmitted,
            "bill_sent" => OrderStatus::BillSent,
            "paid" => OrderStatus::Paid,
            "in_progress" => OrderStatus::InProgress,
            "ready" => OrderStatus::Ready,
            "delivered" => OrderStatus::Delivered,
            _ => OrderStatus::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button rendered in the order detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusAction {
    /// `PATCH /orders/:id/quote` with a base price.
    SendQuote,
    /// `PATCH /orders/:id/confirm-deposit`.
    ConfirmDeposit,
    /// `PATCH /orders/:id/status` with the given next stage.
    Advance(OrderStatus),
}

impl StatusAction {
    pub fn label(&self) -> &'static str {
        match self {
            StatusAction::SendQuote => "Send Quote & Notify User",
            StatusAction::ConfirmDeposit => "Confirm Deposit Payment",
            StatusAction::Advance(OrderStatus::InProgress) => "Start Production",
            StatusAction::Advance(OrderStatus::Ready) => "Mark Ready for Pickup",
            StatusAction::Advance(OrderStatus::Delivered) => "Mark Delivered",
            StatusAction::Advance(_) => "Advance Status",
        }
    }

    /// Stage the backend is expected to report after this action succeeds.
    pub fn expected_status(&self) -> OrderStatus {
        match self {
            StatusAction::SendQuote => OrderStatus::BillSent,
            StatusAction::ConfirmDeposit => OrderStatus::Paid,
            StatusAction::Advance(next) => next.clone(),
        }
    }
}

/// Parse the base price typed into the quote box. Only strictly positive
/// amounts produce a quote.
pub fn parse_quote(input: &str) -> Option<Decimal> {
    Decimal::from_str(input.trim())
        .ok()
        .filter(|price| *price > Decimal::ZERO)
}
