//! Orders list state: the filter tabs, the search box and the page, plus the
//! client-side search applied to whatever page came back.

use crate::models::Order;
use crate::pagination::Pager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderFilter {
    #[default]
    All,
    Rush,
    Pending,
    Completed,
}

impl OrderFilter {
    pub const TABS: [OrderFilter; 4] = [
        OrderFilter::All,
        OrderFilter::Rush,
        OrderFilter::Pending,
        OrderFilter::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderFilter::All => "All",
            OrderFilter::Rush => "Rush",
            OrderFilter::Pending => "Pending",
            OrderFilter::Completed => "Completed",
        }
    }

    /// Value of the `status` query parameter, if this tab sends one.
    pub fn status_param(&self) -> Option<&'static str> {
        match self {
            OrderFilter::Pending => Some("Pending"),
            OrderFilter::Completed => Some("Completed"),
            OrderFilter::All | OrderFilter::Rush => None,
        }
    }

    pub fn is_rush(&self) -> bool {
        matches!(self, OrderFilter::Rush)
    }
}

/// Everything that decides which orders page to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuery {
    pub pager: Pager,
    pub filter: OrderFilter,
    pub search: String,
}

impl OrderQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            pager: Pager::new(limit),
            filter: OrderFilter::All,
            search: String::new(),
        }
    }

    /// Switch tab; starts over from page 1.
    pub fn with_filter(&self, filter: OrderFilter) -> Self {
        Self {
            pager: self.pager.first(),
            filter,
            search: self.search.clone(),
        }
    }

    /// New search text; starts over from page 1.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            pager: self.pager.first(),
            filter: self.filter,
            search: search.into(),
        }
    }

    pub fn with_pager(&self, pager: Pager) -> Self {
        Self {
            pager,
            ..self.clone()
        }
    }
}

/// Case-insensitive substring match on display id, client name and telegram
/// handle. A blank query matches everything.
pub fn matches_search(order: &Order, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [order.display_id(), order.client_name().to_string(), order.telegram_handle()]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn search_orders(orders: Vec<Order>, query: &str) -> Vec<Order> {
    orders.into_iter().filter(|o| matches_search(o, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(id: &str, name: &str, handle: &str) -> Order {
        serde_json::from_value(json!({
            "_id": id,
            "telegramId": handle,
            "clientProfile": { "fullName": name },
            "status": "form_submitted"
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_params() {
        assert_eq!(OrderFilter::All.status_param(), None);
        assert!(!OrderFilter::All.is_rush());
        assert_eq!(OrderFilter::Rush.status_param(), None);
        assert!(OrderFilter::Rush.is_rush());
        assert_eq!(OrderFilter::Pending.status_param(), Some("Pending"));
        assert_eq!(OrderFilter::Completed.status_param(), Some("Completed"));
    }

    #[test]
    fn test_filter_and_search_reset_page() {
        let query = OrderQuery::new(10);
        let query = query.with_pager(query.pager.with_total(50).goto(3));
        assert_eq!(query.pager.page, 3);

        let filtered = query.with_filter(OrderFilter::Rush);
        assert_eq!(filtered.pager.page, 1);
        assert_eq!(filtered.pager.total, 50);

        let searched = query.with_search("selam");
        assert_eq!(searched.pager.page, 1);
        assert_eq!(searched.filter, OrderFilter::All);
    }

    #[test]
    fn test_search_matches_id_name_and_handle() {
        let orders = vec![
            order("65f1000000000000000aab9f", "Selam Tesfaye", "selam_t"),
            order("65f1000000000000000a0001", "Hana Girma", "hana_g"),
        ];
        assert_eq!(search_orders(orders.clone(), "").len(), 2);
        assert_eq!(search_orders(orders.clone(), "kd-ab9f")[0].client_name(), "Selam Tesfaye");
        assert_eq!(search_orders(orders.clone(), "GIRMA")[0].display_id(), "#KD-0001");
        assert_eq!(search_orders(orders.clone(), "@hana").len(), 1);
        assert!(search_orders(orders, "nobody").is_empty());
    }
}
