use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crate::lifecycle::OrderStatus;

// ============================================
// ORDERS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub telegram_id: Option<String>,
    pub client_profile: Option<ClientSummary>,
    pub order_type: Option<String>,
    pub occasion: Option<String>,
    pub event_date: Option<String>,
    pub preferred_delivery_date: Option<String>,
    #[serde(default)]
    pub is_rush_order: bool,
    pub rush_multiplier: Option<f64>,
    #[serde(default)]
    pub measurements: BTreeMap<String, serde_json::Value>,
    pub base_price: Option<Decimal>,
    pub total_price: Option<Decimal>,
    pub deposit_amount: Option<Decimal>,
    pub status: OrderStatus,
    #[serde(default)]
    pub revision_count: u32,
    pub inspiration_photo: Option<String>,
    pub collection_id: Option<CollectionRef>,
    pub color_preference: Option<String>,
    pub body_concerns: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Order {
    /// Human-facing reference, `#KD-` plus the last four id characters.
    pub fn display_id(&self) -> String {
        let chars: Vec<char> = self.id.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("#KD-{}", tail.to_uppercase())
    }

    pub fn client_name(&self) -> &str {
        self.client_profile
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Anonymous")
    }

    pub fn telegram_handle(&self) -> String {
        match self.telegram_id.as_deref() {
            Some(handle) if !handle.is_empty() => format!("@{}", handle),
            _ => "No Handle".to_string(),
        }
    }

    pub fn is_rush(&self) -> bool {
        self.is_rush_order || self.rush_multiplier.map(|m| m > 1.0).unwrap_or(false)
    }

    pub fn type_label(&self) -> String {
        order_type_label(self.order_type.as_deref().unwrap_or(""))
    }

    /// Numeric measurements with readable labels (`shoulderWidth` becomes
    /// `Shoulder Width`). Non-numeric entries are skipped.
    pub fn measurement_entries(&self) -> Vec<(String, f64)> {
        self.measurements
            .iter()
            .filter_map(|(key, value)| value.as_f64().map(|v| (humanize_key(key), v)))
            .collect()
    }

    /// Image attached to the order: the client's inspiration photo, else the
    /// populated collection item's image.
    pub fn reference_image(&self) -> Option<&str> {
        self.inspiration_photo
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| match &self.collection_id {
                Some(CollectionRef::Item(item)) => item.image.as_deref(),
                _ => None,
            })
    }
}

/// `collectionId` arrives either populated or as a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionRef {
    Item(CollectionItem),
    Id(String),
}

impl CollectionRef {
    pub fn title(&self) -> Option<&str> {
        match self {
            CollectionRef::Item(item) => Some(item.title.as_str()),
            CollectionRef::Id(_) => None,
        }
    }
}

pub const ORDER_TYPES: [(&str, &str); 2] = [
    ("custom_event_dress", "Custom Event Dress"),
    ("signature_dress", "Signature Dress"),
];

pub const OCCASIONS: [(&str, &str); 4] = [
    ("party", "Party"),
    ("wedding", "Wedding"),
    ("graduation", "Graduation"),
    ("other", "Other"),
];

pub fn order_type_label(raw: &str) -> String {
    ORDER_TYPES
        .iter()
        .find(|(value, _)| *value == raw)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| raw.replace('_', " "))
}

fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

/// Body of `POST /orders/manual` for walk-in clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub full_name: String,
    pub phone_number: String,
    pub city: String,
    pub order_type: String,
    pub occasion: String,
    pub event_date: String,
    pub preferred_delivery_date: String,
    pub measurements: Measurements,
}

impl Default for CreateOrderRequest {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone_number: String::new(),
            city: String::new(),
            order_type: ORDER_TYPES[0].0.to_string(),
            occasion: OCCASIONS[0].0.to_string(),
            event_date: String::new(),
            preferred_delivery_date: String::new(),
            measurements: Measurements::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    pub bust: f64,
    pub waist: f64,
    pub hips: f64,
    pub shoulder_width: f64,
    pub dress_length: f64,
    pub arm_length: f64,
    pub height: f64,
}

impl Measurements {
    /// Wire name and form label for every field, in form order.
    pub const FIELDS: [(&'static str, &'static str); 7] = [
        ("bust", "Bust"),
        ("waist", "Waist"),
        ("hips", "Hips"),
        ("shoulderWidth", "Shoulder Width"),
        ("dressLength", "Dress Length"),
        ("armLength", "Arm Length"),
        ("height", "Height"),
    ];

    /// Returns false for an unknown field name.
    pub fn set(&mut self, field: &str, value: f64) -> bool {
        let slot = match field {
            "bust" => &mut self.bust,
            "waist" => &mut self.waist,
            "hips" => &mut self.hips,
            "shoulderWidth" => &mut self.shoulder_width,
            "dressLength" => &mut self.dress_length,
            "armLength" => &mut self.arm_length,
            "height" => &mut self.height,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Measurement boxes as typed. A cleared box stays empty on screen and is
/// sent as zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasurementInputs {
    raw: BTreeMap<String, String>,
}

impl MeasurementInputs {
    pub fn raw(&self, field: &str) -> &str {
        self.raw.get(field).map(String::as_str).unwrap_or("")
    }

    /// Returns false for an unknown field name.
    pub fn set_raw(&mut self, field: &str, value: String) -> bool {
        if !Measurements::FIELDS.iter().any(|(name, _)| *name == field) {
            return false;
        }
        self.raw.insert(field.to_string(), value);
        true
    }

    pub fn parse(&self) -> Measurements {
        let mut out = Measurements::default();
        for (field, _) in Measurements::FIELDS {
            let value = self
                .raw(field)
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(0.0);
            out.set(field, value);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub active_orders_count: u64,
    pub pending_quotes_count: u64,
    pub rush_orders_count: u64,
    pub ready_orders_count: u64,
    pub total_revenue: Decimal,
    pub balance_due: Decimal,
    pub total_orders: u64,
}

// ============================================
// CLIENTS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub telegram_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub city: String,
    pub instagram_handle: Option<String>,
    #[serde(default)]
    pub total_orders: u32,
    pub created_at: Option<String>,
}

impl ClientProfile {
    pub fn initial(&self) -> char {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

// ============================================
// COLLECTIONS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

// ============================================
// REVISIONS
// ============================================

/// Parent order of a revision, populated or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderRef {
    Id(String),
    Order {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl OrderRef {
    pub fn id(&self) -> &str {
        match self {
            OrderRef::Id(id) | OrderRef::Order { id } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    #[serde(rename = "_id")]
    pub id: String,
    pub order: Option<OrderRef>,
    #[serde(default)]
    pub changes_requested: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub revision_photos: Vec<String>,
    pub created_at: Option<String>,
}

impl Revision {
    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case("pending")
    }
}

// ============================================
// ADMIN ACCOUNT
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub email: Option<String>,
    pub secret_question: Option<String>,
}

impl AdminProfile {
    pub fn has_security_question(&self) -> bool {
        self.secret_question
            .as_deref()
            .map(|q| !q.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_order() -> Order {
        serde_json::from_value(json!({
            "_id": "65f1c2a9e4b0a1b2c3d4ab9f",
            "telegramId": "selam_t",
            "clientProfile": { "fullName": "Selam Tesfaye", "phoneNumber": "+251911234567", "city": "Addis Ababa" },
            "orderType": "custom_event_dress",
            "occasion": "wedding",
            "eventDate": "2026-11-20T00:00:00.000Z",
            "isRushOrder": false,
            "rushMultiplier": 1.2,
            "measurements": { "bust": 88, "shoulderWidth": 38.5, "_id": "abc" },
            "basePrice": 12500,
            "status": "paid",
            "revisionCount": 1
        }))
        .unwrap()
    }

    #[test]
    fn test_order_decoding_and_display() {
        let order = sample_order();
        assert_eq!(order.display_id(), "#KD-AB9F");
        assert_eq!(order.client_name(), "Selam Tesfaye");
        assert_eq!(order.telegram_handle(), "@selam_t");
        assert!(order.is_rush());
        assert_eq!(order.type_label(), "Custom Event Dress");
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.base_price, Some(Decimal::new(12500, 0)));
        assert_eq!(
            order.measurement_entries(),
            vec![("Bust".to_string(), 88.0), ("Shoulder Width".to_string(), 38.5)]
        );
    }

    #[test]
    fn test_anonymous_order() {
        let order: Order = serde_json::from_value(json!({
            "_id": "ab1",
            "status": "form_submitted"
        }))
        .unwrap();
        assert_eq!(order.display_id(), "#KD-AB1");
        assert_eq!(order.client_name(), "Anonymous");
        assert_eq!(order.telegram_handle(), "No Handle");
        assert!(!order.is_rush());
        assert_eq!(order.reference_image(), None);
    }

    #[test]
    fn test_collection_ref_variants() {
        let populated: Order = serde_json::from_value(json!({
            "_id": "1", "status": "paid",
            "collectionId": { "_id": "c1", "title": "Midnight Silk", "image": "silk.jpg", "tags": [] }
        }))
        .unwrap();
        assert_eq!(populated.collection_id.as_ref().and_then(|c| c.title()), Some("Midnight Silk"));
        assert_eq!(populated.reference_image(), Some("silk.jpg"));

        let bare: Order = serde_json::from_value(json!({ "_id": "1", "status": "paid", "collectionId": "c1" })).unwrap();
        assert_eq!(bare.collection_id, Some(CollectionRef::Id("c1".into())));
    }

    #[test]
    fn test_create_order_request_wire_format() {
        let mut req = CreateOrderRequest::default();
        req.full_name = "Jane Doe".into();
        assert!(req.measurements.set("shoulderWidth", 40.0));
        assert!(!req.measurements.set("inseam", 1.0));

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["fullName"], "Jane Doe");
        assert_eq!(value["orderType"], "custom_event_dress");
        assert_eq!(value["occasion"], "party");
        assert_eq!(value["measurements"]["shoulderWidth"], 40.0);
        assert_eq!(req.measurements.shoulder_width, 40.0);
    }

    #[test]
    fn test_cleared_measurement_stays_blank_until_submit() {
        let mut inputs = MeasurementInputs::default();
        assert!(inputs.set_raw("bust", "88.5".into()));
        assert!(inputs.set_raw("waist", "70".into()));
        assert!(inputs.set_raw("waist", String::new()));
        assert!(inputs.set_raw("hips", "abc".into()));
        assert!(!inputs.set_raw("inseam", "80".into()));

        assert_eq!(inputs.raw("waist"), "");
        assert_eq!(inputs.raw("height"), "");

        let parsed = inputs.parse();
        assert_eq!(parsed.bust, 88.5);
        assert_eq!(parsed.waist, 0.0);
        assert_eq!(parsed.hips, 0.0);
    }

    #[test]
    fn test_revision_and_profile() {
        let rev: Revision = serde_json::from_value(json!({
            "_id": "r1", "order": { "_id": "o1" }, "changesRequested": "Shorten hem", "status": "PENDING"
        }))
        .unwrap();
        assert!(rev.is_pending());
        assert_eq!(rev.order.as_ref().map(|o| o.id()), Some("o1"));

        let profile: AdminProfile = serde_json::from_value(json!({ "email": "admin@kofidesign.com" })).unwrap();
        assert!(!profile.has_security_question());
    }

    #[test]
    fn test_stats_default_missing_fields() {
        let stats: DashboardStats = serde_json::from_value(json!({ "rushOrdersCount": 3, "totalRevenue": 1500.5 })).unwrap();
        assert_eq!(stats.rush_orders_count, 3);
        assert_eq!(stats.ready_orders_count, 0);
        assert_eq!(stats.total_revenue, Decimal::new(15005, 1));
    }
}
