use chrono::{DateTime, Utc};
use kofi_admin_shared::OrderStatus;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// First file picked in an `<input type="file">`.
pub fn selected_file(e: &Event) -> Option<web_sys::File> {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Badge colours per lifecycle stage.
pub fn status_badge_class(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::FormSubmitted => "bg-slate-500/10 border-slate-500/20 text-slate-400",
        OrderStatus::BillSent => "bg-blue-500/10 border-blue-500/20 text-blue-400",
        OrderStatus::Paid => "bg-emerald-500/10 border-emerald-500/20 text-emerald-400",
        OrderStatus::InProgress => "bg-amber-500/10 border-amber-500/20 text-amber-400",
        OrderStatus::Ready => "bg-purple-500/10 border-purple-500/20 text-purple-400",
        OrderStatus::Delivered => "bg-green-500/10 border-green-500/20 text-green-400",
        OrderStatus::Other(_) => "bg-slate-500/10 border-slate-500/20 text-slate-400",
    }
}

pub fn now() -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
}

/// Dashboard heading date, e.g. `Friday, October 16`.
pub fn heading_date(now: Option<DateTime<Utc>>) -> String {
    now.map(|dt| dt.format("%A, %B %-d").to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_heading_date() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        assert_eq!(heading_date(Some(dt)), "Friday, October 16");
        assert_eq!(heading_date(None), "");
    }

    #[test]
    fn test_unknown_status_uses_neutral_badge() {
        let unknown = OrderStatus::Other("shipped".into());
        assert_eq!(status_badge_class(&unknown), status_badge_class(&OrderStatus::FormSubmitted));
        assert_ne!(status_badge_class(&OrderStatus::Paid), status_badge_class(&OrderStatus::Ready));
    }
}
