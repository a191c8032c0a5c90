use chrono::{Local, NaiveDate};
use console::style;
use rust_decimal::Decimal;

use crate::models::cart::Cart;

pub const EMPTY_CART: &str = "SHOPPING CART IS EMPTY";

/// Renders an amount without forced decimal places: `189`, `9.99`, `1.5`.
pub fn format_money(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Header, item count, one cost line per item and the grand total.
/// An empty cart renders the header followed by the empty notice.
pub fn format_cart_summary(cart: &Cart) -> String {
    let mut lines = vec![cart.header()];

    if cart.is_empty() {
        lines.push(EMPTY_CART.to_string());
        return lines.join("\n");
    }

    lines.push(format!("Number of Items: {}", cart.total_quantity()));
    lines.push(String::new());
    lines.extend(cart.items().iter().map(|item| item.cost_line()));
    lines.push(String::new());
    lines.push(format!("Total: ${}", format_money(cart.total_cost())));

    lines.join("\n")
}

pub fn format_cart_descriptions(cart: &Cart) -> String {
    let mut lines = vec![cart.header()];

    if cart.is_empty() {
        lines.push(EMPTY_CART.to_string());
        return lines.join("\n");
    }

    lines.push("Item Descriptions".to_string());
    lines.extend(cart.items().iter().map(|item| item.description_line()));

    lines.join("\n")
}

/// Date label in the style `March 1, 2020`.
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn today_label() -> String {
    format_date_label(Local::now().date_naive())
}

pub fn format_heading(text: &str) -> String {
    style(text).bold().cyan().to_string()
}

pub fn format_notice(text: &str) -> String {
    style(text).yellow().to_string()
}
