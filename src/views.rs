use crate::models::{Balance, Tickets};
use crate::price::PriceSnapshot;
use serde::Serialize;

pub const TICKET_SEPARATOR: &str = " | ";
pub const NATIVE_UNIT: &str = "DCR";

/// Shared price cache entry: written by the price task, read by the views.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "snapshot", rename_all = "snake_case")]
pub enum PriceState {
    #[default]
    NotLoaded,
    Loaded(PriceSnapshot),
}

impl PriceState {
    /// Price used for display; zero until the first snapshot arrives.
    pub fn current_price(&self) -> f64 {
        match self {
            Self::NotLoaded => 0.0,
            Self::Loaded(snapshot) => snapshot.price,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

pub fn currency_label(currency: &str) -> String {
    format!("{} ", currency.to_ascii_uppercase())
}

pub fn format_fiat(amount: f64, price: f64) -> String {
    let text = format!("{:.2}", amount * price);
    // A value that rounds to zero is shown unsigned.
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}

pub fn render_balance(balance: &Balance, price: f64, currency: &str, show_units: bool) -> String {
    let mut text = format!("{}{}", currency_label(currency), format_fiat(balance.amount, price));
    if show_units {
        text.push_str(&format!(" ({} {NATIVE_UNIT})", balance.amount));
    }
    text
}

pub fn render_tickets(tickets: &Tickets, price: f64) -> Vec<String> {
    tickets
        .in_display_order()
        .iter()
        .map(|amount| format_fiat(*amount, price))
        .collect()
}
