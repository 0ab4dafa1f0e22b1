use crate::errors::ApiError;
use crate::models::{Balance, Tickets};
use crate::price::PriceSnapshot;
use crate::views::{render_balance, render_tickets, PriceState, TICKET_SEPARATOR};
use serde::Serialize;

/// Everything the dashboard page displays.
///
/// Updates are push-only: a display is recomputed when its own fetch
/// completes and never when the price changes afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub currency: String,
    pub show_units: bool,
    pub price: PriceState,
    pub balance: Option<String>,
    pub tickets: Vec<String>,
    pub message: Option<String>,
    pub alert: Option<String>,
}

impl Dashboard {
    pub fn new(currency: impl Into<String>, show_units: bool) -> Self {
        Self {
            currency: currency.into(),
            show_units,
            price: PriceState::NotLoaded,
            balance: None,
            tickets: Vec::new(),
            message: None,
            alert: None,
        }
    }

    pub fn tickets_text(&self) -> String {
        self.tickets.join(TICKET_SEPARATOR)
    }

    pub fn apply_price(&mut self, result: Result<PriceSnapshot, ApiError>) {
        match result {
            Ok(snapshot) => {
                self.price = PriceState::Loaded(snapshot);
                self.message = None;
            }
            Err(err) => self.report(&err),
        }
    }

    pub fn apply_balance(&mut self, result: Result<Balance, ApiError>) {
        match result {
            Ok(balance) => {
                let price = self.price.current_price();
                self.balance = Some(render_balance(
                    &balance,
                    price,
                    &self.currency,
                    self.show_units,
                ));
                self.message = None;
            }
            Err(err) => self.report(&err),
        }
    }

    pub fn apply_tickets(&mut self, result: Result<Tickets, ApiError>) {
        match result {
            Ok(tickets) => {
                let price = self.price.current_price();
                self.tickets.clear();
                self.tickets.extend(render_tickets(&tickets, price));
                self.message = None;
            }
            Err(err) => self.report(&err),
        }
    }

    /// Plain-text answers (ticket purchase, backend version) go to the message area.
    pub fn apply_notice(&mut self, result: Result<String, ApiError>) {
        match result {
            Ok(text) => self.message = Some(text.trim().to_string()),
            Err(err) => self.report(&err),
        }
    }

    pub fn show_alert(&mut self, text: impl Into<String>) {
        self.alert = Some(text.into());
    }

    /// Alerts block once, then disappear.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    fn report(&mut self, err: &ApiError) {
        self.message = Some(err.display_message());
    }
}
