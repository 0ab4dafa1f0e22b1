use crate::models::{TicketBuyForm, TicketBuyRequest};

pub const BUY_ENDPOINT: &str = "/api/tickets/buy";
pub const ATOMS_PER_COIN: f64 = 1e8;
pub const MAX_SPEND_LIMIT: f64 = i64::MAX as f64 / ATOMS_PER_COIN;

/// Turns the ticket-purchase form into a backend request, or the alert text to show.
pub fn parse_buy_form(form: &TicketBuyForm) -> Result<TicketBuyRequest, &'static str> {
    let spend_limit = form.spend_limit.trim();
    let num_tickets = form.num_tickets.trim();
    let code_token = form.code_token.trim();
    if spend_limit.is_empty() || num_tickets.is_empty() || code_token.is_empty() {
        return Err("Please fill all fields!");
    }

    let coins = spend_limit
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or("Spend limit must be a positive amount")?;
    if coins >= MAX_SPEND_LIMIT {
        return Err("Spend limit is too large");
    }
    let num_tickets = num_tickets
        .parse::<u32>()
        .ok()
        .filter(|count| *count > 0)
        .ok_or("Number of tickets must be a positive integer")?;
    if !code_token.chars().all(|c| c.is_ascii_digit()) {
        return Err("Two-factor code must be numeric");
    }

    Ok(TicketBuyRequest {
        spend_limit: (coins * ATOMS_PER_COIN).round() as i64,
        num_tickets,
        code_token: code_token.to_string(),
    })
}
