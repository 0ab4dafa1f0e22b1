use serde::{Deserialize, Serialize};

/// `GET /api/balance`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub amount: f64,
}

/// `GET /api/tickets`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tickets {
    pub own_mempool: f64,
    pub immature: f64,
    pub live: f64,
    pub total_subsidy: f64,
}

impl Tickets {
    /// Raw amounts in display order.
    pub fn in_display_order(&self) -> [f64; 4] {
        [self.own_mempool, self.immature, self.live, self.total_subsidy]
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: String,
}

/// Body of `POST /api/tickets/buy`. `spend_limit` is in atoms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketBuyRequest {
    pub spend_limit: i64,
    pub num_tickets: u32,
    pub code_token: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct TicketBuyForm {
    #[serde(default)]
    pub spend_limit: String,
    #[serde(default)]
    pub num_tickets: String,
    #[serde(default)]
    pub code_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_use_camel_case_keys() {
        let tickets: Tickets = serde_json::from_str(
            r#"{"ownMempool":1,"immature":2,"live":3,"totalSubsidy":130.32}"#,
        )
        .unwrap();
        assert_eq!(tickets.in_display_order(), [1.0, 2.0, 3.0, 130.32]);
    }

    #[test]
    fn buy_request_serializes_backend_field_names() {
        let body = serde_json::to_value(TicketBuyRequest {
            spend_limit: 5_000_000_000,
            num_tickets: 2,
            code_token: "123456".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"spendLimit": 5_000_000_000i64, "numTickets": 2, "codeToken": "123456"})
        );
    }
}
