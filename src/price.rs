use crate::client::{decode_json, send};
use crate::errors::ApiError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Exchange rate between the wallet's native unit and a fiat currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSnapshot {
    pub price: f64,
    pub currency: String,
}

/// Source of spot prices.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    async fn fetch_price(&self, asset: &str, currency: &str) -> Result<PriceSnapshot, ApiError>;
}

/// Ticker endpoint of a CoinMarketCap-style market-data API.
pub struct MarketDataProvider {
    http: Client,
    base_url: String,
}

impl MarketDataProvider {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn ticker_url(&self, asset: &str, currency: &str) -> String {
        format!("{}/ticker/{asset}/?convert={currency}", self.base_url)
    }
}

#[async_trait]
impl PriceProvider for MarketDataProvider {
    async fn fetch_price(&self, asset: &str, currency: &str) -> Result<PriceSnapshot, ApiError> {
        let url = self.ticker_url(asset, currency);
        // Never carries the session token.
        let response = send(self.http.get(&url), &url).await?;
        let body: Value = decode_json(response).await?;
        let price = extract_price(&body, currency)?;
        Ok(PriceSnapshot {
            price,
            currency: currency.to_string(),
        })
    }
}

/// Reads `price_<currency>` from the first element of a ticker response.
pub fn extract_price(body: &Value, currency: &str) -> Result<f64, ApiError> {
    let field = format!("price_{}", currency.to_ascii_lowercase());
    let entry = body
        .as_array()
        .and_then(|entries| entries.first())
        .ok_or_else(|| ApiError::Decode("empty ticker response".to_string()))?;
    match entry.get(&field) {
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| ApiError::Decode(format!("{field} is not a finite number"))),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| ApiError::Decode(format!("{field} is not numeric: {text}"))),
        _ => Err(ApiError::Decode(format!("missing {field}"))),
    }
}
