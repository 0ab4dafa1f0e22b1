use crate::client::ApiClient;
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::models::{Balance, TicketBuyRequest, Tickets};
use crate::price::{MarketDataProvider, PriceProvider};
use crate::purchase::BUY_ENDPOINT;
use crate::storage::SessionStore;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub const BALANCE_ENDPOINT: &str = "/api/balance";
pub const TICKETS_ENDPOINT: &str = "/api/tickets";
pub const ABOUT_ENDPOINT: &str = "/about";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: ApiClient,
    pub prices: Arc<dyn PriceProvider>,
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(config: Config, session: SessionStore) -> Self {
        let http = Client::new();
        let prices = MarketDataProvider::new(http.clone(), config.market_data_url.clone());
        let client = ApiClient::new(http, config.wallet_api_url.clone(), session);
        Self::with_provider(config, client, Arc::new(prices))
    }

    pub fn with_provider(config: Config, client: ApiClient, prices: Arc<dyn PriceProvider>) -> Self {
        let dashboard = Dashboard::new(config.currency.clone(), config.show_units);
        Self {
            config: Arc::new(config),
            client,
            prices,
            dashboard: Arc::new(Mutex::new(dashboard)),
        }
    }

    // The dashboard lock is taken only after each request completes, so the
    // fetches below may run concurrently and finish in any order.

    pub async fn refresh_price(&self) {
        let result = self
            .prices
            .fetch_price(&self.config.asset, &self.config.currency)
            .await;
        if let Ok(snapshot) = &result {
            info!("price of {} is {} {}", self.config.asset, snapshot.price, snapshot.currency);
        }
        self.dashboard.lock().await.apply_price(result);
    }

    pub async fn refresh_balance(&self) {
        let result = self.client.call::<Balance>(BALANCE_ENDPOINT).await;
        self.dashboard.lock().await.apply_balance(result);
    }

    pub async fn refresh_tickets(&self) {
        let result = self.client.call::<Tickets>(TICKETS_ENDPOINT).await;
        self.dashboard.lock().await.apply_tickets(result);
    }

    pub async fn buy_tickets(&self, request: &TicketBuyRequest) {
        let result = self.client.post_authenticated(BUY_ENDPOINT, request).await;
        if result.is_ok() {
            info!("purchase of {} ticket(s) submitted", request.num_tickets);
        }
        self.dashboard.lock().await.apply_notice(result);
    }

    pub async fn fetch_version(&self) {
        let result = self.client.call_text(ABOUT_ENDPOINT).await;
        self.dashboard.lock().await.apply_notice(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::price::PriceSnapshot;
    use crate::storage::unique_temp_path;
    use crate::testing::spawn_mock;
    use async_trait::async_trait;
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use tokio::sync::oneshot;

    /// Price source that answers only when the test releases it.
    struct GatedPrice {
        gate: Mutex<Option<oneshot::Receiver<f64>>>,
    }

    #[async_trait]
    impl PriceProvider for GatedPrice {
        async fn fetch_price(&self, _asset: &str, currency: &str) -> Result<PriceSnapshot, ApiError> {
            let gate = self
                .gate
                .lock()
                .await
                .take()
                .ok_or_else(|| ApiError::Decode("price already fetched".into()))?;
            let price = gate
                .await
                .map_err(|_| ApiError::Decode("price source dropped".into()))?;
            Ok(PriceSnapshot {
                price,
                currency: currency.to_string(),
            })
        }
    }

    fn backend() -> Router {
        Router::new()
            .route("/api/balance", get(|| async { Json(Balance { amount: 10.0 }) }))
            .route(
                "/api/tickets",
                get(|| async {
                    Json(Tickets {
                        own_mempool: 1.0,
                        immature: 2.0,
                        live: 3.0,
                        total_subsidy: 4.0,
                    })
                }),
            )
            .route(
                "/api/tickets/buy",
                post(|headers: HeaderMap, Json(body): Json<TicketBuyRequest>| async move {
                    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                        Some("Bearer abc") => (
                            StatusCode::OK,
                            format!("Transaction done with success: {} ticket(s)\n", body.num_tickets),
                        ),
                        _ => (StatusCode::UNAUTHORIZED, String::new()),
                    }
                }),
            )
            .route("/about", get(|| async { "Version: 0.1.0" }))
    }

    async fn state_with(prices: Arc<dyn PriceProvider>, token: Option<&str>) -> AppState {
        let base = spawn_mock(backend()).await;
        let config = Config {
            show_units: false,
            wallet_api_url: base.clone(),
            ..Config::default()
        };
        let session = SessionStore::open(unique_temp_path("state_session")).await;
        if let Some(token) = token {
            session.set_token(token).await.unwrap();
        }
        let client = ApiClient::new(Client::new(), base, session);
        AppState::with_provider(config, client, prices)
    }

    #[tokio::test]
    async fn fetches_complete_in_any_order_against_current_price() {
        let (release, gate) = oneshot::channel();
        let prices = Arc::new(GatedPrice {
            gate: Mutex::new(Some(gate)),
        });
        let state = state_with(prices, None).await;

        let pending_price = tokio::spawn({
            let state = state.clone();
            async move { state.refresh_price().await }
        });

        state.refresh_balance().await;
        assert_eq!(
            state.dashboard.lock().await.balance.as_deref(),
            Some("USD 0.00")
        );

        release.send(2.5).unwrap();
        pending_price.await.unwrap();

        let page = state.dashboard.lock().await.clone();
        assert!(page.price.is_loaded());
        assert_eq!(page.balance.as_deref(), Some("USD 0.00"));
        drop(page);

        state.refresh_tickets().await;
        state.refresh_balance().await;
        let page = state.dashboard.lock().await;
        assert_eq!(page.tickets_text(), "2.50 | 5.00 | 7.50 | 10.00");
        assert_eq!(page.balance.as_deref(), Some("USD 25.00"));
    }

    #[tokio::test]
    async fn purchase_and_version_land_in_message_area() {
        let (_release, gate) = oneshot::channel();
        let prices = Arc::new(GatedPrice {
            gate: Mutex::new(Some(gate)),
        });
        let state = state_with(prices, Some("abc")).await;
        let request = TicketBuyRequest {
            spend_limit: 100,
            num_tickets: 2,
            code_token: "123456".into(),
        };

        state.buy_tickets(&request).await;
        assert_eq!(
            state.dashboard.lock().await.message.as_deref(),
            Some("Transaction done with success: 2 ticket(s)")
        );

        state.fetch_version().await;
        assert_eq!(
            state.dashboard.lock().await.message.as_deref(),
            Some("Version: 0.1.0")
        );
    }

    #[tokio::test]
    async fn unauthenticated_purchase_reports_failure() {
        let (_release, gate) = oneshot::channel();
        let prices = Arc::new(GatedPrice {
            gate: Mutex::new(Some(gate)),
        });
        let state = state_with(prices, None).await;
        state
            .buy_tickets(&TicketBuyRequest {
                spend_limit: 100,
                num_tickets: 1,
                code_token: "1".into(),
            })
            .await;
        assert_eq!(
            state.dashboard.lock().await.message.as_deref(),
            Some("Request failed: Unauthorized")
        );
    }
}
