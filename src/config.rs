use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WALLET_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_MARKET_DATA_URL: &str = "https://api.coinmarketcap.com/v1";
pub const DEFAULT_ASSET: &str = "decred";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_SESSION_PATH: &str = "data/session.json";

/// Runtime settings, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub wallet_api_url: String,
    pub market_data_url: String,
    pub asset: String,
    pub currency: String,
    pub session_path: PathBuf,
    pub show_units: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            wallet_api_url: DEFAULT_WALLET_API_URL.to_string(),
            market_data_url: DEFAULT_MARKET_DATA_URL.to_string(),
            asset: DEFAULT_ASSET.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
            show_units: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            wallet_api_url: lookup("WALLET_API_URL")
                .map(|url| trim_base(&url))
                .unwrap_or(defaults.wallet_api_url),
            market_data_url: lookup("MARKET_DATA_URL")
                .map(|url| trim_base(&url))
                .unwrap_or(defaults.market_data_url),
            asset: lookup("DASHBOARD_ASSET").unwrap_or(defaults.asset),
            currency: lookup("DASHBOARD_CURRENCY").unwrap_or(defaults.currency),
            session_path: lookup("SESSION_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_path),
            show_units: lookup("SHOW_UNITS")
                .and_then(|value| parse_flag(&value))
                .unwrap_or(defaults.show_units),
        }
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
