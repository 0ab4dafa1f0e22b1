use crate::client::ApiClient;
use crate::models::{LoginForm, LoginRequest, TokenResponse};
use tracing::{info, warn};

pub const LOGIN_ENDPOINT: &str = "/login";
pub const DASHBOARD_LOCATION: &str = "/dashboard.html";
pub const BLANK_FIELDS_ALERT: &str = "Please fill all fields!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Blocking alert; no request was sent.
    Alert(&'static str),
    /// Token stored; go to the dashboard.
    Navigate(&'static str),
    /// Nothing happens on the page.
    Stay,
}

pub async fn submit(client: &ApiClient, form: &LoginForm) -> LoginOutcome {
    if form.username.is_empty() || form.password.is_empty() {
        return LoginOutcome::Alert(BLANK_FIELDS_ALERT);
    }

    let request = LoginRequest {
        username: form.username.clone(),
        password: form.password.clone(),
    };
    let response: TokenResponse = match client.post_json(LOGIN_ENDPOINT, &request).await {
        Ok(response) => response,
        Err(err) => {
            warn!("login for {} failed: {err}", form.username);
            return LoginOutcome::Stay;
        }
    };

    if response.token.is_empty() {
        warn!("login for {} returned an empty token", form.username);
        return LoginOutcome::Stay;
    }

    if let Err(err) = client.session().set_token(response.token).await {
        warn!("could not persist session token: {err}");
        return LoginOutcome::Stay;
    }

    info!("{} logged in", form.username);
    LoginOutcome::Navigate(DASHBOARD_LOCATION)
}
