use crate::dashboard::Dashboard;
use crate::login::{self, LoginOutcome};
use crate::models::{LoginForm, TicketBuyForm};
use crate::purchase::parse_buy_form;
use crate::state::AppState;
use crate::ui::{render_dashboard, render_login};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

pub async fn index() -> Html<String> {
    Html(render_login(None))
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match login::submit(&state.client, &form).await {
        LoginOutcome::Navigate(location) => Redirect::to(location).into_response(),
        LoginOutcome::Alert(message) => Html(render_login(Some(message))).into_response(),
        LoginOutcome::Stay => Html(render_login(None)).into_response(),
    }
}

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let mut page = state.dashboard.lock().await;
    let alert = page.take_alert();
    Html(render_dashboard(&page, alert.as_deref()))
}

pub async fn view(State(state): State<AppState>) -> Json<Dashboard> {
    Json(state.dashboard.lock().await.clone())
}

pub async fn balance(State(state): State<AppState>) -> Redirect {
    state.refresh_balance().await;
    Redirect::to(login::DASHBOARD_LOCATION)
}

pub async fn tickets(State(state): State<AppState>) -> Redirect {
    state.refresh_tickets().await;
    Redirect::to(login::DASHBOARD_LOCATION)
}

pub async fn buy_tickets(
    State(state): State<AppState>,
    Form(form): Form<TicketBuyForm>,
) -> Redirect {
    match parse_buy_form(&form) {
        Ok(request) => state.buy_tickets(&request).await,
        Err(alert) => state.dashboard.lock().await.show_alert(alert),
    }
    Redirect::to(login::DASHBOARD_LOCATION)
}

pub async fn about(State(state): State<AppState>) -> Redirect {
    state.fetch_version().await;
    Redirect::to(login::DASHBOARD_LOCATION)
}
