use crate::dashboard::Dashboard;
use html_escaper::Escape;
use std::fmt;

/// Text escaped for an HTML body.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.escape(f, false)
    }
}

pub fn render_login(alert: Option<&str>) -> String {
    LOGIN_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{ALERT}}", &alert_block(alert))
}

pub fn render_dashboard(page: &Dashboard, alert: Option<&str>) -> String {
    let balance = page.balance.as_deref().unwrap_or("-");
    let tickets = if page.tickets.is_empty() {
        "-".to_string()
    } else {
        page.tickets_text()
    };
    let message = page.message.as_deref().unwrap_or("");

    DASHBOARD_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{ALERT}}", &alert_block(alert))
        .replace("{{CURRENCY}}", &Escaped(&page.currency).to_string())
        .replace("{{BALANCE}}", &Escaped(balance).to_string())
        .replace("{{TICKETS}}", &Escaped(&tickets).to_string())
        .replace("{{MESSAGE}}", &Escaped(message).to_string())
}

/// Blocking `alert()` plus a visible copy for clients without scripts.
fn alert_block(alert: Option<&str>) -> String {
    let Some(text) = alert else {
        return String::new();
    };
    let literal = serde_json::to_string(text)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c");
    format!(
        "<p class=\"alert\" role=\"alert\">{}</p>\n  <script>alert({literal});</script>",
        Escaped(text)
    )
}

const STYLE: &str = r#"<style>
    :root {
      --bg: #f2f5f7;
      --ink: #1f2d3a;
      --accent: #2970ff;
      --muted: #6b7a89;
      --card: #ffffff;
      --error: #c0392b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #dfe8f1);
      color: var(--ink);
      font-family: "Source Sans Pro", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 18px;
      box-shadow: 0 18px 48px rgba(31, 45, 58, 0.14);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    section h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
      font-variant-numeric: tabular-nums;
    }

    .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    form {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    input {
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid #c9d3dd;
      font: inherit;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 10px 20px;
      background: var(--accent);
      color: white;
      font: inherit;
      cursor: pointer;
    }

    .alert,
    #message {
      color: var(--error);
      min-height: 1.2em;
      margin: 0;
    }
  </style>"#;

const LOGIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wallet Dashboard - Login</title>
  {{STYLE}}
</head>
<body>
  <main class="app">
    <h1>Wallet Dashboard</h1>
  {{ALERT}}
    <form method="post" action="/login">
      <input id="username" name="username" placeholder="Username" autocomplete="username" />
      <input id="password" name="password" type="password" placeholder="Password" autocomplete="current-password" />
      <button id="login" type="submit">Log in</button>
    </form>
  </main>
</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wallet Dashboard</title>
  {{STYLE}}
</head>
<body>
  <main class="app">
    <h1>Wallet Dashboard</h1>
  {{ALERT}}
    <p id="message">{{MESSAGE}}</p>

    <section id="balance-view">
      <span class="label">Balance ({{CURRENCY}})</span>
      <h2>{{BALANCE}}</h2>
      <form method="post" action="/balance">
        <button id="btn-balance" type="submit">Get balance</button>
      </form>
    </section>

    <section id="tickets-view">
      <span class="label">Tickets: own mempool | immature | live | total subsidy</span>
      <h2>{{TICKETS}}</h2>
      <form method="post" action="/tickets">
        <button id="btn-tickets" type="submit">Get tickets</button>
      </form>
    </section>

    <section id="buy-view">
      <span class="label">Buy tickets</span>
      <form method="post" action="/tickets/buy">
        <input name="spend_limit" placeholder="Spend limit (DCR)" inputmode="decimal" />
        <input name="num_tickets" placeholder="Tickets" inputmode="numeric" />
        <input name="code_token" placeholder="2FA code" inputmode="numeric" autocomplete="one-time-code" />
        <button id="btn-buy" type="submit">Buy</button>
      </form>
    </section>

    <form method="post" action="/about">
      <button id="btn-about" type="submit">About</button>
    </form>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::models::Balance;
    use axum::http::StatusCode;

    #[test]
    fn login_page_carries_alert_only_when_present() {
        assert!(!render_login(None).contains("alert("));
        let page = render_login(Some("Please fill all fields!"));
        assert!(page.contains(r#"alert("Please fill all fields!");"#));
    }

    #[test]
    fn dashboard_renders_displays_and_escapes_message() {
        let mut page = Dashboard::new("USD", false);
        page.apply_balance(Ok(Balance { amount: 2.0 }));
        page.apply_tickets(Err(ApiError::Decode("<bad>".into())));
        let html = render_dashboard(&page, None);
        assert!(html.contains("<h2>USD 0.00</h2>"));
        assert!(html.contains("Request failed: &lt;bad&gt;"));

        page.apply_tickets(Err(ApiError::from_status(StatusCode::NOT_FOUND)));
        assert!(render_dashboard(&page, None).contains("Request failed: Not Found"));
    }
}
