//! Shared helpers for infra integration tests.

use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use novitus_domain::document::{Article, Cash, Item, Payment, Ptu, Summary};
use novitus_domain::{GatewayConfig, Receipt};
use novitus_infra::{HttpClient, HttpTransport};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token body expiring an hour from now.
pub fn token_body(token: &str) -> Value {
    json!({
        "token": token,
        "expiration_date": (Utc::now() + chrono::Duration::hours(1)).to_rfc3339(),
    })
}

/// Answer `GET /api/v1/token` with `token`.
pub async fn mount_acquire(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(token)))
        .mount(server)
        .await;
}

/// Answer `PATCH /api/v1/token` with `token`.
pub async fn mount_refresh(server: &MockServer, token: &str) {
    Mock::given(method("PATCH"))
        .and(path("/api/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(token)))
        .mount(server)
        .await;
}

pub fn config(server: &MockServer) -> GatewayConfig {
    GatewayConfig::new(server.uri())
}

pub fn transport(server: &MockServer) -> HttpTransport {
    let client = HttpClient::new().expect("http client");
    HttpTransport::new(client, server.uri(), Duration::from_secs(5))
}

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("decimal literal")
}

pub fn receipt() -> Receipt {
    Receipt {
        items: vec![Item::Article(Article {
            name: "Croissant".into(),
            ptu: Ptu::B,
            quantity: dec("3"),
            price: dec("4.20"),
            value: dec("12.60"),
            unit: None,
            discount_markup: None,
            code: None,
            description: None,
        })],
        payments: vec![Payment::Cash(Cash { value: dec("12.60") })],
        summary: Summary { total: Some(dec("12.60")), ..Default::default() },
        ..Default::default()
    }
}
