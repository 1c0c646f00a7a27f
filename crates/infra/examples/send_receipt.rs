//! Example: Printing a receipt through a Novitus gateway
//!
//! Loads gateway settings from the environment (or a `novitus.toml` /
//! `novitus.json` file), submits a one-line cash receipt, confirms it and
//! prints the resulting status.
//!
//! # Setup
//!
//! 1. Point the client at a gateway: ```bash export
//!    NOVITUS_HOST=http://192.168.1.40:8888 ```
//!
//! 2. Run this example: ```bash RUST_LOG=novitus_core=debug cargo run
//!    --example send_receipt ```

use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use novitus_core::ports::CallContext;
use novitus_domain::document::{Article, Cash, Item, Payment, Ptu, Summary};
use novitus_domain::Receipt;
use novitus_infra::{config, NovitusClient};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::load().context("loading gateway configuration")?;
    let client = NovitusClient::connect(config).await.context("connecting to gateway")?;

    let ctx = CallContext::new().with_timeout(Duration::from_secs(15));
    let queue = client.get_queue_status(&ctx).await?;
    println!("Requests waiting on device: {}", queue.requests_in_queue);

    let price = Decimal::from_str("5.99")?;
    let receipt = Receipt {
        items: vec![Item::Article(Article {
            name: "Mineral water 1.5l".into(),
            ptu: Ptu::A,
            quantity: Decimal::ONE,
            price,
            value: price,
            unit: None,
            discount_markup: None,
            code: None,
            description: None,
        })],
        payments: vec![Payment::Cash(Cash { value: price })],
        summary: Summary { total: Some(price), pay_in: Some(price), ..Default::default() },
        ..Default::default()
    };

    let status = client.send_receipt(receipt, true, &ctx).await?;
    println!("Request {}: {}", status.request.id, status.request.status);
    println!("Device: {}", status.device.status);
    if let Some(error) = status.request.failure() {
        println!("Device reported error {}: {}", error.code, error.description);
    }

    Ok(())
}
