//! Document fixtures

use std::str::FromStr;

use novitus_domain::document::{
    Article, Cash, Item, Line, Payment, PrintoutLine, Ptu, Summary,
};
use novitus_domain::{Printout, Receipt};
use rust_decimal::Decimal;
use serde_json::{json, Value};

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn receipt() -> Receipt {
    Receipt {
        items: vec![Item::Article(Article {
            name: "Coffee".into(),
            ptu: Ptu::A,
            quantity: dec("2"),
            price: dec("9.50"),
            value: dec("19.00"),
            unit: None,
            discount_markup: None,
            code: None,
            description: None,
        })],
        payments: vec![Payment::Cash(Cash { value: dec("20.00") })],
        summary: Summary {
            total: Some(dec("19.00")),
            pay_in: Some(dec("20.00")),
            change: Some(dec("1.00")),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Receipt whose article value does not match price times quantity.
pub fn miscalculated_receipt() -> Receipt {
    let mut receipt = receipt();
    if let Some(Item::Article(article)) = receipt.items.first_mut() {
        article.value = dec("18.00");
    }
    receipt
}

pub fn printout() -> Printout {
    Printout {
        lines: vec![PrintoutLine::Line(Line { text: "Table 4".into(), masked: false })],
        ..Default::default()
    }
}

pub fn request_body(id: &str, status: &str) -> Value {
    json!({ "request": { "status": status, "id": id } })
}

pub fn status_body(id: &str) -> Value {
    json!({
        "device": { "status": "OK" },
        "request": { "status": "DONE", "id": id, "jpkid": "1" }
    })
}
