//! VAT invoice

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{Buyer, DeviceControl, Summary, SystemInfo};
use super::items::Item;
use super::lines::PrintoutLine;
use super::payments::Payment;
use super::{require, validate_each, Validate};
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Info {
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_sell: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_payment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintInfo {
    PlaceForSignature,
    NameAndPlaceForSignature,
    None,
}

/// Recipient or seller block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionSide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_info: Option<PrintInfo>,
}

impl Validate for TransactionSide {
    fn validate(&self) -> Result<(), ValidationError> {
        let wants_name = self.print_info == Some(PrintInfo::NameAndPlaceForSignature);
        match self.name.as_deref() {
            Some(name) if wants_name => require(name, "name"),
            None if wants_name => {
                Err(ValidationError::new("name is required for name_and_place_for_signature"))
            }
            _ => Ok(()),
        }
    }
}

/// Layout switches; the gateway expects every flag to be present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceOptions {
    pub skip_description_value_to_pay: bool,
    pub skip_block_gross_value_in_accounting_tax: bool,
    pub buyer_bold: bool,
    pub seller_bold: bool,
    pub buyer_nip_bold: bool,
    pub seller_nip_bold: bool,
    pub print_label_description_symbol_in_invoice_header: bool,
    pub print_position_number_in_invoice_header: bool,
    pub print_position_number_invoice: bool,
    // gateway spelling
    pub to_pay_label_before_acounting_tax_block: bool,
    pub print_cents_in_words: bool,
    pub dont_print_sell_date_if_equal_create_date: bool,
    pub dont_print_seller_data_in_header: bool,
    pub dont_print_sell_items_description: bool,
    pub enable_payment_form: bool,
    pub dont_print_customer_data: bool,
    pub print_payd_in_cash: bool,
    pub skip_seller_label: bool,
    pub print_invoice_tax_label: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdditionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<Justification>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Invoice {
    pub info: Info,
    pub buyer: Buyer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<TransactionSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<TransactionSide>,
    #[serde(default)]
    pub options: InvoiceOptions,
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<Payment>,
    pub summary: Summary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub printout_lines: Vec<PrintoutLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_info: Vec<AdditionalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_control: Option<DeviceControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_info: Option<SystemInfo>,
}

impl Validate for Invoice {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.info.number, "info.number")?;
        if self.items.is_empty() {
            return Err(ValidationError::new("items are required"));
        }
        if self.summary.total.is_none() {
            return Err(ValidationError::new("summary.total is required"));
        }
        if !self.buyer.is_identified() {
            return Err(ValidationError::new("buyer.name or buyer.nip is required"));
        }
        if let Some(recipient) = &self.recipient {
            recipient.validate().map_err(|e| e.at("recipient"))?;
        }
        if let Some(seller) = &self.seller {
            seller.validate().map_err(|e| e.at("seller"))?;
        }
        validate_each(&self.items, "items")?;
        validate_each(&self.payments, "payments")?;
        validate_each(&self.printout_lines, "printout_lines")
    }
}
