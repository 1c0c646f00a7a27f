//! Fiscal receipt (`paragon`)

use serde::{Deserialize, Serialize};

use super::common::{Buyer, DeviceControl, Summary, SystemInfo};
use super::items::Item;
use super::lines::PrintoutLine;
use super::payments::Payment;
use super::{validate_each, Validate};
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Receipt {
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<Payment>,
    pub summary: Summary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub printout_lines: Vec<PrintoutLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<Buyer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_info: Option<SystemInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_control: Option<DeviceControl>,
}

impl Validate for Receipt {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.items.is_empty() {
            return Err(ValidationError::new("items are required"));
        }
        if self.summary.total.is_none() {
            return Err(ValidationError::new("summary.total is required"));
        }
        validate_each(&self.items, "items")?;
        validate_each(&self.payments, "payments")?;
        validate_each(&self.printout_lines, "printout_lines")
    }
}
