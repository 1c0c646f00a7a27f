//! Payment entries

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{require, Validate};
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payment {
    Cash(Cash),
    PaymentMethod(PaymentMethod),
    Currency(Currency),
}

impl Validate for Payment {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Cash(payment) => payment.validate(),
            Self::PaymentMethod(payment) => payment.validate(),
            Self::Currency(payment) => payment.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cash {
    pub value: Decimal,
}

impl Validate for Cash {
    fn validate(&self) -> Result<(), ValidationError> {
        non_negative(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodName {
    Card,
    Cheque,
    Coupon,
    Other,
    Credit,
    Account,
    Transfer,
    Mobile,
    Voucher,
}

/// Non-cash payment such as a card or transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub name: PaymentMethodName,
    pub value: Decimal,
}

impl Validate for PaymentMethod {
    fn validate(&self) -> Result<(), ValidationError> {
        non_negative(self.value)
    }
}

/// Payment in a foreign currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub course: String,
    pub currency_value: String,
    pub local_value: String,
    pub is_change: bool,
    pub name: String,
}

impl Validate for Currency {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.course, "course")?;
        require(&self.currency_value, "currency_value")?;
        require(&self.local_value, "local_value")?;
        require(&self.name, "name")
    }
}

fn non_negative(value: Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("value cannot be negative"));
    }
    Ok(())
}
