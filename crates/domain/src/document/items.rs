//! Sale lines: articles, advances and returnable containers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{DiscountMarkup, Ptu, Unit};
use super::{require, Validate};
use crate::errors::ValidationError;

/// One entry of a receipt's or invoice's `items` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Article(Article),
    Advance(Advance),
    AdvanceReturn(AdvanceReturn),
    Container(Container),
    ContainerReturn(ContainerReturn),
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Article(item) => item.validate(),
            Self::Advance(item) => item.validate(),
            Self::AdvanceReturn(item) => item.validate(),
            Self::Container(item) => item.validate(),
            Self::ContainerReturn(item) => item.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub name: String,
    pub ptu: Ptu,
    pub quantity: Decimal,
    pub price: Decimal,
    /// Must equal `price * quantity`
    pub value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_markup: Option<DiscountMarkup>,
    /// EAN code; mutually exclusive with `description`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Validate for Article {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        if self.code.is_some() && self.description.is_some() {
            return Err(ValidationError::new("code cannot be set together with description"));
        }
        if self.price.checked_mul(self.quantity) != Some(self.value) {
            return Err(ValidationError::new(
                "value must be equal to price multiplied by quantity",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advance {
    pub description: String,
    pub ptu: Ptu,
    pub value: Decimal,
}

impl Validate for Advance {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.description, "description")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceReturn {
    pub description: String,
    pub ptu: Ptu,
    pub value: Decimal,
}

impl Validate for AdvanceReturn {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.description, "description")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    pub value: Decimal,
}

impl Validate for Container {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.value.is_sign_negative() {
            return Err(ValidationError::new("value cannot be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerReturn {
    pub name: String,
    pub number: String,
    pub quantity: Decimal,
    pub value: Decimal,
}

impl Validate for ContainerReturn {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.value.is_sign_negative() {
            return Err(ValidationError::new("value cannot be negative"));
        }
        Ok(())
    }
}
