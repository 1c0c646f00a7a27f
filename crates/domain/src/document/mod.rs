//! Fiscal documents accepted by the gateway
//!
//! Each document kind validates its own structure before it is allowed near
//! the network. [`Document`] is the closed set the workflow dispatches on; its
//! serde representation is exactly the submission body, `{"<type>": {...}}`.

pub mod common;
pub mod invoice;
pub mod items;
pub mod lines;
pub mod payments;
pub mod printout;
pub mod receipt;

use serde::{Deserialize, Serialize};

pub use common::{
    Buyer, DeviceControl, DiscountMarkup, DiscountMarkupKind, EDocument, Ptu, Summary, SystemInfo,
    Unit,
};
pub use invoice::{
    AdditionalInfo, Info, Invoice, InvoiceOptions, Justification, PrintInfo, TransactionSide,
};
pub use items::{Advance, AdvanceReturn, Article, Container, ContainerReturn, Item};
pub use lines::{Line, PrintoutLine, TextLine};
pub use payments::{Cash, Currency, Payment, PaymentMethod, PaymentMethodName};
pub use printout::{Printout, PrintoutOptions};
pub use receipt::Receipt;

use crate::errors::ValidationError;
use crate::types::DocumentType;

/// Structural validation run before submission.
pub trait Validate {
    /// # Errors
    /// Returns the first rule the value breaks.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A document ready for submission, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Document {
    #[serde(rename = "receipt")]
    Receipt(Receipt),
    #[serde(rename = "invoice")]
    Invoice(Invoice),
    #[serde(rename = "nf_printout")]
    Printout(Printout),
}

impl Document {
    pub fn document_type(&self) -> DocumentType {
        match self {
            Self::Receipt(_) => DocumentType::Receipt,
            Self::Invoice(_) => DocumentType::Invoice,
            Self::Printout(_) => DocumentType::Printout,
        }
    }

    /// Submission body: the payload wrapped under its type name.
    ///
    /// # Errors
    /// Fails only if a payload cannot be represented as JSON.
    pub fn to_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Validate for Document {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Receipt(receipt) => receipt.validate(),
            Self::Invoice(invoice) => invoice.validate(),
            Self::Printout(printout) => printout.validate(),
        }
    }
}

impl From<Receipt> for Document {
    fn from(value: Receipt) -> Self {
        Self::Receipt(value)
    }
}

impl From<Invoice> for Document {
    fn from(value: Invoice) -> Self {
        Self::Invoice(value)
    }
}

impl From<Printout> for Document {
    fn from(value: Printout) -> Self {
        Self::Printout(value)
    }
}

/// Fails with `"<field> is required"` when `value` is blank.
pub(crate) fn require(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!("{field} is required")));
    }
    Ok(())
}

/// Validates every element, prefixing failures with `field[index]`.
pub(crate) fn validate_each<T: Validate>(values: &[T], field: &str) -> Result<(), ValidationError> {
    for (index, value) in values.iter().enumerate() {
        value.validate().map_err(|err| err.at(&format!("{field}[{index}]")))?;
    }
    Ok(())
}
