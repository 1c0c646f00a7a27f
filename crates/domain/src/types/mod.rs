//! Identifiers, credentials and gateway response shapes

pub mod credential;
pub mod responses;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use credential::Credential;
pub use responses::{
    ClearQueueResult, ConfirmResult, DeleteResult, DeviceStatus, ErrorDetail, ErrorPayload,
    QueueStatus, RequestStatus, StatusResult, SubmissionResult, TokenResponse,
};

/// Kind of fiscal document, doubling as the gateway collection name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "receipt")]
    Receipt,
    #[serde(rename = "invoice")]
    Invoice,
    #[serde(rename = "nf_printout")]
    Printout,
}

crate::impl_wire_conversions!(DocumentType {
    Receipt => "receipt",
    Invoice => "invoice",
    Printout => "nf_printout",
});

impl DocumentType {
    /// Collection endpoint, e.g. `/api/v1/receipt`.
    pub fn collection_path(&self) -> String {
        format!("{}/{}", crate::constants::API_PREFIX, self.as_str())
    }

    /// Resource endpoint for a submitted document, e.g. `/api/v1/receipt/42`.
    pub fn resource_path(&self, id: &RequestId) -> String {
        format!("{}/{}", self.collection_path(), id)
    }
}

/// Gateway-assigned identifier of a submitted document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
