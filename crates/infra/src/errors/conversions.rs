//! Conversions from external infrastructure errors into domain errors.

use novitus_domain::TransportError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TransportError);

impl From<InfraError> for TransportError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TransportError> for InfraError {
    fn from(value: TransportError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTransportError {
    fn into_transport(self) -> TransportError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TransportError */
/* -------------------------------------------------------------------------- */

impl IntoTransportError for HttpError {
    fn into_transport(self) -> TransportError {
        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return TransportError::Connect(self.to_string());
        }

        if self.is_timeout() {
            return TransportError::Request(format!("HTTP request timed out: {self}"));
        }

        if self.is_builder() {
            return TransportError::Encode(self.to_string());
        }

        if self.is_decode() || self.is_body() {
            return TransportError::Decode(self.to_string());
        }

        TransportError::Request(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_transport())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
