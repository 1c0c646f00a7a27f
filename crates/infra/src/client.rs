//! Ready-to-use gateway client
//!
//! Wires configuration, the HTTP transport, the system clock, the token
//! manager and the document service together.

use std::sync::Arc;

use novitus_core::clock::{Clock, SystemClock};
use novitus_core::ports::{CallContext, GatewayTransport};
use novitus_core::{DocumentService, TokenManager};
use novitus_domain::{
    ClearQueueResult, ConfirmResult, Credential, DeleteResult, Document, DocumentType,
    GatewayConfig, Invoice, NovitusError, Operation, Printout, QueueStatus, Receipt, RequestId,
    Result, StatusResult, SubmissionResult,
};
use tracing::{info, instrument};

use crate::http::HttpTransport;

/// Client for one Novitus gateway.
pub struct NovitusClient {
    service: DocumentService,
}

impl NovitusClient {
    /// Validate `config` and connect over HTTP.
    ///
    /// A configured token is used as is (and refreshed on first use, since
    /// its lifetime is unknown). Without one, a token is acquired right away.
    ///
    /// # Errors
    /// `NovitusError::Config` for invalid settings, `NovitusError::Auth` if
    /// the initial acquisition fails.
    #[instrument(skip_all, fields(host = %config.host))]
    pub async fn connect(config: GatewayConfig) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::from_config(&config)?);
        Self::with_transport(config.token, transport, Arc::new(SystemClock), &CallContext::new())
            .await
    }

    /// Build a client over any transport and clock.
    ///
    /// # Errors
    /// `NovitusError::Auth` if no token is given and acquisition fails.
    pub async fn with_transport(
        token: Option<String>,
        transport: Arc<dyn GatewayTransport>,
        clock: Arc<dyn Clock>,
        ctx: &CallContext,
    ) -> Result<Self> {
        let tokens = TokenManager::new(transport.clone(), clock);
        let tokens = match token {
            Some(token) => {
                info!("using configured gateway token");
                tokens.with_credential(Credential::seeded(token))
            }
            None => {
                tokens
                    .acquire(ctx)
                    .await
                    .map_err(|source| NovitusError::Auth { operation: Operation::Connect, source })?;
                tokens
            }
        };

        Ok(Self { service: DocumentService::new(transport, Arc::new(tokens)) })
    }

    pub fn token_manager(&self) -> &Arc<TokenManager> {
        self.service.token_manager()
    }

    pub fn documents(&self) -> &DocumentService {
        &self.service
    }

    /// See [`DocumentService::submit_document`].
    ///
    /// # Errors
    /// Validation, auth, remote or transport failure.
    pub async fn submit_document(
        &self,
        document: &Document,
        ctx: &CallContext,
    ) -> Result<SubmissionResult> {
        self.service.submit_document(document, ctx).await
    }

    /// # Errors
    /// Auth, remote or transport failure.
    pub async fn confirm_document(
        &self,
        document_type: DocumentType,
        id: &RequestId,
        ctx: &CallContext,
    ) -> Result<ConfirmResult> {
        self.service.confirm_document(document_type, id, ctx).await
    }

    /// # Errors
    /// Auth, remote or transport failure.
    pub async fn check_document_status(
        &self,
        document_type: DocumentType,
        id: &RequestId,
        ctx: &CallContext,
    ) -> Result<StatusResult> {
        self.service.check_document_status(document_type, id, ctx).await
    }

    /// # Errors
    /// Auth, remote or transport failure.
    pub async fn delete_document(
        &self,
        document_type: DocumentType,
        id: &RequestId,
        ctx: &CallContext,
    ) -> Result<DeleteResult> {
        self.service.delete_document(document_type, id, ctx).await
    }

    /// See [`DocumentService::send_receipt`].
    ///
    /// # Errors
    /// The first failing step of the send.
    pub async fn send_receipt(
        &self,
        receipt: Receipt,
        confirm: bool,
        ctx: &CallContext,
    ) -> Result<StatusResult> {
        self.service.send_receipt(receipt, confirm, ctx).await
    }

    /// # Errors
    /// The first failing step of the send.
    pub async fn send_invoice(
        &self,
        invoice: Invoice,
        confirm: bool,
        ctx: &CallContext,
    ) -> Result<StatusResult> {
        self.service.send_invoice(invoice, confirm, ctx).await
    }

    /// # Errors
    /// The first failing step of the send.
    pub async fn send_printout(
        &self,
        printout: Printout,
        confirm: bool,
        ctx: &CallContext,
    ) -> Result<StatusResult> {
        self.service.send_printout(printout, confirm, ctx).await
    }

    /// # Errors
    /// Auth, remote or transport failure.
    pub async fn get_queue_status(&self, ctx: &CallContext) -> Result<QueueStatus> {
        self.service.get_queue_status(ctx).await
    }

    /// # Errors
    /// Auth, remote or transport failure.
    pub async fn clear_queue(&self, ctx: &CallContext) -> Result<ClearQueueResult> {
        self.service.clear_queue(ctx).await
    }
}
