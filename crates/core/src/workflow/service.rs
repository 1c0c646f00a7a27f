//! Document service - submission, confirmation and queue management

use std::sync::Arc;

use novitus_domain::constants::QUEUE_PATH;
use novitus_domain::{
    ClearQueueResult, ConfirmResult, DeleteResult, Document, DocumentType, Invoice, NovitusError,
    Operation, Printout, QueueStatus, Receipt, RequestId, Result, StatusResult, SubmissionResult,
    TransportError, Validate,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::SendStage;
use crate::ports::{
    decode_body, CallContext, GatewayRequest, GatewayResponse, GatewayTransport, HttpMethod,
};
use crate::token::TokenManager;

/// Gateway operations for fiscal documents and the processing queue.
///
/// Every call except validation goes through [`TokenManager::ensure_valid`]
/// first; a token failure ends the call before the document endpoint is
/// touched.
pub struct DocumentService {
    transport: Arc<dyn GatewayTransport>,
    tokens: Arc<TokenManager>,
}

impl DocumentService {
    pub fn new(transport: Arc<dyn GatewayTransport>, tokens: Arc<TokenManager>) -> Self {
        Self { transport, tokens }
    }

    pub fn token_manager(&self) -> &Arc<TokenManager> {
        &self.tokens
    }

    /// Validate and submit a document (`POST /api/v1/{type}`).
    ///
    /// # Errors
    /// `NovitusError::Validation` before any network activity, otherwise the
    /// auth, remote or transport failure of the submission.
    #[instrument(skip_all, fields(document_type = %document.document_type()))]
    pub async fn submit_document(
        &self,
        document: &Document,
        ctx: &CallContext,
    ) -> Result<SubmissionResult> {
        document.validate()?;
        self.submit_validated(document, ctx).await
    }

    /// Confirm a submitted document (`PUT /api/v1/{type}/{id}`).
    ///
    /// # Errors
    /// Returns the auth, remote or transport failure of the call.
    #[instrument(skip(self, ctx))]
    pub async fn confirm_document(
        &self,
        document_type: DocumentType,
        id: &RequestId,
        ctx: &CallContext,
    ) -> Result<ConfirmResult> {
        let operation = Operation::Confirm(document_type, id.clone());
        let request = GatewayRequest::new(HttpMethod::Put, document_type.resource_path(id));
        self.call(operation, request, ctx).await
    }

    /// Read device and request status (`GET /api/v1/{type}/{id}`).
    ///
    /// # Errors
    /// Returns the auth, remote or transport failure of the call.
    #[instrument(skip(self, ctx))]
    pub async fn check_document_status(
        &self,
        document_type: DocumentType,
        id: &RequestId,
        ctx: &CallContext,
    ) -> Result<StatusResult> {
        let operation = Operation::CheckStatus(document_type, id.clone());
        let request = GatewayRequest::new(HttpMethod::Get, document_type.resource_path(id));
        self.call(operation, request, ctx).await
    }

    /// Delete a submitted document (`DELETE /api/v1/{type}/{id}`).
    ///
    /// # Errors
    /// Returns the auth, remote or transport failure of the call.
    #[instrument(skip(self, ctx))]
    pub async fn delete_document(
        &self,
        document_type: DocumentType,
        id: &RequestId,
        ctx: &CallContext,
    ) -> Result<DeleteResult> {
        let operation = Operation::Delete(document_type, id.clone());
        let request = GatewayRequest::new(HttpMethod::Delete, document_type.resource_path(id));
        self.call(operation, request, ctx).await
    }

    /// Submit, optionally confirm, then check the status of a receipt.
    ///
    /// # Errors
    /// The first failing step; later steps do not run.
    pub async fn send_receipt(
        &self,
        receipt: Receipt,
        confirm: bool,
        ctx: &CallContext,
    ) -> Result<StatusResult> {
        self.send(Document::Receipt(receipt), confirm, ctx).await
    }

    /// Invoice counterpart of [`send_receipt`](Self::send_receipt).
    ///
    /// # Errors
    /// The first failing step; later steps do not run.
    pub async fn send_invoice(
        &self,
        invoice: Invoice,
        confirm: bool,
        ctx: &CallContext,
    ) -> Result<StatusResult> {
        self.send(Document::Invoice(invoice), confirm, ctx).await
    }

    /// Printout counterpart of [`send_receipt`](Self::send_receipt).
    ///
    /// # Errors
    /// The first failing step; later steps do not run.
    pub async fn send_printout(
        &self,
        printout: Printout,
        confirm: bool,
        ctx: &CallContext,
    ) -> Result<StatusResult> {
        self.send(Document::Printout(printout), confirm, ctx).await
    }

    /// Number of requests waiting on the device (`GET /api/v1/queue`).
    ///
    /// # Errors
    /// Returns the auth, remote or transport failure of the call.
    #[instrument(skip_all)]
    pub async fn get_queue_status(&self, ctx: &CallContext) -> Result<QueueStatus> {
        let request = GatewayRequest::new(HttpMethod::Get, QUEUE_PATH);
        self.call(Operation::GetQueueStatus, request, ctx).await
    }

    /// Drop every pending request (`DELETE /api/v1/queue`).
    ///
    /// Always issued, whatever the queue currently holds.
    ///
    /// # Errors
    /// Returns the auth, remote or transport failure of the call.
    #[instrument(skip_all)]
    pub async fn clear_queue(&self, ctx: &CallContext) -> Result<ClearQueueResult> {
        let request = GatewayRequest::new(HttpMethod::Delete, QUEUE_PATH);
        let result: ClearQueueResult = self.call(Operation::ClearQueue, request, ctx).await?;
        info!(status = %result.status, "gateway queue cleared");
        Ok(result)
    }

    #[instrument(skip_all, fields(document_type = %document.document_type(), confirm = confirm))]
    async fn send(
        &self,
        document: Document,
        confirm: bool,
        ctx: &CallContext,
    ) -> Result<StatusResult> {
        let document_type = document.document_type();
        let mut stage = SendStage::Validated;
        document.validate()?;
        let mut request_id = RequestId::default();
        let mut status = None;

        while let Some(next) = stage.next(confirm) {
            match next {
                SendStage::Submitted => {
                    let submission = self.submit_validated(&document, ctx).await?;
                    request_id = submission.request.id;
                }
                SendStage::Confirmed => {
                    self.confirm_document(document_type, &request_id, ctx).await?;
                }
                SendStage::StatusChecked => {
                    status =
                        Some(self.check_document_status(document_type, &request_id, ctx).await?);
                }
                SendStage::Validated => {}
            }
            debug!(stage = %next, request_id = %request_id, "send stage completed");
            stage = next;
        }

        status.ok_or_else(|| NovitusError::Transport {
            operation: Operation::CheckStatus(document_type, request_id),
            source: TransportError::Request("status check did not run".to_string()),
        })
    }

    async fn submit_validated(
        &self,
        document: &Document,
        ctx: &CallContext,
    ) -> Result<SubmissionResult> {
        let document_type = document.document_type();
        let operation = Operation::Submit(document_type);
        let body = document.to_body().map_err(|e| NovitusError::Transport {
            operation: operation.clone(),
            source: TransportError::Encode(e.to_string()),
        })?;
        let request =
            GatewayRequest::new(HttpMethod::Post, document_type.collection_path()).with_body(body);
        let submission: SubmissionResult = self.call(operation.clone(), request, ctx).await?;
        if submission.request_id().as_str().trim().is_empty() {
            return Err(NovitusError::Transport {
                operation,
                source: TransportError::Decode(
                    "submission response has no request id".to_string(),
                ),
            });
        }
        info!(
            request_id = %submission.request_id(),
            status = %submission.request.status,
            "document submitted"
        );
        Ok(submission)
    }

    /// Authenticate, send and decode one request, tagging failures with
    /// `operation`.
    async fn call<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: GatewayRequest,
        ctx: &CallContext,
    ) -> Result<T> {
        let token = self
            .tokens
            .ensure_valid(ctx)
            .await
            .map_err(|source| NovitusError::Auth { operation: operation.clone(), source })?;

        debug!(
            %operation,
            method = %request.method,
            path = %request.path,
            "sending gateway request"
        );
        let response = self.transport.send(request.with_bearer(token), ctx).await;

        match response {
            Ok(GatewayResponse::Success(body)) => into_result(operation, body),
            Ok(GatewayResponse::Failure(error)) => Err(NovitusError::Remote { operation, error }),
            Err(source) => Err(NovitusError::Transport { operation, source }),
        }
    }
}

fn into_result<T: DeserializeOwned>(operation: Operation, body: Value) -> Result<T> {
    decode_body(body).map_err(|source| NovitusError::Transport { operation, source })
}
