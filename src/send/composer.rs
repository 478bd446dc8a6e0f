//! Multi-recipient transfer composition and submission.

use serde_json::Value;
use std::sync::Arc;

use crate::context::WalletContext;
use crate::error::WalletResult;
use crate::render::{render, scalar_text};
use crate::send::recipient::{Message, Recipient, RecipientId, SendRequest};
use crate::ui::panels;

/// Owns one transfer draft and submits it to the node.
#[derive(Debug)]
pub struct TransactionComposer {
    ctx: Arc<WalletContext>,
    request: SendRequest,
    next_id: u64,
}

impl TransactionComposer {
    pub fn new(ctx: Arc<WalletContext>) -> Self {
        Self {
            ctx,
            request: SendRequest::default(),
            next_id: 0,
        }
    }

    /// Current draft.
    pub fn request(&self) -> &SendRequest {
        &self.request
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.request.recipients
    }

    /// Account the funds are sent from.
    pub fn set_sender(&mut self, sender: impl Into<String>) {
        self.request.sender = Some(sender.into());
    }

    /// Attach a message. Hex messages must already be validated via
    /// [`Message::hex`] or [`TransactionComposer::set_hex_message`].
    pub fn set_message(&mut self, message: Message) {
        self.request.message = message;
    }

    /// Attach a hex message, rejecting input that does not decode.
    pub fn set_hex_message(&mut self, raw: &str) -> WalletResult<()> {
        let message = Message::hex(raw).map_err(|e| self.ctx.fail(e))?;
        self.request.message = message;
        Ok(())
    }

    /// Validate and append a recipient.
    ///
    /// On invalid input the draft is untouched and the error is surfaced.
    pub fn add_recipient(
        &mut self,
        address: &str,
        coin_id: &str,
        amount: &str,
    ) -> WalletResult<RecipientId> {
        let id = RecipientId(self.next_id);
        let recipient =
            Recipient::parse(id, address, coin_id, amount).map_err(|e| self.ctx.fail(e))?;

        tracing::debug!(recipient = %recipient, "Recipient added");
        self.next_id += 1;
        self.request.recipients.push(recipient);
        Ok(id)
    }

    /// Remove the recipient with `id`, if it is still in the draft.
    pub fn remove_recipient(&mut self, id: RecipientId) -> Option<Recipient> {
        let position = self.request.recipients.iter().position(|r| r.id == id)?;
        Some(self.request.recipients.remove(position))
    }

    /// Remove the recipient at `position` in display order.
    pub fn remove_recipient_at(&mut self, position: usize) -> Option<Recipient> {
        if position < self.request.recipients.len() {
            Some(self.request.recipients.remove(position))
        } else {
            None
        }
    }

    /// Send the draft to the node.
    ///
    /// Requires a login and a sender; recipient sanity beyond the per-row
    /// checks is left to the node. On success the result is rendered and
    /// the draft reset. On failure the draft is kept.
    pub async fn submit(&mut self) -> WalletResult<Value> {
        let creds = self.ctx.require_login("send transaction")?;
        let body = self
            .request
            .to_body()
            .map_err(|e| self.ctx.fail(e))?;

        let result = self
            .ctx
            .client
            .send_many(&creds, &body)
            .await
            .map_err(|e| self.ctx.fail(e))?;

        self.ctx
            .display
            .set(panels::SEND_RESULT, render(&result, self.ctx.indent_width(), ""));
        let hash = result.get("hash").map(scalar_text).unwrap_or_default();
        tracing::info!(
            from = %body.from,
            outputs = body.pairs.len(),
            hash = %hash,
            "Transaction sent"
        );
        self.ctx.notices.notice(format!("send success! {hash}"));
        self.reset();
        Ok(result)
    }

    /// Discard the draft.
    pub fn reset(&mut self) {
        self.request = SendRequest::default();
    }
}
