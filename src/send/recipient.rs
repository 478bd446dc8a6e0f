//! Outgoing transfer draft types.

use serde_json::Number;

use crate::api::SendManyBody;
use crate::error::ValidationError;

/// Stable identity of a recipient row in a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipientId(pub u64);

impl std::fmt::Display for RecipientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One `(address, coin id, amount)` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub id: RecipientId,
    pub address: String,
    pub coin_id: u32,
    pub amount: Number,
}

impl Recipient {
    /// Validate raw form input into a recipient.
    ///
    /// The address is trimmed and must be non-empty; the coin id must be an
    /// unsigned integer and the amount a number.
    pub fn parse(
        id: RecipientId,
        address: &str,
        coin_id: &str,
        amount: &str,
    ) -> Result<Self, ValidationError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }
        let coin_id = coin_id
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidCoinId(coin_id.to_string()))?;
        let amount = parse_number(amount)
            .ok_or_else(|| ValidationError::InvalidAmount(amount.to_string()))?;

        Ok(Self {
            id,
            address: address.to_string(),
            coin_id,
            amount,
        })
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} coin:{} amount:{}", self.address, self.coin_id, self.amount)
    }
}

fn parse_number(raw: &str) -> Option<Number> {
    serde_json::from_str::<Number>(raw.trim()).ok()
}

/// Optional transaction message. At most one form is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Message {
    #[default]
    None,
    /// Plain text message.
    Plain(String),
    /// Hex-encoded binary message.
    Hex(String),
}

impl Message {
    /// Hex message, checked to decode.
    pub fn hex(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        hex::decode(raw).map_err(|_| ValidationError::InvalidHexMessage)?;
        Ok(Message::Hex(raw.to_string()))
    }
}

/// Draft of a multi-recipient transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendRequest {
    pub sender: Option<String>,
    pub recipients: Vec<Recipient>,
    pub message: Message,
}

impl SendRequest {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Request body for the send endpoint. A sender is required.
    pub fn to_body(&self) -> Result<SendManyBody, ValidationError> {
        let from = self
            .sender
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingSender)?;

        let (hex, message) = match &self.message {
            Message::None => (None, None),
            Message::Plain(text) => (None, Some(text.clone())),
            Message::Hex(data) => (Some(data.clone()), None),
        };

        Ok(SendManyBody {
            from: from.to_string(),
            pairs: self
                .recipients
                .iter()
                .map(|r| (r.address.clone(), r.coin_id, r.amount.clone()))
                .collect(),
            hex,
            message,
        })
    }
}
