//! Gift events and their delivery lifecycle

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Event as produced onto the gift stream.
///
/// The queue owns this shape; consumers treat it as read-only. `amount` is
/// optional because not every gift type carries one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEvent {
    /// Event type tag, e.g. `"DONATION"`
    pub event_type: String,

    /// Display name of the contributor; empty when the producer omits it
    #[serde(default)]
    pub user_name: String,

    /// Amount in `currency`; absent for events that carry no value
    #[serde(default)]
    pub amount: Option<Decimal>,

    /// ISO-like currency code of `amount`
    pub currency: String,
}

/// Delivery state of a message within one delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// Not yet acknowledged; the transport will redeliver it
    Pending,
    /// Acknowledged; the transport removes it from the queue
    Finished,
}

/// One delivered message: an event plus its acknowledgment state.
///
/// Handlers receive a `Pending` message and may transition it to `Finished`
/// exactly once via [`QueueMessage::finish`]. A message still `Pending` when
/// the handler returns means "please redeliver" — the subscriber only
/// acknowledges finished messages.
#[derive(Debug)]
pub struct QueueMessage {
    event: QueueEvent,
    status: DeliveryStatus,
}

impl QueueMessage {
    /// Wrap a freshly delivered event
    pub fn new(event: QueueEvent) -> Self {
        Self {
            event,
            status: DeliveryStatus::Pending,
        }
    }

    /// The delivered event
    pub fn event(&self) -> &QueueEvent {
        &self.event
    }

    /// Current delivery state
    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// Mark the message as processed. Idempotent: finishing an already
    /// finished message is a no-op. There is no reverse transition.
    pub fn finish(&mut self) {
        self.status = DeliveryStatus::Finished;
    }

    /// Whether the message has been finished
    pub fn is_finished(&self) -> bool {
        self.status == DeliveryStatus::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn donation_event() -> QueueEvent {
        QueueEvent {
            event_type: "DONATION".to_string(),
            user_name: "Cher".to_string(),
            amount: Some(dec!(100)),
            currency: "RUB".to_string(),
        }
    }

    #[test]
    fn test_message_starts_pending() {
        let message = QueueMessage::new(donation_event());
        assert_eq!(message.status(), DeliveryStatus::Pending);
        assert!(!message.is_finished());
    }

    #[test]
    fn test_finish_transitions_once() {
        let mut message = QueueMessage::new(donation_event());
        message.finish();
        assert_eq!(message.status(), DeliveryStatus::Finished);
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut message = QueueMessage::new(donation_event());
        message.finish();
        message.finish();
        assert!(message.is_finished());
    }

    #[test]
    fn test_event_deserialization_defaults() {
        let event: QueueEvent =
            serde_json::from_str(r#"{"event_type": "FOLLOW", "currency": "RUB"}"#).unwrap();
        assert_eq!(event.event_type, "FOLLOW");
        assert_eq!(event.user_name, "");
        assert_eq!(event.amount, None);
    }

    #[test]
    fn test_event_amount_accepts_numbers() {
        let event: QueueEvent = serde_json::from_str(
            r#"{"event_type": "DONATION", "user_name": "Cher", "amount": 100.5, "currency": "USD"}"#,
        )
        .unwrap();
        assert_eq!(event.amount, Some(dec!(100.5)));
    }
}
