//! Eligibility filter for inbound gift events

use event_queue::QueueEvent;
use rust_decimal::Decimal;

/// Event type forwarded to the ledger
pub const DONATION_EVENT: &str = "DONATION";

/// Whether an event should be forwarded.
///
/// Everything else is dropped up front: an ineligible event is finished
/// immediately so the queue never redelivers it. Redelivery is reserved for
/// outcomes that could succeed on a later attempt.
pub fn is_forwardable(event: &QueueEvent) -> bool {
    event.event_type == DONATION_EVENT
        && event.amount.map_or(false, |amount| amount > Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn event(event_type: &str, amount: Option<Decimal>) -> QueueEvent {
        QueueEvent {
            event_type: event_type.to_string(),
            user_name: "Test User".to_string(),
            amount,
            currency: "RUB".to_string(),
        }
    }

    #[test]
    fn test_donation_with_amount_is_forwardable() {
        assert!(is_forwardable(&event("DONATION", Some(dec!(100)))));
    }

    #[test]
    fn test_non_donation_is_dropped() {
        assert!(!is_forwardable(&event("FOLLOW", Some(dec!(100)))));
    }

    #[test]
    fn test_missing_amount_is_dropped() {
        assert!(!is_forwardable(&event("DONATION", None)));
    }

    #[test]
    fn test_zero_amount_is_dropped() {
        assert!(!is_forwardable(&event("DONATION", Some(Decimal::ZERO))));
    }
}
