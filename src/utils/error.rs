//! The `error` module defines the error types returned by broker
//! operations.
//!
//! All failures are local and recoverable: they are returned as values, and
//! the broker's state is never modified on a failure path.

use thiserror::Error;

/// Errors returned by [`Broker`](crate::Broker) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrokerError {
    /// Subscribe was called twice for the same (topic, subscriber) pair
    /// without an intervening unsubscribe.
    #[error("subscriber `{subscriber}` is already subscribed to topic `{topic}`")]
    DuplicateSubscription { topic: String, subscriber: String },

    /// The named subscriber holds no subscriptions and is unknown to the
    /// broker.
    #[error("subscriber `{0}` is not registered")]
    UnknownSubscriber(String),

    /// The subscriber exists but has no subscription on this topic.
    #[error("subscriber `{subscriber}` is not subscribed to topic `{topic}`")]
    NotSubscribed { topic: String, subscriber: String },

    /// Poll found nothing unread: the cursor is already at the tail
    /// sentinel.
    #[error("no unread message on topic `{topic}`")]
    NoMessageAvailable { topic: String },
}

#[cfg(test)]
mod tests {
    use super::BrokerError;

    #[test]
    fn error_messages_name_the_parties() {
        let err = BrokerError::DuplicateSubscription {
            topic: "orders".into(),
            subscriber: "billing".into(),
        };
        assert_eq!(
            err.to_string(),
            "subscriber `billing` is already subscribed to topic `orders`"
        );

        let err = BrokerError::UnknownSubscriber("billing".into());
        assert_eq!(err.to_string(), "subscriber `billing` is not registered");

        let err = BrokerError::NoMessageAvailable {
            topic: "orders".into(),
        };
        assert_eq!(err.to_string(), "no unread message on topic `orders`");
    }
}
