use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::broker::subscriber::{Subscriber, SubscriberId, Subscription};
use crate::broker::topic::Topic;
use crate::config::BrokerSettings;
use crate::utils::error::BrokerError;

/// The in-memory message chain store at the core of the pub/sub system.
///
/// The broker maps topic names to [`Topic`]s and subscriber names to
/// [`Subscriber`]s, and implements the four operations of the system:
/// publish, subscribe, unsubscribe, and poll. Each operation is O(1) and
/// completes its mutation fully before returning; every error path leaves
/// the store exactly as it was.
///
/// Not thread-safe by design. The chain is built on `Rc`, so the compiler
/// already refuses to move a broker across threads; callers needing shared
/// access must serialize calls externally.
#[derive(Debug, Default)]
pub struct Broker {
    pub(crate) topics: HashMap<String, Topic>,
    pub(crate) subscribers: HashMap<SubscriberId, Subscriber>,
}

impl Broker {
    /// Creates an empty broker with no topics and no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty broker with its maps pre-sized from configuration.
    pub fn with_settings(settings: &BrokerSettings) -> Self {
        Self {
            topics: HashMap::with_capacity(settings.initial_topic_capacity),
            subscribers: HashMap::with_capacity(settings.initial_subscriber_capacity),
        }
    }

    /// Publishes a message to all current and future cursors of a topic.
    ///
    /// If the topic was never subscribed to, there is no topic record and
    /// therefore nobody who could ever receive the message: the call
    /// succeeds, the message is dropped, and no topic is created.
    ///
    /// Otherwise the topic's tail sentinel becomes the message node and the
    /// tail advances to a fresh sentinel, making the payload visible to
    /// every subscription of this topic. Never fails.
    pub fn publish(&mut self, topic: &str, payload: &str) -> Result<(), BrokerError> {
        let Some(t) = self.topics.get_mut(topic) else {
            debug!(topic, "publish to unregistered topic, message dropped");
            return Ok(());
        };
        t.push(Rc::from(payload));
        trace!(topic, "message appended");
        Ok(())
    }

    /// Subscribes a named subscriber to a topic.
    ///
    /// The topic and the subscriber record are created on first use. The new
    /// subscription's cursor starts at the topic's current tail sentinel, so
    /// the subscriber sees nothing published before this call.
    ///
    /// Fails with [`BrokerError::DuplicateSubscription`] if this subscriber
    /// already holds a subscription for the topic; the existing cursor is
    /// left untouched.
    pub fn subscribe(&mut self, topic: &str, subscriber: &str) -> Result<(), BrokerError> {
        let head = self
            .topics
            .entry(topic.to_string())
            .or_insert_with(|| Topic::new(topic))
            .tail();

        let sub = self.subscribers.entry(subscriber.to_string()).or_default();

        if sub.subscriptions.contains_key(topic) {
            return Err(BrokerError::DuplicateSubscription {
                topic: topic.to_string(),
                subscriber: subscriber.to_string(),
            });
        }
        sub.subscriptions
            .insert(topic.to_string(), Subscription::new(head));
        debug!(topic, subscriber, "subscribed");
        Ok(())
    }

    /// Removes a subscriber's subscription to a topic.
    ///
    /// If that was the subscriber's last subscription, the subscriber record
    /// is removed as well and its name becomes unknown to the broker. The
    /// topic is retained even when no subscriber remains attached to it; the
    /// store never reaps topics.
    ///
    /// Fails with [`BrokerError::UnknownSubscriber`] or
    /// [`BrokerError::NotSubscribed`].
    pub fn unsubscribe(&mut self, topic: &str, subscriber: &str) -> Result<(), BrokerError> {
        let Some(sub) = self.subscribers.get_mut(subscriber) else {
            return Err(BrokerError::UnknownSubscriber(subscriber.to_string()));
        };
        if sub.subscriptions.remove(topic).is_none() {
            return Err(BrokerError::NotSubscribed {
                topic: topic.to_string(),
                subscriber: subscriber.to_string(),
            });
        }
        if sub.subscriptions.is_empty() {
            self.subscribers.remove(subscriber);
            debug!(subscriber, "last subscription removed, subscriber dropped");
        }
        debug!(topic, subscriber, "unsubscribed");
        Ok(())
    }

    /// Returns the subscriber's next unread message on a topic and advances
    /// its cursor, in strict publish order, exactly once per subscriber.
    ///
    /// Fails with [`BrokerError::UnknownSubscriber`],
    /// [`BrokerError::NotSubscribed`], or, when the cursor already sits on
    /// the tail sentinel, [`BrokerError::NoMessageAvailable`]. Repeated
    /// polls with nothing new published keep failing with the latter; stale
    /// data is never returned twice.
    pub fn poll(&mut self, topic: &str, subscriber: &str) -> Result<Rc<str>, BrokerError> {
        let Some(sub) = self.subscribers.get_mut(subscriber) else {
            return Err(BrokerError::UnknownSubscriber(subscriber.to_string()));
        };
        let Some(subscription) = sub.subscriptions.get_mut(topic) else {
            return Err(BrokerError::NotSubscribed {
                topic: topic.to_string(),
                subscriber: subscriber.to_string(),
            });
        };
        match subscription.advance() {
            Some(payload) => {
                trace!(topic, subscriber, "message delivered");
                Ok(payload)
            }
            None => Err(BrokerError::NoMessageAvailable {
                topic: topic.to_string(),
            }),
        }
    }
}
