use std::collections::HashMap;
use std::rc::Rc;

use crate::broker::message::NodeRef;

pub type SubscriberId = String;

/// Per-(topic, subscriber) cursor into a topic's message chain.
///
/// `head` is the next node this subscriber will read. On creation it points
/// at the topic's current tail sentinel, so only messages published after
/// the subscribe call are visible.
#[derive(Debug)]
pub struct Subscription {
    pub(crate) head: NodeRef,
}

impl Subscription {
    pub(crate) fn new(head: NodeRef) -> Self {
        Self { head }
    }

    /// Returns the next unread payload and moves the cursor past it, or
    /// `None` when the cursor still sits on the tail sentinel.
    pub(crate) fn advance(&mut self) -> Option<Rc<str>> {
        let (payload, next) = {
            let node = self.head.borrow();
            match &node.next {
                // A node with a successor always carries a payload.
                Some(next) => (node.payload.clone(), Rc::clone(next)),
                None => return None,
            }
        };
        self.head = next;
        payload
    }
}

/// A named subscriber owning at most one subscription per topic.
///
/// The record exists only while it has subscriptions; removing the last one
/// removes the subscriber itself.
#[derive(Debug, Default)]
pub struct Subscriber {
    pub(crate) subscriptions: HashMap<String, Subscription>,
}
