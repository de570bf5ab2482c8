use std::rc::Rc;

use crate::broker::message::{MessageNode, NodeRef};

/// A named broadcast channel over one message chain.
///
/// The topic owns only the chain's tail reference. Invariant: the tail is
/// always an empty sentinel with no successor, and every node before it
/// holds a real payload and a non-null successor. Subscribers keep their own
/// cursors into the same chain, so the topic itself stores nothing per
/// subscriber.
#[derive(Debug)]
pub struct Topic {
    pub name: String,
    tail: NodeRef,
}

impl Topic {
    /// Creates a topic whose chain is a single empty sentinel.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tail: MessageNode::sentinel(),
        }
    }

    /// The current tail sentinel. New subscriptions start here, which is why
    /// a late subscriber never sees messages published before it arrived.
    pub(crate) fn tail(&self) -> NodeRef {
        Rc::clone(&self.tail)
    }

    /// Appends one message: the sentinel becomes the real message node and a
    /// fresh sentinel is linked behind it.
    pub(crate) fn push(&mut self, payload: Rc<str>) {
        let sentinel = MessageNode::sentinel();
        {
            let mut tail = self.tail.borrow_mut();
            tail.payload = Some(payload);
            tail.next = Some(Rc::clone(&sentinel));
        }
        self.tail = sentinel;
    }
}
