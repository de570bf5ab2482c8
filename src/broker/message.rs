use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a node in a message chain.
///
/// Nodes are reference counted: a node stays alive exactly as long as the
/// topic tail or at least one subscription cursor can still reach it, and is
/// freed the moment the last such reference goes away. The chain is never
/// trimmed explicitly.
pub type NodeRef = Rc<RefCell<MessageNode>>;

/// One node in a topic's message chain.
///
/// The chain is an append-only singly linked list whose last node is always
/// an empty sentinel: `payload` and `next` are both `None`. Publishing turns
/// the sentinel into a real message and links a fresh sentinel behind it, so
/// every non-tail node carries a payload and a successor.
#[derive(Debug, Default)]
pub struct MessageNode {
    pub(crate) payload: Option<Rc<str>>,
    pub(crate) next: Option<NodeRef>,
}

impl MessageNode {
    /// Creates a detached empty sentinel.
    pub(crate) fn sentinel() -> NodeRef {
        Rc::new(RefCell::new(MessageNode::default()))
    }
}
