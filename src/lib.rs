//! # PullSub
//!
//! `pullsub` is a minimalist, in-process publish/subscribe message store.
//! Producers publish text payloads to named topics; named subscribers
//! independently consume every message published to the topics they follow,
//! each advancing its own cursor through a shared per-topic message chain.
//!
//! Every operation (publish, subscribe, unsubscribe, poll) runs in O(1)
//! time, the store never copies a message per subscriber, and consumed chain
//! nodes are reclaimed automatically once no cursor can still reach them.
//!
//! ## Core Modules
//!
//! - `broker`: The central component that manages topics, subscribers, and
//!   the per-topic message chains.
//! - `config`: Handles loading and merging store configuration.
//! - `utils`: Shared utilities, such as error handling and logging setup.
//!
//! The broker is deliberately single-threaded: it is built on `Rc`, so it is
//! `!Send` and `!Sync` and cannot be shared across threads by accident.
//! Callers that need concurrent access should put one broker behind a single
//! serialization point of their own (a mutex-guarded facade or a dedicated
//! command task) rather than expect internal locking.

pub mod broker;
pub mod config;
pub mod utils;

pub use broker::Broker;
pub use utils::error::BrokerError;
