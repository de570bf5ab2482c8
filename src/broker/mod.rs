pub mod engine;
pub mod message;
pub mod subscriber;
pub mod topic;

pub use engine::Broker;
