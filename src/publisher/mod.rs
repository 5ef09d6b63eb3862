//! Broker clients that deliver serialized envelopes.

mod error;
mod kafka;
mod key;
mod traits;

pub use error::PublisherError;
pub use kafka::KafkaBrokerClient;
pub use key::{KeyGenerator, UuidKeyGenerator};
#[cfg(test)]
pub use key::MockKeyGenerator;
#[cfg(test)]
pub use traits::MockBrokerClient;
pub use traits::BrokerClient;
