use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use crate::publisher::{BrokerClient, PublisherError};

/// A message captured by [`RecordingBrokerClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMessage {
    /// Destination topic.
    pub topic: String,
    /// Message key.
    pub key: String,
    /// Serialized envelope.
    pub payload: Vec<u8>,
}

impl RecordedMessage {
    /// Decodes the payload as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.payload).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Default)]
struct State {
    messages: Vec<RecordedMessage>,
    send_attempts: usize,
    close_calls: usize,
    last_close_timeout: Option<Duration>,
}

/// An in-memory broker client that records every write.
///
/// Clones share state, so a test can keep one handle while the reporter owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct RecordingBrokerClient {
    state: Arc<Mutex<State>>,
    failure: Option<String>,
}

impl RecordingBrokerClient {
    /// Creates a client that accepts every write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client whose writes all fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Messages accepted so far, in write order.
    pub fn messages(&self) -> Vec<RecordedMessage> {
        self.state().messages.clone()
    }

    /// Number of writes attempted, including failed ones.
    pub fn send_attempts(&self) -> usize {
        self.state().send_attempts
    }

    /// Number of times `close` was called.
    pub fn close_calls(&self) -> usize {
        self.state().close_calls
    }

    /// Timeout passed to the most recent `close`.
    pub fn last_close_timeout(&self) -> Option<Duration> {
        self.state().last_close_timeout
    }

    /// Whether the client still holds its resources.
    pub fn is_open(&self) -> bool {
        self.state().close_calls == 0
    }
}

#[async_trait::async_trait]
impl BrokerClient for RecordingBrokerClient {
    async fn send(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublisherError> {
        let mut state = self.state();
        state.send_attempts += 1;

        if let Some(message) = &self.failure {
            return Err(PublisherError::Broker(message.clone()));
        }

        state.messages.push(RecordedMessage {
            topic: topic.to_string(),
            key: key.to_string(),
            payload: payload.to_vec(),
        });

        Ok(())
    }

    async fn close(&self, timeout: Duration) -> Result<(), PublisherError> {
        let mut state = self.state();
        state.close_calls += 1;
        state.last_close_timeout = Some(timeout);
        Ok(())
    }
}
