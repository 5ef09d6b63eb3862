//! A set of helpers for testing

mod broker;

pub use broker::{RecordedMessage, RecordingBrokerClient};
