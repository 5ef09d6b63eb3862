//! Data structures for error events and the envelopes they are published in.

mod envelope;
mod error_event;

pub use envelope::Envelope;
pub use error_event::ErrorEvent;
