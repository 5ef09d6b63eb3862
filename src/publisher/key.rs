#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

/// Produces message keys for published envelopes.
#[cfg_attr(test, automock)]
pub trait KeyGenerator: Send + Sync {
    /// Returns a fresh, effectively unique key.
    fn generate(&self) -> String;
}

/// Generates random (v4) UUID keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidKeyGenerator;

impl KeyGenerator for UuidKeyGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
