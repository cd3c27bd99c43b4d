//! Identifier generator adapters.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Generates compact random UUIDv4 suffixes (32 hex characters, no dashes).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
