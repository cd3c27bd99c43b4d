//! Identifier generation port.

/// Produces the unique suffix of new thread and comment ids.
///
/// Repositories prepend the entity prefix, so a generator returning `123`
/// yields `thread-123` and `comment-123`.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generator that always returns the same suffix. Useful in tests.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(pub String);

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_generator_repeats_suffix() {
        let ids = FixedIdGenerator("123".to_string());
        assert_eq!(ids.generate(), "123");
        assert_eq!(ids.generate(), "123");
    }
}
