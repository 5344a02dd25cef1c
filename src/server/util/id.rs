//! Identifier generation for new records.
//!
//! The store depends on the `IdGenerator` trait rather than a concrete source of
//! randomness so tests can substitute predictable identifiers.

use rand::RngCore;

/// Number of random bytes behind each generated identifier (rendered as 40 hex chars).
const ID_BYTES: usize = 20;

/// Source of fresh, unique record identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generates identifiers from cryptographically secure random bytes, hex encoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; ID_BYTES];
        rand::rng().fill_bytes(&mut bytes);

        bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
    }
}

/// Hands out `movie-1`, `movie-2`, ... in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self
            .next
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            + 1;
        format!("movie-{}", n)
    }
}
