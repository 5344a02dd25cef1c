//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
///
/// Ensures each factory-created payload gets a distinct default title, which makes
/// records easy to tell apart in assertions.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
