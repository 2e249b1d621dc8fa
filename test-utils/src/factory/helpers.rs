//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique record identifier.
///
/// Produces a 24 character lowercase hex string, the same shape as identifiers
/// assigned by the application, so factory rows are indistinguishable from real ones.
pub fn next_record_id() -> String {
    format!("{:024x}", next_id())
}
