//! The key-value storage seam.
//!
//! Implementations: [`MemoryStore`](crate::MemoryStore) for tests and
//! [`FileStore`](crate::FileStore) for on-device persistence.

/// Async key-value storage for small serialized records.
///
/// Writes are fire-and-forget: an implementation that fails to write logs the
/// failure and carries on, and a later `get` simply finds nothing.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<Vec<u8>>>;
    fn set(&self, key: &str, value: Vec<u8>) -> impl std::future::Future<Output = ()>;
}
