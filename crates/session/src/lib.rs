//! `uniknow-session` — the client-side session store.
//!
//! Holds the auth token and user profile, persists both to durable local
//! key-value storage, and rehydrates them at startup. The store is the only
//! shared mutable state in the client; every accessor is synchronous.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
pub use store::{SessionStore, TOKEN_KEY, USER_INFO_KEY};
