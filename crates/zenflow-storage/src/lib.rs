//! zenflow-storage
//!
//! Local key-value persistence and the session store built on top of it.
//! Nothing outside this crate reads or writes the session keys directly.

pub mod error;
pub mod file;
pub mod kv;
pub mod session;

pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use session::SessionStore;
