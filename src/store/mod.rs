//! Contains implementation of the durable key/value store the session is mirrored into.
pub(crate) mod durable_store;
pub(crate) mod memory_store;
pub(crate) mod sqlite_store;
