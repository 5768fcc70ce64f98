//! Contains implementation of the client-held session and its store.
pub(crate) mod role;
pub(crate) mod session;
pub(crate) mod session_store;
