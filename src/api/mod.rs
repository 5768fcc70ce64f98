//! Contains implementation of the typed clients for the non-identity services.
pub(crate) mod assignments;
pub(crate) mod classes;
pub(crate) mod rest_client;
pub(crate) mod submissions;
