//! Contains implementation of authentication against the remote identity service.
pub(crate) mod auth_error;
pub(crate) mod auth_gateway;
pub(crate) mod forms;
pub(crate) mod http_identity_api;
pub(crate) mod identity_api;
