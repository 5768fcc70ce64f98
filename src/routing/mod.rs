//! Contains implementation of view gating and role-based dispatch.
pub(crate) mod navigation;
pub(crate) mod role_router;
pub(crate) mod route_guard;
