//! CLI command implementations.

pub(crate) mod account;
pub(crate) mod relations;
pub(crate) mod users;
