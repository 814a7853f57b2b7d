//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the request wrapper every call goes through, `journal_api` and
//! `reflect_api` are the two resource clients built on it, `api` handles the
//! session endpoints, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod journal_api;
pub mod reflect_api;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
