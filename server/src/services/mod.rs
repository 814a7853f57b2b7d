//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the identity-provider plumbing and session storage so
//! route handlers can stay focused on protocol translation and cookies.

pub mod auth;
pub mod session;
