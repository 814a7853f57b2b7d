//! Client state containers.
//!
//! ARCHITECTURE
//! ============
//! Each concern owns its own signals. The dashboard controller holds the
//! writable stores; descendants receive read-only views through context.

pub mod auth;
pub mod journal;
pub mod reflection;
pub mod toast;
pub mod ui;
