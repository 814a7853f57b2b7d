//! Route-level pages and the dashboard controller behind them.

pub mod journals;
pub mod journals_controller;
pub mod login;
