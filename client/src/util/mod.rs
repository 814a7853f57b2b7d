//! Browser and formatting helpers shared by pages and components.

pub mod dark_mode;
pub mod markdown;
pub mod text;
pub mod typewriter;
