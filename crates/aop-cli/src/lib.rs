//! AOP Planner CLI support
//!
//! Command implementations and renderers behind the `aop-planner` binary.

#![warn(unreachable_pub)]

pub mod commands;
pub mod render;

pub use commands::{load_plan, RANKING_LIMIT};
pub use render::OutputFormat;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
