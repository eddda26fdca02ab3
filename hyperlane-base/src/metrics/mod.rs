//! Useful metrics that all tools should track.

/// The metrics namespace prefix. All metric names will start with `{NAMESPACE}_`.
pub const NAMESPACE: &str = "hyperlane";

mod core;
pub use self::core::*;

mod governance;
pub use self::governance::*;
