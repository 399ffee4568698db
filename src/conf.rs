//! Layered settings
//!
//! Defaults, an optional `formkit.toml` and `FORMKIT_`-prefixed environment
//! variables, merged in that order.

pub use formkit_conf::*;
