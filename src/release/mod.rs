//! Plan resolution, operator confirmation and the sequential release loop
//!
//! Control flow through this module is strictly linear: resolve the plan,
//! confirm it, then release one crate at a time. Releases are never run
//! concurrently; each one must land as its own tag so the per-tag release
//! workflow sees them as separate events.

pub mod confirm;
pub mod driver;
pub mod resolve;

pub use confirm::confirm_plan;
pub use driver::{RELEASE_DELAY, release_all};
pub use resolve::resolve_plan;
