//! Cargo integration
//!
//! - **metadata**: query workspace crate names via `cargo metadata`

pub mod metadata;
