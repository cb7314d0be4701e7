//! # postline-protocol
//!
//! Shared data models for postline.
//!
//! This crate defines the data structures exchanged between definition
//! authors and the agent runtime:
//!
//! - [`agent_models`]: declarative agent definitions and their validation
//! - [`context_models`]: the shared run-context agents write output into
//!
//! ## Design Principles
//!
//! - Records are data, not behavior: definitions carry no execution logic
//!   and are handed to the runtime crate through a trait seam.
//! - Minimal dependencies: serde, thiserror, uuid, chrono.
//! - Independent compilation: no dependencies on other postline crates.

pub mod agent_models;
pub mod context_models;

// Re-export all public types for convenience
pub use agent_models::*;
pub use context_models::*;
