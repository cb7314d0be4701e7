//! Scaffolding for new `.postline/` directories.
//!
//! Generates a starter configuration containing the built-in initial post
//! generator definition, rendered to the same front-matter markdown the
//! loader reads back.
//!
//! # Example
//!
//! ```no_run
//! use postline_core::init::{scaffold_postline_dir, InitOptions};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//! };
//!
//! scaffold_postline_dir(options).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{scaffold_postline_dir, InitOptions};
