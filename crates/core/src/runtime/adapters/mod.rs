//! Backend adapter implementations.

mod gemini;
pub mod mock;

pub use gemini::GeminiAdapter;
pub use mock::MockAgent;
