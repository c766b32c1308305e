/// distro-finder library
///
/// Survey-driven Linux distro recommendations with hardware awareness.

pub mod config;
pub mod core;
pub mod error;
pub mod hardware;
pub mod store;

// Re-exports for convenience
pub use config::Settings;
pub use error::{FinderError, Result};
pub use store::DataStore;
