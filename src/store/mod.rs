/// Storage module for distro-finder
///
/// Loads and saves the JSON documents the survey and hardware collector
/// share with the engine. The engine itself never touches files.

pub mod data_store;
pub mod models;

pub use data_store::DataStore;
pub use models::*;
