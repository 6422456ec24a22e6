//! Configuration loading.

mod loader;

pub use loader::{load_config, ENV_PREFIX};
