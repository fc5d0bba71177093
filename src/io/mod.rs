pub mod atomic;
pub mod config_io;
pub mod logging;
pub mod store;

pub use store::{DEFAULT_PROJECT_NAME, Store, StoreError};
