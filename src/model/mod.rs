pub mod app_data;
pub mod config;
pub mod project;
pub mod todo;

pub use app_data::*;
pub use config::*;
pub use project::*;
pub use todo::*;
