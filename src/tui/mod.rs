pub mod app;
pub mod effects;
pub mod input;
pub mod render;
pub mod theme;

#[cfg(test)]
pub mod test_helpers;

pub use app::run;
