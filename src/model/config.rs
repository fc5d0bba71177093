use serde::Deserialize;

/// Contents of `~/.donut.yml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonutConfig {
    /// Storage directory. `~/` and home-relative paths are expanded.
    #[serde(default)]
    pub donut_dir: Option<String>,
}
