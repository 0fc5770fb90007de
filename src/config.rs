use serde::Deserialize;

/// User-configurable statusline settings.
/// Missing file is not an error -- all fields have defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Number of cells in the context-usage progress bar.
    /// Default: 8
    pub bar_width: usize,

    /// Render the bar with ASCII glyphs instead of block characters.
    /// Default: false
    pub ascii: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            bar_width: 8,
            ascii: false,
        }
    }
}

/// Load the TOML config.
/// Checks `CCLINE_CONFIG` env var first (for testing), then falls back to
/// `~/.config/ccline/config.toml` (platform-appropriate).
/// Returns default config if the file is missing or unparseable.
pub fn load_config() -> LineConfig {
    let config_path = std::env::var("CCLINE_CONFIG")
        .ok()
        .map(std::path::PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("ccline").join("config.toml")));

    match config_path {
        Some(path) if path.exists() => match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => LineConfig::default(),
        },
        _ => LineConfig::default(),
    }
}
