pub mod config;
pub mod logger;
pub mod settings_toml;

pub use config::*;
pub use logger::{Colors, setup_logging};
pub use settings_toml::{SettingsToml, apply_file_to_opts, load_settings_toml};
