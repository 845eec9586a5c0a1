/// Application settings loading from config.toml
pub mod settings;

pub use settings::{Settings, config_path, load_default_settings, load_settings};
