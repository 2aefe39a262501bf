pub mod toml_loader;

pub use toml_loader::{load_config, load_config_file, resolve_config_path};
