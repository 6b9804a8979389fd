//! Filesystem-backed configuration loading.
//!
//! Pure schema and validation live in `domain::configuration`.

mod load_config;

pub use load_config::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
