pub mod config_load;
pub mod config_types;
pub mod error;

pub use config_load::{parse_hex_color, Config};
pub use config_types::{AnimationConfig, BoundaryPolicy, ChainConfig, StyleConfig, WindowConfig};
pub use error::ConfigError;
