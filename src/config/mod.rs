//! Startup configuration.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, GtransConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
