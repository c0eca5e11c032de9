pub mod loader;
pub mod schema;

pub use loader::{
    find_config_file_in, global_config_dir, load_config_from_file, load_layered_config,
    resolve_config, ConfigFormat, ResolvedConfig,
};
pub use schema::{AgentOverride, PluginConfig};
