// Gateway module for application-level concerns

mod config;

pub use config::{
    get_config_dir, init_config, load_config, load_config_from, save_config, AssistantConfig,
    Config, OutputConfig,
};
