pub mod generator;
pub mod parse;

pub use generator::{
    AuthConfig, EntryPointConfig, EnvironmentConfig, GeneratorConfig, MountPolicy, ServerConfig,
    TokenIssuance,
};
pub use parse::parse_config_content;
