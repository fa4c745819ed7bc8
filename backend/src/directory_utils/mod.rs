pub mod directory_client;
pub mod directory_config;
