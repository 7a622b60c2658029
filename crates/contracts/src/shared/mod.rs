pub mod menu_config;

pub use menu_config::{load_config, MenuConfig};
