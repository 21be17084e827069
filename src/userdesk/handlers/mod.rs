pub mod config;
pub use self::config::config_js;

pub mod health;
pub use self::health::health;
