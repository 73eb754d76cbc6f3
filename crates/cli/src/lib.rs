pub mod config;
pub mod logging;

pub use config::{AppSettings, Config, CONFIG_FILE_NAME};
pub use logging::TracingObserver;
