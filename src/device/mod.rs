pub mod config;
pub mod device;

pub use config::{ConfigError, DeviceConfig, LogFormat, LoggingConfig};
pub use device::{DeviceError, WordCountDevice};
