mod manager;
mod source;
mod validate;

pub use manager::ConfigManager;
pub use source::{ConfigSource, FileConfigSource};
pub use validate::Validate;
