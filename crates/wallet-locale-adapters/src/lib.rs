pub mod config;
pub mod console;
pub mod error;
pub mod loader;

pub use config::WalletLocaleConfig;
pub use console::ConsoleSink;
pub use error::AdapterError;
pub use loader::{load_overrides_file, parse_overrides};
