//! Domain Services
//!
//! Resolution of deploy identifiers and config locations. No filesystem
//! access beyond what callers hand in.

mod config_processor;
mod config_reader;

pub use config_processor::{ConfigFlow, ConfigProcessor};
pub use config_reader::ConfigReader;
