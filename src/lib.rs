pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{EnvContextSource, StaticContextSource};
pub use config::NodeConfig;
pub use crate::core::entry::{main, main_with};
pub use crate::core::guard::EntryGuard;
pub use domain::model::RuntimeContext;
pub use utils::error::{ErrorCategory, NodeError, Result};
