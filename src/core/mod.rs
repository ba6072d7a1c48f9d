pub mod entry;
pub mod guard;

pub use crate::domain::model::RuntimeContext;
pub use crate::domain::ports::{ContextSource, NodeSettings};
pub use crate::utils::error::Result;
