use crate::adapters::EnvContextSource;
use crate::config::NodeConfig;
use crate::core::guard::EntryGuard;
use crate::domain::model::RuntimeContext;
use crate::domain::ports::{ContextSource, NodeSettings};
use crate::utils::error::Result;

/// Entry point of the `terminal-input` node.
///
/// Must be called from inside a running dataflow. Outside of it, this returns
/// [`NodeError::RuntimeContextMissing`](crate::NodeError::RuntimeContextMissing)
/// before doing anything else.
pub fn main() -> Result<RuntimeContext> {
    main_with(EnvContextSource, NodeConfig::default())
}

pub fn main_with<S, C>(source: S, settings: C) -> Result<RuntimeContext>
where
    S: ContextSource,
    C: NodeSettings,
{
    tracing::info!(node = settings.node_name(), "starting node");
    EntryGuard::new(source, settings).require_context()
}
