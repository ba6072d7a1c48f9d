use crate::domain::model::RuntimeContext;
use crate::domain::ports::{ContextSource, NodeSettings};
use crate::utils::error::{NodeError, Result};

/// Fails fast unless the orchestration runtime handed this process its context.
pub struct EntryGuard<S: ContextSource, C: NodeSettings> {
    source: S,
    settings: C,
}

impl<S: ContextSource, C: NodeSettings> EntryGuard<S, C> {
    pub fn new(source: S, settings: C) -> Self {
        Self { source, settings }
    }

    /// A blank value counts as unset; no fallback context is ever made up.
    pub fn require_context(&self) -> Result<RuntimeContext> {
        let node = self.settings.node_name();
        let variable = self.settings.context_var();

        match self.source.lookup(variable) {
            Some(descriptor) if !descriptor.trim().is_empty() => {
                tracing::debug!(node, variable, "runtime context found");
                Ok(RuntimeContext::new(node, variable, descriptor))
            }
            _ => {
                tracing::error!(node, variable, "runtime context missing");
                Err(NodeError::RuntimeContextMissing {
                    node: node.to_string(),
                    variable: variable.to_string(),
                })
            }
        }
    }
}
