/// Proof that the node was started by its orchestration runtime.
///
/// The descriptor is kept exactly as the runtime supplied it; this crate never
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeContext {
    node: String,
    variable: String,
    descriptor: String,
}

impl RuntimeContext {
    pub fn new(node: impl Into<String>, variable: impl Into<String>, descriptor: String) -> Self {
        Self {
            node: node.into(),
            variable: variable.into(),
            descriptor,
        }
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}
