use crate::domain::ports::ContextSource;
use std::collections::HashMap;
use std::env;

/// Reads the context from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvContextSource;

impl ContextSource for EnvContextSource {
    fn lookup(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values can't be a runtime descriptor.
        env::var(key).ok()
    }
}

/// Fixed set of variables, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticContextSource {
    vars: HashMap<String, String>,
}

impl StaticContextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl ContextSource for StaticContextSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_lookup() {
        let source = StaticContextSource::new().with("NODE_CTX", "opaque");
        assert_eq!(source.lookup("NODE_CTX").as_deref(), Some("opaque"));
        assert_eq!(source.lookup("OTHER"), None);
    }

    #[test]
    fn test_env_source_unset_variable() {
        assert_eq!(
            EnvContextSource.lookup("TERMINAL_INPUT_TEST_NEVER_SET_8F3A"),
            None
        );
    }
}
