use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("required runtime context not found: `{variable}` is not set for node `{node}`")]
    RuntimeContextMissing { node: String, variable: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Runtime,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NodeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NodeError::RuntimeContextMissing { .. } => ErrorCategory::Runtime,
            NodeError::IoError(_) => ErrorCategory::Io,
            NodeError::ConfigError { .. }
            | NodeError::ConfigValidationError { .. }
            | NodeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Runtime => ErrorSeverity::Critical,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::High,
        }
    }

    pub fn is_runtime(&self) -> bool {
        self.category() == ErrorCategory::Runtime
    }

    /// Process exit code for the `terminal-input` binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NodeError::RuntimeContextMissing { node, .. } => format!(
                "Node `{}` is not running inside a dataflow: {}",
                node, self
            ),
            NodeError::IoError(e) => format!("Could not read a required file: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NodeError::RuntimeContextMissing { variable, .. } => format!(
                "Start this node through its dataflow runtime, which provides `{}`",
                variable
            ),
            NodeError::IoError(_) => "Check that the config file exists and is readable".to_string(),
            NodeError::ConfigError { .. } => "Check the TOML syntax of the config file".to_string(),
            NodeError::ConfigValidationError { field, .. }
            | NodeError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of `{}` in the config file or CLI flags", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn missing() -> NodeError {
        NodeError::RuntimeContextMissing {
            node: "terminal-input".to_string(),
            variable: "DORA_NODE_CONFIG".to_string(),
        }
    }

    #[test]
    fn test_runtime_context_missing_is_runtime_category() {
        let err = missing();
        assert!(err.is_runtime());
        assert_eq!(err.category(), ErrorCategory::Runtime);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_runtime_context_missing_names_variable() {
        let err = missing();
        assert!(err.to_string().contains("DORA_NODE_CONFIG"));
        assert!(err.user_friendly_message().contains("terminal-input"));
        assert!(err.recovery_suggestion().contains("DORA_NODE_CONFIG"));
    }

    #[test]
    fn test_config_errors_are_not_runtime() {
        let err = NodeError::InvalidConfigValueError {
            field: "runtime.context_var".to_string(),
            value: "1BAD".to_string(),
            reason: "starts with a digit".to_string(),
        };
        assert!(!err.is_runtime());
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);

        let io = NodeError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::Io);
    }
}
