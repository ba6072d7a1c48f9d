use terminal_input::config::DEFAULT_CONTEXT_VAR;
use terminal_input::{ErrorCategory, NodeConfig, NodeError, StaticContextSource};

/// Outside a dataflow the entry point must fail with a runtime error.
#[test]
fn test_main_outside_dataflow_raises_runtime_error() {
    // Only this test touches the real variable.
    std::env::remove_var(DEFAULT_CONTEXT_VAR);

    let err = terminal_input::main().unwrap_err();

    assert!(err.is_runtime());
    assert_eq!(err.category(), ErrorCategory::Runtime);
    assert!(matches!(err, NodeError::RuntimeContextMissing { .. }));
    assert!(err.to_string().contains(DEFAULT_CONTEXT_VAR));
}

#[test]
fn test_main_with_injected_context() {
    let source = StaticContextSource::new().with("DORA_NODE_CONFIG", "handshake-blob");
    let context = terminal_input::main_with(source, NodeConfig::default()).unwrap();

    assert_eq!(context.node(), "terminal-input");
    assert_eq!(context.descriptor(), "handshake-blob");
}

#[test]
fn test_main_with_context_under_other_name_still_fails() {
    let source = StaticContextSource::new().with("SOME_OTHER_RUNTIME", "handshake-blob");
    let err = terminal_input::main_with(source, NodeConfig::default()).unwrap_err();

    match err {
        NodeError::RuntimeContextMissing { node, variable } => {
            assert_eq!(node, "terminal-input");
            assert_eq!(variable, "DORA_NODE_CONFIG");
        }
        other => panic!("expected RuntimeContextMissing, got {other:?}"),
    }
}
