//! Compiler diagnostics.

use thiserror::Error;

/// Diagnostic raised when the dependency sorter cannot make progress.
///
/// This is recoverable-but-degraded: the stuck targets are still emitted,
/// unordered, after every sortable target, so the generated text may contain
/// forward references within the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unresolvable schema dependency cycle among: {}", .names.join(", "))]
pub struct CycleDiagnostic {
    /// Names of the targets that could not be ordered.
    pub names: Vec<String>,
}

impl CycleDiagnostic {
    /// Create a diagnostic from the stuck target names.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_message_lists_names() {
        let diag = CycleDiagnostic::new(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(
            diag.to_string(),
            "unresolvable schema dependency cycle among: A, B"
        );
    }
}
