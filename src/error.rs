//! Error type shared by layout and rendering.

/// Errors returned by [`DAG::layout`](crate::DAG::layout) and the render entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The graph is not acyclic. `cycle` holds the display text of the nodes
    /// on one offending cycle, in traversal order.
    #[error("invalid input: graph contains a cycle ({})", .cycle.join(" → "))]
    InvalidInput { cycle: Vec<String> },
}

impl Error {
    /// Whether the error was caused by the caller's graph rather than by the renderer.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_cycle_message_lists_path() {
        let err = Error::InvalidInput {
            cycle: vec!["a".into(), "b".into()],
        };
        assert_eq!(
            err.to_string(),
            "invalid input: graph contains a cycle (a → b)"
        );
        assert!(err.is_invalid_input());
    }
}
