use thiserror::Error;

/// Recoverable failures of the graph core. None of them leave a graph half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Edge text did not split into exactly two tokens.
    #[error("malformed edge {line:?}: expected 2 whitespace separated names, found {tokens}")]
    MalformedEdge { line: String, tokens: usize },
    /// Components were requested for a graph without vertices.
    #[error("graph has no vertices")]
    EmptyGraph,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = GraphError::MalformedEdge {
            line: "a b c".to_string(),
            tokens: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed edge \"a b c\": expected 2 whitespace separated names, found 3"
        );
        assert_eq!(GraphError::EmptyGraph.to_string(), "graph has no vertices");
    }

    #[test]
    fn converts_into_anyhow_and_back() {
        let err: anyhow::Error = GraphError::EmptyGraph.into();
        assert_eq!(err.downcast_ref::<GraphError>(), Some(&GraphError::EmptyGraph));
    }
}
