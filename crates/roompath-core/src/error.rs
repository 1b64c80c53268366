use thiserror::Error;

/// Errors that can occur while building a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<N> {
    /// A door names a room that was never added to the graph.
    #[error("door references unknown room {node:?}")]
    UnknownNode { node: N },
}
