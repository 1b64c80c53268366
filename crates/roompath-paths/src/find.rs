use std::hash::Hash;

use roompath_core::{Edge, Graph, GraphError};

use crate::bfs::bfs_path;

/// Find one shortest path from `start` to `goal` through `nodes` joined by
/// the undirected `edges`.
///
/// - An empty `nodes` list yields an empty path, even when `start == goal`.
/// - Otherwise `start == goal` yields `[start]` without looking at `edges`.
/// - An unreachable `goal` yields an empty path.
///
/// When several shortest paths exist, the one found first by exploring
/// doors in the order supplied is returned.
///
/// # Errors
///
/// [`GraphError::UnknownNode`] if an edge names a room missing from
/// `nodes`.
pub fn find_path<N, E>(
    nodes: impl IntoIterator<Item = N>,
    edges: impl IntoIterator<Item = E>,
    start: N,
    goal: N,
) -> Result<Vec<N>, GraphError<N>>
where
    N: Clone + Eq + Hash,
    E: Into<Edge<N>>,
{
    let nodes: Vec<N> = nodes.into_iter().collect();
    if nodes.is_empty() {
        return Ok(Vec::new());
    }
    if start == goal {
        return Ok(vec![start]);
    }

    let graph = Graph::from_parts(nodes, edges)?;
    Ok(bfs_path(&graph, start, goal).unwrap_or_default())
}
