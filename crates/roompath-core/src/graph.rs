use std::collections::HashMap;
use std::hash::Hash;

use crate::{Edge, GraphError};

/// Undirected adjacency structure over rooms of type `N`.
///
/// Rooms keep the order they were added in, and each room's neighbor list
/// keeps the order doors were added in. Searches walk neighbors in that
/// order, so two graphs built from the same lists always yield the same
/// path.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    index: HashMap<N, usize>,
    nodes: Vec<N>,
    adjacency: Vec<Vec<N>>,
    edges: Vec<Edge<N>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a room list and a door list.
    ///
    /// Doors are applied in the order given. The first door naming a room
    /// absent from `nodes` aborts construction with
    /// [`GraphError::UnknownNode`]; endpoint `a` is checked before `b`.
    pub fn from_parts<E: Into<Edge<N>>>(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self, GraphError<N>> {
        let mut graph = Self::new();
        for n in nodes {
            graph.add_node(n);
        }
        for e in edges {
            let Edge { a, b } = e.into();
            graph.add_edge(a, b)?;
        }
        log::debug!(
            "graph built: {} rooms, {} doors",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Add a room with no doors. Re-adding a known room is a no-op.
    pub fn add_node(&mut self, n: N) {
        if self.index.contains_key(&n) {
            return;
        }
        self.index.insert(n.clone(), self.nodes.len());
        self.nodes.push(n);
        self.adjacency.push(Vec::new());
    }

    /// Add a door between `a` and `b`.
    ///
    /// `b` is appended to `a`'s neighbors and `a` to `b`'s. Duplicate doors
    /// and self-loops are accepted. The graph is left untouched on error.
    pub fn add_edge(&mut self, a: N, b: N) -> Result<(), GraphError<N>> {
        let Some(&ai) = self.index.get(&a) else {
            return Err(GraphError::UnknownNode { node: a });
        };
        let Some(&bi) = self.index.get(&b) else {
            return Err(GraphError::UnknownNode { node: b });
        };
        self.adjacency[ai].push(b.clone());
        self.adjacency[bi].push(a.clone());
        self.edges.push(Edge { a, b });
        Ok(())
    }

    #[inline]
    pub fn contains(&self, n: &N) -> bool {
        self.index.contains_key(n)
    }

    /// Neighbors of `n` in door order, or `None` if `n` is not a room of
    /// this graph.
    pub fn neighbors_of(&self, n: &N) -> Option<&[N]> {
        let &i = self.index.get(n)?;
        Some(&self.adjacency[i])
    }
}

impl<N> Graph<N> {
    /// Number of rooms.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Rooms in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Accepted doors in insertion order, duplicates included.
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

// A graph is written as the lists it was built from and rebuilt through
// `from_parts` on the way back in, so unknown doors fail to deserialize.

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct RoomMapRef<'a, N> {
    rooms: &'a [N],
    doors: &'a [Edge<N>],
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RoomMap<N> {
    rooms: Vec<N>,
    doors: Vec<Edge<N>>,
}

#[cfg(feature = "serde")]
impl<N: serde::Serialize> serde::Serialize for Graph<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RoomMapRef {
            rooms: &self.nodes,
            doors: &self.edges,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, N> serde::Deserialize<'de> for Graph<N>
where
    N: serde::Deserialize<'de> + Clone + Eq + Hash + std::fmt::Debug,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = RoomMap::<N>::deserialize(deserializer)?;
        Graph::from_parts(map.rooms, map.doors).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOMS: [&str; 4] = ["Entrance", "Hall", "Gallery", "Cafe"];
    const DOORS: [(&str, &str); 3] = [
        ("Entrance", "Hall"),
        ("Hall", "Gallery"),
        ("Gallery", "Cafe"),
    ];

    #[test]
    fn from_parts_builds_symmetric_adjacency() {
        let g = Graph::from_parts(ROOMS, DOORS).unwrap();
        assert_eq!(g.len(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors_of(&"Entrance"), Some(&["Hall"][..]));
        assert_eq!(g.neighbors_of(&"Hall"), Some(&["Entrance", "Gallery"][..]));
        assert_eq!(g.neighbors_of(&"Cafe"), Some(&["Gallery"][..]));
        assert_eq!(g.neighbors_of(&"Attic"), None);
    }

    #[test]
    fn neighbor_order_follows_door_order() {
        let g = Graph::from_parts(["A", "B", "C", "D"], [("A", "C"), ("D", "A"), ("A", "B")])
            .unwrap();
        assert_eq!(g.neighbors_of(&"A"), Some(&["C", "D", "B"][..]));
    }

    #[test]
    fn nodes_keep_insertion_order() {
        let g = Graph::from_parts(["Cafe", "Hall", "Cafe", "Entrance"], Vec::<(&str, &str)>::new())
            .unwrap();
        let order: Vec<_> = g.nodes().copied().collect();
        assert_eq!(order, vec!["Cafe", "Hall", "Entrance"]);
    }

    #[test]
    fn unknown_room_is_an_error() {
        let err = Graph::from_parts(ROOMS, [("Hall", "Attic")]).unwrap_err();
        assert_eq!(err, GraphError::UnknownNode { node: "Attic" });
    }

    #[test]
    fn first_bad_endpoint_is_reported() {
        let err = Graph::from_parts(
            ROOMS,
            [("Hall", "Gallery"), ("Cellar", "Attic"), ("Roof", "Hall")],
        )
        .unwrap_err();
        assert_eq!(err, GraphError::UnknownNode { node: "Cellar" });
    }

    #[test]
    fn failed_add_edge_leaves_graph_untouched() {
        let mut g = Graph::from_parts(ROOMS, DOORS).unwrap();
        assert!(g.add_edge("Cafe", "Attic").is_err());
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors_of(&"Cafe"), Some(&["Gallery"][..]));
    }

    #[test]
    fn duplicates_and_loops_are_accepted() {
        let mut g = Graph::new();
        g.add_node(1u32);
        g.add_node(2);
        g.add_edge(1, 2).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 2).unwrap();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors_of(&1), Some(&[2, 2][..]));
        assert_eq!(g.neighbors_of(&2), Some(&[1, 1, 2, 2][..]));
    }

    #[test]
    fn re_adding_room_keeps_doors() {
        let mut g = Graph::from_parts(ROOMS, DOORS).unwrap();
        g.add_node("Hall");
        assert_eq!(g.len(), 4);
        assert_eq!(g.neighbors_of(&"Hall"), Some(&["Entrance", "Gallery"][..]));
    }

    #[test]
    fn empty_graph() {
        let g: Graph<String> = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains(&"Hall".to_string()));
    }
}
