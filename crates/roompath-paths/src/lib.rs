//! Breadth-first shortest paths through room-and-door graphs.
//!
//! - **find_path** one shortest room sequence from a room list and a door
//!   list ([`find_path`])
//! - **BFS path** over any neighbor source ([`bfs_path`])
//! - **BFS map** distance layers from a single room ([`bfs_map`])
//!
//! Searches run over anything implementing [`Pather`]; [`Graph`] does out of
//! the box. All search state lives for one call only.

mod bfs;
mod find;
mod traits;

pub use bfs::{bfs_map, bfs_path};
pub use find::find_path;
pub use roompath_core::{Edge, Graph, GraphError};
pub use traits::Pather;
