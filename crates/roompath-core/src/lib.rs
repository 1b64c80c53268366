//! **roompath-core** — Room-and-door graph types.
//!
//! This crate provides the data model shared across the *roompath*
//! workspace: undirected [`Edge`]s (doors), the [`Graph`] adjacency
//! structure built from a room list and a door list, and [`GraphError`].
//!
//! Room identifiers are generic: anything `Clone + Eq + Hash` works, so
//! `&str`, `String` and integer ids are all valid rooms.

pub mod edge;
pub mod error;
pub mod graph;

pub use edge::Edge;
pub use error::GraphError;
pub use graph::Graph;
