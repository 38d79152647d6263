//! pathviz-core: in-memory graph path-search engine.
//!
//! A pure Rust library that holds a directed adjacency-list graph and
//! answers source→target queries by breadth-first search (shortest path by
//! edge count) or depth-first search (first path under adjacency order),
//! logging discovery order and parent links so the pathviz explorer can
//! replay the search as an animation. No UI dependencies; this crate
//! compiles standalone.

mod error;
mod graph;
mod traversal;

pub use error::TraversalError;
pub use graph::{Edge, Graph, NodeId};
pub use traversal::{bfs, dfs, TraversalResult, TraversalStep};
