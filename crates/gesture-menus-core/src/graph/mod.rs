//! The menu graph and its mutation operations.
//!
//! Persistence for the graph lives in [`crate::persistence`].

mod menu_graph;

pub use menu_graph::MenuGraph;
