pub mod error;
pub mod graph;
pub mod graph_config;
pub mod movie;
pub mod parsing;
pub mod pathfinding;
pub mod recommendation;
pub mod traversal;

// Re-export commonly used items
pub use error::{GraphError, Result};
pub use graph::{Actor, ActorGraph, ActorId, Edge, EdgeId, GraphStats, MovieId};
pub use graph_config::{ANCHOR_YEAR, GraphConfig};
pub use movie::Movie;
pub use parsing::{Relationship, parse_relationship_line};
pub use pathfinding::{
    Algorithm, PathResult, bfs_find_path, dijkstra_find_path, find_path, path_weight,
};
pub use recommendation::{
    Recommendation, Recommendations, TOP_RANK, predict_collaborators, predict_new_collaborators,
    recommend,
};
pub use traversal::{SpanningTree, UnionFind, spanning_forest, spanning_tree};
