pub mod algorithm;
pub mod bfs;
pub mod dijkstra;
pub mod utils;

pub use algorithm::Algorithm;
pub use bfs::bfs_find_path;
pub use dijkstra::dijkstra_find_path;
pub use utils::{PathResult, PathStep, path_weight};

use crate::graph::ActorGraph;

pub fn find_path(graph: &ActorGraph, from: &str, to: &str, algorithm: Algorithm) -> PathResult {
    match algorithm {
        Algorithm::Bfs => bfs_find_path(graph, from, to),
        Algorithm::Dijkstra => dijkstra_find_path(graph, from, to),
    }
}
