use crate::graph::{ActorGraph, ActorId, EdgeId};
use rustc_hash::FxHashMap;

pub type PathStep = EdgeId;
pub type PathResult = (Option<Vec<PathStep>>, usize, f64);

pub fn resolve_endpoints(graph: &ActorGraph, from: &str, to: &str) -> Option<(ActorId, ActorId)> {
    Some((graph.actor_id(from)?, graph.actor_id(to)?))
}

/// Walks back-pointers from `target` to `start` and returns the edges in
/// travel order.
pub fn reconstruct_path(
    graph: &ActorGraph,
    parent_map: &FxHashMap<ActorId, EdgeId>,
    start: ActorId,
    target: ActorId,
) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut current_actor = target;

    while current_actor != start {
        let Some(&edge_id) = parent_map.get(&current_actor) else {
            panic!(
                "actor {:?} was reached without a back-pointer",
                graph.actor_name(current_actor)
            );
        };
        path.push(edge_id);
        current_actor = graph.edge(edge_id).source;
    }

    path.reverse();
    path
}

pub fn path_weight(graph: &ActorGraph, path: &[PathStep]) -> u64 {
    path.iter()
        .map(|&edge_id| u64::from(graph.edge(edge_id).weight))
        .sum()
}
