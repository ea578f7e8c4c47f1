use super::utils::{PathResult, reconstruct_path, resolve_endpoints};
use crate::graph::{ActorGraph, ActorId, EdgeId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{collections::VecDeque, time::Instant};
use tracing::debug;

struct BfsState {
    queue: VecDeque<ActorId>,
    visited: FxHashSet<ActorId>,
    parent_map: FxHashMap<ActorId, EdgeId>,
}

impl BfsState {
    fn new(start: ActorId) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    // First discovery wins, so ties go to the earliest edge in enumeration order.
    fn visit_neighbor(&mut self, neighbor: ActorId, via: EdgeId) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, via);
            self.queue.push_back(neighbor);
        }
    }
}

/// Shortest path by edge count between two actors.
///
/// Unknown names yield `None` without visiting anything; a query from an
/// actor to itself yields an empty path.
pub fn bfs_find_path(graph: &ActorGraph, from: &str, to: &str) -> PathResult {
    let search_timer = Instant::now();

    let Some((start, target)) = resolve_endpoints(graph, from, to) else {
        return (None, 0, 0.0);
    };

    let mut bfs_state = BfsState::new(start);

    while let Some(current_actor) = bfs_state.queue.pop_front() {
        if current_actor == target {
            let path = reconstruct_path(graph, &bfs_state.parent_map, start, target);
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            debug!(from, to, hops = path.len(), visited = bfs_state.visited.len(), "bfs path found");
            return (Some(path), bfs_state.visited.len(), elapsed_time);
        }

        for (edge_id, edge) in graph.edges_of(current_actor) {
            if edge.is_self_loop() {
                continue;
            }
            bfs_state.visit_neighbor(edge.destination, edge_id);
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(from, to, visited = bfs_state.visited.len(), "bfs found no path");
    (None, bfs_state.visited.len(), elapsed_time)
}
