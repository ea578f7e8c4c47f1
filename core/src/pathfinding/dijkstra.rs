use super::utils::{PathResult, reconstruct_path, resolve_endpoints};
use crate::graph::{ActorGraph, ActorId, EdgeId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};
use tracing::debug;

#[derive(Clone)]
struct DijkstraNode<'a> {
    cost: u64,
    actor: ActorId,
    name: &'a str,
}

impl PartialEq for DijkstraNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.name == other.name
    }
}

impl Eq for DijkstraNode<'_> {}

impl PartialOrd for DijkstraNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: lowest cost first, then name ascending
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.name.cmp(self.name))
    }
}

struct DijkstraState<'a> {
    graph: &'a ActorGraph,
    heap: BinaryHeap<DijkstraNode<'a>>,
    distances: FxHashMap<ActorId, u64>,
    parent_map: FxHashMap<ActorId, EdgeId>,
    done: FxHashSet<ActorId>,
}

impl<'a> DijkstraState<'a> {
    fn new(graph: &'a ActorGraph, start: ActorId) -> Self {
        let mut heap = BinaryHeap::new();
        let mut distances = FxHashMap::default();

        heap.push(DijkstraNode {
            cost: 0,
            actor: start,
            name: graph.actor_name(start),
        });
        distances.insert(start, 0);

        Self {
            graph,
            heap,
            distances,
            parent_map: FxHashMap::default(),
            done: FxHashSet::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: ActorId, via: EdgeId, new_cost: u64) {
        if let Some(&existing_cost) = self.distances.get(&neighbor) {
            if new_cost >= existing_cost {
                return;
            }
        }

        self.distances.insert(neighbor, new_cost);
        self.parent_map.insert(neighbor, via);
        self.heap.push(DijkstraNode {
            cost: new_cost,
            actor: neighbor,
            name: self.graph.actor_name(neighbor),
        });
    }
}

/// Lowest total weight path between two actors.
///
/// Stale heap entries are skipped through the `done` set. The search stops
/// once the target is settled, which is the first moment its weight is known
/// to be minimal.
pub fn dijkstra_find_path(graph: &ActorGraph, from: &str, to: &str) -> PathResult {
    let search_timer = Instant::now();

    let Some((start, target)) = resolve_endpoints(graph, from, to) else {
        return (None, 0, 0.0);
    };

    let mut dijkstra_state = DijkstraState::new(graph, start);

    while let Some(DijkstraNode {
        cost,
        actor: current_actor,
        ..
    }) = dijkstra_state.heap.pop()
    {
        if !dijkstra_state.done.insert(current_actor) {
            continue;
        }

        if current_actor == target {
            let path = reconstruct_path(graph, &dijkstra_state.parent_map, start, target);
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            debug!(from, to, weight = cost, settled = dijkstra_state.done.len(), "dijkstra path found");
            return (Some(path), dijkstra_state.done.len(), elapsed_time);
        }

        for (edge_id, edge) in graph.edges_of(current_actor) {
            if edge.is_self_loop() {
                continue;
            }
            dijkstra_state.visit_neighbor(edge.destination, edge_id, cost + u64::from(edge.weight));
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(from, to, settled = dijkstra_state.done.len(), "dijkstra found no path");
    (None, dijkstra_state.done.len(), elapsed_time)
}
