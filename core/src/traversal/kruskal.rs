//! Minimum spanning structure over the actor graph (Kruskal).
//!
//! Edges are discovered by a BFS from one or more roots into a single
//! priority queue, then joined cheapest-first through a union-find. Both
//! directions of a collaboration sort next to each other, so the mirror of a
//! popped edge is consumed in the same step.

use super::union_find::UnionFind;
use crate::graph::{ActorGraph, ActorId, EdgeId, MovieId};
use crate::movie::Movie;
use crate::pathfinding::utils::{reconstruct_path, resolve_endpoints};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
    time::Instant,
};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    pub edges: Vec<EdgeId>,
    pub actors_connected: usize,
    pub total_weight: u64,
}

impl SpanningTree {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Path between two actors using only spanning edges, oriented in travel
    /// order. `None` if either actor is unknown or they are not joined.
    pub fn path(&self, graph: &ActorGraph, from: &str, to: &str) -> Option<Vec<EdgeId>> {
        let (start, target) = resolve_endpoints(graph, from, to)?;

        let mut adjacency: FxHashMap<ActorId, Vec<EdgeId>> = FxHashMap::default();
        for &edge_id in &self.edges {
            let edge = graph.edge(edge_id);
            adjacency.entry(edge.source).or_default().push(edge_id);
            adjacency.entry(edge.destination).or_default().push(edge_id);
        }

        let mut queue = VecDeque::from([start]);
        let mut visited = FxHashSet::from_iter([start]);
        let mut parent_map: FxHashMap<ActorId, EdgeId> = FxHashMap::default();

        while let Some(current_actor) = queue.pop_front() {
            if current_actor == target {
                return Some(reconstruct_path(graph, &parent_map, start, target));
            }

            for &edge_id in adjacency.get(&current_actor).into_iter().flatten() {
                let edge = graph.edge(edge_id);
                let (neighbor, oriented) = if edge.source == current_actor {
                    (edge.destination, edge_id)
                } else {
                    (edge.source, graph.mirror_of(edge_id)?)
                };

                if visited.insert(neighbor) {
                    parent_map.insert(neighbor, oriented);
                    queue.push_back(neighbor);
                }
            }
        }

        None
    }
}

struct QueuedEdge<'a> {
    edge_id: EdgeId,
    weight: u32,
    movie: &'a Movie,
    movie_id: MovieId,
    source: ActorId,
    destination: ActorId,
    low_name: &'a str,
    high_name: &'a str,
    source_name: &'a str,
}

impl<'a> QueuedEdge<'a> {
    fn new(graph: &'a ActorGraph, edge_id: EdgeId) -> Self {
        let edge = graph.edge(edge_id);
        let source_name = graph.actor_name(edge.source);
        let destination_name = graph.actor_name(edge.destination);
        let (low_name, high_name) = if source_name <= destination_name {
            (source_name, destination_name)
        } else {
            (destination_name, source_name)
        };

        Self {
            edge_id,
            weight: edge.weight,
            movie: graph.movie(edge.movie),
            movie_id: edge.movie,
            source: edge.source,
            destination: edge.destination,
            low_name,
            high_name,
            source_name,
        }
    }

    fn sort_key(&self) -> (u32, &Movie, &str, &str, &str, EdgeId) {
        (
            self.weight,
            self.movie,
            self.low_name,
            self.high_name,
            self.source_name,
            self.edge_id,
        )
    }

    fn is_mirror_of(&self, other: &QueuedEdge<'_>) -> bool {
        self.movie_id == other.movie_id
            && self.source == other.destination
            && self.destination == other.source
    }
}

impl PartialEq for QueuedEdge<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_id == other.edge_id
    }
}

impl Eq for QueuedEdge<'_> {}

impl PartialOrd for QueuedEdge<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedEdge<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other.sort_key().cmp(&self.sort_key())
    }
}

/// Minimum spanning tree of the component containing `start`.
pub fn spanning_tree(graph: &ActorGraph, start: &str) -> Option<SpanningTree> {
    let start = graph.actor_id(start)?;
    Some(build_spanning_tree(graph, std::iter::once(start)))
}

/// Minimum spanning forest touching every actor in the graph.
///
/// Components are discovered from actors in insertion order.
pub fn spanning_forest(graph: &ActorGraph) -> SpanningTree {
    build_spanning_tree(graph, graph.actors().map(|(actor_id, _)| actor_id))
}

fn build_spanning_tree(
    graph: &ActorGraph,
    roots: impl Iterator<Item = ActorId>,
) -> SpanningTree {
    let traversal_timer = Instant::now();

    let mut visited = vec![false; graph.actor_count()];
    let mut edge_queue = BinaryHeap::new();
    let mut actors_connected = 0;

    for root in roots {
        if visited[root.index()] {
            continue;
        }
        actors_connected += discover_component(graph, root, &mut visited, &mut edge_queue);
    }

    let queued_edges = edge_queue.len();
    let (edges, total_weight) = join_components(graph, edge_queue);

    debug!(
        actors_connected,
        queued_edges,
        chosen_edges = edges.len(),
        total_weight,
        elapsed_ms = traversal_timer.elapsed().as_millis() as u64,
        "spanning traversal finished"
    );

    SpanningTree {
        edges,
        actors_connected,
        total_weight,
    }
}

fn discover_component<'a>(
    graph: &'a ActorGraph,
    root: ActorId,
    visited: &mut [bool],
    edge_queue: &mut BinaryHeap<QueuedEdge<'a>>,
) -> usize {
    let mut queue = VecDeque::from([root]);
    visited[root.index()] = true;
    let mut actors_reached = 1;

    while let Some(current_actor) = queue.pop_front() {
        for (edge_id, edge) in graph.edges_of(current_actor) {
            if edge.is_self_loop() {
                continue;
            }

            edge_queue.push(QueuedEdge::new(graph, edge_id));

            if !visited[edge.destination.index()] {
                visited[edge.destination.index()] = true;
                actors_reached += 1;
                queue.push_back(edge.destination);
            }
        }
    }

    actors_reached
}

fn join_components(
    graph: &ActorGraph,
    mut edge_queue: BinaryHeap<QueuedEdge<'_>>,
) -> (Vec<EdgeId>, u64) {
    let mut union_find = UnionFind::new(graph.actor_count());
    let mut chosen_edges = Vec::new();
    let mut total_weight = 0u64;

    while let Some(queued) = edge_queue.pop() {
        if edge_queue
            .peek()
            .is_some_and(|next| next.is_mirror_of(&queued))
        {
            edge_queue.pop();
        }

        if !union_find.union(queued.source, queued.destination) {
            continue;
        }

        trace!(
            source = queued.source_name,
            movie = %queued.movie,
            weight = queued.weight,
            "joined components"
        );
        chosen_edges.push(queued.edge_id);
        total_weight += u64::from(queued.weight);
    }

    (chosen_edges, total_weight)
}
