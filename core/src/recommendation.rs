//! Collaborator ranking.
//!
//! Both rankings weigh every mutual co-star `n` by the product of the queried
//! actor's movie count with `n` and the candidate's movie count with `n`.

use crate::graph::{ActorGraph, ActorId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Rankings are cut to this many actors.
pub const TOP_RANK: usize = 4;

type CoStarCounts = FxHashMap<ActorId, u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub actor: ActorId,
    pub score: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recommendations {
    /// Actors who already worked with the queried actor
    pub collaborators: Vec<Recommendation>,
    /// Actors two hops away who never worked with the queried actor
    pub new_collaborators: Vec<Recommendation>,
}

pub fn recommend(graph: &ActorGraph, actor_name: &str) -> Recommendations {
    Recommendations {
        collaborators: predict_collaborators(graph, actor_name),
        new_collaborators: predict_new_collaborators(graph, actor_name),
    }
}

/// Ranks the actor's existing collaborators by how many co-stars they share.
pub fn predict_collaborators(graph: &ActorGraph, actor_name: &str) -> Vec<Recommendation> {
    let Some(actor) = graph.actor_id(actor_name) else {
        return vec![];
    };

    let collaborators = co_star_counts(graph, actor);

    let scored = collaborators.keys().map(|&candidate| {
        let shared = shared_co_star_counts(graph, candidate, &collaborators);
        (candidate, weigh_shared_co_stars(&collaborators, &shared))
    });

    rank_candidates(graph, scored)
}

/// Ranks actors two hops away that the actor has not worked with yet.
pub fn predict_new_collaborators(graph: &ActorGraph, actor_name: &str) -> Vec<Recommendation> {
    let Some(actor) = graph.actor_id(actor_name) else {
        return vec![];
    };

    let collaborators = co_star_counts(graph, actor);
    let candidates = second_degree_actors(graph, actor, &collaborators);

    let scored = candidates.into_iter().map(|candidate| {
        let shared = shared_co_star_counts(graph, candidate, &collaborators);
        (candidate, weigh_shared_co_stars(&collaborators, &shared))
    });

    rank_candidates(graph, scored)
}

/// Number of movies the actor shares with each co-star.
fn co_star_counts(graph: &ActorGraph, actor: ActorId) -> CoStarCounts {
    let mut counts = CoStarCounts::default();

    for (_, edge) in graph.edges_of(actor) {
        if edge.is_self_loop() {
            continue;
        }
        *counts.entry(edge.destination).or_insert(0) += 1;
    }

    counts
}

/// Edges from `candidate` into the collaborator set, counted per collaborator.
fn shared_co_star_counts(
    graph: &ActorGraph,
    candidate: ActorId,
    collaborators: &CoStarCounts,
) -> CoStarCounts {
    let mut shared = CoStarCounts::default();

    for (_, edge) in graph.edges_of(candidate) {
        let neighbor = edge.destination;
        if neighbor == candidate || !collaborators.contains_key(&neighbor) {
            continue;
        }
        *shared.entry(neighbor).or_insert(0) += 1;
    }

    shared
}

fn weigh_shared_co_stars(collaborators: &CoStarCounts, shared: &CoStarCounts) -> u64 {
    shared
        .iter()
        .map(|(neighbor, &count)| collaborators[neighbor] * count)
        .sum()
}

fn second_degree_actors(
    graph: &ActorGraph,
    actor: ActorId,
    collaborators: &CoStarCounts,
) -> FxHashSet<ActorId> {
    let mut candidates = FxHashSet::default();

    for &collaborator in collaborators.keys() {
        for (_, edge) in graph.edges_of(collaborator) {
            let neighbor = edge.destination;
            if neighbor != actor && !collaborators.contains_key(&neighbor) {
                candidates.insert(neighbor);
            }
        }
    }

    candidates
}

// Sort by score (desc), then name (asc)
fn rank_candidates(
    graph: &ActorGraph,
    scored: impl Iterator<Item = (ActorId, u64)>,
) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = scored
        .map(|(actor, score)| Recommendation { actor, score })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| graph.actor_name(a.actor).cmp(graph.actor_name(b.actor)))
    });
    ranked.truncate(TOP_RANK);

    ranked
}
