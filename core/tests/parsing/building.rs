use super::build_graph;
use actorpath_core::{ActorGraph, GraphConfig, Movie};

fn cast_names(graph: &ActorGraph, movie: &Movie) -> Vec<String> {
    graph
        .movie_cast(movie)
        .iter()
        .map(|&actor_id| graph.actor_name(actor_id).to_string())
        .collect()
}

#[test]
fn test_every_collaboration_has_a_mirror() {
    let graph = build_graph(
        &[("A", "M1", 2019), ("B", "M1", 2019), ("C", "M1", 2019)],
        false,
    );

    // Cast of three yields 3 * 2 directed edges
    assert_eq!(graph.edge_count(), 6);

    for (actor_id, _) in graph.actors() {
        for (edge_id, edge) in graph.edges_of(actor_id) {
            assert_eq!(edge.source, actor_id);
            let mirror_id = graph.mirror_of(edge_id).unwrap();
            let mirror = graph.edge(mirror_id);
            assert_eq!(mirror.source, edge.destination);
            assert_eq!(mirror.destination, edge.source);
            assert_eq!(mirror.movie, edge.movie);
            assert_eq!(mirror.weight, edge.weight);
        }
    }
}

#[test]
fn test_unweighted_edges_all_weigh_one() {
    let graph = build_graph(
        &[("A", "Old", 1950), ("B", "Old", 1950), ("B", "New", 2019), ("C", "New", 2019)],
        false,
    );

    for (actor_id, _) in graph.actors() {
        for (_, edge) in graph.edges_of(actor_id) {
            assert_eq!(edge.weight, 1);
        }
    }
}

#[test]
fn test_weighted_edges_depend_on_year() {
    let graph = build_graph(
        &[("A", "Old", 1999), ("B", "Old", 1999), ("B", "New", 2019), ("C", "New", 2019)],
        true,
    );

    let a = graph.actor_id("A").unwrap();
    let b = graph.actor_id("B").unwrap();

    let old_edge = graph.edge(graph.find_edge(a, "B").unwrap());
    assert_eq!(old_edge.weight, 21);

    let new_edge = graph.edge(graph.find_edge(b, "C").unwrap());
    assert_eq!(new_edge.weight, 1);
}

#[test]
fn test_actor_is_created_once() {
    let graph = build_graph(
        &[("A", "M1", 2000), ("B", "M1", 2000), ("A", "M2", 2001), ("C", "M2", 2001)],
        false,
    );

    assert_eq!(graph.actor_count(), 3);
    assert_eq!(graph.movie_count(), 2);

    let a = graph.actor_id("A").unwrap();
    assert_eq!(graph.actor(a).edges().len(), 2);
    assert_eq!(graph.actor(a).name(), "A");
}

#[test]
fn test_movie_identity_includes_year() {
    let graph = build_graph(
        &[("A", "Remake", 1980), ("B", "Remake", 2010)],
        false,
    );

    assert_eq!(graph.movie_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(cast_names(&graph, &Movie::new("Remake", 1980)), vec!["A"]);
    assert_eq!(cast_names(&graph, &Movie::new("Remake", 2010)), vec!["B"]);
}

#[test]
fn test_movie_cast_keeps_insertion_order() {
    let graph = build_graph(
        &[("Zed", "M1", 2000), ("Amy", "M1", 2000), ("Max", "M1", 2000)],
        false,
    );

    assert_eq!(
        cast_names(&graph, &Movie::new("M1", 2000)),
        vec!["Zed", "Amy", "Max"]
    );
    assert!(graph.movie_cast(&Movie::new("Missing", 2000)).is_empty());
}

#[test]
fn test_duplicate_row_creates_self_loop() {
    let graph = build_graph(&[("A", "M1", 2000), ("A", "M1", 2000)], false);

    assert_eq!(graph.actor_count(), 1);
    assert_eq!(graph.edge_count(), 2);

    let a = graph.actor_id("A").unwrap();
    assert!(graph.edges_of(a).all(|(_, edge)| edge.is_self_loop()));
}

#[test]
fn test_find_edge_and_unknown_actor() {
    let graph = build_graph(&[("A", "M1", 2000), ("B", "M1", 2000)], false);

    let a = graph.actor_id("A").unwrap();
    assert!(graph.find_edge(a, "B").is_some());
    assert!(graph.find_edge(a, "Nobody").is_none());
    assert!(graph.actor_id("Nobody").is_none());
}

#[test]
fn test_empty_graph() {
    let graph = ActorGraph::new(GraphConfig::default());
    let stats = graph.stats();

    assert_eq!(stats.actors, 0);
    assert_eq!(stats.movies, 0);
    assert_eq!(stats.edges, 0);
}

#[test]
fn test_movie_display() {
    assert_eq!(Movie::new("Footloose", 1984).to_string(), "Footloose#@1984");
}
