use super::{build_graph, describe_edges, step, weighted_triangle};
use actorpath_core::{UnionFind, spanning_forest, spanning_tree};

#[test]
fn test_forest_skips_heaviest_edge() {
    let graph = weighted_triangle();

    let forest = spanning_forest(&graph);

    assert_eq!(forest.actors_connected, 3);
    assert_eq!(forest.edge_count(), 2);
    assert_eq!(forest.total_weight, 3);

    let movies: Vec<String> = describe_edges(&graph, &forest.edges)
        .into_iter()
        .map(|(_, movie, _)| movie)
        .collect();
    assert_eq!(movies, vec!["M1", "M2"]);
}

#[test]
fn test_cheapest_movie_between_pair_wins() {
    let graph = build_graph(
        &[("A", "Old", 2010), ("B", "Old", 2010), ("A", "New", 2019), ("B", "New", 2019)],
        true,
    );

    let forest = spanning_forest(&graph);

    assert_eq!(forest.edge_count(), 1);
    assert_eq!(forest.total_weight, 1);
    assert_eq!(describe_edges(&graph, &forest.edges)[0].1, "New");
}

#[test]
fn test_forest_covers_every_component() {
    let graph = build_graph(
        &[
            ("A", "M1", 2019),
            ("B", "M1", 2019),
            ("C", "M2", 2019),
            ("D", "M2", 2019),
            ("E", "Solo", 2019),
        ],
        true,
    );

    let forest = spanning_forest(&graph);

    assert_eq!(forest.actors_connected, 5);
    assert_eq!(forest.edge_count(), 2); // actors minus components
    assert_eq!(forest.total_weight, 2);
    assert!(forest.path(&graph, "A", "C").is_none());
}

#[test]
fn test_tree_from_start_stays_in_its_component() {
    let graph = build_graph(
        &[("A", "M1", 2019), ("B", "M1", 2019), ("C", "M2", 2019), ("D", "M2", 2019)],
        false,
    );

    let tree = spanning_tree(&graph, "C").unwrap();

    assert_eq!(tree.actors_connected, 2);
    assert_eq!(describe_edges(&graph, &tree.edges).len(), 1);
    assert!(spanning_tree(&graph, "Nobody").is_none());
}

#[test]
fn test_chosen_edges_never_form_a_cycle() {
    // Every actor in one movie plus a ring of smaller ones
    let graph = build_graph(
        &[
            ("A", "Ensemble", 2005),
            ("B", "Ensemble", 2005),
            ("C", "Ensemble", 2005),
            ("D", "Ensemble", 2005),
            ("A", "Pair 1", 2019),
            ("B", "Pair 1", 2019),
            ("B", "Pair 2", 2019),
            ("C", "Pair 2", 2019),
            ("C", "Pair 3", 2018),
            ("D", "Pair 3", 2018),
            ("D", "Pair 4", 2017),
            ("A", "Pair 4", 2017),
        ],
        true,
    );

    let forest = spanning_forest(&graph);
    let mut union_find = UnionFind::new(graph.actor_count());

    for &edge_id in &forest.edges {
        let edge = graph.edge(edge_id);
        assert!(union_find.union(edge.source, edge.destination));
    }
    assert_eq!(forest.edge_count(), 3);
    assert_eq!(forest.total_weight, 1 + 1 + 2);
}

#[test]
fn test_self_loops_are_ignored() {
    let graph = build_graph(&[("A", "M1", 2000), ("A", "M1", 2000), ("B", "M1", 2000)], false);

    let forest = spanning_forest(&graph);

    assert_eq!(forest.edge_count(), 1);
    for &edge_id in &forest.edges {
        assert!(!graph.edge(edge_id).is_self_loop());
    }
}

#[test]
fn test_tree_path_is_oriented() {
    let graph = weighted_triangle();
    let forest = spanning_forest(&graph);

    let forward = forest.path(&graph, "A", "C").unwrap();
    assert_eq!(
        describe_edges(&graph, &forward),
        vec![step("A", "M1", "B"), step("B", "M2", "C")]
    );

    let backward = forest.path(&graph, "C", "A").unwrap();
    assert_eq!(
        describe_edges(&graph, &backward),
        vec![step("C", "M2", "B"), step("B", "M1", "A")]
    );

    assert!(forest.path(&graph, "A", "Nobody").is_none());
}

#[test]
fn test_traversal_is_deterministic() {
    let graph = weighted_triangle();

    assert_eq!(spanning_forest(&graph), spanning_forest(&graph));
}
