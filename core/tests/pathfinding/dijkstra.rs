use super::{build_graph, describe_path, step, two_movie_chain};
use actorpath_core::{Algorithm, bfs_find_path, dijkstra_find_path, find_path, path_weight};

#[test]
fn test_dijkstra_weighted_chain() {
    let graph = two_movie_chain(true);

    let (path, _, _) = dijkstra_find_path(&graph, "A", "C");

    let path = path.unwrap();
    assert_eq!(
        describe_path(&graph, &path),
        vec![step("A", "M1", "B"), step("B", "M2", "C")]
    );
    assert_eq!(path_weight(&graph, &path), 4); // 1 + 3
}

#[test]
fn test_dijkstra_prefers_recent_movies_over_fewer_hops() {
    let graph = build_graph(
        &[
            ("A", "Old", 1990),
            ("D", "Old", 1990),
            ("A", "New", 2019),
            ("B", "New", 2019),
            ("B", "Newer", 2018),
            ("D", "Newer", 2018),
        ],
        true,
    );

    let (path, _, _) = dijkstra_find_path(&graph, "A", "D");
    let path = path.unwrap();
    assert_eq!(
        describe_path(&graph, &path),
        vec![step("A", "New", "B"), step("B", "Newer", "D")]
    );
    assert_eq!(path_weight(&graph, &path), 3);

    // Hop count alone would take the old movie
    let (bfs_path, _, _) = bfs_find_path(&graph, "A", "D");
    assert_eq!(describe_path(&graph, &bfs_path.unwrap()), vec![step("A", "Old", "D")]);
}

#[test]
fn test_dijkstra_ties_break_by_name() {
    // A-C listed before A-B; both routes to D weigh 2
    let graph = build_graph(
        &[
            ("A", "M3", 2019),
            ("C", "M3", 2019),
            ("A", "M1", 2019),
            ("B", "M1", 2019),
            ("C", "M4", 2019),
            ("D", "M4", 2019),
            ("B", "M2", 2019),
            ("D", "M2", 2019),
        ],
        true,
    );

    let (path, _, _) = dijkstra_find_path(&graph, "A", "D");
    assert_eq!(
        describe_path(&graph, &path.unwrap()),
        vec![step("A", "M1", "B"), step("B", "M2", "D")]
    );
}

#[test]
fn test_dijkstra_unknown_and_unreachable() {
    let graph = two_movie_chain(true);

    let (path, visited_count, _) = dijkstra_find_path(&graph, "Nobody", "A");
    assert!(path.is_none());
    assert_eq!(visited_count, 0);

    let (path, _, _) = dijkstra_find_path(&graph, "A", "D");
    assert!(path.is_none());
}

#[test]
fn test_dijkstra_same_actor_gives_empty_path() {
    let graph = two_movie_chain(true);

    let (path, _, _) = dijkstra_find_path(&graph, "C", "C");
    assert_eq!(path, Some(vec![]));
}

#[test]
fn test_dijkstra_repeated_queries_are_identical() {
    let graph = two_movie_chain(true);

    let first = dijkstra_find_path(&graph, "A", "C");
    let _ = dijkstra_find_path(&graph, "C", "A");
    let _ = dijkstra_find_path(&graph, "A", "D");
    let second = dijkstra_find_path(&graph, "A", "C");

    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn test_dijkstra_matches_bfs_on_unweighted_graph() {
    let graph = two_movie_chain(false);

    let (weighted_path, _, _) = dijkstra_find_path(&graph, "A", "C");
    let (bfs_path, _, _) = bfs_find_path(&graph, "A", "C");

    assert_eq!(weighted_path.unwrap().len(), bfs_path.unwrap().len());
}

#[test]
fn test_find_path_dispatches_on_algorithm() {
    let graph = two_movie_chain(true);

    let (bfs_path, _, _) = find_path(&graph, "A", "C", Algorithm::Bfs);
    let (dijkstra_path, _, _) = find_path(&graph, "A", "C", Algorithm::Dijkstra);

    assert_eq!(bfs_path.unwrap().len(), 2);
    assert_eq!(dijkstra_path.unwrap().len(), 2);
}
