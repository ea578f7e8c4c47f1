use actorpath_core::{ActorGraph, EdgeId, GraphStats, Recommendation, Recommendations, SpanningTree};
use std::io::{self, Write};
use std::path::Path;

use crate::colors::ColorScheme;

pub const PATH_HEADER: &str = "(actor)--[movie#@year]-->(actor)--...";
pub const RECOMMENDATION_HEADER: &str = "Actor1,Actor2,Actor3,Actor4";
pub const SPANNING_HEADER: &str = "(actor)<--[movie#@year]-->(actor)";

/// `(a)--[title#@year]-->(b)--[title#@year]-->(c)`; empty for an empty path.
pub fn format_path(graph: &ActorGraph, path: &[EdgeId]) -> String {
    let mut formatted_line = String::new();

    for (step_index, &edge_id) in path.iter().enumerate() {
        let edge = graph.edge(edge_id);
        if step_index == 0 {
            formatted_line.push_str(&format!("({})", graph.actor_name(edge.source)));
        }
        formatted_line.push_str(&format!(
            "--[{}]-->({})",
            graph.movie(edge.movie),
            graph.actor_name(edge.destination)
        ));
    }

    formatted_line
}

pub fn format_spanning_edge(graph: &ActorGraph, edge_id: EdgeId) -> String {
    let edge = graph.edge(edge_id);
    format!(
        "({})<--[{}]-->({})",
        graph.actor_name(edge.source),
        graph.movie(edge.movie),
        graph.actor_name(edge.destination)
    )
}

pub fn format_spanning_summary(tree: &SpanningTree) -> [String; 3] {
    [
        format!("#NODE CONNECTED: {}", tree.actors_connected),
        format!("#EDGE CHOSEN: {}", tree.edge_count()),
        format!("TOTAL EDGE WEIGHTS: {}", tree.total_weight),
    ]
}

/// Each ranked name followed by a tab.
pub fn format_recommendations(graph: &ActorGraph, ranking: &[Recommendation]) -> String {
    ranking
        .iter()
        .map(|recommendation| format!("{}\t", graph.actor_name(recommendation.actor)))
        .collect()
}

pub fn write_path_report<W: Write>(
    writer: &mut W,
    graph: &ActorGraph,
    paths: &[Option<Vec<EdgeId>>],
) -> io::Result<()> {
    writeln!(writer, "{PATH_HEADER}")?;
    for path in paths {
        let line = path
            .as_deref()
            .map(|path| format_path(graph, path))
            .unwrap_or_default();
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

pub fn write_recommendation_reports<W: Write, V: Write>(
    collaborators_writer: &mut W,
    new_collaborators_writer: &mut V,
    graph: &ActorGraph,
    reports: &[Recommendations],
) -> io::Result<()> {
    writeln!(collaborators_writer, "{RECOMMENDATION_HEADER}")?;
    writeln!(new_collaborators_writer, "{RECOMMENDATION_HEADER}")?;

    for report in reports {
        writeln!(
            collaborators_writer,
            "{}",
            format_recommendations(graph, &report.collaborators)
        )?;
        writeln!(
            new_collaborators_writer,
            "{}",
            format_recommendations(graph, &report.new_collaborators)
        )?;
    }
    Ok(())
}

pub fn write_spanning_report<W: Write>(
    writer: &mut W,
    graph: &ActorGraph,
    tree: &SpanningTree,
) -> io::Result<()> {
    writeln!(writer, "{SPANNING_HEADER}")?;
    for &edge_id in &tree.edges {
        writeln!(writer, "{}", format_spanning_edge(graph, edge_id))?;
    }
    for line in format_spanning_summary(tree) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

pub fn display_graph_stats(stats: &GraphStats, elapsed_time: f64, colors: &ColorScheme) {
    println!(
        "{} Loaded {} actors, {} movies and {} links in {} sec",
        colors.stats("📊"),
        colors.count(stats.actors),
        colors.count(stats.movies),
        colors.count(stats.edges / 2),
        colors.number(&format!("{elapsed_time:.3}"))
    );
}

pub fn display_pathfind_summary(
    query_count: usize,
    found_count: usize,
    output: &Path,
    colors: &ColorScheme,
) {
    println!(
        "{} Found {} of {} paths, written to {}",
        colors.success("✅"),
        colors.count(found_count),
        colors.count(query_count),
        colors.path(&output.display().to_string())
    );

    let missing_count = query_count - found_count;
    if missing_count > 0 {
        println!(
            "{} {} pairs could not be connected",
            colors.warning("⚠️ "),
            colors.count(missing_count)
        );
    }
}

pub fn display_search_statistics(actors_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!(
        "{} Explored {} actors in {} sec",
        colors.stats("📊"),
        colors.count(actors_visited),
        colors.number(&format!("{search_duration:.3}"))
    );
}

pub fn display_predict_summary(
    query_count: usize,
    collaborators_out: &Path,
    new_collaborators_out: &Path,
    colors: &ColorScheme,
) {
    println!(
        "{} Ranked collaborators for {} actors, written to {} and {}",
        colors.success("✅"),
        colors.count(query_count),
        colors.path(&collaborators_out.display().to_string()),
        colors.path(&new_collaborators_out.display().to_string())
    );
}

pub fn display_travel_summary(tree: &SpanningTree, output: &Path, colors: &ColorScheme) {
    println!(
        "{} Connected {} actors through {} movies (total weight {}), written to {}",
        colors.success("✅"),
        colors.count(tree.actors_connected),
        colors.count(tree.edge_count()),
        colors.number(&tree.total_weight.to_string()),
        colors.path(&output.display().to_string())
    );
}

/// Lists query names that do not appear in the relationship file.
pub fn display_unknown_actors(unknown_actors: &[&str], colors: &ColorScheme) {
    for name in unknown_actors {
        println!(
            "{} {} is not in the relationship file",
            colors.warning("⚠️ "),
            colors.actor_name(&format!("\"{name}\""))
        );
    }
}
