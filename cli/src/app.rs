use actorpath_core::{
    ActorGraph, Algorithm, GraphConfig, find_path, recommend, spanning_forest,
};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::{Duration, Instant},
};
use tracing::{debug, info};

use crate::args::{Command, Weighting};
use crate::colors::ColorScheme;
use crate::display::{
    display_graph_stats, display_pathfind_summary, display_predict_summary,
    display_search_statistics, display_travel_summary, display_unknown_actors, write_path_report,
    write_recommendation_reports, write_spanning_report,
};
use crate::queries::{read_actor_names, read_actor_pairs};

pub struct ActorPathApp {
    colors: ColorScheme,
    verbose: bool,
}

impl ActorPathApp {
    pub fn new(use_colors: bool, verbose: bool) -> Self {
        Self {
            colors: ColorScheme::new(use_colors),
            verbose,
        }
    }

    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    pub fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Pathfind {
                movies,
                weighting,
                pairs,
                output,
            } => self.run_pathfind(&movies, weighting, &pairs, &output),
            Command::Predict {
                movies,
                actors,
                collaborators_out,
                new_collaborators_out,
            } => self.run_predict(&movies, &actors, &collaborators_out, &new_collaborators_out),
            Command::Travel { movies, output } => self.run_travel(&movies, &output),
        }
    }

    pub fn run_pathfind(
        &self,
        movies: &Path,
        weighting: Weighting,
        pairs_path: &Path,
        output: &Path,
    ) -> Result<()> {
        let graph = self.load_graph(movies, GraphConfig::new(weighting.is_weighted()))?;
        let pairs = read_actor_pairs(pairs_path)?;
        let algorithm = Algorithm::for_config(graph.config());
        info!(pairs = pairs.len(), algorithm = algorithm.as_str(), "running path queries");

        let mut unknown_actors: Vec<&str> = Vec::new();
        for pair in &pairs {
            for name in [pair.from.as_str(), pair.to.as_str()] {
                if !name.is_empty()
                    && graph.actor_id(name).is_none()
                    && !unknown_actors.contains(&name)
                {
                    unknown_actors.push(name);
                }
            }
        }
        display_unknown_actors(&unknown_actors, &self.colors);

        let mut paths = Vec::with_capacity(pairs.len());
        let mut actors_visited = 0;
        let mut search_duration = 0.0;

        for pair in &pairs {
            let (path, visited_count, elapsed_time) =
                find_path(&graph, &pair.from, &pair.to, algorithm);
            actors_visited += visited_count;
            search_duration += elapsed_time;
            paths.push(path);
        }

        let mut writer = create_output(output)?;
        write_path_report(&mut writer, &graph, &paths)
            .and_then(|_| writer.flush())
            .with_context(|| format!("failed to write paths to {}", output.display()))?;

        let found_count = paths.iter().filter(|path| path.is_some()).count();
        display_pathfind_summary(pairs.len(), found_count, output, &self.colors);
        if self.verbose {
            display_search_statistics(actors_visited, search_duration, &self.colors);
        }

        Ok(())
    }

    pub fn run_predict(
        &self,
        movies: &Path,
        actors_path: &Path,
        collaborators_out: &Path,
        new_collaborators_out: &Path,
    ) -> Result<()> {
        let graph = self.load_graph(movies, GraphConfig::new(false))?;
        let actor_names = read_actor_names(actors_path)?;

        let unknown_actors: Vec<&str> = actor_names
            .iter()
            .map(String::as_str)
            .filter(|name| graph.actor_id(name).is_none())
            .collect();
        display_unknown_actors(&unknown_actors, &self.colors);

        let reports: Vec<_> = actor_names
            .iter()
            .map(|name| {
                let report = recommend(&graph, name);
                debug!(
                    actor = name.as_str(),
                    collaborators = report.collaborators.len(),
                    new_collaborators = report.new_collaborators.len(),
                    "ranked collaborators"
                );
                report
            })
            .collect();

        let mut collaborators_writer = create_output(collaborators_out)?;
        let mut new_collaborators_writer = create_output(new_collaborators_out)?;
        write_recommendation_reports(
            &mut collaborators_writer,
            &mut new_collaborators_writer,
            &graph,
            &reports,
        )
        .and_then(|_| collaborators_writer.flush())
        .and_then(|_| new_collaborators_writer.flush())
        .context("failed to write collaborator rankings")?;

        display_predict_summary(
            actor_names.len(),
            collaborators_out,
            new_collaborators_out,
            &self.colors,
        );

        Ok(())
    }

    pub fn run_travel(&self, movies: &Path, output: &Path) -> Result<()> {
        let graph = self.load_graph(movies, GraphConfig::new(true))?;

        let tree = spanning_forest(&graph);

        let mut writer = create_output(output)?;
        write_spanning_report(&mut writer, &graph, &tree)
            .and_then(|_| writer.flush())
            .with_context(|| format!("failed to write connections to {}", output.display()))?;

        display_travel_summary(&tree, output, &self.colors);

        Ok(())
    }

    fn load_graph(&self, movies: &Path, config: GraphConfig) -> Result<ActorGraph> {
        let load_timer = Instant::now();
        let spinner = self.loading_spinner(movies)?;

        let graph = ActorGraph::load_from_file(movies, &config);
        spinner.finish_and_clear();

        let graph = graph
            .with_context(|| format!("failed to load relationships from {}", movies.display()))?;

        if self.verbose {
            display_graph_stats(
                &graph.stats(),
                load_timer.elapsed().as_secs_f64(),
                &self.colors,
            );
        }

        Ok(graph)
    }

    // Log lines and a spinner would interleave on stderr
    fn loading_spinner(&self, movies: &Path) -> Result<ProgressBar> {
        if self.verbose {
            return Ok(ProgressBar::hidden());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template(
            "{spinner:.green} {msg} [{elapsed_precise}]",
        )?);
        spinner.set_message(format!("Loading {}", movies.display()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        Ok(spinner)
    }
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}
