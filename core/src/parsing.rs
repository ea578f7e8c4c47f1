use crate::error::{GraphError, Result};
use crate::graph::ActorGraph;
use crate::graph_config::GraphConfig;
use crate::movie::Movie;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, info};

const FIELD_DELIMITER: char = '\t';

/// One row of the relationship file: an actor appearing in a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub actor: String,
    pub movie: Movie,
}

impl Relationship {
    pub fn new(actor: impl Into<String>, title: impl Into<String>, year: i32) -> Self {
        Self {
            actor: actor.into(),
            movie: Movie::new(title, year),
        }
    }
}

/// Parses `actor \t title \t year`.
///
/// Returns `Ok(None)` for rows that do not split into exactly three fields,
/// and an error when the year is not an integer.
pub fn parse_relationship_line(line: &str, line_number: usize) -> Result<Option<Relationship>> {
    let line = line.trim_end_matches(['\r', '\n']);
    // A single trailing delimiter does not open a fourth field
    let line = line.strip_suffix(FIELD_DELIMITER).unwrap_or(line);
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let [actor, title, year] = fields.as_slice() else {
        return Ok(None);
    };

    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|_| GraphError::InvalidYear {
            line: line_number,
            value: year.to_string(),
        })?;

    Ok(Some(Relationship::new(*actor, *title, year)))
}

impl ActorGraph {
    pub fn load_from_file(path: &Path, config: &GraphConfig) -> Result<Self> {
        let file = File::open(path).map_err(|source| GraphError::Io {
            source,
            path: path.to_path_buf(),
        })?;

        Self::load_from_reader(BufReader::new(file), config)
            .map_err(|error| error.with_path(path.to_path_buf()))
    }

    /// Builds the graph from a tab-delimited relationship stream.
    ///
    /// The first line is a header. Malformed rows are skipped; a year that is
    /// not a number aborts the load. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD instead of failing the read.
    pub fn load_from_reader<R: BufRead>(mut reader: R, config: &GraphConfig) -> Result<Self> {
        let mut graph = Self::new(*config);
        let mut skipped_records = 0usize;
        let mut buffer = Vec::new();
        let mut line_number = 0usize;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_number += 1;

            if line_number == 1 {
                continue;
            }

            let line = String::from_utf8_lossy(&buffer);
            match parse_relationship_line(&line, line_number)? {
                Some(relationship) => graph.add_relationship(relationship),
                None => {
                    skipped_records += 1;
                    debug!(line = line_number, "skipping malformed relationship record");
                }
            }
        }

        let stats = graph.stats();
        info!(
            actors = stats.actors,
            movies = stats.movies,
            edges = stats.edges,
            skipped_records,
            weighted = config.weighted,
            "actor graph loaded"
        );

        Ok(graph)
    }
}
