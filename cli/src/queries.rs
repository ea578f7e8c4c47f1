use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

const FIELD_DELIMITER: char = '\t';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorPair {
    pub from: String,
    pub to: String,
}

/// Reads `actor1 \t actor2` rows that follow a header line.
///
/// Rows whose first actor is empty are skipped. Extra fields are ignored
/// except the last, which names the second actor. A missing second actor is
/// kept as an empty name, which never resolves to a path.
pub fn parse_actor_pairs<R: BufRead>(reader: R) -> Result<Vec<ActorPair>> {
    let mut pairs = Vec::new();

    for line in reader.lines().skip(1) {
        let line = line?;
        let mut fields = line.trim_end_matches('\r').split(FIELD_DELIMITER);

        let from = fields.next().unwrap_or_default();
        if from.is_empty() {
            continue;
        }
        let to = fields.last().unwrap_or_default();

        pairs.push(ActorPair {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    Ok(pairs)
}

/// Reads one actor name per line after a header line, skipping blank lines.
pub fn parse_actor_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for line in reader.lines().skip(1) {
        let line = line?;
        let name = line.trim_end_matches('\r');
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

pub fn read_actor_pairs(path: &Path) -> Result<Vec<ActorPair>> {
    parse_actor_pairs(open_query_file(path)?)
        .with_context(|| format!("failed to read actor pairs from {}", path.display()))
}

pub fn read_actor_names(path: &Path) -> Result<Vec<String>> {
    parse_actor_names(open_query_file(path)?)
        .with_context(|| format!("failed to read actor names from {}", path.display()))
}

fn open_query_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open query file {}", path.display()))?;
    Ok(BufReader::new(file))
}
