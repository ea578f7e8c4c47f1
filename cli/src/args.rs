use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "actorpath")]
#[command(about = "Connect actors through the movies they appeared in")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - log graph statistics and per-query details
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find a path between every actor pair in a query file
    Pathfind {
        /// Relationship file (actor, movie, year; tab-separated)
        movies: PathBuf,

        /// Edge weighting: u (fewest movies) or w (favor recent movies)
        #[arg(value_enum)]
        weighting: Weighting,

        /// Actor pairs to connect (tab-separated)
        pairs: PathBuf,

        /// Where to write one path per pair
        output: PathBuf,
    },

    /// Rank existing and new collaborators for every actor in a query file
    Predict {
        /// Relationship file (actor, movie, year; tab-separated)
        movies: PathBuf,

        /// Actor names, one per line
        actors: PathBuf,

        /// Where to write existing collaborator rankings
        collaborators_out: PathBuf,

        /// Where to write new collaborator rankings
        new_collaborators_out: PathBuf,
    },

    /// Connect every actor through the lightest set of movies
    Travel {
        /// Relationship file (actor, movie, year; tab-separated)
        movies: PathBuf,

        /// Where to write the chosen connections
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Weighting {
    /// Every movie link counts the same
    #[value(name = "u")]
    Unweighted,
    /// Older movies make heavier links
    #[value(name = "w")]
    Weighted,
}

impl Weighting {
    pub fn is_weighted(self) -> bool {
        self == Weighting::Weighted
    }
}
