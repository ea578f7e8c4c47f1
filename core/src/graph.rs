//! Arena-backed actor graph.
//!
//! Actors, edges and movies live in flat vectors owned by [`ActorGraph`] and
//! are addressed by copyable handles. Algorithms borrow the graph immutably
//! and keep their own per-query state, so nothing a query marks can be seen
//! by the next one.

use crate::graph_config::GraphConfig;
use crate::movie::Movie;
use crate::parsing::Relationship;
use rustc_hash::FxHashMap;

/// Handle to an actor owned by an [`ActorGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(usize);

/// Handle to a directed edge owned by an [`ActorGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(usize);

impl ActorId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    edges: Vec<EdgeId>,
}

impl Actor {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges, in creation order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

/// One direction of a collaboration between two actors in one movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: ActorId,
    pub destination: ActorId,
    pub movie: MovieId,
    pub weight: u32,
}

impl Edge {
    /// Only produced when an actor is listed twice for the same movie.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub actors: usize,
    pub movies: usize,
    pub edges: usize,
}

#[derive(Debug, Clone)]
pub struct ActorGraph {
    actors: Vec<Actor>,
    edges: Vec<Edge>,
    movies: Vec<Movie>,
    casts: Vec<Vec<ActorId>>,
    actor_index: FxHashMap<String, ActorId>,
    movie_index: FxHashMap<Movie, MovieId>,
    config: GraphConfig,
}

impl ActorGraph {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            actors: Vec::new(),
            edges: Vec::new(),
            movies: Vec::new(),
            casts: Vec::new(),
            actor_index: FxHashMap::default(),
            movie_index: FxHashMap::default(),
            config,
        }
    }

    pub fn from_relationships<I>(relationships: I, config: &GraphConfig) -> Self
    where
        I: IntoIterator<Item = Relationship>,
    {
        let mut graph = Self::new(*config);
        for relationship in relationships {
            graph.add_relationship(relationship);
        }
        graph
    }

    /// Records one actor-movie appearance.
    ///
    /// The actor is connected to everyone already in the movie's cast, then
    /// appended to it, so a cast of `n` yields `n * (n - 1)` directed edges.
    pub fn add_relationship(&mut self, relationship: Relationship) {
        let Relationship { actor, movie } = relationship;

        let actor_id = self.resolve_actor(actor);
        let movie_id = self.resolve_movie(movie);
        let weight = self.config.edge_weight(self.movies[movie_id.0].year);

        for position in 0..self.casts[movie_id.0].len() {
            let co_star = self.casts[movie_id.0][position];
            self.connect(actor_id, co_star, movie_id, weight);
        }

        self.casts[movie_id.0].push(actor_id);
    }

    fn resolve_actor(&mut self, name: String) -> ActorId {
        if let Some(&existing) = self.actor_index.get(&name) {
            return existing;
        }

        let actor_id = ActorId::new(self.actors.len());
        self.actors.push(Actor {
            name: name.clone(),
            edges: Vec::new(),
        });
        self.actor_index.insert(name, actor_id);
        actor_id
    }

    fn resolve_movie(&mut self, movie: Movie) -> MovieId {
        if let Some(&existing) = self.movie_index.get(&movie) {
            return existing;
        }

        let movie_id = MovieId(self.movies.len());
        self.movies.push(movie.clone());
        self.casts.push(Vec::new());
        self.movie_index.insert(movie, movie_id);
        movie_id
    }

    fn connect(&mut self, actor: ActorId, co_star: ActorId, movie: MovieId, weight: u32) {
        self.push_edge(actor, co_star, movie, weight);
        self.push_edge(co_star, actor, movie, weight);
    }

    fn push_edge(&mut self, source: ActorId, destination: ActorId, movie: MovieId, weight: u32) {
        let edge_id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            destination,
            movie,
            weight,
        });
        self.actors[source.0].edges.push(edge_id);
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn actor_id(&self, name: &str) -> Option<ActorId> {
        self.actor_index.get(name).copied()
    }

    pub fn actor(&self, actor_id: ActorId) -> &Actor {
        &self.actors[actor_id.0]
    }

    pub fn actor_name(&self, actor_id: ActorId) -> &str {
        &self.actors[actor_id.0].name
    }

    pub fn edge(&self, edge_id: EdgeId) -> &Edge {
        &self.edges[edge_id.0]
    }

    pub fn movie(&self, movie_id: MovieId) -> &Movie {
        &self.movies[movie_id.0]
    }

    /// Cast of a movie in insertion order; empty for unknown movies.
    pub fn movie_cast(&self, movie: &Movie) -> &[ActorId] {
        self.movie_index
            .get(movie)
            .map(|movie_id| self.casts[movie_id.0].as_slice())
            .unwrap_or(&[])
    }

    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors
            .iter()
            .enumerate()
            .map(|(index, actor)| (ActorId::new(index), actor))
    }

    pub fn edges_of(&self, actor_id: ActorId) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.actors[actor_id.0]
            .edges
            .iter()
            .map(|&edge_id| (edge_id, &self.edges[edge_id.0]))
    }

    /// First edge leaving `from` whose destination is named `to`.
    pub fn find_edge(&self, from: ActorId, to: &str) -> Option<EdgeId> {
        self.edges_of(from)
            .find(|(_, edge)| self.actor_name(edge.destination) == to)
            .map(|(edge_id, _)| edge_id)
    }

    /// The opposite direction of the same collaboration.
    pub fn mirror_of(&self, edge_id: EdgeId) -> Option<EdgeId> {
        let edge = self.edge(edge_id);
        self.edges_of(edge.destination)
            .find(|(candidate_id, candidate)| {
                *candidate_id != edge_id
                    && candidate.destination == edge.source
                    && candidate.movie == edge.movie
            })
            .map(|(candidate_id, _)| candidate_id)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            actors: self.actor_count(),
            movies: self.movie_count(),
            edges: self.edge_count(),
        }
    }
}
