//! Disjoint sets over actor handles, with path compression and union by size.

use crate::graph::ActorId;

pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub fn new(actor_count: usize) -> Self {
        Self {
            parent: (0..actor_count).collect(),
            size: vec![1; actor_count],
        }
    }

    /// Representative index of the component containing `actor`.
    pub fn find(&mut self, actor: ActorId) -> usize {
        self.find_index(actor.index())
    }

    fn find_index(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = index;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the two components; returns `false` if they were already one.
    pub fn union(&mut self, a: ActorId, b: ActorId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        let (larger, smaller) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        self.parent[smaller] = larger;
        self.size[larger] += self.size[smaller];
        true
    }

    pub fn connected(&mut self, a: ActorId, b: ActorId) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn component_size(&mut self, actor: ActorId) -> usize {
        let root = self.find(actor);
        self.size[root]
    }
}
