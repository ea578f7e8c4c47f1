pub mod kruskal;
pub mod union_find;

pub use kruskal::{SpanningTree, spanning_forest, spanning_tree};
pub use union_find::UnionFind;
