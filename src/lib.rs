pub mod config;
pub mod errors;
pub mod export;
pub mod extraction;
pub mod graph;
pub mod resolution;
pub mod types;
pub mod xrefgraph;
