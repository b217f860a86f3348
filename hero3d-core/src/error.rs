/// Error types for scene construction
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("edge {edge} references vertex {index}, but only {vertex_count} vertices exist")]
    EdgeOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
}
