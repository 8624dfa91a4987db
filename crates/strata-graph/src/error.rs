#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("self-loop on node `{node}` cannot be laid out")]
    InvalidEdge { node: String },

    #[error("node `{node}` has invalid size {width}x{height}; width and height must be positive")]
    InvalidNodeSize {
        node: String,
        width: f64,
        height: f64,
    },

    #[error("node `{node}` has invalid padding {padding}; padding must be finite and non-negative")]
    InvalidPadding { node: String, padding: f64 },

    #[error("duplicate node id `{node}`")]
    DuplicateNode { node: String },

    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("unknown edge: {edge}")]
    UnknownEdge { edge: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
