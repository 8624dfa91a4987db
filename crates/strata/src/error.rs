use strata_graph::GraphError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid layout config: {message}")]
    InvalidConfig { message: String },

    #[error("invalid layout config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
