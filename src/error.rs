//! Error type shared by every ordering and counting operation.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A label was looked up that is not part of the declared node set.
    #[error("Node not found in the graph: {node}")]
    NodeNotFound { node: String },

    #[error("Duplicate node label: {node}")]
    DuplicateNode { node: String },

    #[error("Offset {offset} is too large for matrix with size {size}")]
    InvalidOffset { offset: usize, size: usize },

    #[error("Range {start}..{end} is out of bounds for an ordering of {len} nodes")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Members of a group are split across the ordering.
    #[error("Group '{group}' is not contiguous in the ordering")]
    NonContiguousGroup { group: String },

    #[error("Node '{node}' has no group assigned")]
    MissingGroup { node: String },

    #[error("Graph has {count} nodes, more than the configured limit of {limit}")]
    TooManyNodes { count: usize, limit: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Missing CSV column '{column}'")]
    MissingColumn { column: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Reading an input file or stdin failed.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn node_not_found(node: &str) -> Self {
        Error::NodeNotFound {
            node: node.to_string(),
        }
    }

    pub fn io(path: &str, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_string(),
            source,
        }
    }
}
