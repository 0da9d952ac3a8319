/// Errors raised while building or querying a [`Graph`](crate::Graph).
///
/// Every variant is a caller-input problem detected before any work is done,
/// except [`GraphError::EdgeCountUnsatisfiable`], which reports that sampling
/// ran out of attempts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("at least 2 node names are required, got {0}")]
    TooFewNodes(usize),

    #[error("duplicate node name: {0:?}")]
    DuplicateNode(String),

    #[error("node names must not be empty")]
    EmptyName,

    #[error("requested {requested} edges but {nodes} nodes allow at most {max}")]
    TooManyEdges {
        requested: usize,
        nodes: usize,
        max: usize,
    },

    #[error("invalid weight range {min}..={max}: bounds must be positive and ordered")]
    InvalidWeightRange { min: u32, max: u32 },

    #[error("unknown node: {0:?}")]
    UnknownNode(String),

    #[error("start and end must be distinct nodes, both are {0:?}")]
    SameEndpoints(String),

    #[error("self-loop on {0:?} is not allowed")]
    SelfLoop(String),

    #[error("edge {0:?} - {1:?} already exists")]
    DuplicateEdge(String, String),

    #[error("edge {0:?} - {1:?} has zero weight")]
    ZeroWeight(String, String),

    #[error(
        "placed {placed} of {requested} edges before giving up after {attempts} sampling attempts"
    )]
    EdgeCountUnsatisfiable {
        requested: usize,
        placed: usize,
        attempts: usize,
    },
}
