use crate::graph::GraphError;
use crate::pipeline::PipelineState;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required layout property `{key}`")]
    Configuration { key: &'static str },

    #[error("invalid layout option `{option}`: {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },

    #[error("failed to parse layout options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("{phase} does not support this graph: {reason}")]
    UnsupportedGraph {
        phase: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Graph(GraphError),

    #[error("layout step `{step}` failed")]
    StepFailed {
        step: String,
        #[source]
        source: Box<Error>,
    },

    #[error("cannot {action} a pipeline in state {state:?}")]
    InvalidState {
        action: &'static str,
        state: PipelineState,
    },
}

impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::MissingProperty { key } => Error::Configuration { key },
            other => Error::Graph(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
