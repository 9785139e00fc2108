use crate::search::{Algorithm, SearchError};

/// Errors raised by the benchmark core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BenchError {
    #[error("repetitions must be a positive integer")]
    ZeroRepetitions,

    #[error("size step must be a positive integer")]
    ZeroSizeStep,

    #[error("recursion limit must be a positive integer")]
    ZeroRecursionLimit,

    #[error("invalid size series: {0}")]
    InvalidSizes(String),

    #[error(transparent)]
    Search(#[from] SearchError),

    /// A search failed while measuring one prefix; the run stops here.
    #[error("{algorithm} search failed at input size {size}: {source}")]
    SearchFailed {
        algorithm: Algorithm,
        size: usize,
        #[source]
        source: SearchError,
    },

    #[error("searches disagree at input size {size}: iterative {iterative:?}, recursive {recursive:?}")]
    ResultMismatch {
        size: usize,
        iterative: Option<usize>,
        recursive: Option<usize>,
    },
}

impl BenchError {
    /// True for errors that are detected before anything is measured.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            BenchError::ZeroRepetitions
                | BenchError::ZeroSizeStep
                | BenchError::ZeroRecursionLimit
                | BenchError::InvalidSizes(_)
        )
    }
}
