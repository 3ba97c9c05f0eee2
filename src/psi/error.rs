use std::io;

use thiserror::Error;

use super::Resource;

/// Failure to obtain one resource's counter.
#[derive(Debug, Error)]
pub enum PsiError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("missing or malformed total= field in {path}")]
    Parse { path: &'static str },
}

/// Failure of a synchronized sampling round. Wraps the first resource-level
/// error encountered; the rest of the round is abandoned.
#[derive(Debug, Error)]
pub enum RoundError {
    #[error("sampling {resource} failed: {source}")]
    Sample {
        resource: Resource,
        #[source]
        source: PsiError,
    },
    #[error("sampler worker for {resource} stopped unexpectedly")]
    WorkerGone { resource: Resource },
}
