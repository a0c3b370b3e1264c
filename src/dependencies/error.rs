use thiserror::Error;

use crate::local::LocalError;
use crate::version::error::ResolveError;

#[derive(Debug, Error)]
pub enum DependencyError {
    #[error(
        "Unknown platform type '{0}'. Supported types: AI, CL, GW, GO, IC, IU, PS, PC, PY, RD"
    )]
    UnknownPlatformType(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Local(#[from] LocalError),
}
