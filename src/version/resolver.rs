//! Resolver trait
//!
//! A resolver turns a loose request (the `latest` sentinel, a ceiling) into one
//! concrete value, consulting remote sources when it has to.

use crate::version::error::ResolveError;

/// Trait for resolving a single value for a named subject
pub trait Resolver: Send + Sync {
    type Output;

    /// Human-readable label of the thing being resolved, used in diagnostics
    fn subject(&self) -> &str;

    /// Performs the resolution
    fn resolve(&self) -> Result<Self::Output, ResolveError>;
}
