//! Extension points of the host build graph

use std::sync::{Mutex, MutexGuard, PoisonError};

#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::dependencies::coordinate::{Coordinate, RepositorySource};

/// Receives resolved coordinates under a named configuration
#[cfg_attr(test, automock)]
pub trait DependencySink: Send + Sync {
    fn declare_dependency(&self, configuration: &str, coordinate: &Coordinate);
}

/// Receives repositories that resolved coordinates depend on
#[cfg_attr(test, automock)]
pub trait RepositoryRegistry: Send + Sync {
    fn register(&self, source: RepositorySource);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub configuration: String,
    pub coordinate: Coordinate,
}

/// In-memory build graph recording every declaration and repository
#[derive(Debug, Default)]
pub struct RecordingGraph {
    declarations: Mutex<Vec<Declaration>>,
    repositories: Mutex<Vec<RepositorySource>>,
}

impl RecordingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declarations(&self) -> Vec<Declaration> {
        lock(&self.declarations).clone()
    }

    /// Registered repositories in registration order, duplicates collapsed
    pub fn repositories(&self) -> Vec<RepositorySource> {
        lock(&self.repositories).clone()
    }
}

impl DependencySink for RecordingGraph {
    fn declare_dependency(&self, configuration: &str, coordinate: &Coordinate) {
        lock(&self.declarations).push(Declaration {
            configuration: configuration.to_string(),
            coordinate: coordinate.clone(),
        });
    }
}

impl RepositoryRegistry for RecordingGraph {
    fn register(&self, source: RepositorySource) {
        let mut repositories = lock(&self.repositories);
        if !repositories.contains(&source) {
            repositories.push(source);
        }
    }
}

// A panic while holding the lock leaves the vectors intact.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
