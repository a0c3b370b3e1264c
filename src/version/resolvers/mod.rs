//! Concrete resolvers for the `latest` sentinel and ceiling-bounded lookups

mod closest;
mod latest;

pub use closest::ClosestVersionResolver;
pub use latest::{LatestVersionResolver, version_from_location};
