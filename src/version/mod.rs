//! Version values and remote version resolution
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registries │────▶│  Resolvers  │────▶│   Version   │
//! │(maven,github│     │(latest,     │     │ (parse/cmp) │
//! │  redirect)  │     │ closest)    │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`]: The [`Version`] value and its total order
//! - [`parser`]: Parsing of loosely formatted version strings
//! - [`registry`]: Traits for metadata documents and release redirects
//! - [`registries`]: Maven metadata client and GitHub redirect probe
//! - [`resolver`]: The [`Resolver`](resolver::Resolver) trait
//! - [`resolvers`]: Latest-version and closest-version resolvers
//! - [`error`]: Error types for parsing, fetching and resolving

pub mod error;
pub mod parser;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod resolvers;
pub mod types;

pub use types::{Version, max_of};
