//! Declaring platform artifacts into a build graph
//!
//! Every declaration is deferred: nothing is fetched, synthesized or declared
//! until the returned [`Deferred`] is first evaluated, and evaluation happens
//! at most once.
//!
//! - [`coordinate`]: Coordinates and repository sources
//! - [`graph`]: Build graph extension points and an in-memory graph
//! - [`platform`]: IDE product types
//! - [`error`]: Failure taxonomy

pub mod coordinate;
pub mod error;
pub mod graph;
pub mod platform;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::config::{ResolverConfig, VERSION_LATEST};
use crate::deferred::Deferred;
use crate::local::{LocalInstallationSynthesizer, ProductInfoFile, ProductInfoReader};
use crate::runtime::{HostInfo, build_identifier};
use crate::version::registries::MavenMetadataClient;
use crate::version::registry::MetadataSource;
use crate::version::resolver::Resolver;
use crate::version::resolvers::LatestVersionResolver;

pub use coordinate::{Coordinate, RepositorySource};
pub use error::DependencyError;
pub use graph::{Declaration, DependencySink, RecordingGraph, RepositoryRegistry};
pub use platform::PlatformType;

pub const INTELLIJ_PLATFORM_DEPENDENCY: &str = "intellijPlatformDependency";
pub const INTELLIJ_PLATFORM_LOCAL_INSTANCE: &str = "intellijPlatformLocalInstance";
pub const JETBRAINS_RUNTIME_DEPENDENCY: &str = "jetbrainsRuntimeDependency";
pub const INTELLIJ_PLATFORM_DEPENDENCIES: &str = "intellijPlatformDependencies";
pub const INTELLIJ_PLUGIN_VERIFIER: &str = "intellijPluginVerifier";

const DEFAULT_PLUGIN_GROUP: &str = "com.jetbrains.plugins";

pub type DeferredCoordinate = Deferred<Coordinate, DependencyError>;

type Resolution = Result<(Coordinate, Option<RepositorySource>), DependencyError>;

/// Entry point for declaring platform, runtime, plugin and tool dependencies
pub struct PlatformDependencies {
    config: ResolverConfig,
    host: HostInfo,
    metadata: Arc<dyn MetadataSource>,
    product_info: Arc<dyn ProductInfoReader>,
    sink: Arc<dyn DependencySink>,
    repositories: Arc<dyn RepositoryRegistry>,
}

impl PlatformDependencies {
    /// Uses the HTTP metadata client, `product-info.json` reader and the current host
    pub fn new(
        config: ResolverConfig,
        sink: Arc<dyn DependencySink>,
        repositories: Arc<dyn RepositoryRegistry>,
    ) -> Self {
        Self {
            config,
            host: HostInfo::current(),
            metadata: Arc::new(MavenMetadataClient::new()),
            product_info: Arc::new(ProductInfoFile),
            sink,
            repositories,
        }
    }

    pub fn with_metadata_source(mut self, metadata: Arc<dyn MetadataSource>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_product_info_reader(mut self, reader: Arc<dyn ProductInfoReader>) -> Self {
        self.product_info = reader;
        self
    }

    pub fn with_host(mut self, host: HostInfo) -> Self {
        self.host = host;
        self
    }

    /// IDE distribution of the given product and version
    pub fn create(
        &self,
        platform_type: PlatformType,
        version: &str,
        configuration: Option<&str>,
    ) -> DeferredCoordinate {
        let version = version.to_string();
        self.declare(
            configuration.unwrap_or(INTELLIJ_PLATFORM_DEPENDENCY),
            move || Ok((platform_coordinate(platform_type, &version), None)),
        )
    }

    /// Same as [`create`](Self::create), with the product given by its code.
    /// An unknown code surfaces on evaluation.
    pub fn create_from_code(
        &self,
        code: &str,
        version: &str,
        configuration: Option<&str>,
    ) -> DeferredCoordinate {
        let code = code.to_string();
        let version = version.to_string();
        self.declare(
            configuration.unwrap_or(INTELLIJ_PLATFORM_DEPENDENCY),
            move || {
                let platform_type = PlatformType::from_code(&code)?;
                Ok((platform_coordinate(platform_type, &version), None))
            },
        )
    }

    /// Local IDE installation, served from a synthesized Ivy module
    pub fn local(&self, path: &Path, configuration: Option<&str>) -> DeferredCoordinate {
        let path: PathBuf = path.to_path_buf();
        let synthesizer = LocalInstallationSynthesizer::new(
            self.config.ivy_dir(),
            self.host.clone(),
            Arc::clone(&self.product_info),
        );
        self.declare(
            configuration.unwrap_or(INTELLIJ_PLATFORM_LOCAL_INSTANCE),
            move || {
                let descriptor = synthesizer.describe_local(&path)?;
                Ok((descriptor.coordinate, Some(descriptor.repository)))
            },
        )
    }

    /// Runtime archive named by a full build identifier
    pub fn jetbrains_runtime(
        &self,
        explicit_version: &str,
        configuration: Option<&str>,
    ) -> DeferredCoordinate {
        let explicit_version = explicit_version.to_string();
        let repository = self.runtime_repository();
        self.declare(
            configuration.unwrap_or(JETBRAINS_RUNTIME_DEPENDENCY),
            move || {
                Ok((
                    runtime_coordinate(&explicit_version),
                    Some(repository.clone()),
                ))
            },
        )
    }

    /// Runtime archive named from a short version plus optional variant and
    /// architecture; the identifier is rebuilt for the configured host.
    pub fn jetbrains_runtime_from(
        &self,
        version: &str,
        variant: Option<&str>,
        architecture: Option<&str>,
        configuration: Option<&str>,
    ) -> DeferredCoordinate {
        let version = version.to_string();
        let variant = variant.map(str::to_string);
        let architecture = architecture.map(str::to_string);
        let host = self.host.clone();
        let repository = self.runtime_repository();
        self.declare(
            configuration.unwrap_or(JETBRAINS_RUNTIME_DEPENDENCY),
            move || {
                let identifier = build_identifier(
                    &version,
                    variant.as_deref(),
                    architecture.as_deref(),
                    &host,
                );
                Ok((runtime_coordinate(&identifier), Some(repository.clone())))
            },
        )
    }

    /// Marketplace plugin; a non-default channel prefixes the group
    pub fn plugin(
        &self,
        id: &str,
        version: &str,
        channel: Option<&str>,
        configuration: Option<&str>,
    ) -> DeferredCoordinate {
        let coordinate = Coordinate::new(&plugin_group(channel), id, version);
        self.declare(
            configuration.unwrap_or(INTELLIJ_PLATFORM_DEPENDENCIES),
            move || Ok((coordinate.clone(), None)),
        )
    }

    /// Plugin Verifier CLI; `None` or `latest` resolves the newest release
    pub fn plugin_verifier(
        &self,
        version: Option<&str>,
        configuration: Option<&str>,
    ) -> DeferredCoordinate {
        let version = version.unwrap_or(VERSION_LATEST).to_string();
        let resolver = LatestVersionResolver::plugin_verifier(&self.config, Arc::clone(&self.metadata));
        self.declare(
            configuration.unwrap_or(INTELLIJ_PLUGIN_VERIFIER),
            move || {
                let version = match version.as_str() {
                    VERSION_LATEST => resolver.resolve()?.to_string(),
                    _ => version.clone(),
                };
                let coordinate =
                    Coordinate::new("org.jetbrains.intellij.plugins", "verifier-cli", &version)
                        .with_classifier("all")
                        .with_extension("jar");
                Ok((coordinate, None))
            },
        )
    }

    fn runtime_repository(&self) -> RepositorySource {
        RepositorySource::Ivy {
            url: self.config.locations.jetbrains_runtime_repository.clone(),
            ivy_pattern: None,
            artifact_pattern: "[revision].tar.gz".to_string(),
            artifact_metadata_only: true,
        }
    }

    fn declare<F>(&self, configuration: &str, resolve: F) -> DeferredCoordinate
    where
        F: Fn() -> Resolution + Send + Sync + 'static,
    {
        let configuration = configuration.to_string();
        let sink = Arc::clone(&self.sink);
        let repositories = Arc::clone(&self.repositories);

        Deferred::new(move || {
            let (coordinate, repository) = resolve()?;
            if let Some(source) = repository {
                debug!("Registering repository {}", source.url());
                repositories.register(source);
            }
            debug!("Declaring {} in {}", coordinate, configuration);
            sink.declare_dependency(&configuration, &coordinate);
            Ok(coordinate)
        })
    }
}

fn platform_coordinate(platform_type: PlatformType, version: &str) -> Coordinate {
    Coordinate::new(platform_type.group_id(), platform_type.artifact_id(), version)
}

fn runtime_coordinate(identifier: &str) -> Coordinate {
    Coordinate::new("com.jetbrains", "jbr", identifier).with_extension("tar.gz")
}

/// Maven group of a marketplace plugin published in `channel`
pub fn plugin_group(channel: Option<&str>) -> String {
    match channel.map(str::trim) {
        None | Some("") | Some("default") => DEFAULT_PLUGIN_GROUP.to_string(),
        Some(channel) => format!("{}.{}", channel, DEFAULT_PLUGIN_GROUP),
    }
}
