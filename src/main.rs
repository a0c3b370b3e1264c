use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::debug;

use platform_resolver::config::{ResolverConfig, log_path};
use platform_resolver::dependencies::{
    DeferredCoordinate, PlatformDependencies, PlatformType, RecordingGraph,
};
use platform_resolver::logging;
use platform_resolver::version::Version;
use platform_resolver::version::registries::{GitHubReleaseProbe, MavenMetadataClient};
use platform_resolver::version::resolver::Resolver;
use platform_resolver::version::resolvers::{ClosestVersionResolver, LatestVersionResolver};

#[derive(Parser)]
#[command(name = "platform-resolver")]
#[command(version, about = "Resolve IDE platform artifact versions and coordinates")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write JSON logs to a file instead of stderr; defaults to the cache directory
    #[arg(long, global = true)]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LatestTarget {
    /// IntelliJ Plugin Verifier CLI (Maven metadata)
    PluginVerifier,
    /// IntelliJ Platform Gradle Plugin (GitHub releases redirect)
    BuildPlugin,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the newest published version
    Latest {
        #[arg(value_enum)]
        target: LatestTarget,
        /// Override the metadata document or repository URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Resolve the highest published version not above a ceiling
    Closest {
        /// Platform build acting as the upper bound
        ceiling: String,
        /// Metadata document URL; defaults to java-compiler-ant-tasks
        #[arg(long)]
        url: Option<String>,
    },
    /// Declare an IDE distribution by product code
    Platform {
        /// Product code (IC, IU, PY, ...)
        code: String,
        version: String,
    },
    /// Declare a JetBrains Runtime archive
    Runtime {
        /// Runtime version, e.g. 17.0.9b1087.7
        version: String,
        #[arg(long)]
        variant: Option<String>,
        #[arg(long)]
        arch: Option<String>,
        /// Treat VERSION as a complete build identifier
        #[arg(long)]
        explicit: bool,
    },
    /// Declare a local IDE installation
    Local { path: PathBuf },
    /// Declare a marketplace plugin
    Plugin {
        id: String,
        version: String,
        #[arg(long)]
        channel: Option<String>,
    },
    /// Declare the Plugin Verifier CLI
    Verifier {
        /// Version to use; resolves the latest release when omitted
        version: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.map(|path| path.unwrap_or_else(log_path));
    let _guard = logging::init(cli.verbose, log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = match &cli.config {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::default(),
    };
    debug!("Using configuration {:?}", config);

    let output = run(cli.command, config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run(command: Command, config: ResolverConfig) -> anyhow::Result<serde_json::Value> {
    let metadata = Arc::new(MavenMetadataClient::new());

    match command {
        Command::Latest { target, url } => {
            let resolver = match target {
                LatestTarget::PluginVerifier => match url {
                    Some(url) => {
                        LatestVersionResolver::from_maven("IntelliJ Plugin Verifier", &url, metadata)
                    }
                    None => LatestVersionResolver::plugin_verifier(&config, metadata),
                },
                LatestTarget::BuildPlugin => {
                    let probe = Arc::new(GitHubReleaseProbe::new());
                    match url {
                        Some(url) => LatestVersionResolver::from_github(
                            "IntelliJ Platform Gradle Plugin",
                            &url,
                            probe,
                        ),
                        None => LatestVersionResolver::build_plugin(&config, probe),
                    }
                }
            };
            let version = resolver.resolve()?;
            Ok(resolution(resolver.subject(), resolver.url(), &version))
        }
        Command::Closest { ceiling, url } => {
            let ceiling = Version::parse(&ceiling)
                .with_context(|| format!("invalid ceiling '{}'", ceiling))?;
            let resolver = match url {
                Some(url) => {
                    ClosestVersionResolver::new("Java Compiler Ant Tasks", &url, ceiling, metadata)
                }
                None => ClosestVersionResolver::java_compiler_ant_tasks(&config, ceiling, metadata),
            };
            let version = resolver.resolve()?;
            Ok(resolution(resolver.subject(), resolver.url(), &version))
        }
        command => declare(command, config, metadata),
    }
}

fn declare(
    command: Command,
    config: ResolverConfig,
    metadata: Arc<MavenMetadataClient>,
) -> anyhow::Result<serde_json::Value> {
    let graph = Arc::new(RecordingGraph::new());
    let dependencies =
        PlatformDependencies::new(config, graph.clone(), graph.clone()).with_metadata_source(metadata);

    let deferred: DeferredCoordinate = match command {
        Command::Platform { code, version } => {
            let platform_type = PlatformType::from_code(&code)?;
            dependencies.create(platform_type, &version, None)
        }
        Command::Runtime {
            version,
            variant,
            arch,
            explicit,
        } => {
            if explicit {
                dependencies.jetbrains_runtime(&version, None)
            } else {
                dependencies.jetbrains_runtime_from(
                    &version,
                    variant.as_deref(),
                    arch.as_deref(),
                    None,
                )
            }
        }
        Command::Local { path } => dependencies.local(&path, None),
        Command::Plugin {
            id,
            version,
            channel,
        } => dependencies.plugin(&id, &version, channel.as_deref(), None),
        Command::Verifier { version } => dependencies.plugin_verifier(version.as_deref(), None),
        Command::Latest { .. } | Command::Closest { .. } => {
            anyhow::bail!("resolution commands do not declare dependencies")
        }
    };

    let coordinate = deferred.into_result()?;
    Ok(json!({
        "coordinate": coordinate,
        "notation": coordinate.to_string(),
        "declarations": graph.declarations(),
        "repositories": graph.repositories(),
    }))
}

fn resolution(subject: &str, url: &str, version: &Version) -> serde_json::Value {
    json!({
        "subject": subject,
        "url": url,
        "version": version.to_string(),
    })
}
