mod helper;

use std::sync::Arc;

use mockito::Server;

use helper::maven_metadata;
use platform_resolver::config::{Locations, ResolverConfig};
use platform_resolver::version::Version;
use platform_resolver::version::error::{MetadataError, ResolveError};
use platform_resolver::version::registries::{GitHubReleaseProbe, MavenMetadataClient};
use platform_resolver::version::resolver::Resolver;
use platform_resolver::version::resolvers::{ClosestVersionResolver, LatestVersionResolver};

const VERIFIER_PATH: &str = "/org/jetbrains/intellij/plugins/verifier-cli/maven-metadata.xml";
const ANT_TASKS_PATH: &str =
    "/releases/com/jetbrains/intellij/java/java-compiler-ant-tasks/maven-metadata.xml";

fn config(server: &Server) -> ResolverConfig {
    ResolverConfig {
        cache_dir: None,
        locations: Locations {
            intellij_repository: server.url(),
            plugin_verifier_repository: server.url(),
            jetbrains_runtime_repository: server.url(),
            github_repository: server.url(),
        },
    }
}

#[test]
fn plugin_verifier_latest_comes_from_latest_pointer() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", VERIFIER_PATH)
        .with_status(200)
        .with_body(maven_metadata(Some("1.289"), &["1.255", "1.289", "1.307"]))
        .create();

    let resolver =
        LatestVersionResolver::plugin_verifier(&config(&server), Arc::new(MavenMetadataClient::new()));
    let version = resolver.resolve().unwrap();

    mock.assert();
    assert_eq!(version, Version::parse("1.289").unwrap());
}

#[test]
fn plugin_verifier_latest_without_pointer_fails() {
    let mut server = Server::new();
    server
        .mock("GET", VERIFIER_PATH)
        .with_status(200)
        .with_body(maven_metadata(None, &["1.255", "1.307"]))
        .create();

    let resolver =
        LatestVersionResolver::plugin_verifier(&config(&server), Arc::new(MavenMetadataClient::new()));
    let result = resolver.resolve();

    match result {
        Err(ResolveError::NoLatestPointer { subject, url }) => {
            assert_eq!(subject, "IntelliJ Plugin Verifier");
            assert!(url.ends_with(VERIFIER_PATH));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn plugin_verifier_latest_with_empty_pointer_fails() {
    let mut server = Server::new();
    server
        .mock("GET", VERIFIER_PATH)
        .with_status(200)
        .with_body(
            "<metadata><versioning><latest/><versions><version>1.0</version></versions></versioning></metadata>",
        )
        .create();

    let resolver =
        LatestVersionResolver::plugin_verifier(&config(&server), Arc::new(MavenMetadataClient::new()));

    assert!(matches!(
        resolver.resolve(),
        Err(ResolveError::NoLatestPointer { .. })
    ));
}

#[test]
fn plugin_verifier_latest_reports_unavailable_repository() {
    let mut server = Server::new();
    server.mock("GET", VERIFIER_PATH).with_status(404).create();

    let resolver =
        LatestVersionResolver::plugin_verifier(&config(&server), Arc::new(MavenMetadataClient::new()));
    let result = resolver.resolve();

    assert!(matches!(
        result,
        Err(ResolveError::Metadata {
            source: MetadataError::Unavailable { .. },
            ..
        })
    ));
}

#[test]
fn closest_picks_highest_version_not_above_ceiling() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", ANT_TASKS_PATH)
        .with_status(200)
        .with_body(maven_metadata(
            Some("233.11799.241"),
            &["223.8836.41", "231.9011.34", "231.9423.9", "233.11799.241"],
        ))
        .create();

    let resolver = ClosestVersionResolver::java_compiler_ant_tasks(
        &config(&server),
        Version::parse("232.10227.8").unwrap(),
        Arc::new(MavenMetadataClient::new()),
    );
    let version = resolver.resolve().unwrap();

    mock.assert();
    assert_eq!(version.to_string(), "231.9423.9");
}

#[test]
fn closest_includes_exact_ceiling_and_skips_unparsable_entries() {
    let mut server = Server::new();
    server
        .mock("GET", ANT_TASKS_PATH)
        .with_status(200)
        .with_body(maven_metadata(None, &["1.0", "nightly", "1.2", "1.5", "2.0"]))
        .create();

    let resolver = ClosestVersionResolver::java_compiler_ant_tasks(
        &config(&server),
        Version::parse("2.0").unwrap(),
        Arc::new(MavenMetadataClient::new()),
    );

    assert_eq!(resolver.resolve().unwrap().to_string(), "2.0");
}

#[test]
fn closest_without_compatible_versions_fails() {
    let mut server = Server::new();
    server
        .mock("GET", ANT_TASKS_PATH)
        .with_status(200)
        .with_body(maven_metadata(None, &["1.0", "1.2", "1.5", "2.0"]))
        .create();

    let resolver = ClosestVersionResolver::java_compiler_ant_tasks(
        &config(&server),
        Version::parse("0.5").unwrap(),
        Arc::new(MavenMetadataClient::new()),
    );

    match resolver.resolve() {
        Err(ResolveError::NoCompatibleVersion { ceiling, .. }) => {
            assert_eq!(ceiling.to_string(), "0.5");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn build_plugin_latest_follows_release_redirect() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/releases/latest")
        .with_status(302)
        .with_header(
            "location",
            "https://github.com/jetbrains/gradle-intellij-plugin/releases/tag/v1.17.2",
        )
        .create();

    let resolver =
        LatestVersionResolver::build_plugin(&config(&server), Arc::new(GitHubReleaseProbe::new()));
    let version = resolver.resolve().unwrap();

    mock.assert();
    assert_eq!(version.to_string(), "1.17.2");
}

#[test]
fn build_plugin_latest_without_redirect_fails() {
    let mut server = Server::new();
    server
        .mock("GET", "/releases/latest")
        .with_status(200)
        .with_body("<html></html>")
        .create();

    let resolver =
        LatestVersionResolver::build_plugin(&config(&server), Arc::new(GitHubReleaseProbe::new()));

    assert!(matches!(
        resolver.resolve(),
        Err(ResolveError::RedirectResolutionFailed { .. })
    ));
}
