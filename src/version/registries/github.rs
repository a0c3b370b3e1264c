//! GitHub "latest release" redirect probe

use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use tracing::{debug, warn};

use crate::version::registry::ReleaseProbe;

/// Reads the `Location` header of `<repository>/releases/latest`.
///
/// GitHub answers that endpoint with a redirect to `.../releases/tag/<tag>`, so
/// the newest tag is known without calling the REST API.
pub struct GitHubReleaseProbe {
    client: Client,
}

impl GitHubReleaseProbe {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("platform-resolver/", env!("CARGO_PKG_VERSION")))
                .redirect(Policy::none())
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for GitHubReleaseProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseProbe for GitHubReleaseProbe {
    fn latest_release_location(&self, repository_root: &str) -> Result<String, String> {
        let url = format!("{}/releases/latest", repository_root.trim_end_matches('/'));
        debug!("Probing latest release redirect at {}", url);

        let response = self.client.get(&url).send().map_err(|e| e.to_string())?;

        let location = response.headers().get(LOCATION).ok_or_else(|| {
            warn!(
                "No Location header in response from {} (status {})",
                url,
                response.status()
            );
            format!("no Location header (status {})", response.status())
        })?;

        location
            .to_str()
            .map(str::to_string)
            .map_err(|e| format!("unreadable Location header: {}", e))
    }
}
