//! Remote release metadata.
//!
//! The latest-release endpoint answers with an object carrying a
//! `tag_name`; older tag-listing endpoints answer with an array whose
//! first entry carries a `name`. Both shapes are accepted.

use serde::Deserialize;
use tracing::info;

use crate::error::{InstallError, Result};
use crate::fetch::HttpFetcher;
use crate::version::Version;

/// The two response shapes served by release-metadata endpoints.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReleaseMetadata {
    /// A "latest release" object.
    Latest(LatestRelease),
    /// A tags listing, newest first.
    Tags(Vec<Tag>),
}

/// A "latest release" object.
#[derive(Debug, Deserialize)]
pub struct LatestRelease {
    /// Git tag the release was cut from.
    pub tag_name: String,
}

/// One entry of a tags listing.
#[derive(Debug, Deserialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,
}

impl ReleaseMetadata {
    /// The version tag carried by the response, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            ReleaseMetadata::Latest(release) => Some(release.tag_name.as_str()),
            ReleaseMetadata::Tags(tags) => tags.first().map(|tag| tag.name.as_str()),
        }
    }
}

/// Fetch the latest available version from the release-metadata endpoint.
pub fn latest_version(fetcher: &HttpFetcher, url: &str) -> Result<Version> {
    info!("Checking latest version");

    let metadata: ReleaseMetadata = fetcher.get_json(url)?;
    let version = metadata
        .tag()
        .and_then(Version::parse)
        .ok_or_else(|| InstallError::MissingVersionTag {
            url: url.to_string(),
        })?;

    info!("Latest version is {}", version);
    Ok(version)
}
