//! Blocking HTTP fetching.
//!
//! A thin wrapper around a configured `reqwest` blocking client, used for
//! the release-metadata query and the package/icon downloads. Redirects
//! are followed; nothing is retried.

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::error::{InstallError, Result};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("skylark-installer/", env!("CARGO_PKG_VERSION"));

/// Fetches release metadata and files over HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher with the default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a URL and deserialize the JSON response body.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(InstallError::HttpStatus {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.json()?)
    }

    /// Download a URL into `dest`, streaming the body to disk.
    pub fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let mut response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(InstallError::HttpStatus {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let mut file = File::create(dest)?;
        io::copy(&mut response, &mut file)?;
        Ok(())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
