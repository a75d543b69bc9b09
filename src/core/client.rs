//! HTTP transport toward the Elasticsearch REST API
//!
//! Actions depend on the [`Transport`] trait rather than a concrete HTTP
//! client, so tests can substitute a recording fake.

use crate::{
    config::BasicAuth,
    error::{Result, SnapshotterError},
};
use tracing::{debug, info};

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl Response {
    /// Classify the response: any status outside [200, 300) is a failure
    /// carrying the status, URL, and response body.
    pub fn ensure_success(self, url: &str) -> Result<Self> {
        if (200..300).contains(&self.status) {
            Ok(self)
        } else {
            Err(SnapshotterError::unexpected_status(
                self.status,
                url,
                self.body,
            ))
        }
    }
}

/// Minimal capability the actions need: send one PUT, get status and body
pub trait Transport {
    /// Issue a PUT request with an optional JSON body and optional basic auth
    fn put(&self, url: &str, body: Option<&str>, auth: Option<&BasicAuth>) -> Result<Response>;
}

/// Blocking HTTP client toward Elasticsearch
#[derive(Debug)]
pub struct EsClient {
    client: reqwest::blocking::Client,
}

impl EsClient {
    /// Create a new client.
    ///
    /// Certificate verification is disabled: cluster-internal endpoints
    /// commonly present self-signed certificates. The default request
    /// timeout is removed because a snapshot PUT with
    /// `wait_for_completion=true` holds the response open until the
    /// cluster finishes.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(None)
            .build()
            .map_err(|e| SnapshotterError::Config {
                message: "Failed to build HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client })
    }
}

impl Transport for EsClient {
    fn put(&self, url: &str, body: Option<&str>, auth: Option<&BasicAuth>) -> Result<Response> {
        debug!("PUT {}", url);

        let mut request = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(auth) = auth {
            info!("Using basic auth credentials for {}", auth.username);
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request
            .send()
            .map_err(|e| SnapshotterError::transport(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| SnapshotterError::transport(url, e))?;

        Ok(Response { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2xx_classified_as_success() {
        for status in [200, 201, 299] {
            let response = Response {
                status,
                body: String::new(),
            };
            assert!(response.ensure_success("https://es.local:9200").is_ok());
        }
    }

    #[test]
    fn test_non_2xx_classified_as_failure() {
        for status in [403, 404, 500] {
            let response = Response {
                status,
                body: "repository missing".to_string(),
            };
            let err = response
                .ensure_success("https://es.local:9200/_snapshot/backups")
                .unwrap_err();
            let message = err.to_string();
            assert!(message.contains(&status.to_string()));
            assert!(message.contains("https://es.local:9200/_snapshot/backups"));
            assert!(message.contains("repository missing"));
        }
    }
}
