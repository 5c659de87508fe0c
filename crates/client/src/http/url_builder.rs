//! URL building utilities for Cloud Databases API endpoints

use url::Url;

/// Path-segment URL builder rooted at the resolved base endpoint.
/// Eliminates string concatenation and the double-slash bugs it invites.
#[derive(Debug)]
pub struct UrlBuilder<'a> {
    endpoint: &'a Url,
    parts: Vec<String>,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(endpoint: &'a Url) -> Self {
        Self {
            endpoint,
            parts: Vec::new(),
        }
    }

    /// Add a fixed API path segment (`instances`, `databases`, ...).
    pub fn endpoint(mut self, segment: &str) -> Self {
        self.parts.push(segment.to_string());
        self
    }

    /// Add a caller-supplied identifier segment, percent-encoded.
    pub fn id(mut self, segment: &str) -> Self {
        self.parts.push(urlencoding::encode(segment).into_owned());
        self
    }

    /// Build the final URL string.
    pub fn build(self) -> String {
        let base = self.endpoint.as_str().trim_end_matches('/');
        format!("{}/{}", base, self.parts.join("/"))
    }
}
