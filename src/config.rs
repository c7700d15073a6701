//! Form configuration.

use crate::submission::ACCEPT_FILTER;

/// Endpoint the form posts to unless overridden.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/bfhl";

/// Where submissions go and which files the picker suggests.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Full URL of the `/bfhl` endpoint.
    pub endpoint: String,
    /// Advisory accept filter for the file picker.
    pub accept: &'static str,
}

impl FormConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            accept: ACCEPT_FILTER,
        }
    }
}
