//! HTTP client for the EPA ECHO REST services.

use url::Url;

use crate::{
    query::{FacilitiesQuery, MapQuery, QidQuery, Query},
    types::{FacilitiesResponse, MapResponse, QidResponse},
    Error,
};

/// HTTP client for the ECHO API.
///
/// Each request builds a fresh `reqwest::Client` with the query's timeout
/// and issues a single GET. Nothing is retried.
pub struct Client {
    /// Base URL for the API. Defaults to `http://ofmpub.epa.gov`.
    base_api_url: String,
    /// Logs the request URL and raw response body when set.
    debug: bool,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production ECHO API.
    pub fn new() -> Self {
        Self {
            base_api_url: "http://ofmpub.epa.gov".to_string(),
            debug: false,
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            debug: false,
        }
    }

    /// Enables logging of every request URL and response body.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The URL a query would be sent to.
    pub fn get_url<Q: Query>(&self, query: &Q) -> Result<Url, Error> {
        query.build_endpoint(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            e
        })
    }

    /// Sends `query` and decodes the endpoint's response.
    pub async fn fetch<Q: Query>(&self, query: &Q) -> Result<Q::Response, Error> {
        let url = self.get_url(query)?;
        if self.debug {
            tracing::info!("API endpoint URL: {}", url);
        } else {
            tracing::debug!("GET {}", url);
        }

        let client = reqwest::Client::builder()
            .timeout(query.config().timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;

        let resp = client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Network(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if self.debug {
            tracing::info!("Response body: {}", String::from_utf8_lossy(&body));
        }

        if status != reqwest::StatusCode::OK {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        query.unmarshal_response(&body)
    }

    /// Runs a facilities search.
    pub async fn get_facilities(
        &self,
        query: &FacilitiesQuery,
    ) -> Result<FacilitiesResponse, Error> {
        self.fetch(query).await
    }

    /// Fetches map markers for a query ID.
    pub async fn get_map(&self, query: &MapQuery) -> Result<MapResponse, Error> {
        self.fetch(query).await
    }

    /// Fetches one page of facilities for a query ID.
    pub async fn get_qid(&self, query: &QidQuery) -> Result<QidResponse, Error> {
        self.fetch(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((end, _)) => format!("{}...[truncated]", &body[..end]),
    }
}
