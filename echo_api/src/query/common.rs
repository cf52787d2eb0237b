//! Shared query infrastructure: the [`Query`] trait, [`QueryConfig`], and [`ParamDictionary`].

use std::collections::BTreeMap;
use std::time::Duration;

use url::Url;

use crate::{response::EchoResponse, Error};

/// Request timeout used unless a query overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Path segment every endpoint lives under.
const BASE_PATH: &str = "echo";

/// Fixed mapping from the human-readable parameter names callers use to the
/// terse keys the API expects on the wire.
pub struct ParamDictionary {
    entries: &'static [(&'static str, &'static str)],
}

impl ParamDictionary {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the wire key for a human-readable name, if the name is known.
    pub fn resolve(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, wire)| *wire)
    }

    /// Human-readable names accepted by this dictionary, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// All `(name, wire key)` pairs.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-request state: the endpoint, the translated parameters, and the timeout.
///
/// Keys are always wire keys. Translation happens when a parameter is set,
/// so the builder never sees a human-readable name.
#[derive(Clone, Debug)]
pub struct QueryConfig {
    endpoint_uri: &'static str,
    params: BTreeMap<String, String>,
    timeout: Duration,
}

impl QueryConfig {
    pub(crate) fn new(endpoint_uri: &'static str) -> Self {
        Self {
            endpoint_uri,
            params: BTreeMap::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Endpoint-specific path suffix (e.g. `echo_rest_services.get_qid`).
    pub fn endpoint_uri(&self) -> &str {
        self.endpoint_uri
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Value stored under a wire key.
    pub fn get(&self, wire_key: &str) -> Option<&str> {
        self.params.get(wire_key).map(String::as_str)
    }

    /// Stored `(wire key, value)` pairs, sorted by key.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Translates `key` through `dictionary` and stores `value` under the
    /// resulting wire key, replacing any earlier value. Unknown keys leave the
    /// configuration untouched.
    pub(crate) fn add_param(
        &mut self,
        key: &str,
        value: &str,
        dictionary: &ParamDictionary,
    ) -> Result<(), Error> {
        let wire_key = dictionary.resolve(key).ok_or_else(|| Error::InvalidParameter {
            key: key.to_string(),
        })?;

        // If this parameter is already set, remove it.
        self.params.remove(wire_key);
        self.params.insert(wire_key.to_string(), value.to_string());
        Ok(())
    }

    /// Sets a parameter whose name is known to be in `dictionary`.
    pub(crate) fn preset(&mut self, key: &str, value: &str, dictionary: &ParamDictionary) {
        if let Err(e) = self.add_param(key, value, dictionary) {
            tracing::error!("Preset parameter rejected: {}", e);
        }
    }

    /// Composes `<base>/echo/<endpoint-uri>?<query>`.
    pub fn build_endpoint(&self, base_url: &str) -> Result<Url, Error> {
        let mut url = Url::parse(base_url)?;
        let path = format!(
            "{}/{}/{}",
            url.path().trim_end_matches('/'),
            BASE_PATH,
            self.endpoint_uri
        );
        url.set_path(&path);
        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// Capability shared by every endpoint query: translate and store
/// parameters, and decode the endpoint's response body.
pub trait Query {
    /// Typed response produced by this endpoint.
    type Response: EchoResponse;

    /// The endpoint's parameter dictionary.
    fn dictionary() -> &'static ParamDictionary
    where
        Self: Sized;

    fn config(&self) -> &QueryConfig;

    fn config_mut(&mut self) -> &mut QueryConfig;

    /// Sets a parameter by its human-readable name.
    fn set_param(&mut self, key: &str, value: &str) -> Result<(), Error>
    where
        Self: Sized,
    {
        self.config_mut().add_param(key, value, Self::dictionary())
    }

    /// Builder form of [`Query::set_param`].
    fn with_param(mut self, key: &str, value: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        self.set_param(key, value)?;
        Ok(self)
    }

    /// Overrides the request timeout.
    fn with_timeout(mut self, timeout: Duration) -> Self
    where
        Self: Sized,
    {
        self.config_mut().set_timeout(timeout);
        self
    }

    /// Builds the full request URL against `base_url`.
    fn build_endpoint(&self, base_url: &str) -> Result<Url, Error> {
        self.config().build_endpoint(base_url)
    }

    /// Decodes a raw response body for this endpoint.
    fn unmarshal_response(&self, raw: &[u8]) -> Result<Self::Response, Error> {
        crate::response::unmarshal(raw)
    }
}
