//! HTTP client for the AUR RPC interface (v5)
//!
//! Every call is a single blocking request with no retry. A transport error,
//! an undecodable body or an error envelope fails the whole call.

use serde::Deserialize;
use tracing::debug;

use super::{Registry, RemotePackage};
use crate::error::{Result, registry};
use crate::ui;

/// Response envelope shared by every RPC endpoint
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(rename = "resultcount", default)]
    result_count: usize,
    #[serde(default)]
    results: Vec<RemotePackage>,
}

/// Blocking RPC client
pub struct AurClient {
    agent: ureq::Agent,
    base_url: String,
}

impl AurClient {
    /// Create a client for an RPC base URL such as `https://aur.archlinux.org/rpc/v5`
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("aursync/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn call(&self, url: &str, request: ureq::Request) -> Result<Vec<RemotePackage>> {
        debug!(url, "querying AUR");
        let body = match request.call() {
            Ok(response) => response
                .into_string()
                .map_err(|e| registry::request_failed(url, e))?,
            Err(ureq::Error::Status(code, response)) => {
                // The RPC interface reports bad queries with an error envelope
                let body = response.into_string().unwrap_or_default();
                return match decode(url, &body) {
                    Err(err @ crate::error::AurError::RegistryApi { .. }) => Err(err),
                    _ => Err(registry::request_failed(url, format!("HTTP {code}"))),
                };
            }
            Err(err) => return Err(registry::request_failed(url, err)),
        };
        decode(url, &body)
    }
}

impl Registry for AurClient {
    fn info(&self, names: &[String]) -> Result<Vec<RemotePackage>> {
        ui::action("Fetching packages...");
        let url = format!("{}/info", self.base_url);
        let request = names
            .iter()
            .fold(self.agent.get(&url), |request, name| {
                request.query("arg[]", name)
            });
        self.call(&url, request)
    }

    fn search(&self, term: &str) -> Result<Vec<RemotePackage>> {
        let url = format!("{}/search/{}", self.base_url, encode_path_segment(term));
        let request = self.agent.get(&url);
        self.call(&url, request)
    }
}

/// Decode an RPC response body into its records
fn decode(url: &str, body: &str) -> Result<Vec<RemotePackage>> {
    let response: RpcResponse =
        serde_json::from_str(body).map_err(|e| registry::decode_failed(url, e))?;

    if response.kind == "error" {
        return Err(registry::api_error(
            response
                .error
                .unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    debug!(
        url,
        count = response.result_count,
        received = response.results.len(),
        "AUR response"
    );
    Ok(response.results)
}

/// Percent-encode everything outside the RFC 3986 unreserved set
fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
