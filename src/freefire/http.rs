//! HTTP lookup client with ordered endpoint fallback.

use std::time::Duration;

use colored::Colorize;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client, StatusCode,
};
use serde_json::Value;

use crate::{cli::types::PlayerId, freefire::record::PlayerRecord, Result};


/// Endpoint URL templates, tried in order. `{id}` is replaced with the
/// player ID.
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "https://api.garena.co.id/freefire/info/{id}",
    "https://free-fire-api.vercel.app/info/{id}",
    "https://ff-api.glitch.me/info/{id}",
    "https://api.freefire.id/player/{id}",
];

/// Per-attempt request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Queries the endpoint list in priority order until one answers.
pub struct LookupClient {
    client: Client,
    endpoints: Vec<String>,
}

impl LookupClient {
    /// Client over the standard endpoint list.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(DEFAULT_ENDPOINTS.iter().map(|e| e.to_string()).collect())
    }

    /// Client over a caller-supplied endpoint list. Order is significant:
    /// earlier endpoints win.
    pub fn with_endpoints(endpoints: Vec<String>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers())
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, endpoints })
    }

    /// Try each endpoint in order; the first exact-200 response with a
    /// decodable JSON body is normalized and returned, and no further
    /// endpoints are contacted.
    ///
    /// Returns `None` when every endpoint fails. That is distinct from a
    /// record with `status == false`, which means an endpoint answered but
    /// its payload carried no recognizable name field. Endpoint failures are
    /// logged to the console and never escalate to an error.
    pub async fn lookup(&self, player_id: &PlayerId) -> Option<PlayerRecord> {
        for endpoint in &self.endpoints {
            let url = endpoint.replace("{id}", player_id.as_str());
            println!("{} {}", "[*] Checking:".cyan(), url);

            match self.client.get(&url).send().await {
                Ok(response) if response.status() == StatusCode::OK => {
                    match response.json::<Value>().await {
                        Ok(payload) => {
                            return Some(PlayerRecord::from_payload(payload, player_id))
                        }
                        // Malformed body counts as a transport failure.
                        Err(e) => println!("{} {}", "[!] Error:".yellow(), e),
                    }
                }
                Ok(response) => {
                    println!("{} {}", "[!] API failed:".red(), response.status());
                }
                Err(e) => {
                    println!("{} {}", "[!] Error:".yellow(), e);
                }
            }
        }

        None
    }
}

/// Fixed headers sent on every request. The browser-like user agent keeps
/// the stricter endpoints from rejecting the request outright.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static("Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36"),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
