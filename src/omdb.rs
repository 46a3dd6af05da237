use crate::config::Config;
use crate::models::{MovieDetail, MovieSummary};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// OMDb's marker for a search that matched nothing.
const NOT_FOUND: &str = "Movie not found!";

#[async_trait]
pub trait OmdbApi: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<MovieSummary>>;
    async fn lookup(&self, imdb_id: &str) -> Result<MovieDetail>;
}

#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent = format!("filmfetcher/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(config.request_timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build OMDb HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, param: &str, value: &str) -> String {
        let sep = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{sep}apikey={}&{param}={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(value)
        )
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .context("request failed")?;
        let status = res.status();
        let text = res.text().await.context("reading body failed")?;
        if !status.is_success() {
            return Err(anyhow!("OMDb returned {}: {}", status, text));
        }
        serde_json::from_str(&text).context("JSON parse failed")
    }
}

#[async_trait]
impl OmdbApi for OmdbClient {
    async fn search(&self, term: &str) -> Result<Vec<MovieSummary>> {
        debug!(term = %term, "OMDb search");
        let body = self.get_json(&self.url("s", term)).await?;
        parse_search_response(body)
    }

    async fn lookup(&self, imdb_id: &str) -> Result<MovieDetail> {
        debug!(imdb_id = %imdb_id, "OMDb lookup");
        let body = self.get_json(&self.url("i", imdb_id)).await?;
        parse_lookup_response(body)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Search", default)]
    search: Option<Vec<MovieSummary>>,
}

/// Maps a search body to summaries. Any `Response: "False"` body ("Movie not
/// found!", "Too many results.", ...) is an empty result.
pub fn parse_search_response(body: Value) -> Result<Vec<MovieSummary>> {
    if let Some(message) = provider_error(&body) {
        if message == NOT_FOUND {
            debug!("OMDb search matched nothing");
        } else {
            warn!(error = %message, "OMDb search returned no list");
        }
        return Ok(Vec::new());
    }
    let data: SearchResponse =
        serde_json::from_value(body).context("unexpected search response shape")?;
    Ok(data.search.unwrap_or_default())
}

pub fn parse_lookup_response(body: Value) -> Result<MovieDetail> {
    if let Some(message) = provider_error(&body) {
        return Err(anyhow!("OMDb lookup error: {}", message));
    }
    if !body.is_object() {
        return Err(anyhow!("unexpected lookup response shape"));
    }
    serde_json::from_value(body).context("unexpected lookup response shape")
}

fn provider_error(body: &Value) -> Option<String> {
    let failed = body
        .get("Response")
        .and_then(|v| v.as_str())
        .map(|r| r.eq_ignore_ascii_case("false"))
        .unwrap_or(false);
    if !failed {
        return None;
    }
    Some(
        body.get("Error")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error")
            .to_string(),
    )
}
