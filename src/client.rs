use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use url::Url;

use crate::formats::RawResponse;
use crate::resolve::{ResolvedFields, resolve};

const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub space_id: String,
    pub access_token: String,
    pub preview_token: Option<String>,
    pub base_url: String,
    pub preview_url: String,
    pub preview: bool,
}

impl ClientConfig {
    pub fn from_env(preview: bool) -> anyhow::Result<Self> {
        let space_id = std::env::var("FOLIO_SPACE_ID").context("FOLIO_SPACE_ID is required")?;
        let access_token =
            std::env::var("FOLIO_ACCESS_TOKEN").context("FOLIO_ACCESS_TOKEN is required")?;
        let preview_token = std::env::var("FOLIO_PREVIEW_TOKEN").ok();
        let base_url = std::env::var("FOLIO_API_URL")
            .unwrap_or_else(|_| "https://cdn.contentful.com".to_owned());
        let preview_url = std::env::var("FOLIO_PREVIEW_API_URL")
            .unwrap_or_else(|_| "https://preview.contentful.com".to_owned());

        if preview && preview_token.is_none() {
            anyhow::bail!("FOLIO_PREVIEW_TOKEN is required for preview mode");
        }

        Ok(Self {
            space_id,
            access_token,
            preview_token,
            base_url,
            preview_url,
            preview,
        })
    }

    fn api_url(&self) -> &str {
        if self.preview {
            self.preview_url.as_str()
        } else {
            self.base_url.as_str()
        }
    }

    fn token(&self) -> &str {
        match (self.preview, self.preview_token.as_deref()) {
            (true, Some(token)) => token,
            _ => self.access_token.as_str(),
        }
    }
}

/// Contentful delivery-API client. Responses are resolved immediately and the
/// resolved records are kept in a short-TTL in-memory cache keyed by content
/// type and query options; entries within one TTL window see the same data.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    cache: Mutex<HashMap<String, CacheSlot>>,
}

struct CacheSlot {
    fetched_at: Instant,
    records: Vec<ResolvedFields>,
}

impl Client {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("build http client")?;

        Ok(Self {
            http,
            config,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Fetch and resolve all entries of a content type. `Ok(None)` means the
    /// collection is unavailable (transport failure, non-success status, or a
    /// response that is not the expected shape); callers substitute an empty
    /// or absent collection rather than aborting.
    pub async fn entries(
        &self,
        content_type: &str,
        options: &[(String, String)],
    ) -> anyhow::Result<Option<Vec<ResolvedFields>>> {
        let cache_key = cache_key(content_type, options);
        if let Some(records) = self.cached(&cache_key) {
            tracing::debug!(content_type, "cache hit");
            return Ok(Some(records));
        }

        let url = self
            .entries_url(content_type, options)
            .context("build entries url")?;

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(content_type, error = %err, "content fetch failed");
                return Ok(None);
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(content_type, status = status.as_u16(), "content api error");
            return Ok(None);
        }

        let raw: RawResponse = match response.json().await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(content_type, error = %err, "content response is not valid json");
                return Ok(None);
            }
        };

        let records = resolve(&raw);
        self.store(cache_key, &records);
        Ok(Some(records))
    }

    /// Fetch a singleton entry (site settings and the like): first record of
    /// a `limit=1` listing, `None` when the collection is unavailable or
    /// empty.
    pub async fn single_entry(
        &self,
        content_type: &str,
    ) -> anyhow::Result<Option<ResolvedFields>> {
        let options = vec![("limit".to_owned(), "1".to_owned())];
        let records = self.entries(content_type, &options).await?;
        Ok(records.and_then(|records| records.into_iter().next()))
    }

    fn entries_url(&self, content_type: &str, options: &[(String, String)]) -> anyhow::Result<Url> {
        let mut url = Url::parse(self.config.api_url()).context("parse api base url")?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("api base url cannot be a base"))?
            .pop_if_empty()
            .extend([
                "spaces",
                self.config.space_id.as_str(),
                "environments",
                "master",
                "entries",
            ]);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_token", self.config.token());
            pairs.append_pair("content_type", content_type);
            // Two levels of linked assets/entries in `includes`.
            pairs.append_pair("include", "2");
            for (key, value) in options {
                pairs.append_pair(key, value);
            }
            if !options.iter().any(|(key, _)| key == "order") {
                pairs.append_pair("order", "fields.order");
            }
        }

        Ok(url)
    }

    fn cached(&self, key: &str) -> Option<Vec<ResolvedFields>> {
        let mut cache = self.cache.lock().ok()?;
        let slot = cache.get(key)?;
        if slot.fetched_at.elapsed() > CACHE_TTL {
            cache.remove(key);
            return None;
        }
        Some(slot.records.clone())
    }

    fn store(&self, key: String, records: &[ResolvedFields]) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(
                key,
                CacheSlot {
                    fetched_at: Instant::now(),
                    records: records.to_vec(),
                },
            );
        }
    }
}

fn cache_key(content_type: &str, options: &[(String, String)]) -> String {
    let mut key = content_type.to_owned();
    for (name, value) in options {
        key.push_str(&format!("&{name}={value}"));
    }
    key
}
