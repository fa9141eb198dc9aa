use crate::config::HttpOptions;
use crate::shaper::{ResolvedRequest, Verb};
use crate::{Error, Result};
use tracing::info;
use url::Url;

/// Thin reqwest wrapper executing wire-ready request descriptors against one
/// service root. Retry and backoff policy belong to the caller.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: Url, options: &HttpOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .pool_max_idle_per_host(options.pool_max_idle_per_host)
            .pool_idle_timeout(Some(options.pool_idle_timeout))
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Dispatch a resolved request and decode the JSON response.
    ///
    /// An empty response body decodes to `Value::Null`; non-2xx statuses
    /// surface as [`Error::Remote`] with the body text attached.
    pub async fn execute(&self, verb: Verb, request: &ResolvedRequest) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, request.url);

        let mut req = match verb {
            Verb::Get => self.client.get(&url),
            Verb::Post => self.client.post(&url),
            Verb::Put => self.client.put(&url),
            Verb::Delete => self.client.delete(&url),
        };

        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            req = req.query(&pairs);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        info!(verb = %verb, url = %url, "dispatching request");

        let response = req
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
