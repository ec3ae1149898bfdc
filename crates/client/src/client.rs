use asides_core::{Aside, CLIENT_TIMEOUT_SECS};

use crate::error::ClientError;

/// Client for the asides HTTP API.
#[derive(Debug, Clone)]
pub struct AsideClient {
    client: reqwest::Client,
    base_url: String,
}

impl AsideClient {
    /// Client for `http://<host>:<port>`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(host: &str, port: u16) -> Result<Self, ClientError> {
        Self::with_base_url(&format!("http://{host}:{port}"))
    }

    /// Client for an explicit base URL such as `http://127.0.0.1:4567`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(CLIENT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Creates an aside and returns the server's confirmation text.
    pub async fn save(&self, text: &str) -> Result<String, ClientError> {
        let response = self.client.post(self.url("/asides")).form(&[("body", text)]).send().await?;
        Ok(checked(response).await?.text().await?)
    }

    /// Up to ten most recently updated asides.
    pub async fn list(&self) -> Result<Vec<Aside>, ClientError> {
        let response = self.client.get(self.url("/asides")).send().await?;
        Ok(checked(response).await?.json().await?)
    }

    pub async fn fetch(&self, id: i64) -> Result<Aside, ClientError> {
        let response = self.client.get(self.url(&format!("/asides/{id}.json"))).send().await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Replaces the body of an aside and returns the server's confirmation text.
    pub async fn update(&self, id: i64, text: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/asides/{id}")))
            .form(&[("body", text)])
            .send()
            .await?;
        Ok(checked(response).await?.text().await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self.client.delete(self.url(&format!("/asides/{id}"))).send().await?;
        checked(response).await?;
        Ok(())
    }
}

/// Turns non-success statuses into [`ClientError::HttpStatus`] with the body preserved.
async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
    tracing::debug!(code = status.as_u16(), "asides API returned an error status");
    Err(ClientError::HttpStatus { code: status.as_u16(), body })
}

/// One line per aside: `ID: <id> - <body>`.
#[must_use]
pub fn format_aside(aside: &Aside) -> String {
    format!("ID: {} - {}", aside.id, aside.body)
}
