use async_trait::async_trait;
use cohousy_contact::ContactPayload;
use thiserror::Error;

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
}

/// Delivers one payload to the submission handler.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

/// POSTs the payload as JSON to `{base_url}/api/contact`. No retry.
#[derive(Clone, Debug)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl AsRef<str>) -> Self {
        Self {
            client,
            endpoint: format!("{}{CONTACT_PATH}", base_url.as_ref().trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            HttpSubmitter::new("https://www.cohousy.com/").endpoint(),
            "https://www.cohousy.com/api/contact"
        );
        assert_eq!(
            HttpSubmitter::new("http://127.0.0.1:3000").endpoint(),
            "http://127.0.0.1:3000/api/contact"
        );
    }
}
