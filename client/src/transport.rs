//! Request transport used by the form gateway.

use crate::config::Config;
use crate::error::{TransportError, GENERIC_FAILURE};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Sends one request and returns the decoded JSON body.
///
/// A payload means POST with a JSON body; no payload means GET, with any
/// parameters already in `url`. Every non-success status is an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, payload: Option<&Value>) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, url: &str, payload: Option<&Value>) -> Result<Value, TransportError> {
        (**self).send(url, payload).await
    }
}

/// Body of a failed response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// [`Transport`] over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transport honoring the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, payload: Option<&Value>) -> Result<Value, TransportError> {
        let request = match payload {
            // `json` also sets `Content-Type: application/json`
            Some(body) => self.client.post(url).json(body),
            None => self.client.get(url),
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());

            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
