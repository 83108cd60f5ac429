//! Generic request dispatch for the QnA Maker service
//!
//! Every operation funnels through [`QnaMakerClient::send`] or
//! [`QnaMakerClient::send_text`]: serialize the payload when one is present,
//! attach the subscription key, issue a single HTTP request, HTML-entity
//! decode the response body, then either decode the success payload or
//! translate the failure into a [`QnaMakerError`].

use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use qnamaker_interfaces::kb::{ErrorEnvelope, QnaMakerError, QnaResult};

use crate::client::QnaMakerClient;
use crate::config::SUBSCRIPTION_KEY_HEADER;

impl QnaMakerClient {
    /// Sends a request and decodes the success body into `T`.
    pub(crate) async fn send<T, P>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
    ) -> QnaResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let body = self.send_text(method, path, payload).await?;
        serde_json::from_str(&body).map_err(|e| {
            QnaMakerError::Serialization(format!("Failed to decode response body: {}", e))
        })
    }

    /// Sends a request and returns the decoded success body as raw text.
    ///
    /// Used directly by endpoints whose success body is a bare quoted string
    /// or empty; failure statuses are translated exactly as in
    /// [`QnaMakerClient::send`].
    pub(crate) async fn send_text<P>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
    ) -> QnaResult<String>
    where
        P: Serialize,
    {
        let url = self.endpoint_url(path);
        debug!("Dispatching {} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.subscription_key);

        if let Some(payload) = payload {
            let body = serde_json::to_string(payload).map_err(|e| {
                QnaMakerError::Serialization(format!("Failed to encode request body: {}", e))
            })?;
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let content = response.text().await.map_err(map_transport_error)?;
        // The service HTML-escapes JSON bodies; decode before parsing.
        let content = html_escape::decode_html_entities(&content).into_owned();

        if status.is_success() {
            return Ok(content);
        }
        Err(translate_failure(status, &content))
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.endpoint.trim_end_matches('/'), path)
    }
}

/// Maps a transport-level failure to the client error taxonomy.
fn map_transport_error(error: reqwest::Error) -> QnaMakerError {
    if error.is_timeout() {
        QnaMakerError::Communication(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        QnaMakerError::Communication(format!("Connection error: {}", error))
    } else {
        QnaMakerError::Communication(format!("HTTP error: {}", error))
    }
}

/// Translates a failure response into a structured or status-only error.
fn translate_failure(status: StatusCode, content: &str) -> QnaMakerError {
    if !content.is_empty() {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(content) {
            return QnaMakerError::Service {
                status: status.as_u16(),
                error: envelope.error,
            };
        }
    }
    QnaMakerError::Status(status.as_u16())
}
