//! JSON gateway over the books API.
//!
//! Every request targets `{base_url}{path}`. Successful responses are decoded
//! as JSON, an empty body decodes to `None`. Non-2xx responses become
//! [`GatewayError::Status`] carrying the body's `message` field when the
//! server sent one.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiResult, GatewayError};
use crate::traits::{HttpClient, Request, Response};

/// GET/POST wrapper bound to a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpGateway<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> HttpGateway<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET {base_url}{path}`, decoding the body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<T>> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.client.send(Request::get(url)).await?;
        Self::decode(response)
    }

    /// `POST {base_url}{path}` with `payload` as the JSON body.
    pub async fn post<T, P>(&self, path: &str, payload: &P) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = self.url(path);
        let body =
            serde_json::to_string(payload).map_err(|e| GatewayError::Encode(e.to_string()))?;
        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let response = self.client.send(Request::post_json(url, body)).await?;
        Self::decode(response)
    }

    fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<Option<T>> {
        if !response.is_success() {
            let message = error_message(&response);
            tracing::debug!("request failed with {}: {}", response.status, message);
            return Err(GatewayError::Status {
                status: response.status,
                message,
            });
        }

        if response.is_blank() {
            return Ok(None);
        }

        Ok(Some(response.json()?))
    }
}

/// The `message` field of a JSON error body, or the status text.
fn error_message(response: &Response) -> String {
    response
        .json::<serde_json::Value>()
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| response.status_text())
}
