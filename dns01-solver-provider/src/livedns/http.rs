//! HTTP request plumbing shared by the record operations.

use reqwest::{RequestBuilder, Response};
use serde::Serialize;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

use super::LiveDnsClient;

impl LiveDnsClient {
    /// Executes a GET and returns status plus body.
    pub(crate) async fn get_request(&self, url: &str) -> Result<(u16, String)> {
        log::debug!("GET {url}");
        let response = self.send(self.client.get(url)).await?;
        Self::read_response(response).await
    }

    /// Executes a POST with a JSON body and returns the status.
    pub(crate) async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16> {
        log::debug!("POST {url}");
        let response = self.send(Self::json_body(self.client.post(url), body)?).await?;
        let (status, _) = Self::read_response(response).await?;
        Ok(status)
    }

    /// Executes a PUT with a JSON body and returns the status.
    pub(crate) async fn put_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16> {
        log::debug!("PUT {url}");
        let response = self.send(Self::json_body(self.client.put(url), body)?).await?;
        let (status, _) = Self::read_response(response).await?;
        Ok(status)
    }

    /// Executes a DELETE and returns the status.
    pub(crate) async fn delete_request(&self, url: &str) -> Result<u16> {
        log::debug!("DELETE {url}");
        let response = self.send(self.client.delete(url)).await?;
        let (status, _) = Self::read_response(response).await?;
        Ok(status)
    }

    /// Serializes `body` and attaches it with the JSON content type.
    fn json_body<B: Serialize>(request: RequestBuilder, body: &B) -> Result<RequestBuilder> {
        let payload = serde_json::to_vec(body).map_err(|e| ProviderError::Serialization {
            detail: e.to_string(),
        })?;
        Ok(request
            .header("Content-Type", "application/json")
            .body(payload))
    }

    /// Attaches the bearer credential and sends, mapping transport failures.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        detail: e.to_string(),
                    }
                } else if e.is_builder() {
                    ProviderError::RequestConstruction {
                        detail: e.to_string(),
                    }
                } else {
                    ProviderError::Network {
                        detail: e.to_string(),
                    }
                }
            })
    }

    async fn read_response(response: Response) -> Result<(u16, String)> {
        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network {
                detail: format!("failed to read response body: {e}"),
            })?;
        log::debug!("Response Body: {}", truncate_for_log(&body));
        Ok((status, body))
    }
}
