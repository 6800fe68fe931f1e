//! Gateway calls for trend, idea, and plan generation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the fixed
//! local gateway address. Server-side (SSR): stubs returning a transport
//! error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a [`GatewayError`] for every failure class (transport,
//! non-OK status, malformed payload) and surface it themselves; nothing
//! here retries or aborts an in-flight request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::GatewayError;
use super::types::{HashtagsRequest, IdeasRequest, PlanRequest};
#[cfg(feature = "hydrate")]
use super::types::{HashtagsResponse, IdeasResponse, PlanResponse};

/// Fixed local development address of the gateway service.
pub const GATEWAY_BASE: &str = "http://127.0.0.1:8000";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{GATEWAY_BASE}{path}")
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, R: serde::de::DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<R, GatewayError> {
    let resp = gloo_net::http::Request::post(&endpoint(path))
        .json(body)
        .map_err(|e| GatewayError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;
    if !resp.ok() {
        let detail = resp.text().await.unwrap_or_default();
        return Err(GatewayError::Status { status: resp.status(), detail });
    }
    resp.json::<R>()
        .await
        .map_err(|e| GatewayError::Payload(e.to_string()))
}

/// Request trend hashtags for an industry and the team's skills via
/// `POST /generate-hashtags`. A response without a `trends` field counts
/// as no trends, not a failure.
///
/// # Errors
///
/// Returns a [`GatewayError`] on transport failure, non-OK status, or an
/// unparseable body.
pub async fn generate_hashtags(request: &HashtagsRequest) -> Result<String, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let body: HashtagsResponse = post_json("/generate-hashtags", request).await?;
        Ok(body.trends.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(GatewayError::Transport("not available on server".to_owned()))
    }
}

/// Request generated project ideas for the grouped whiteboard content via
/// `POST /generate-ideas`. Returns the raw delimited idea blob.
///
/// # Errors
///
/// Returns [`GatewayError::EmptyIdeas`] when the response's idea text is
/// missing, not a string, or blank, and the usual transport/status/payload
/// errors otherwise.
pub async fn generate_ideas(request: &IdeasRequest) -> Result<String, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let body: IdeasResponse = post_json("/generate-ideas", request).await?;
        match body.idea_text() {
            Some(text) => Ok(text.to_owned()),
            None => Err(GatewayError::EmptyIdeas),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(GatewayError::Transport("not available on server".to_owned()))
    }
}

/// Request the generated plan document via `POST /generate-pdf`. Returns
/// the server-relative path of the document.
///
/// # Errors
///
/// Returns a [`GatewayError`]; a response without a `file_url` is a
/// payload error.
pub async fn generate_plan(request: &PlanRequest) -> Result<String, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let body: PlanResponse = post_json("/generate-pdf", request).await?;
        body.file_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| GatewayError::Payload("response carried no file_url".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(GatewayError::Transport("not available on server".to_owned()))
    }
}
