//! Gateway error taxonomy.
//!
//! Every failure is terminal for the user action that triggered it: pages
//! surface the `Display` text in a blocking alert, log it, and stay put.
//! There are no retries anywhere.

use thiserror::Error;

/// Error returned by the gateway calls in [`crate::net::api`].
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The gateway answered with a non-OK status. `detail` carries the
    /// response body text when the gateway provided one.
    #[error("gateway returned status {status}: {detail}")]
    Status { status: u16, detail: String },
    /// The response arrived but its body was not the expected shape.
    #[error("malformed gateway response: {0}")]
    Payload(String),
    /// The idea-generation response carried no usable idea text.
    #[error("received an empty idea list")]
    EmptyIdeas,
}
