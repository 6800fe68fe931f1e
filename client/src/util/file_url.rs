//! Resolving gateway-relative generated-file paths into absolute URLs.

#[cfg(test)]
#[path = "file_url_test.rs"]
mod file_url_test;

use crate::net::api::GATEWAY_BASE;

/// Resolve a generated-file path returned by the gateway against the fixed
/// gateway host: leading `../` and `./` markers are stripped and the host
/// prefixed, yielding a downloadable absolute URL.
#[must_use]
pub fn resolve_generated_file(path: &str) -> String {
    let mut rest = path;
    loop {
        if let Some(stripped) = rest.strip_prefix("../") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else {
            break;
        }
    }
    let rest = rest.trim_start_matches('/');
    format!("{GATEWAY_BASE}/{rest}")
}
