//! Splitting the stored trend blob into displayable `#tags`.

#[cfg(test)]
#[path = "trends_test.rs"]
mod trends_test;

/// Split a delimited trend blob (`"#SmartHomes #EdgeComputing"`) into
/// individual trimmed `#tag` strings.
#[must_use]
pub fn trend_tags(raw: &str) -> Vec<String> {
    raw.split('#')
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| format!("#{}", chunk.trim()))
        .collect()
}
