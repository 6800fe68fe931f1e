//! Request and response bodies for the gateway endpoints.
//!
//! Response fields the gateway may omit are `Option`s; the call layer in
//! [`crate::net::api`] decides which omissions are tolerable (a missing
//! `trends` blob) and which are failures (a missing `file_url`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body for `POST /generate-hashtags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagsRequest {
    pub industry: String,
    /// One raw skills string per team member, as typed on the setup page.
    pub skills: Vec<String>,
}

/// Response from `POST /generate-hashtags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagsResponse {
    /// Delimited `#tag` blob. Absent is treated as no trends.
    #[serde(default)]
    pub trends: Option<String>,
}

/// Body for `POST /generate-ideas`: the whiteboard's note content grouped
/// by quadrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeasRequest {
    pub industry: String,
    pub pain_points: Vec<String>,
    pub ideas: Vec<String>,
    pub goals: Vec<String>,
    pub constraints: Vec<String>,
}

/// Response from `POST /generate-ideas`.
///
/// `ideas` is kept loose (`serde_json::Value`) so a non-string payload is
/// detected after parsing rather than rejected as a deserialization error,
/// and surfaced to the user as an empty idea list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeasResponse {
    #[serde(default)]
    pub ideas: Option<serde_json::Value>,
}

impl IdeasResponse {
    /// The idea text blob, if the gateway sent a non-blank string.
    #[must_use]
    pub fn idea_text(&self) -> Option<&str> {
        self.ideas
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// One team member in the plan request, skills already normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTeamMember {
    pub name: String,
    pub skills: Vec<String>,
}

/// Body for `POST /generate-pdf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub industry: String,
    pub team_size: u32,
    pub team_members: Vec<PlanTeamMember>,
    pub selected_idea: String,
}

/// Response from `POST /generate-pdf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Server-relative path of the generated document. Absent is a failure.
    #[serde(default)]
    pub file_url: Option<String>,
}
