//! Session snapshot: the user's accumulated inputs and generated outputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! One flat JSON blob in browser-local storage carries state across page
//! navigations: created on the setup page, merged into by every subsequent
//! page, never cleared. Reads tolerate absent keys and the legacy camelCase
//! spellings; writes always re-serialize the whole merged object in snake
//! case. A second blob caches the most recently generated idea list as a
//! fallback (see [`IDEA_CACHE_KEY`]).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Storage key for the accumulating session snapshot.
pub const SESSION_KEY: &str = "thinkflowUserData";

/// Storage key for the fallback cache of the last generated idea list.
pub const IDEA_CACHE_KEY: &str = "thinkflowGeneratedIdeas";

/// One team member as entered on the setup page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub skills: Skills,
}

/// The shapes a member's skills field can take in stored data.
///
/// The setup page writes the already-normalized list; `Raw` covers blobs
/// written before normalization moved to the entry boundary. Anything
/// else found in storage (from a corrupt or hand-edited blob) normalizes
/// to no skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    Listed(Vec<String>),
    Raw(String),
    Other(serde_json::Value),
}

impl Skills {
    /// Normalize a raw comma-delimited string straight into the stored
    /// list shape.
    #[must_use]
    pub fn normalized_from(raw: &str) -> Self {
        Self::Listed(Self::Raw(raw.to_owned()).normalize())
    }

    /// Normalize to the single consumed shape: a list of trimmed,
    /// non-empty skill strings.
    ///
    /// A raw string is comma-split and trimmed; a list passes through
    /// unchanged; any other shape yields an empty list.
    #[must_use]
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Self::Listed(list) => list.clone(),
            Self::Raw(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
            Self::Other(_) => Vec::new(),
        }
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self::Listed(Vec::new())
    }
}

/// The accumulated session snapshot. Every field is optional; pages merge
/// in what they produce and read back what earlier pages stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Target industry entered on the setup page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Team size entered on the setup page.
    #[serde(default, alias = "teamSize", skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    /// Team members with their (raw or normalized) skills.
    #[serde(default, alias = "teamMembers", skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<TeamMember>>,
    /// Delimited trend-hashtag blob returned by the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trends: Option<String>,
    /// Renumbered idea blocks parsed from the generate-ideas response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideas: Option<Vec<String>>,
    /// The idea block the user chose on the select-idea page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_idea: Option<String>,
    /// Path of the generated plan document, as returned by the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_file: Option<String>,
}

impl SessionSnapshot {
    /// Shallow-merge `update` over this snapshot: fields the update carries
    /// overwrite, fields it leaves `None` are preserved.
    pub fn merge(&mut self, update: Self) {
        if update.industry.is_some() {
            self.industry = update.industry;
        }
        if update.team_size.is_some() {
            self.team_size = update.team_size;
        }
        if update.team_members.is_some() {
            self.team_members = update.team_members;
        }
        if update.trends.is_some() {
            self.trends = update.trends;
        }
        if update.ideas.is_some() {
            self.ideas = update.ideas;
        }
        if update.selected_idea.is_some() {
            self.selected_idea = update.selected_idea;
        }
        if update.plan_file.is_some() {
            self.plan_file = update.plan_file;
        }
    }

    /// Whether everything the plan request requires is present: a
    /// non-empty industry, a team size, and at least one team member.
    #[must_use]
    pub fn has_plan_prerequisites(&self) -> bool {
        self.industry.as_ref().is_some_and(|i| !i.trim().is_empty())
            && self.team_size.is_some()
            && self.team_members.as_ref().is_some_and(|m| !m.is_empty())
    }
}
