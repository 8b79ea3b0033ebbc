//! Configuration types for Natter.
//!
//! `NatterConfig` models the on-disk `config.toml`: named assistant
//! profiles plus optional user preferences. `AssistantConfig` is the
//! resolved pair of options a chat session actually runs with.

use serde::{Deserialize, Serialize};

/// Endpoint of the built-in fallback profile.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:10000/chat";

/// Assistant label of the built-in fallback profile.
pub const DEFAULT_LABEL: &str = "Assistant";

/// Resolved options for one chat session: where messages go and what
/// the assistant is called in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Full URL of the chat endpoint.
    pub endpoint: String,
    /// Sender label shown on assistant entries.
    pub label: String,
}

/// One named assistant profile from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantProfile {
    /// Short name used to select the profile on the command line.
    pub name: String,
    pub label: String,
    pub endpoint: String,
}

impl AssistantProfile {
    /// The resolved session options this profile describes.
    pub fn assistant_config(&self) -> AssistantConfig {
        AssistantConfig {
            endpoint: self.endpoint.clone(),
            label: self.label.clone(),
        }
    }
}

/// Optional user preferences seeded into the session store at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrefs {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

/// Top-level configuration, loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatterConfig {
    /// Profile used when the command line names none.
    #[serde(default)]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub user: UserPrefs,
    #[serde(default)]
    pub profiles: Vec<AssistantProfile>,
}

impl Default for NatterConfig {
    /// Built-in fallback: a single `local` profile pointing at a
    /// locally running backend.
    fn default() -> Self {
        NatterConfig {
            default_profile: None,
            user: UserPrefs::default(),
            profiles: vec![AssistantProfile {
                name: "local".to_string(),
                label: DEFAULT_LABEL.to_string(),
                endpoint: DEFAULT_ENDPOINT.to_string(),
            }],
        }
    }
}

impl NatterConfig {
    /// Look up a profile by name, falling back to `default_profile` and
    /// then to the first profile in the file.
    pub fn select_profile(&self, name: Option<&str>) -> Option<&AssistantProfile> {
        match name {
            Some(name) => self.profiles.iter().find(|p| p.name == name),
            None => self
                .default_profile
                .as_deref()
                .and_then(|default| self.profiles.iter().find(|p| p.name == default))
                .or_else(|| self.profiles.first()),
        }
    }
}
