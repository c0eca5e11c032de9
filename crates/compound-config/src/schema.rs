use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Plugin configuration supplied by the host at initialization time.
///
/// Loaded from (in priority order):
/// 1. `compound.jsonc` - JSON with comments
/// 2. `compound.json` - Standard JSON
/// 3. `compound.yml` / `compound.yaml` - YAML format
///
/// Hidden variants (`.compound.*`) are also checked, and `~/.config/opencode/`
/// holds the global layer that project files are merged over.
///
/// # Example
///
/// ```yaml
/// disabled_agents:
///   - multimodal-looker
/// agents:
///   oracle:
///     model: openai/gpt-5.2
///     temperature: 0
///   orchestrator:
///     prompt_append: Always answer in British English.
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Agents that should not be registered nor listed in the orchestrator's routing table
    #[serde(default)]
    pub disabled_agents: Vec<String>,

    /// Per-agent overrides keyed by agent name
    #[serde(default)]
    pub agents: HashMap<String, AgentOverride>,
}

impl PluginConfig {
    pub fn disabled_set(&self) -> HashSet<&str> {
        self.disabled_agents.iter().map(String::as_str).collect()
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_agents.iter().any(|n| n == name)
    }

    pub fn override_for(&self, name: &str) -> Option<&AgentOverride> {
        self.agents.get(name)
    }

    /// Layer `upper` over `self`.
    ///
    /// Disabled agents are unioned (first-seen order kept). Overrides merge
    /// per agent and per field, with fields present in `upper` winning.
    pub fn merge(mut self, upper: PluginConfig) -> PluginConfig {
        for name in upper.disabled_agents {
            if !self.disabled_agents.contains(&name) {
                self.disabled_agents.push(name);
            }
        }

        for (name, over) in upper.agents {
            let merged = match self.agents.remove(&name) {
                Some(base) => base.merge(over),
                None => over,
            };
            self.agents.insert(name, merged);
        }

        self
    }
}

/// Per-agent override. Every field is optional; `None` leaves the agent unchanged.
///
/// `temperature: Some(0.0)` is a real override and must not be confused with
/// an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentOverride {
    /// Backend model identifier (e.g., "anthropic/claude-sonnet-4-5")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Replaces the system prompt entirely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Appended to the (possibly replaced) system prompt after a blank line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_append: Option<String>,
}

impl AgentOverride {
    pub fn is_empty(&self) -> bool {
        self.model.is_none()
            && self.temperature.is_none()
            && self.prompt.is_none()
            && self.prompt_append.is_none()
    }

    fn merge(self, upper: AgentOverride) -> AgentOverride {
        AgentOverride {
            model: upper.model.or(self.model),
            temperature: upper.temperature.or(self.temperature),
            prompt: upper.prompt.or(self.prompt),
            prompt_append: upper.prompt_append.or(self.prompt_append),
        }
    }
}
