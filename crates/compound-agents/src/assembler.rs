use std::collections::BTreeMap;

use compound_config::PluginConfig;

use crate::catalog::SUBAGENTS;
use crate::definitions::create_orchestrator_agent_with;
use crate::error::AgentError;
use crate::models::resolve_model;
use crate::overrides::apply_override;
use crate::prompt_loader::PromptLoader;
use crate::types::{AgentConfig, AgentDefinition, AgentName};

/// Builds the agent list handed to the host runtime for registration.
#[derive(Debug, Clone, Default)]
pub struct AgentAssembler {
    loader: PromptLoader,
}

impl AgentAssembler {
    pub fn new(loader: PromptLoader) -> Self {
        Self { loader }
    }

    pub fn embedded() -> Self {
        Self::new(PromptLoader::embedded())
    }

    /// Assemble `[orchestrator, ...enabled subagents]`.
    ///
    /// Subagents keep catalog order. Disabled subagents are neither returned nor
    /// listed in the orchestrator's routing table. The orchestrator itself
    /// cannot be disabled.
    pub fn create_agents(
        &self,
        config: Option<&PluginConfig>,
    ) -> Result<Vec<AgentDefinition>, AgentError> {
        let default_config = PluginConfig::default();
        let config = config.unwrap_or(&default_config);
        let disabled = config.disabled_set();

        if disabled.contains(AgentName::Orchestrator.as_str()) {
            tracing::warn!("the orchestrator cannot be disabled; ignoring");
        }
        for name in config.agents.keys() {
            if AgentName::parse(name).is_none() {
                tracing::debug!(agent = %name, "override targets unknown agent");
            }
        }

        let mut sub_agents = Vec::with_capacity(SUBAGENTS.len());
        for persona in SUBAGENTS {
            let name = persona.name.as_str();
            let override_cfg = config.override_for(name);
            let model = resolve_model(
                persona.name,
                override_cfg.and_then(|o| o.model.as_deref()),
            );
            let mut agent = persona.build_with(&self.loader, model);

            if disabled.contains(name) {
                tracing::debug!(agent = name, "agent disabled");
                continue;
            }

            if let Some(override_cfg) = override_cfg {
                apply_override(&mut agent, override_cfg);
                tracing::debug!(agent = name, "override applied");
            }

            sub_agents.push(agent);
        }

        let name = AgentName::Orchestrator;
        let override_cfg = config.override_for(name.as_str());
        let model = resolve_model(name, override_cfg.and_then(|o| o.model.as_deref()));
        let mut orchestrator = create_orchestrator_agent_with(&self.loader, model, &sub_agents)?;
        if let Some(override_cfg) = override_cfg {
            apply_override(&mut orchestrator, override_cfg);
            tracing::debug!(agent = name.as_str(), "override applied");
        }

        let mut agents = Vec::with_capacity(sub_agents.len() + 1);
        agents.push(orchestrator);
        agents.extend(sub_agents);
        Ok(agents)
    }

    /// Name -> `{model, temperature, system}` mapping for registration.
    pub fn agent_configs(
        &self,
        config: Option<&PluginConfig>,
    ) -> Result<BTreeMap<String, AgentConfig>, AgentError> {
        Ok(self
            .create_agents(config)?
            .into_iter()
            .map(|agent| (agent.name, agent.config))
            .collect())
    }
}

/// Assemble the agent list from the embedded prompts.
///
/// # Panics
///
/// If the embedded orchestrator template lost its table placeholder.
pub fn create_agents(config: Option<&PluginConfig>) -> Vec<AgentDefinition> {
    match AgentAssembler::embedded().create_agents(config) {
        Ok(agents) => agents,
        Err(err) => panic!("embedded agent prompts are corrupt: {err}"),
    }
}

pub fn get_agent_configs(config: Option<&PluginConfig>) -> BTreeMap<String, AgentConfig> {
    create_agents(config)
        .into_iter()
        .map(|agent| (agent.name, agent.config))
        .collect()
}
