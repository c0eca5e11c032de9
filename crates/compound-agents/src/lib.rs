pub mod assembler;
pub mod catalog;
pub mod definitions;
pub mod error;
pub mod models;
pub mod overrides;
pub mod prompt_loader;
pub mod prompts;
pub mod types;

pub use crate::assembler::{create_agents, get_agent_configs, AgentAssembler};
pub use crate::catalog::{
    agent_list_description, agent_names, validate_catalog, Persona, SUBAGENTS,
};
pub use crate::definitions::{
    create_document_writer_agent, create_explore_agent, create_frontend_agent,
    create_librarian_agent, create_multimodal_agent, create_oracle_agent,
    create_orchestrator_agent, create_simplicity_reviewer_agent,
    create_workflow_compounder_agent, create_workflow_planner_agent,
};
pub use crate::error::{AgentError, TemplateError};
pub use crate::models::default_model_for;
pub use crate::overrides::apply_override;
pub use crate::prompt_loader::{render_template, PromptLoader, PromptSource};
pub use crate::prompts::{get_embedded_prompt, AGENT_TABLE_PLACEHOLDER, EMBEDDED_PROMPTS};
pub use crate::types::{AgentConfig, AgentDefinition, AgentName};
pub use compound_config::{AgentOverride, PluginConfig};
