//! Default backend model per agent.

use crate::types::AgentName;

pub fn default_model_for(name: AgentName) -> &'static str {
    match name {
        AgentName::Orchestrator => "anthropic/claude-opus-4-5",
        AgentName::Explore => "cerebras/zai-glm-4.6",
        AgentName::Librarian => "google/gemini-3-flash",
        AgentName::Oracle => "openai/gpt-5.2",
        AgentName::FrontendUiUxEngineer => "google/gemini-3-pro",
        AgentName::DocumentWriter => "google/gemini-3-flash",
        AgentName::MultimodalLooker => "google/gemini-3-flash",
        AgentName::CodeSimplicityReviewer => "anthropic/claude-opus-4-5",
        AgentName::WorkflowPlanner => "anthropic/claude-sonnet-4-5",
        AgentName::WorkflowCompounder => "anthropic/claude-sonnet-4-5",
    }
}

/// Resolve the model an agent is built with: a non-empty override wins over the default.
pub fn resolve_model<'a>(name: AgentName, model_override: Option<&'a str>) -> &'a str {
    match model_override {
        Some(model) if !model.is_empty() => model,
        _ => default_model_for(name),
    }
}
