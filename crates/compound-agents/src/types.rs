//! Agent definition types.

use serde::{Deserialize, Serialize};

/// Closed set of agent identities: one orchestrator plus nine subagents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentName {
    Orchestrator,
    Explore,
    Librarian,
    Oracle,
    FrontendUiUxEngineer,
    DocumentWriter,
    MultimodalLooker,
    CodeSimplicityReviewer,
    WorkflowPlanner,
    WorkflowCompounder,
}

impl AgentName {
    /// Every agent, orchestrator first, subagents in declaration order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Orchestrator,
            Self::Explore,
            Self::Librarian,
            Self::Oracle,
            Self::FrontendUiUxEngineer,
            Self::DocumentWriter,
            Self::MultimodalLooker,
            Self::CodeSimplicityReviewer,
            Self::WorkflowPlanner,
            Self::WorkflowCompounder,
        ]
    }

    pub fn subagents() -> &'static [Self] {
        &Self::all()[1..]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|name| name.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orchestrator => "orchestrator",
            Self::Explore => "explore",
            Self::Librarian => "librarian",
            Self::Oracle => "oracle",
            Self::FrontendUiUxEngineer => "frontend-ui-ux-engineer",
            Self::DocumentWriter => "document-writer",
            Self::MultimodalLooker => "multimodal-looker",
            Self::CodeSimplicityReviewer => "code-simplicity-reviewer",
            Self::WorkflowPlanner => "workflow-planner",
            Self::WorkflowCompounder => "workflow-compounder",
        }
    }
}

impl std::fmt::Display for AgentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The part of an agent the host runtime registers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Backend model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Full system prompt
    pub system: String,
}

/// A named persona with its routing description and runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Stable identifier (see [`AgentName`])
    pub name: String,
    /// Purpose, shown in the orchestrator's routing table
    pub description: String,
    pub config: AgentConfig,
}
