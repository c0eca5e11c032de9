//! Ordered subagent catalog.
//!
//! Declaration order here is the order of the assembled agent list and of the
//! orchestrator's routing table.

use crate::prompt_loader::PromptLoader;
use crate::prompts::get_embedded_prompt;
use crate::types::{AgentConfig, AgentDefinition, AgentName};

/// Static data describing one persona.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Persona {
    pub name: AgentName,
    /// One-line purpose, rendered verbatim into the routing table
    pub description: &'static str,
    /// Few-word summary used in tool descriptions
    pub short_desc: &'static str,
    pub temperature: f64,
}

impl Persona {
    /// Build the definition with the embedded prompt.
    pub fn build(&self, model: &str) -> AgentDefinition {
        self.build_with(&PromptLoader::embedded(), model)
    }

    pub fn build_with(&self, loader: &PromptLoader, model: &str) -> AgentDefinition {
        AgentDefinition {
            name: self.name.as_str().to_string(),
            description: self.description.to_string(),
            config: AgentConfig {
                model: model.to_string(),
                temperature: self.temperature,
                system: loader.load(self.name.as_str()),
            },
        }
    }
}

pub const EXPLORE: Persona = Persona {
    name: AgentName::Explore,
    description: "Fast codebase search: locate files, symbols, and usage patterns",
    short_desc: "codebase grep",
    temperature: 0.1,
};

pub const LIBRARIAN: Persona = Persona {
    name: AgentName::Librarian,
    description: "Research official docs, library source, and GitHub examples",
    short_desc: "docs/GitHub",
    temperature: 0.1,
};

pub const ORACLE: Persona = Persona {
    name: AgentName::Oracle,
    description: "Architecture decisions, hard debugging, and strategic review",
    short_desc: "strategy",
    temperature: 0.1,
};

pub const FRONTEND_UI_UX_ENGINEER: Persona = Persona {
    name: AgentName::FrontendUiUxEngineer,
    description: "Build and polish UI components, layouts, and interactions",
    short_desc: "UI/UX",
    temperature: 0.2,
};

pub const DOCUMENT_WRITER: Persona = Persona {
    name: AgentName::DocumentWriter,
    description: "Write READMEs, guides, API references, and changelogs",
    short_desc: "docs",
    temperature: 0.2,
};

pub const MULTIMODAL_LOOKER: Persona = Persona {
    name: AgentName::MultimodalLooker,
    description: "Analyze screenshots, mockups, diagrams, and PDFs",
    short_desc: "image/visual analysis",
    temperature: 0.1,
};

pub const CODE_SIMPLICITY_REVIEWER: Persona = Persona {
    name: AgentName::CodeSimplicityReviewer,
    description: "Review code for unnecessary complexity and propose simpler versions",
    short_desc: "code review",
    temperature: 0.1,
};

pub const WORKFLOW_PLANNER: Persona = Persona {
    name: AgentName::WorkflowPlanner,
    description: "Research knowledge base before starting work to leverage past solutions",
    short_desc: "compound planning",
    temperature: 0.2,
};

pub const WORKFLOW_COMPOUNDER: Persona = Persona {
    name: AgentName::WorkflowCompounder,
    description: "Auto-document solutions, patterns, and learnings for compound engineering",
    short_desc: "auto-document learnings",
    temperature: 0.1,
};

pub const SUBAGENTS: &[Persona] = &[
    EXPLORE,
    LIBRARIAN,
    ORACLE,
    FRONTEND_UI_UX_ENGINEER,
    DOCUMENT_WRITER,
    MULTIMODAL_LOOKER,
    CODE_SIMPLICITY_REVIEWER,
    WORKFLOW_PLANNER,
    WORKFLOW_COMPOUNDER,
];

pub fn persona(name: AgentName) -> Option<&'static Persona> {
    SUBAGENTS.iter().find(|p| p.name == name)
}

/// Check that the catalog covers exactly the known subagents, in order, each with a prompt.
pub fn validate_catalog() -> Result<(), String> {
    let declared: Vec<AgentName> = SUBAGENTS.iter().map(|p| p.name).collect();
    if declared != AgentName::subagents() {
        return Err(format!(
            "catalog declares {declared:?}, expected {:?}",
            AgentName::subagents()
        ));
    }

    if let Some(p) = SUBAGENTS
        .iter()
        .find(|p| get_embedded_prompt(p.name.as_str()).is_none())
    {
        return Err(format!("no embedded prompt for '{}'", p.name));
    }

    Ok(())
}

/// e.g. `"explore (codebase grep), librarian (docs/GitHub), ..."`
pub fn agent_list_description() -> String {
    SUBAGENTS
        .iter()
        .map(|p| format!("{} ({})", p.name, p.short_desc))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn agent_names() -> Vec<&'static str> {
    SUBAGENTS.iter().map(|p| p.name.as_str()).collect()
}
