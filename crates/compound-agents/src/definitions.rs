use crate::catalog::{
    CODE_SIMPLICITY_REVIEWER, DOCUMENT_WRITER, EXPLORE, FRONTEND_UI_UX_ENGINEER, LIBRARIAN,
    MULTIMODAL_LOOKER, ORACLE, WORKFLOW_COMPOUNDER, WORKFLOW_PLANNER,
};
use crate::error::AgentError;
use crate::prompt_loader::{render_template, PromptLoader};
use crate::prompts::AGENT_TABLE_PLACEHOLDER;
use crate::types::{AgentConfig, AgentDefinition, AgentName};

pub const ORCHESTRATOR_DESCRIPTION: &str =
    "AI coding orchestrator with access to specialized subagents";

pub const ORCHESTRATOR_TEMPERATURE: f64 = 0.1;

pub fn create_explore_agent(model: &str) -> AgentDefinition {
    EXPLORE.build(model)
}

pub fn create_librarian_agent(model: &str) -> AgentDefinition {
    LIBRARIAN.build(model)
}

pub fn create_oracle_agent(model: &str) -> AgentDefinition {
    ORACLE.build(model)
}

pub fn create_frontend_agent(model: &str) -> AgentDefinition {
    FRONTEND_UI_UX_ENGINEER.build(model)
}

pub fn create_document_writer_agent(model: &str) -> AgentDefinition {
    DOCUMENT_WRITER.build(model)
}

pub fn create_multimodal_agent(model: &str) -> AgentDefinition {
    MULTIMODAL_LOOKER.build(model)
}

pub fn create_simplicity_reviewer_agent(model: &str) -> AgentDefinition {
    CODE_SIMPLICITY_REVIEWER.build(model)
}

pub fn create_workflow_planner_agent(model: &str) -> AgentDefinition {
    WORKFLOW_PLANNER.build(model)
}

pub fn create_workflow_compounder_agent(model: &str) -> AgentDefinition {
    WORKFLOW_COMPOUNDER.build(model)
}

/// Build the orchestrator with a routing table of `sub_agents`, in input order.
pub fn create_orchestrator_agent(
    model: &str,
    sub_agents: &[AgentDefinition],
) -> Result<AgentDefinition, AgentError> {
    create_orchestrator_agent_with(&PromptLoader::embedded(), model, sub_agents)
}

pub fn create_orchestrator_agent_with(
    loader: &PromptLoader,
    model: &str,
    sub_agents: &[AgentDefinition],
) -> Result<AgentDefinition, AgentError> {
    let name = AgentName::Orchestrator.as_str();
    let template = loader.load(name);
    let system = render_template(
        &template,
        AGENT_TABLE_PLACEHOLDER,
        &render_agent_table(sub_agents),
    )
    .map_err(|source| AgentError::Template {
        agent: name.to_string(),
        source,
    })?;

    Ok(AgentDefinition {
        name: name.to_string(),
        description: ORCHESTRATOR_DESCRIPTION.to_string(),
        config: AgentConfig {
            model: model.to_string(),
            temperature: ORCHESTRATOR_TEMPERATURE,
            system,
        },
    })
}

fn render_agent_table(sub_agents: &[AgentDefinition]) -> String {
    sub_agents
        .iter()
        .map(|a| format!("| @{} | {} |", a.name, a.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_accept_any_model() {
        let agent = create_oracle_agent("");
        assert_eq!(agent.name, "oracle");
        assert_eq!(agent.config.model, "");

        let agent = create_explore_agent("not a real model / at all");
        assert_eq!(agent.config.model, "not a real model / at all");
    }

    #[test]
    fn factories_are_deterministic() {
        assert_eq!(
            create_workflow_planner_agent("m"),
            create_workflow_planner_agent("m")
        );
    }

    #[test]
    fn workflow_agents_carry_their_prompts() {
        let planner = create_workflow_planner_agent("m");
        assert_eq!(planner.config.temperature, 0.2);
        assert!(planner.config.system.contains("compound engineering planner"));

        let compounder = create_workflow_compounder_agent("m");
        assert_eq!(compounder.config.temperature, 0.1);
        assert!(compounder.config.system.contains("Solution Document Template"));
    }

    #[test]
    fn orchestrator_renders_rows_in_order() {
        let subs = vec![create_oracle_agent("a"), create_explore_agent("b")];
        let orchestrator = create_orchestrator_agent("m", &subs).unwrap();

        let system = &orchestrator.config.system;
        let oracle_row = format!("| @oracle | {} |", subs[0].description);
        let explore_row = format!("| @explore | {} |", subs[1].description);
        let oracle_at = system.find(&oracle_row).unwrap();
        let explore_at = system.find(&explore_row).unwrap();
        assert!(oracle_at < explore_at);
        assert!(!system.contains(AGENT_TABLE_PLACEHOLDER));

        assert_eq!(orchestrator.name, "orchestrator");
        assert_eq!(orchestrator.description, ORCHESTRATOR_DESCRIPTION);
        assert_eq!(orchestrator.config.temperature, 0.1);
        assert_eq!(orchestrator.config.model, "m");
    }

    #[test]
    fn orchestrator_with_no_subagents_keeps_table_header() {
        let orchestrator = create_orchestrator_agent("m", &[]).unwrap();
        let system = &orchestrator.config.system;
        assert!(system.contains(
            "| Agent | Purpose / When to Use |\n|-------|-----------------------|\n\n</Subagents>"
        ));
        assert!(!system.contains("| @"));
    }

    #[test]
    fn orchestrator_template_without_slot_fails() {
        static PROMPTS: &[(&str, &str)] = &[("orchestrator", "You are an orchestrator.")];
        let loader = PromptLoader::from_embedded_map(PROMPTS);

        let err = create_orchestrator_agent_with(&loader, "m", &[]).unwrap_err();
        assert!(matches!(err, AgentError::Template { ref agent, .. } if agent == "orchestrator"));
    }
}
