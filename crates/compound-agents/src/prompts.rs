//! Embedded agent prompts
//!
//! The markdown resources under `prompts/` are compiled into the binary so the
//! agent list can be assembled without touching the filesystem.

use crate::include_agent_prompts;

/// Token in the orchestrator template replaced by the rendered subagent table.
pub const AGENT_TABLE_PLACEHOLDER: &str = "{{AGENT_TABLE}}";

pub static EMBEDDED_PROMPTS: &[(&str, &str)] = include_agent_prompts!(
    "orchestrator" => "../prompts/orchestrator.md",
    "explore" => "../prompts/explore.md",
    "librarian" => "../prompts/librarian.md",
    "oracle" => "../prompts/oracle.md",
    "frontend-ui-ux-engineer" => "../prompts/frontend-ui-ux-engineer.md",
    "document-writer" => "../prompts/document-writer.md",
    "multimodal-looker" => "../prompts/multimodal-looker.md",
    "code-simplicity-reviewer" => "../prompts/code-simplicity-reviewer.md",
    "workflow-planner" => "../prompts/workflow-planner.md",
    "workflow-compounder" => "../prompts/workflow-compounder.md",
);

pub fn get_embedded_prompt(agent_name: &str) -> Option<&'static str> {
    EMBEDDED_PROMPTS
        .iter()
        .find(|(name, _)| *name == agent_name)
        .map(|(_, content)| *content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentName;

    #[test]
    fn every_agent_has_an_embedded_prompt() {
        for name in AgentName::all() {
            let prompt = get_embedded_prompt(name.as_str())
                .unwrap_or_else(|| panic!("missing prompt for {name}"));
            assert!(!prompt.trim().is_empty());
        }
    }

    #[test]
    fn orchestrator_template_has_exactly_one_table_slot() {
        let template = get_embedded_prompt("orchestrator").unwrap();
        assert_eq!(template.matches(AGENT_TABLE_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn subagent_prompts_have_no_placeholders() {
        for name in AgentName::subagents() {
            let prompt = get_embedded_prompt(name.as_str()).unwrap();
            assert!(!prompt.contains("{{"), "{name} prompt contains a placeholder");
        }
    }
}
