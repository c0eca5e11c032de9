use compound_config::AgentOverride;

use crate::types::AgentDefinition;

/// Apply a user override to `agent` in place.
///
/// Empty strings count as absent for `model`, `prompt` and `prompt_append`;
/// `temperature` applies whenever it is set, zero included. `prompt` replaces
/// the system prompt before `prompt_append` is added after a blank line, so
/// applying the same override twice appends twice.
pub fn apply_override(agent: &mut AgentDefinition, override_cfg: &AgentOverride) {
    let config = &mut agent.config;

    if let Some(model) = non_empty(&override_cfg.model) {
        config.model = model.to_string();
    }

    if let Some(temperature) = override_cfg.temperature {
        config.temperature = temperature;
    }

    if let Some(prompt) = non_empty(&override_cfg.prompt) {
        config.system = prompt.to_string();
    }

    if let Some(prompt_append) = non_empty(&override_cfg.prompt_append) {
        config.system = format!("{}\n\n{}", config.system, prompt_append);
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentConfig;

    fn agent() -> AgentDefinition {
        AgentDefinition {
            name: "a".to_string(),
            description: "".to_string(),
            config: AgentConfig {
                model: "base-model".to_string(),
                temperature: 0.2,
                system: "hello".to_string(),
            },
        }
    }

    #[test]
    fn empty_override_is_noop() {
        let mut a = agent();
        apply_override(&mut a, &AgentOverride::default());
        assert_eq!(a, agent());
    }

    #[test]
    fn zero_temperature_applies() {
        let mut a = agent();
        apply_override(
            &mut a,
            &AgentOverride {
                temperature: Some(0.0),
                ..Default::default()
            },
        );
        assert_eq!(a.config.temperature, 0.0);
        assert_eq!(a.config.model, "base-model");
    }

    #[test]
    fn empty_strings_are_ignored() {
        let mut a = agent();
        apply_override(
            &mut a,
            &AgentOverride {
                model: Some(String::new()),
                prompt: Some(String::new()),
                prompt_append: Some(String::new()),
                ..Default::default()
            },
        );
        assert_eq!(a, agent());
    }

    #[test]
    fn replace_then_append() {
        let mut a = agent();
        apply_override(
            &mut a,
            &AgentOverride {
                prompt: Some("replaced".to_string()),
                prompt_append: Some("world".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(a.config.system, "replaced\n\nworld");
    }

    #[test]
    fn append_is_not_idempotent() {
        let over = AgentOverride {
            prompt_append: Some("world".to_string()),
            ..Default::default()
        };
        let mut a = agent();
        apply_override(&mut a, &over);
        apply_override(&mut a, &over);
        assert_eq!(a.config.system, "hello\n\nworld\n\nworld");
    }

    #[test]
    fn replacement_fields_are_idempotent() {
        let over = AgentOverride {
            model: Some("m2".to_string()),
            temperature: Some(0.7),
            prompt: Some("p2".to_string()),
            ..Default::default()
        };
        let mut once = agent();
        apply_override(&mut once, &over);
        let mut twice = once.clone();
        apply_override(&mut twice, &over);
        assert_eq!(once, twice);
    }
}
