use std::fs;
use std::path::PathBuf;

use crate::error::TemplateError;
use crate::prompts::{get_embedded_prompt, EMBEDDED_PROMPTS};

/// How prompts should be resolved.
#[derive(Debug, Clone)]
pub enum PromptSource {
    /// Load `<root_dir>/<agent>.md` at runtime, falling back to the embedded
    /// prompt for files that do not exist.
    FileSystem { root_dir: PathBuf },

    /// Load prompts from an embedded name->content mapping.
    ///
    /// This is the form produced by [`include_agent_prompts!`](crate::include_agent_prompts).
    EmbeddedMap {
        prompts: &'static [(&'static str, &'static str)],
    },
}

/// Loads agent prompts and strips YAML frontmatter (if present).
#[derive(Debug, Clone)]
pub struct PromptLoader {
    source: PromptSource,
}

impl Default for PromptLoader {
    fn default() -> Self {
        Self::embedded()
    }
}

impl PromptLoader {
    /// Loader over the prompts compiled into this crate.
    pub fn embedded() -> Self {
        Self::from_embedded_map(EMBEDDED_PROMPTS)
    }

    pub fn from_fs(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: PromptSource::FileSystem {
                root_dir: root_dir.into(),
            },
        }
    }

    pub fn from_embedded_map(prompts: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            source: PromptSource::EmbeddedMap { prompts },
        }
    }

    pub fn load(&self, agent_name: &str) -> String {
        match &self.source {
            PromptSource::FileSystem { root_dir } => {
                let path = root_dir.join(format!("{agent_name}.md"));
                match fs::read_to_string(&path) {
                    Ok(content) => strip_yaml_frontmatter(&content),
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %err,
                            "prompt file unavailable, using embedded prompt"
                        );
                        get_embedded_prompt(agent_name)
                            .map(strip_yaml_frontmatter)
                            .unwrap_or_else(|| fallback_prompt(agent_name))
                    }
                }
            }
            PromptSource::EmbeddedMap { prompts } => prompts
                .iter()
                .find(|(name, _)| *name == agent_name)
                .map(|(_, content)| strip_yaml_frontmatter(content))
                .unwrap_or_else(|| fallback_prompt(agent_name)),
        }
    }
}

/// Convenience macro for embedding prompts with `include_str!()`.
///
/// Example:
/// ```ignore
/// use compound_agents::{PromptLoader, include_agent_prompts};
///
/// static PROMPTS: &[(&str, &str)] = include_agent_prompts!(
///   "explore" => "../prompts/explore.md",
///   "oracle" => "../prompts/oracle.md",
/// );
///
/// let loader = PromptLoader::from_embedded_map(PROMPTS);
/// ```
#[macro_export]
macro_rules! include_agent_prompts {
    ($($name:literal => $path:literal),+ $(,)?) => {
        &[
            $(($name, include_str!($path))),+
        ]
    };
}

/// Replace the first occurrence of `placeholder` in `template` with `value`.
///
/// All prompt templating goes through here. A template without its slot is
/// corrupt and reported rather than returned unsubstituted.
pub fn render_template(
    template: &str,
    placeholder: &str,
    value: &str,
) -> Result<String, TemplateError> {
    if !template.contains(placeholder) {
        return Err(TemplateError::MissingPlaceholder {
            placeholder: placeholder.to_string(),
        });
    }
    Ok(template.replacen(placeholder, value, 1))
}

pub fn strip_yaml_frontmatter(content: &str) -> String {
    let s = content.trim();
    if !s.starts_with("---") {
        return s.to_string();
    }

    // Closing delimiter must sit on its own line; `\r\n` endings are accepted.
    let mut lines = s.lines();

    let first = lines.next().unwrap_or_default();
    if first.trim() != "---" {
        return s.to_string();
    }

    for line in &mut lines {
        if line.trim() == "---" {
            let rest: String = lines.collect::<Vec<_>>().join("\n");
            return rest.trim().to_string();
        }
    }

    // Unclosed frontmatter; return as-is.
    s.to_string()
}

pub fn fallback_prompt(agent_name: &str) -> String {
    format!(
        "Agent: {agent_name}\n\nPrompt file not found. Please ensure prompts/{agent_name}.md exists.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_frontmatter_when_present() {
        let md = "---\nname: test\n---\n\nHello\nWorld\n";
        assert_eq!(strip_yaml_frontmatter(md), "Hello\nWorld");
    }

    #[test]
    fn strip_frontmatter_is_noop_without_frontmatter() {
        let md = "Hello\nWorld\n";
        assert_eq!(strip_yaml_frontmatter(md), "Hello\nWorld");
    }

    #[test]
    fn strip_frontmatter_is_noop_when_unclosed() {
        let md = "---\nname: test\nHello\n";
        assert_eq!(strip_yaml_frontmatter(md), "---\nname: test\nHello");
    }

    #[test]
    fn render_replaces_first_occurrence_only() {
        let out = render_template("a {{X}} b {{X}}", "{{X}}", "1").unwrap();
        assert_eq!(out, "a 1 b {{X}}");
    }

    #[test]
    fn render_with_empty_value_keeps_surroundings() {
        let out = render_template("head\n{{X}}\ntail", "{{X}}", "").unwrap();
        assert_eq!(out, "head\n\ntail");
    }

    #[test]
    fn render_reports_missing_placeholder() {
        let err = render_template("no slot here", "{{AGENT_TABLE}}", "rows").unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingPlaceholder {
                placeholder: "{{AGENT_TABLE}}".to_string()
            }
        );
    }

    #[test]
    fn embedded_map_falls_back_when_missing() {
        static PROMPTS: &[(&str, &str)] = &[("a", "Hello")];
        let loader = PromptLoader::from_embedded_map(PROMPTS);
        assert_eq!(loader.load("a"), "Hello");
        assert!(loader.load("missing").contains("Prompt file not found"));
    }

    #[test]
    fn fs_loader_reads_and_strips() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("oracle.md"),
            "---\ndescription: local\n---\n\nLocal oracle",
        )
        .unwrap();

        let loader = PromptLoader::from_fs(tmp.path());
        assert_eq!(loader.load("oracle"), "Local oracle");
    }

    #[test]
    fn fs_loader_falls_back_to_embedded() {
        let tmp = tempfile::tempdir().unwrap();
        let loader = PromptLoader::from_fs(tmp.path());
        assert_eq!(
            loader.load("explore"),
            strip_yaml_frontmatter(get_embedded_prompt("explore").unwrap())
        );
        assert!(loader.load("missing").contains("Prompt file not found"));
    }
}
