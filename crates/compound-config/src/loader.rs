use crate::schema::PluginConfig;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Jsonc,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;

        match ext {
            "jsonc" => Some(Self::Jsonc),
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: PluginConfig,
    pub path: PathBuf,
    pub format: ConfigFormat,
}

const CONFIG_CANDIDATES: &[&str] = &[
    "compound.jsonc",
    "compound.json",
    "compound.yml",
    "compound.yaml",
    ".compound.jsonc",
    ".compound.json",
    ".compound.yml",
    ".compound.yaml",
];

/// Directory holding the user-wide config layer (`~/.config/opencode`).
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("opencode"))
}

pub fn resolve_config(config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let path = config_path
        .map(|p| p.to_path_buf())
        .or_else(|| find_config_file_in(Path::new(".")))
        .or_else(|| global_config_dir().and_then(|dir| find_config_file_in(&dir)))
        .ok_or_else(|| anyhow!("No configuration file found"))?;

    load_config_from_file(&path)
}

pub fn load_config_from_file(path: &Path) -> Result<ResolvedConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| anyhow!("Unknown config format for: {}", path.display()))?;

    let config = parse_config_content(&content, format)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?format, "loaded plugin config");

    Ok(ResolvedConfig {
        config: expand_env_vars(config),
        path: path.to_path_buf(),
        format,
    })
}

/// Load the global layer, then the project layer over it.
///
/// Either layer may be missing; with neither present the default
/// (empty) configuration is returned.
pub fn load_layered_config(
    project_dir: &Path,
    global_dir: Option<&Path>,
) -> Result<PluginConfig> {
    let global = match global_dir.and_then(find_config_file_in) {
        Some(path) => load_config_from_file(&path)?.config,
        None => PluginConfig::default(),
    };

    let project = match find_config_file_in(project_dir) {
        Some(path) => load_config_from_file(&path)?.config,
        None => PluginConfig::default(),
    };

    Ok(global.merge(project))
}

fn parse_config_content(content: &str, format: ConfigFormat) -> Result<PluginConfig> {
    match format {
        ConfigFormat::Jsonc => json5::from_str(content).context("Failed to parse JSONC"),
        ConfigFormat::Json => serde_json::from_str(content).context("Failed to parse JSON"),
        ConfigFormat::Yaml => serde_yaml_ng::from_str(content).context("Failed to parse YAML"),
    }
}

pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.exists())
}

fn expand_env_vars(mut config: PluginConfig) -> PluginConfig {
    for over in config.agents.values_mut() {
        if let Some(model) = &over.model {
            over.model = Some(expand_env_string(model));
        }
    }
    config
}

fn expand_env_string(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        if chars.peek() == Some(&'{') {
            chars.next();
            let var_name: String = chars.by_ref().take_while(|&c| c != '}').collect();
            match env::var(&var_name) {
                Ok(value) => result.push_str(&value),
                Err(_) => {
                    result.push_str("${");
                    result.push_str(&var_name);
                    result.push('}');
                }
            }
            continue;
        }

        let mut var_name = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                var_name.push(c);
                chars.next();
            } else {
                break;
            }
        }

        if var_name.is_empty() {
            result.push('$');
        } else if let Ok(value) = env::var(&var_name) {
            result.push_str(&value);
        } else {
            result.push('$');
            result.push_str(&var_name);
        }
    }

    result
}
