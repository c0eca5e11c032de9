use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template is missing placeholder {placeholder}")]
    MissingPlaceholder { placeholder: String },
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("failed to render prompt for agent '{agent}'")]
    Template {
        agent: String,
        #[source]
        source: TemplateError,
    },
}
