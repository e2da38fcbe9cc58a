use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not parse vanity config: {0}")]
    MalformedConfig(#[from] serde_yaml::Error),

    #[error("configuration for {path}: unknown VCS {value}")]
    UnknownVcs { path: String, value: String },

    #[error("configuration for {path}: cannot infer VCS from {repository}")]
    VcsInference { path: String, repository: String },

    #[error("failed to compile template: {0}")]
    TemplateSyntax(#[source] minijinja::Error),

    #[error("failed to render template: {0}")]
    TemplateExecution(#[source] minijinja::Error),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("target path `{path}` points outside the output directory")]
    InvalidTarget { path: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
