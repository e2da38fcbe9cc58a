use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::Deserialize;

pub const DEFAULT_OUT_PATH: &str = "./gen";

/// Settings of one run, from a settings file and/or the command line.
///
/// ```yaml
/// file: vanity.yml
/// template:
///   index: templates/index.html
///   project: templates/project.html
/// out-path: public
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub file: Option<PathBuf>,
    pub template: TemplateSettings,
    pub out_path: Option<PathBuf>,
    pub debug: bool,
    pub minify: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    pub index: Option<PathBuf>,
    pub project: Option<PathBuf>,
}

/// Validated settings, every input is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub file: PathBuf,
    pub index_template: PathBuf,
    pub project_template: PathBuf,
    pub out_path: PathBuf,
    pub debug: bool,
    pub minify: bool,
}

impl Settings {
    pub fn from_slice(raw: &[u8]) -> anyhow::Result<Self> {
        serde_yaml::from_slice(raw).context("failed to parse settings")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::from_slice(&raw)
    }

    /// Values set in `other` win. Flags are switched on by either side.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            file: other.file.or(self.file),
            template: TemplateSettings {
                index: other.template.index.or(self.template.index),
                project: other.template.project.or(self.template.project),
            },
            out_path: other.out_path.or(self.out_path),
            debug: self.debug || other.debug,
            minify: self.minify || other.minify,
        }
    }

    pub fn resolve(self) -> anyhow::Result<Run> {
        let (Some(index_template), Some(project_template)) =
            (self.template.index, self.template.project)
        else {
            anyhow::bail!("template not defined");
        };
        let file = self.file.context("vanity file not defined")?;

        Ok(Run {
            file,
            index_template,
            project_template,
            out_path: self
                .out_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_PATH)),
            debug: self.debug,
            minify: self.minify,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Settings {
        Settings {
            file: Some("vanity.yml".into()),
            template: TemplateSettings {
                index: Some("index.html".into()),
                project: Some("project.html".into()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn parse() {
        let raw = b"
file: vanity.yml
template:
  index: t/index.html
  project: t/project.html
out-path: public
minify: true
";
        let settings = Settings::from_slice(raw).unwrap();
        assert_eq!(settings.file, Some("vanity.yml".into()));
        assert_eq!(settings.template.index, Some("t/index.html".into()));
        assert_eq!(settings.template.project, Some("t/project.html".into()));
        assert_eq!(settings.out_path, Some("public".into()));
        assert!(settings.minify);
        assert!(!settings.debug);
    }

    #[test]
    fn parse_error() {
        assert!(Settings::from_slice(b"template: [1, 2").is_err());
    }

    #[test]
    fn merge_prefers_other() {
        let base = Settings {
            out_path: Some("base".into()),
            debug: true,
            ..full()
        };
        let cli = Settings {
            template: TemplateSettings {
                index: Some("cli.html".into()),
                project: None,
            },
            out_path: Some("cli".into()),
            ..Default::default()
        };

        let merged = base.merge(cli);
        assert_eq!(merged.file, Some("vanity.yml".into()));
        assert_eq!(merged.template.index, Some("cli.html".into()));
        assert_eq!(merged.template.project, Some("project.html".into()));
        assert_eq!(merged.out_path, Some("cli".into()));
        assert!(merged.debug);
    }

    #[test]
    fn resolve_defaults() {
        let run = full().resolve().unwrap();
        assert_eq!(run.out_path, Path::new(DEFAULT_OUT_PATH));
        assert_eq!(run.file, Path::new("vanity.yml"));
        assert!(!run.minify);
    }

    #[test]
    fn resolve_missing_template() {
        let mut settings = full();
        settings.template.project = None;
        let err = settings.resolve().unwrap_err();
        assert_eq!(err.to_string(), "template not defined");
    }

    #[test]
    fn resolve_missing_file() {
        let mut settings = full();
        settings.file = None;
        assert!(settings.resolve().is_err());
    }
}
