use std::collections::BTreeMap;

use crate::{
    config::{Config, PathConfig},
    error::{Error, Result},
    vcs::Vcs,
};

const GITHUB_PREFIX: &str = "https://github.com/";
const BITBUCKET_PREFIX: &str = "https://bitbucket.org";

/// A vanity path after normalization and inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// URL path without the trailing `/`, e.g. `/mycoolproject`.
    pub path: String,
    pub repository: String,
    /// `go-source` browse template: `<base> <dir> <file#line>`.
    /// Empty when neither given nor inferable.
    pub display: String,
    pub vcs: Vcs,
    /// Sub-packages that get a copy of the page at `path/<name>`.
    pub package_names: Vec<String>,
}

impl PathEntry {
    pub fn new(key: &str, config: &PathConfig) -> Result<Self> {
        Ok(Self {
            path: normalize(key).to_string(),
            repository: config.repo.clone(),
            display: infer_display(&config.repo, config.display.as_deref()),
            vcs: infer_vcs(key, &config.repo, config.vcs.as_deref())?,
            package_names: config.packages.clone(),
        })
    }

    /// `path` followed by `path/<name>` for every package name.
    pub fn target_paths(&self) -> Vec<String> {
        target_paths(&self.path, &self.package_names)
    }
}

pub fn target_paths(path: &str, package_names: &[String]) -> Vec<String> {
    std::iter::once(path.to_string())
        .chain(package_names.iter().map(|name| format!("{path}/{name}")))
        .collect()
}

/// Parse a vanity file into its config and the normalized entries, keyed by path.
///
/// The first invalid entry fails the whole parse.
pub fn parse(raw: &[u8]) -> Result<(Config, BTreeMap<String, PathEntry>)> {
    let config = Config::from_slice(raw)?;
    let entries = entries(&config)?;
    Ok((config, entries))
}

pub fn entries(config: &Config) -> Result<BTreeMap<String, PathEntry>> {
    let mut ret = BTreeMap::new();
    for (key, path_config) in &config.paths {
        let entry = PathEntry::new(key, path_config)?;
        // `/foo/` and `/foo` collapse into one entry, the later key wins
        ret.insert(entry.path.clone(), entry);
    }
    Ok(ret)
}

/// Strip a single trailing `/`.
pub fn normalize(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

fn infer_display(repo: &str, display: Option<&str>) -> String {
    match display {
        Some(display) if !display.is_empty() => display.to_string(),
        _ if repo.starts_with(GITHUB_PREFIX) => {
            format!("{repo} {repo}/tree/master{{/dir}} {repo}/blob/master{{/dir}}/{{file}}#L{{line}}")
        }
        _ if repo.starts_with(BITBUCKET_PREFIX) => {
            format!("{repo} {repo}/src/default{{/dir}} {repo}/src/default{{/dir}}/{{file}}#{{file}}-{{line}}")
        }
        _ => String::new(),
    }
}

fn infer_vcs(key: &str, repo: &str, vcs: Option<&str>) -> Result<Vcs> {
    match vcs {
        Some(value) if !value.is_empty() => Vcs::parse(value).ok_or_else(|| Error::UnknownVcs {
            path: key.to_string(),
            value: value.to_string(),
        }),
        _ if repo.starts_with(GITHUB_PREFIX) => Ok(Vcs::Git),
        _ => Err(Error::VcsInference {
            path: key.to_string(),
            repository: repo.to_string(),
        }),
    }
}
