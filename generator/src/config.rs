use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use crate::error::{Error, Result};

/// The vanity file as written by the user.
///
/// ```yaml
/// host: go.example.com
/// paths:
///   /mycoolproject:
///     repo: https://github.com/user/mycoolproject
///     packages:
///       - pkg/package1
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub paths: BTreeMap<String, PathConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathConfig {
    #[serde(default)]
    pub repo: String,
    pub display: Option<String>,
    pub vcs: Option<String>,
    #[serde(default)]
    pub packages: Vec<String>,
}

impl Config {
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        // an empty document is an empty config, not a parse error
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_slice(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::from_slice(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fixture() {
        let config = Config::from_slice(include_bytes!("../tests/vanity.yaml")).unwrap();

        assert_eq!(config.host, "go.example.com");
        assert_eq!(config.paths.len(), 2);

        let mcp = &config.paths["/mycoolproject"];
        assert_eq!(mcp.repo, "https://github.com/user/mycoolproject");
        assert_eq!(mcp.packages, ["pkg/package1", "pkg/package2"]);
        assert!(mcp.display.is_none());
        assert!(mcp.vcs.is_none());

        assert!(config.paths["/myothercoolproject"].packages.is_empty());
    }

    #[test]
    fn parse_explicit_fields() {
        let raw = b"
host: example.org
paths:
  /tool:
    repo: https://hg.example.org/tool
    vcs: hg
    display: a b c
";
        let config = Config::from_slice(raw).unwrap();
        let tool = &config.paths["/tool"];
        assert_eq!(tool.vcs.as_deref(), Some("hg"));
        assert_eq!(tool.display.as_deref(), Some("a b c"));
    }

    #[test]
    fn empty_document() {
        let config = Config::from_slice(b"  \n").unwrap();
        assert!(config.host.is_empty());
        assert!(config.paths.is_empty());
    }

    #[test]
    fn malformed() {
        let res = Config::from_slice(b"host: [unclosed");
        assert!(matches!(res, Err(Error::MalformedConfig(_))));

        let res = Config::from_slice(b"paths: 42");
        assert!(matches!(res, Err(Error::MalformedConfig(_))));
    }

    #[test]
    fn missing_file() {
        let res = Config::from_file("tests/does_not_exist.yaml");
        assert!(matches!(res, Err(Error::Io { .. })));
    }
}
