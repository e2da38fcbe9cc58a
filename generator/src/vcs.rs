use std::fmt;

use serde::Serialize;

/// Version control systems understood by `go get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vcs {
    Bzr,
    Git,
    Hg,
    Svn,
}

impl Vcs {
    pub const ALL: [Self; 4] = [Self::Bzr, Self::Git, Self::Hg, Self::Svn];

    /// Parse the identifier used in the vanity config, e.g. `git`.
    /// Matching is exact: `Git` is not accepted.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|vcs| vcs.as_str() == s)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bzr => "bzr",
            Self::Git => "git",
            Self::Hg => "hg",
            Self::Svn => "svn",
        }
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known() {
        assert_eq!(Vcs::parse("bzr"), Some(Vcs::Bzr));
        assert_eq!(Vcs::parse("git"), Some(Vcs::Git));
        assert_eq!(Vcs::parse("hg"), Some(Vcs::Hg));
        assert_eq!(Vcs::parse("svn"), Some(Vcs::Svn));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(Vcs::parse("fossil"), None);
        assert_eq!(Vcs::parse("Git"), None);
        assert_eq!(Vcs::parse(""), None);
    }

    #[test]
    fn display_matches_identifier() {
        for vcs in Vcs::ALL {
            assert_eq!(vcs.to_string(), vcs.as_str());
            assert_eq!(Vcs::parse(&vcs.to_string()), Some(vcs));
        }
    }
}
