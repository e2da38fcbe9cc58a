use std::{collections::BTreeMap, fs, path::Path};

use crate::{
    error::{Error, Result},
    path::{self, PathEntry},
    template::{self, EntryContext, IndexContext, Renderer},
};

/// Holds the parsed vanity paths of one run and renders them.
#[derive(Debug, Clone)]
pub struct Generator {
    host: String,
    paths: BTreeMap<String, PathEntry>,
}

/// The page rendered for one [`PathEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub path: String,
    pub package_names: Vec<String>,
    pub content: Vec<u8>,
}

impl RenderedDocument {
    /// Every location the content should be written to: the path itself and
    /// one sub-path per package name.
    pub fn target_paths(&self) -> Vec<String> {
        path::target_paths(&self.path, &self.package_names)
    }
}

impl Generator {
    pub fn new(vanity: &[u8]) -> Result<Self> {
        let (config, paths) = path::parse(vanity)?;
        Ok(Self {
            host: config.host,
            paths,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::new(&raw)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// All entries, ordered by path.
    pub fn paths(&self) -> impl ExactSizeIterator<Item = &PathEntry> {
        self.paths.values()
    }

    /// Look up one entry. `/foo/` finds `/foo`.
    pub fn path(&self, path: &str) -> Option<&PathEntry> {
        self.paths.get(path::normalize(path))
    }

    /// Render the index page listing every path.
    pub fn index(&self, template: &str) -> Result<Vec<u8>> {
        let ctx = IndexContext::new(&self.host, self.paths.values());
        Renderer::new().render_index(template, &ctx)
    }

    /// Render the page of every path. The template is compiled once per call.
    pub fn project(&self, template: &str) -> Result<Vec<RenderedDocument>> {
        let renderer = Renderer::new();
        let compiled = renderer.compile(template::PROJECT_TEMPLATE_NAME, template)?;

        self.paths
            .values()
            .map(|entry| -> Result<RenderedDocument> {
                let content = template::render(&compiled, EntryContext::new(&self.host, entry))?;
                Ok(RenderedDocument {
                    path: entry.path.clone(),
                    package_names: entry.package_names.clone(),
                    content,
                })
            })
            .collect()
    }
}
