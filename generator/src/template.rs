use std::fmt::Write as _;

use minijinja::{AutoEscape, Environment, ErrorKind, Output, State, UndefinedBehavior, Value};
use serde::Serialize;

use crate::{
    error::{Error, Result},
    path::PathEntry,
    vcs::Vcs,
};

pub const INDEX_TEMPLATE_NAME: &str = "index.html";
pub const PROJECT_TEMPLATE_NAME: &str = "project.html";

/// Context of the index template.
#[derive(Debug, Serialize)]
pub struct IndexContext<'a> {
    pub host: &'a str,
    /// Fully qualified import paths, `host + path`.
    pub paths: Vec<String>,
    pub entries: Vec<IndexEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct IndexEntry<'a> {
    pub import: String,
    pub repo: &'a str,
}

/// Context of the per path template.
#[derive(Debug, Serialize)]
pub struct EntryContext<'a> {
    pub import: String,
    pub repo: &'a str,
    pub display: &'a str,
    pub vcs: Vcs,
    pub host: &'a str,
}

impl<'a> IndexContext<'a> {
    pub fn new(host: &'a str, entries: impl IntoIterator<Item = &'a PathEntry>) -> Self {
        let entries: Vec<_> = entries
            .into_iter()
            .map(|e| IndexEntry {
                import: format!("{}{}", host, e.path),
                repo: &e.repository,
            })
            .collect();

        Self {
            host,
            paths: entries.iter().map(|e| e.import.clone()).collect(),
            entries,
        }
    }
}

impl<'a> EntryContext<'a> {
    pub fn new(host: &'a str, entry: &'a PathEntry) -> Self {
        Self {
            import: format!("{}{}", host, entry.path),
            repo: &entry.repository,
            display: &entry.display,
            vcs: entry.vcs,
            host,
        }
    }
}

/// Holds the template environment. Templates are compiled from source on
/// every [`Renderer::compile`] call and never cached.
pub struct Renderer<'source> {
    env: Environment<'source>,
}

impl Default for Renderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'source> Renderer<'source> {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_formatter(html_formatter);
        Self { env }
    }

    pub fn compile(
        &self,
        name: &'source str,
        source: &'source str,
    ) -> Result<minijinja::Template<'_, 'source>> {
        self.env
            .template_from_named_str(name, source)
            .map_err(Error::TemplateSyntax)
    }

    pub fn render_index(&self, source: &'source str, ctx: &IndexContext<'_>) -> Result<Vec<u8>> {
        let template = self.compile(INDEX_TEMPLATE_NAME, source)?;
        render(&template, ctx)
    }

    pub fn render_entry(&self, source: &'source str, ctx: &EntryContext<'_>) -> Result<Vec<u8>> {
        let template = self.compile(PROJECT_TEMPLATE_NAME, source)?;
        render(&template, ctx)
    }
}

pub fn render(template: &minijinja::Template<'_, '_>, ctx: impl Serialize) -> Result<Vec<u8>> {
    template
        .render(ctx)
        .map(String::into_bytes)
        .map_err(Error::TemplateExecution)
}

/// Escape like Go's `html/template` does for text: `/` is left alone so
/// URLs survive inside attributes.
pub fn escape_html(s: &str) -> String {
    let mut ret = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => ret.push_str("&amp;"),
            '<' => ret.push_str("&lt;"),
            '>' => ret.push_str("&gt;"),
            '"' => ret.push_str("&#34;"),
            '\'' => ret.push_str("&#39;"),
            c => ret.push(c),
        }
    }
    ret
}

fn html_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), minijinja::Error> {
    if !matches!(state.auto_escape(), AutoEscape::Html)
        || value.is_safe()
        || value.is_undefined()
        || value.is_none()
    {
        return minijinja::escape_formatter(out, state, value);
    }

    write!(out, "{}", escape_html(&value.to_string()))
        .map_err(|_| minijinja::Error::new(ErrorKind::WriteFailure, "failed to write output"))
}
