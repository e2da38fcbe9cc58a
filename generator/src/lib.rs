use std::{fs, path::Path};

use anyhow::Context as _;

pub mod config;
mod error;
mod generator;
pub mod output;
pub mod path;
pub mod settings;
pub mod template;
mod vcs;

pub use error::{Error, Result};
pub use generator::{Generator, RenderedDocument};
pub use path::PathEntry;
pub use vcs::Vcs;

/// Read the inputs of `run`, render every page and write them to `run.out_path`.
pub fn build(run: &settings::Run) -> anyhow::Result<()> {
    log::info!("read vanity config from: {}", run.file.display());
    let generator = Generator::from_file(&run.file)?;

    for entry in generator.paths() {
        log::debug!(
            "path {}: {} {} (packages: {:?})",
            entry.path,
            entry.vcs,
            entry.repository,
            entry.package_names
        );
    }

    let index_template = read_template(&run.index_template)?;
    let project_template = read_template(&run.project_template)?;

    log::info!("create dest dir: {}", run.out_path.display());
    fs::create_dir_all(&run.out_path)
        .with_context(|| format!("failed to create {}", run.out_path.display()))?;

    log::info!("build index");
    let index = generator
        .index(&index_template)
        .context("failed to generate index")?;
    output::write_index(&run.out_path, &index, run.minify).context("failed to write index")?;

    log::info!("build {} project pages", generator.paths().len());
    let documents = generator
        .project(&project_template)
        .context("failed to generate project files")?;
    output::write_documents(&run.out_path, &documents, run.minify)
        .context("failed to write project files")?;

    Ok(())
}

fn read_template(path: &Path) -> anyhow::Result<String> {
    log::info!("read template from: {}", path.display());
    fs::read_to_string(path).with_context(|| format!("failed to read file {}", path.display()))
}
