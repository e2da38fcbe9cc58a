use std::path::PathBuf;

use clap::Parser;
use vanity_gen::{
    build,
    settings::{Settings, TemplateSettings},
};

/// Generate vanity import path pages from templates.
///
/// Templates are usually small html files: one index listing every path and
/// one page per path carrying the `go-import` and `go-source` meta tags.
#[derive(Parser)]
#[command(name = "vanity-gen", version)]
struct Cli {
    /// YAML file with settings, overridden by the flags below
    #[arg(short, long, env = "VANITY_GEN_CONFIG")]
    config: Option<PathBuf>,

    /// File containing vanity redirection paths (yml)
    #[arg(short, long, env = "VANITY_GEN_FILE")]
    file: Option<PathBuf>,

    /// Path to html template for the index
    #[arg(short, long, env = "VANITY_GEN_INDEX")]
    index: Option<PathBuf>,

    /// Path to html template for projects
    #[arg(short, long, env = "VANITY_GEN_PROJECT")]
    project: Option<PathBuf>,

    /// Directory where output files are generated [default: ./gen]
    #[arg(short, long, env = "VANITY_GEN_OUT_PATH")]
    out_path: Option<PathBuf>,

    /// Print detailed logs
    #[arg(short, long, env = "VANITY_GEN_DEBUG")]
    debug: bool,

    /// Minify the generated html
    #[arg(long, env = "VANITY_GEN_MINIFY")]
    minify: bool,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            file: cli.file,
            template: TemplateSettings {
                index: cli.index,
                project: cli.project,
            },
            out_path: cli.out_path,
            debug: cli.debug,
            minify: cli.minify,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    let base = match cli.config.take() {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let run = base.merge(cli.into()).resolve()?;

    let level = if run.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder().filter_level(level).init();

    build(&run)?;

    Ok(())
}
