mod debug;
mod dump;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use folio_core::{Block, ConfigError, ExtractError, ExtractorConfig, PageExtractor};
use serde::Serialize;
use snafu::{ResultExt, Snafu};
use tracing_subscriber::EnvFilter;

use crate::debug::{DebugOutputError, DebugWriter};
use crate::dump::DumpSource;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about = "Assemble page blocks from recorded layout/OCR output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract the blocks of every page in a layout dump
    Extract {
        /// Dump directory containing manifest.json and page images
        dump: PathBuf,

        /// Config file (default: <config dir>/folio/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Recognition language hint, overrides the config
        #[arg(long)]
        lang: Option<String>,

        /// Write per-page debug output here, overrides the config
        #[arg(long)]
        debug_dir: Option<PathBuf>,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Snafu)]
enum CliError {
    #[snafu(display("failed to load configuration"))]
    LoadConfig { source: ConfigError },
    #[snafu(display("failed to extract page blocks"))]
    Extract { source: ExtractError },
    #[snafu(display("failed to write debug output"))]
    DebugOutput { source: DebugOutputError },
    #[snafu(display("failed to serialize extracted pages"))]
    SerializeOutput { source: serde_json::Error },
    #[snafu(display("failed to write output to {path:?}"))]
    WriteOutput { path: PathBuf, source: io::Error },
}

#[derive(Serialize)]
struct PageOutput {
    page: usize,
    blocks: Vec<Block>,
}

#[snafu::report]
fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract {
            dump,
            config,
            lang,
            debug_dir,
            output,
        } => {
            let mut settings = ExtractorConfig::load(config.as_deref()).context(LoadConfigSnafu)?;
            if let Some(lang) = lang {
                settings.lang = lang;
            }
            if debug_dir.is_some() {
                settings.debug_dir = debug_dir;
            }
            let settings = settings.normalized();
            run_extract(&dump, &settings, output)
        }
    }
}

fn run_extract(
    dump: &Path,
    settings: &ExtractorConfig,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let debug_writer = settings
        .debug_dir
        .as_deref()
        .map(DebugWriter::create)
        .transpose()
        .context(DebugOutputSnafu)?;

    let extractor = PageExtractor::new();
    let mut pages = Vec::new();
    for (index, blocks) in extractor
        .extract(&DumpSource, dump, &settings.lang)
        .context(ExtractSnafu)?
        .enumerate()
    {
        let blocks = blocks.context(ExtractSnafu)?;
        if let Some(writer) = &debug_writer {
            writer.write_page(index, &blocks).context(DebugOutputSnafu)?;
        }
        pages.push(PageOutput {
            page: index + 1,
            blocks,
        });
    }
    tracing::info!(pages = pages.len(), "extracted document");

    let content = serde_json::to_string_pretty(&pages).context(SerializeOutputSnafu)?;
    match output {
        Some(path) => fs::write(&path, content).context(WriteOutputSnafu { path })?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}").context(WriteOutputSnafu {
                path: PathBuf::from("<stdout>"),
            })?;
        }
    }
    Ok(())
}
