#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

mod app;
mod assets;
mod terminal;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use kanban_engine::{AssetSource, Banner, DirectoryAssets, FontVariant, GlyphTable};

use crate::{assets::EmbeddedAssets, terminal::CrosstermSurface};

pub type KanbanResult<T> = anyhow::Result<T>;

/// Shows text as a huge pixel banner, quit with Esc, Ctrl-C or q.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Banner lines, one per argument
    #[arg(value_name = "LINES")]
    lines: Vec<String>,

    /// Font for full-width characters: mincho or gothic
    #[arg(short, long, default_value = "mincho")]
    font: FontVariant,

    /// Load the Misaki font sheets from this directory instead of the bundled ones
    #[arg(long, value_name = "DIR", env = "KANBAN_FONT_DIR")]
    font_dir: Option<PathBuf>,
}

impl Args {
    fn asset_source(&self) -> (Box<dyn AssetSource>, String) {
        match &self.font_dir {
            Some(dir) => (Box::new(DirectoryAssets::new(dir)), dir.display().to_string()),
            None => (Box::new(EmbeddedAssets), "the bundled sheets".to_string()),
        }
    }
}

fn get_log_dir() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join("kanban");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn start_logger() -> Option<LoggerHandle> {
    let log_dir = get_log_dir()?;
    Logger::try_with_env_or_str("info")
        .ok()?
        .log_to_file(FileSpec::default().directory(&log_dir).basename("kanban").suffix("log").suppress_timestamp())
        .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
        .start()
        .ok()
}

/// Without lines there is nothing to show: no logger, no fonts, no terminal.
fn run(args: &Args) -> KanbanResult<()> {
    if args.lines.is_empty() {
        return Ok(());
    }

    let _logger = start_logger();
    log::info!("Starting kanban {}", env!("CARGO_PKG_VERSION"));
    let result = show(args);
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}

fn show(args: &Args) -> KanbanResult<()> {
    let (assets, origin) = args.asset_source();
    log::info!("loading {} font from {origin}", args.font);
    let table = GlyphTable::load(args.font, assets.as_ref()).with_context(|| format!("failed to load the {} font from {origin}", args.font))?;

    let banner = Banner::new(&args.lines);
    let mut surface = CrosstermSurface::open().context("failed to set up the terminal")?;
    app::run(&mut surface, &table, &banner).context("failed to show the banner")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("kanban: {err:#}");
        std::process::exit(1);
    }
}
