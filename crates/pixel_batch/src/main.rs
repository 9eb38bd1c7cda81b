use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use pixel_engine::export::{self, ExportOptions};
use pixel_engine::{CanvasSession, EditorSettings};

mod script;

use script::Runner;

#[derive(Parser)]
#[command(version, about = "Replays a pixel art command script and exports the result as PNG.")]
pub struct Cli {
    #[arg(help = "Command script to run.")]
    script: PathBuf,

    #[arg(help = "Write the final composite to this PNG file.", short, long)]
    output: Option<PathBuf>,

    #[arg(help = "Canvas size (16, 32 or 64), overrides the settings.", long)]
    size: Option<usize>,

    #[arg(help = "Export resolution in pixels, overrides the settings.", long)]
    resolution: Option<u32>,

    #[arg(help = "Settings file to use instead of the user settings.", long)]
    config: Option<PathBuf>,

    #[arg(help = "Directory for rotating log files.", long)]
    log_file: Option<PathBuf>,
}

fn start_logger(log_dir: Option<&Path>) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str("info")?;
    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("pixel_batch").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(Duplicate::Warn),
        None => logger.log_to_stderr(),
    };
    Ok(logger.start()?)
}

fn load_settings(args: &Cli) -> Result<EditorSettings> {
    let mut settings = match &args.config {
        Some(path) => EditorSettings::load_from(path).with_context(|| format!("can't load settings from {}", path.display()))?,
        None => EditorSettings::load(),
    };
    if let Some(size) = args.size {
        settings.canvas_size = size;
    }
    if let Some(resolution) = args.resolution {
        settings.export_resolution = resolution;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let _logger = start_logger(args.log_file.as_deref())?;

    let settings = load_settings(&args)?;
    let session = CanvasSession::with_settings(&settings)?;
    log::info!("Canvas {0}x{0}, {1} history entries", session.size(), session.history().limit());

    let text = fs::read_to_string(&args.script).with_context(|| format!("can't read script {}", args.script.display()))?;
    let commands = script::parse_script(&text)?;

    let mut runner = Runner::new(session, ExportOptions::with_resolution(settings.export_resolution));
    runner.run(&commands)?;
    log::info!("Ran {} commands from {}", commands.len(), args.script.display());

    if let Some(output) = &args.output {
        export::save_png(output, &runner.session.composite(), &runner.export_options)?;
    }
    Ok(())
}
