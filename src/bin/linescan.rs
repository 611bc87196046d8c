// linescan <inputfile> [outputfile]
//
// Scans the image for a line and flood-fills it. With an output file, the
// point stream is written there (line 1 is the image SIZE, not a point);
// otherwise the repainted image is shown in a window.

use clap::Parser;
use linescan::draw::Drawer;
use linescan::{Config, Error, Result, Scanner};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Find a line in a raster image and flood-fill it",
    long_about = None
)]
struct Cli {
    /// Image to scan
    input: PathBuf,
    /// Where to write the point stream
    output: Option<PathBuf>,
    /// Show the repainted image even when writing a point stream
    #[arg(long)]
    show: bool,
    /// TOML file with scan settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the foreground distance threshold (0..=1)
    #[arg(short, long)]
    threshold: Option<f64>,
}

fn main() {
    linescan::init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        Err(Error::NoSeedFound) => info!("No foreground pixel found, nothing to fill"),
        Err(e) => error!("{e}"),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(t) = cli.threshold {
        config.scan.threshold = t;
    }

    let scanner = Scanner::new(config.scan)?;
    let outcome = scanner.scan_path(&cli.input)?;

    match &cli.output {
        Some(path) => {
            outcome.stream().save(path)?;
            info!("Done. Points written to {}", path.display());
        }
        None => info!("Pass an output file to save results."),
    }

    if cli.output.is_none() || cli.show {
        let frame = outcome.buffer.to_frame();
        let mut drawer = Drawer::new("linescan", frame.width, frame.height)?;
        drawer.hold(&frame)?;
    }
    Ok(())
}
