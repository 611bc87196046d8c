// drawpoints <imagefile|pointsfile>
//
// Animates a line being traced, pixel batch by pixel batch. An image argument
// is scanned first; anything else is read as a point stream.

use clap::Parser;
use linescan::animate::{self, Animation, Tick};
use linescan::draw::Drawer;
use linescan::scan::load_image;
use linescan::{Config, Coordinate, Error, PointReader, Result, Scanner, Size};
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about = "Replay a scanned line as an animation", long_about = None)]
struct Cli {
    /// Image to scan, or a point stream written by linescan
    path: PathBuf,
    /// TOML file with scan and animation settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

type Points = Box<dyn Iterator<Item = Result<Coordinate>>>;

fn main() {
    linescan::init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        Err(Error::NoSeedFound) => info!("No foreground pixel found, nothing to draw"),
        Err(e) => error!("{e}"),
    }
}

/// Scan inline when the file decodes as an image, else stream points from it.
fn open_points(path: &Path, config: &Config) -> Result<(Size, Points)> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    info!("Reading data from {}", path.display());

    match load_image(path) {
        Ok(img) => {
            info!("Image file provided. Running linescan...");
            let outcome = Scanner::new(config.scan.clone())?.scan_image(img)?;
            let points: Points = Box::new(outcome.visited.into_iter().map(Ok));
            Ok((outcome.size, points))
        }
        Err(Error::UnreadableImage { .. }) => {
            let reader = PointReader::open(path)?;
            let size = reader.size();
            let points: Points = Box::new(reader);
            Ok((size, points))
        }
        Err(e) => Err(e),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let (size, points) = open_points(&cli.path, &config)?;

    let mut drawer = Drawer::new("Line Animation", size.width as usize, size.height as usize)?;
    let mut animation = Animation::new(size, points, &config.animation);

    if animate::run(&mut animation, &mut drawer, config.animation.interval())? == Tick::Done {
        info!("{} points drawn", animation.drawn());
        drawer.hold(animation.canvas())?;
    }
    Ok(())
}
