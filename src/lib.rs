//! # linescan
//!
//! Finds a continuous line in a raster image (dark on light, or light on dark),
//! flood-fills it from the first line pixel in reading order, and records every
//! coordinate the fill considered. That ordered record can be written as a
//! point stream and replayed as an animation.
//!
//! ```rust,no_run
//! use linescan::{ScanConfig, Scanner};
//!
//! let scanner = Scanner::new(ScanConfig::default())?;
//! let outcome = scanner.scan_path("line.png")?;
//! outcome.stream().save("points.txt")?;
//! # Ok::<(), linescan::Error>(())
//! ```

pub mod animate;
pub mod buffer;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod fill;
pub mod locate;
pub mod scan;
pub mod stream;
pub mod types;

pub use animate::{Animation, Surface, Tick};
pub use buffer::PixelBuffer;
pub use color::{Class, Classifier, Color, Polarity, distance};
pub use config::{AnimationConfig, Config, ScanConfig};
pub use error::{Error, Result};
pub use fill::{FillResult, flood_fill};
pub use locate::{Direction, find_next};
pub use scan::{ScanOutcome, Scanner};
pub use stream::{CoordinateStream, PointReader};
pub use types::{Coordinate, FrameBuffer, Size};

use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
