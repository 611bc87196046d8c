// One error type for the whole crate.
// Every variant states *where* things went wrong.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No such file '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to open image file '{}': {source}", path.display())]
    UnreadableImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfRange { x: i64, y: i64, width: u32, height: u32 },

    #[error("Malformed point on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("No foreground pixel found")]
    NoSeedFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Window init error: {0}")]
    WindowInit(String),

    #[error("Window update error: {0}")]
    WindowUpdate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
