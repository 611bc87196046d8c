// End-to-end scan: load, decide polarity, locate the seed, fill, report.

use crate::buffer::PixelBuffer;
use crate::color::{Classifier, Color, Polarity};
use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::fill::flood_fill;
use crate::locate::{Direction, find_next};
use crate::stream::CoordinateStream;
use crate::types::{Coordinate, Size};
use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;
use tracing::{debug, info};

/// Everything a scan produced. `buffer` holds the repainted image.
pub struct ScanOutcome {
    pub size: Size,
    pub polarity: Polarity,
    pub seed: Coordinate,
    pub visited: Vec<Coordinate>,
    pub repainted: usize,
    pub buffer: PixelBuffer,
}

impl ScanOutcome {
    /// The replay script: size record followed by the visited coordinates.
    pub fn stream(&self) -> CoordinateStream {
        CoordinateStream::new(self.size, self.visited.clone())
    }
}

pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn scan_path<P: AsRef<Path>>(&self, path: P) -> Result<ScanOutcome> {
        let path = path.as_ref();
        let img = load_image(path)?;
        info!("Loading image {}", path.display());
        self.scan_image(img)
    }

    pub fn scan_image(&self, img: DynamicImage) -> Result<ScanOutcome> {
        info!("{:?} {}x{}", img.color(), img.width(), img.height());
        self.scan_buffer(PixelBuffer::from_image(img))
    }

    pub fn scan_buffer(&self, mut buffer: PixelBuffer) -> Result<ScanOutcome> {
        let size = buffer.size();
        if size.area() == 0 {
            return Err(Error::NoSeedFound);
        }

        // Determine if we're dealing with a black or white background
        let corner = buffer.get(Coordinate::ORIGIN)?;
        let polarity = Polarity::from_background(corner);
        info!("First pixel: {}", show(corner));
        info!("Brightness: {:.2}", corner.brightness());
        info!("Inverted: {}", polarity.is_inverted());

        let classifier = Classifier::new(polarity, self.config.threshold);
        debug!("target {:?}, threshold {}", classifier.target, classifier.threshold);
        let seed = find_next(&buffer, Coordinate::ORIGIN, Direction::Forward, &classifier)?
            .ok_or(Error::NoSeedFound)?;
        info!(
            "Found {} pixel at {}: {}",
            polarity.describe(),
            seed,
            show(buffer.get(seed)?)
        );

        let result = flood_fill(&mut buffer, seed, &classifier, self.config.fill_color());
        info!(
            "Found {} {} pixels ({} coordinates visited)",
            result.repainted,
            polarity.describe(),
            result.visited.len()
        );

        Ok(ScanOutcome {
            size,
            polarity,
            seed,
            visited: result.visited,
            repainted: result.repainted,
            buffer,
        })
    }
}

/// Open and decode an image, telling a missing file apart from a bad one.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let unreadable = |source: ImageError| Error::UnreadableImage {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(unreadable)
}

fn show(c: Color) -> String {
    match c {
        Color::Rgb([r, g, b]) => format!("({r}, {g}, {b})"),
        Color::Rgba([r, g, b, a]) => format!("({r}, {g}, {b}, {a})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLUE;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn scanner() -> Scanner {
        Scanner::new(ScanConfig::default()).unwrap()
    }

    #[test]
    fn test_dark_line_on_white() {
        let mut img = RgbImage::from_pixel(20, 10, Rgb([255, 255, 255]));
        for x in 3..15 {
            img.put_pixel(x, 4, Rgb([10, 10, 10]));
        }
        let out = scanner().scan_image(DynamicImage::ImageRgb8(img)).unwrap();

        assert_eq!(out.polarity, Polarity::Normal);
        assert_eq!(out.seed, Coordinate::new(3, 4));
        assert_eq!(out.repainted, 12);
        assert_eq!(out.visited[0], out.seed);
        assert_eq!(out.buffer.get(Coordinate::new(14, 4)).unwrap(), BLUE);

        let stream = out.stream();
        assert_eq!(stream.size, Size::new(20, 10));
        assert_eq!(stream.points, out.visited);
    }

    #[test]
    fn test_light_line_on_black() {
        let mut img = RgbImage::new(8, 8);
        img.put_pixel(2, 6, Rgb([255, 255, 255]));
        img.put_pixel(3, 7, Rgb([240, 240, 240]));
        let out = scanner().scan_image(DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(out.polarity, Polarity::Inverted);
        assert_eq!(out.seed, Coordinate::new(2, 6));
        assert_eq!(out.repainted, 2);
    }

    #[test]
    fn test_blank_image_reports_no_seed() {
        let img = RgbImage::from_pixel(5, 5, Rgb([255, 255, 255]));
        let err = scanner().scan_image(DynamicImage::ImageRgb8(img));
        assert!(matches!(err, Err(Error::NoSeedFound)));
    }

    #[test]
    fn test_transparent_background() {
        // Transparent corner reads as dark, so the line must be light.
        let mut img = RgbaImage::from_pixel(6, 6, Rgba([0, 0, 0, 0]));
        img.put_pixel(4, 1, Rgba([255, 255, 255, 255]));
        let out = scanner().scan_image(DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(out.polarity, Polarity::Inverted);
        assert_eq!(out.seed, Coordinate::new(4, 1));
        assert_eq!(out.repainted, 1);
    }

    #[test]
    fn test_custom_threshold_and_fill() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        img.put_pixel(1, 1, Rgb([100, 100, 100]));
        img.put_pixel(2, 2, Rgb([0, 0, 0]));
        let strict = Scanner::new(ScanConfig { threshold: 0.1, fill: [0, 255, 0] }).unwrap();
        let out = strict.scan_image(DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(out.seed, Coordinate::new(2, 2));
        assert_eq!(out.repainted, 1);
        assert_eq!(out.buffer.get(Coordinate::new(2, 2)).unwrap(), Color::Rgb([0, 255, 0]));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let cfg = ScanConfig { threshold: -0.1, ..ScanConfig::default() };
        assert!(matches!(Scanner::new(cfg), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = scanner().scan_path("/no/such/image.png");
        assert!(matches!(err, Err(Error::FileNotFound(_))));
    }
}
