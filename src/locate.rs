// Linear search for the seed pixel of a line.
// Walks the grid in row-major order, one index per step.

use crate::buffer::PixelBuffer;
use crate::color::{Class, Classifier};
use crate::error::Result;
use crate::types::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Find the next (or previous) foreground pixel, starting at `start` inclusive.
/// Transparent pixels are skipped. Fails only when `start` lies outside the buffer.
pub fn find_next(
    buffer: &PixelBuffer,
    start: Coordinate,
    direction: Direction,
    classifier: &Classifier,
) -> Result<Option<Coordinate>> {
    let size = buffer.size();
    buffer.get(start)?;
    let first = start.y as usize * size.width as usize + start.x as usize;

    let indices: Box<dyn Iterator<Item = usize>> = match direction {
        Direction::Forward => Box::new(first..size.area()),
        Direction::Reverse => Box::new((0..=first).rev()),
    };

    for index in indices {
        let at = size.coordinate_at(index);
        match classifier.classify(buffer.get(at)?) {
            Class::Foreground => return Ok(Some(at)),
            Class::Transparent | Class::Background => continue,
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Polarity;
    use crate::error::Error;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn white(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([255, 255, 255]))
    }

    fn dark() -> Classifier {
        Classifier::new(Polarity::Normal, 0.5)
    }

    #[test]
    fn test_all_white_has_no_seed() {
        let buf = PixelBuffer::from_rgb(white(16, 9));
        let found = find_next(&buf, Coordinate::ORIGIN, Direction::Forward, &dark()).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_single_black_pixel() {
        let mut img = white(10, 10);
        img.put_pixel(5, 5, Rgb([0, 0, 0]));
        let buf = PixelBuffer::from_rgb(img);
        let found = find_next(&buf, Coordinate::ORIGIN, Direction::Forward, &dark()).unwrap();
        assert_eq!(found, Some(Coordinate::new(5, 5)));
    }

    #[test]
    fn test_start_is_inclusive() {
        let mut img = white(4, 4);
        img.put_pixel(2, 1, Rgb([0, 0, 0]));
        let buf = PixelBuffer::from_rgb(img);
        let at = Coordinate::new(2, 1);
        assert_eq!(find_next(&buf, at, Direction::Forward, &dark()).unwrap(), Some(at));
        assert_eq!(find_next(&buf, at, Direction::Reverse, &dark()).unwrap(), Some(at));
    }

    #[test]
    fn test_reverse_finds_previous() {
        let mut img = white(4, 4);
        img.put_pixel(3, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 2, Rgb([0, 0, 0]));
        let buf = PixelBuffer::from_rgb(img);

        let from = Coordinate::new(0, 2);
        let found = find_next(&buf, from, Direction::Reverse, &dark()).unwrap();
        assert_eq!(found, Some(Coordinate::new(3, 0)));

        let found = find_next(&buf, from, Direction::Forward, &dark()).unwrap();
        assert_eq!(found, Some(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_inverted_looks_for_white() {
        let mut img = RgbImage::new(6, 6);
        img.put_pixel(4, 3, Rgb([250, 250, 250]));
        let buf = PixelBuffer::from_rgb(img);
        let light = Classifier::new(Polarity::Inverted, 0.5);
        let found = find_next(&buf, Coordinate::ORIGIN, Direction::Forward, &light).unwrap();
        assert_eq!(found, Some(Coordinate::new(4, 3)));
    }

    #[test]
    fn test_transparent_pixels_are_skipped_and_scan_terminates() {
        // Transparent black must not match; the scan must still move on.
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        img.put_pixel(6, 7, Rgba([0, 0, 0, 255]));
        let buf = PixelBuffer::from_rgba(img);
        let found = find_next(&buf, Coordinate::ORIGIN, Direction::Forward, &dark()).unwrap();
        assert_eq!(found, Some(Coordinate::new(6, 7)));

        let clear = PixelBuffer::from_rgba(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0])));
        for direction in [Direction::Forward, Direction::Reverse] {
            let found = find_next(&clear, Coordinate::new(3, 3), direction, &dark()).unwrap();
            assert_eq!(found, None);
        }
    }

    #[test]
    fn test_start_outside_buffer() {
        let buf = PixelBuffer::from_rgb(white(3, 3));
        let err = find_next(&buf, Coordinate::new(3, 0), Direction::Forward, &dark());
        assert!(matches!(err, Err(Error::OutOfRange { .. })));
    }
}
