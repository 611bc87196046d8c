// Core value types shared by the scan, the point stream and the animation.
use std::fmt;

/// A pixel position. Signed, because the flood fill also records the
/// one-pixel ring just outside the image (x = -1, y = height, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8-connected neighbourhood, in the order the fill pushes it:
    /// row above left to right, then the sides, then the row below.
    pub fn neighbors(self) -> [Coordinate; 8] {
        let Coordinate { x, y } = self;
        [
            Coordinate::new(x - 1, y - 1),
            Coordinate::new(x, y - 1),
            Coordinate::new(x + 1, y - 1),
            Coordinate::new(x - 1, y),
            Coordinate::new(x + 1, y),
            Coordinate::new(x - 1, y + 1),
            Coordinate::new(x, y + 1),
            Coordinate::new(x + 1, y + 1),
        ]
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Largest canvas a point stream may ask for (16384 x 16384 pixels).
pub const MAX_CANVAS_AREA: usize = 1 << 28;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The area, if a canvas of this size is small enough to allocate.
    pub fn canvas_area(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .filter(|&a| a <= MAX_CANVAS_AREA)
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width as i64 && c.y < self.height as i64
    }

    /// Row-major linear index of an in-bounds coordinate.
    pub fn index_of(&self, c: Coordinate) -> Option<usize> {
        if self.contains(c) {
            Some(c.y as usize * self.width as usize + c.x as usize)
        } else {
            None
        }
    }

    pub fn coordinate_at(&self, index: usize) -> Coordinate {
        let w = self.width as usize;
        Coordinate::new((index % w) as i64, (index / w) as i64)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// What the window shows.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A frame filled with one colour.
    pub fn filled(size: Size, color: u32) -> Self {
        Self {
            width: size.width as usize,
            height: size.height as usize,
            pixels: vec![color; size.area()],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }
}
