// Colour representation, distance metric and foreground classification.

/// Distance between black and white: sqrt(255² × 3).
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_67;

pub const BLACK: Color = Color::Rgb([0, 0, 0]);
pub const WHITE: Color = Color::Rgb([255, 255, 255]);
pub const RED: Color = Color::Rgb([255, 0, 0]);
pub const BLUE: Color = Color::Rgb([0, 0, 255]);

/// A pixel as stored in the image: 3 or 4 channels depending on the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl Color {
    pub fn rgb(&self) -> [u8; 3] {
        match *self {
            Color::Rgb(c) => c,
            Color::Rgba([r, g, b, _]) => [r, g, b],
        }
    }

    pub fn alpha(&self) -> Option<u8> {
        match *self {
            Color::Rgb(_) => None,
            Color::Rgba(c) => Some(c[3]),
        }
    }

    /// Only a 4-channel pixel with alpha 0 is transparent.
    pub fn is_transparent(&self) -> bool {
        self.alpha() == Some(0)
    }

    /// Mean over every channel, alpha included when present.
    pub fn brightness(&self) -> f64 {
        match *self {
            Color::Rgb(c) => c.iter().map(|&v| v as f64).sum::<f64>() / 3.0,
            Color::Rgba(c) => c.iter().map(|&v| v as f64).sum::<f64>() / 4.0,
        }
    }

    /// Packed 0x00RRGGBB, the layout minifb expects.
    pub fn to_u32(&self) -> u32 {
        let [r, g, b] = self.rgb();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }
}

/// Normalized Euclidean distance over the first three channels, in [0, 1].
pub fn distance(a: Color, b: Color) -> f64 {
    if a == b {
        return 0.0;
    }
    let (a, b) = (a.rgb(), b.rgb());
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum();
    sum.sqrt() / MAX_DISTANCE
}

/// Which colour the line is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Dark line on a light background; the target is black.
    Normal,
    /// Light line on a dark background; the target is white.
    Inverted,
}

impl Polarity {
    /// Decide from the background pixel: a dark corner means a light line.
    pub fn from_background(corner: Color) -> Self {
        if corner.brightness() < 127.0 {
            Polarity::Inverted
        } else {
            Polarity::Normal
        }
    }

    pub fn is_inverted(&self) -> bool {
        *self == Polarity::Inverted
    }

    pub fn target(&self) -> Color {
        match self {
            Polarity::Normal => BLACK,
            Polarity::Inverted => WHITE,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Polarity::Normal => "dark",
            Polarity::Inverted => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Foreground,
    Background,
    Transparent,
}

/// Sorts pixels into foreground/background against the active target.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    pub target: Color,
    pub threshold: f64,
}

impl Classifier {
    pub fn new(polarity: Polarity, threshold: f64) -> Self {
        Self { target: polarity.target(), threshold }
    }

    pub fn classify(&self, color: Color) -> Class {
        if color.is_transparent() {
            Class::Transparent
        } else if distance(color, self.target) < self.threshold {
            Class::Foreground
        } else {
            Class::Background
        }
    }

    #[inline]
    pub fn is_foreground(&self, color: Color) -> bool {
        self.classify(color) == Class::Foreground
    }
}
