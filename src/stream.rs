// The point-stream text format.
//
// Line 1 is the image size, every following line one visited coordinate:
//
//     (width, height)
//     (x, y)
//     ...
//
// Each record is two integers separated by a comma, optionally wrapped in
// parentheses. Nothing else is accepted.

use crate::error::{Error, Result};
use crate::types::{Coordinate, MAX_CANVAS_AREA, Size};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateStream {
    pub size: Size,
    pub points: Vec<Coordinate>,
}

impl CoordinateStream {
    pub fn new(size: Size, points: Vec<Coordinate>) -> Self {
        Self { size, points }
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> Result<()> {
        writeln!(w, "{}", self.size)?;
        for p in &self.points {
            writeln!(w, "{p}")?;
        }
        w.flush()?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_to(BufWriter::new(File::create(path)?))
    }

    /// Parse a whole stream eagerly.
    pub fn read_from<R: BufRead>(r: R) -> Result<Self> {
        let reader = PointReader::new(r)?;
        let size = reader.size();
        let points = reader.collect::<Result<Vec<_>>>()?;
        Ok(Self { size, points })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::read_from(BufReader::new(open(path.as_ref())?))
    }
}

fn open(path: &Path) -> Result<File> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    Ok(File::open(path)?)
}

/// Lazily parses points one line at a time after reading the size header.
pub struct PointReader<R> {
    size: Size,
    lines: Lines<R>,
    line: usize,
    failed: bool,
}

impl<R: BufRead> PointReader<R> {
    pub fn new(r: R) -> Result<Self> {
        let mut lines = r.lines();
        let header = lines.next().transpose()?.ok_or_else(|| Error::Parse {
            line: 1,
            message: "missing size record".into(),
        })?;
        let (w, h) = parse_pair(&header, 1)?;
        let size = match (u32::try_from(w), u32::try_from(h)) {
            (Ok(w), Ok(h)) => Size::new(w, h),
            _ => {
                return Err(Error::Parse {
                    line: 1,
                    message: format!("invalid image size {header:?}"),
                });
            }
        };
        if size.canvas_area().is_none() {
            return Err(Error::Parse {
                line: 1,
                message: format!("image size {size} exceeds {MAX_CANVAS_AREA} pixels"),
            });
        }
        Ok(Self { size, lines, line: 1, failed: false })
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl PointReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(BufReader::new(open(path.as_ref())?))
    }
}

impl<R: BufRead> Iterator for PointReader<R> {
    type Item = Result<Coordinate>;

    /// Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let text = self.lines.next()?;
        self.line += 1;
        let item = text
            .map_err(Error::from)
            .and_then(|t| parse_pair(&t, self.line))
            .map(Coordinate::from);
        self.failed = item.is_err();
        Some(item)
    }
}

/// `(a, b)` or `a, b`, with optional surrounding whitespace.
pub fn parse_pair(text: &str, line: usize) -> Result<(i64, i64)> {
    let err = |message: String| Error::Parse { line, message };
    let trimmed = text.trim();

    let inner = match (trimmed.strip_prefix('('), trimmed.ends_with(')')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => trimmed,
        _ => return Err(err(format!("unbalanced parentheses in {text:?}"))),
    };

    let (a, b) = inner
        .split_once(',')
        .ok_or_else(|| err(format!("expected two comma-separated integers, got {text:?}")))?;

    let int = |s: &str| -> Result<i64> {
        let s = s.trim();
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err(format!("{s:?} is not an integer")));
        }
        s.parse::<i64>().map_err(|e| err(format!("{s:?}: {e}")))
    };

    Ok((int(a)?, int(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_format() {
        let s = CoordinateStream::new(
            Size::new(3, 2),
            vec![Coordinate::new(1, 1), Coordinate::new(-1, 2)],
        );
        let mut out = Vec::new();
        s.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(3, 2)\n(1, 1)\n(-1, 2)\n");
    }

    #[test]
    fn test_round_trip() {
        let s = CoordinateStream::new(
            Size::new(640, 480),
            vec![
                Coordinate::new(10, 20),
                Coordinate::new(-1, 0),
                Coordinate::new(640, 479),
                Coordinate::new(10, 20),
            ],
        );
        let mut out = Vec::new();
        s.write_to(&mut out).unwrap();
        let back = CoordinateStream::read_from(Cursor::new(out)).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_accepts_bare_and_spaced_pairs() {
        assert_eq!(parse_pair("(1, 2)", 1).unwrap(), (1, 2));
        assert_eq!(parse_pair("1,2", 1).unwrap(), (1, 2));
        assert_eq!(parse_pair("  ( -3 ,  4 )\r", 1).unwrap(), (-3, 4));
    }

    #[test]
    fn test_rejects_everything_else() {
        for bad in [
            "",
            "()",
            "(1)",
            "(1, 2",
            "1, 2)",
            "(1, 2, 3)",
            "(1.5, 2)",
            "(+1, 2)",
            "(a, b)",
            "__import__('os').system('ls')",
            "(1, 2) (3, 4)",
            "(- 1, 2)",
        ] {
            assert!(
                matches!(parse_pair(bad, 7), Err(Error::Parse { line: 7, .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_reader_is_lazy_and_stops_at_first_error() {
        let text = "(4, 4)\n(0, 0)\noops\n(1, 1)\n";
        let mut reader = PointReader::new(Cursor::new(text)).unwrap();
        assert_eq!(reader.size(), Size::new(4, 4));
        assert_eq!(reader.next().unwrap().unwrap(), Coordinate::new(0, 0));
        assert!(matches!(reader.next(), Some(Err(Error::Parse { line: 3, .. }))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_header_errors() {
        assert!(matches!(
            PointReader::new(Cursor::new("")),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            PointReader::new(Cursor::new("(-4, 4)\n")),
            Err(Error::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_oversized_header_is_rejected() {
        for header in ["(4294967295, 4294967295)\n(0, 0)\n", "(16385, 16384)\n"] {
            assert!(
                matches!(PointReader::new(Cursor::new(header)), Err(Error::Parse { line: 1, .. })),
                "accepted {header:?}"
            );
        }
        let reader = PointReader::new(Cursor::new("(16384, 16384)\n")).unwrap();
        assert_eq!(reader.size(), Size::new(16384, 16384));
    }

    #[test]
    fn test_missing_file() {
        let err = CoordinateStream::load("/definitely/not/here.txt");
        assert!(matches!(err, Err(Error::FileNotFound(_))));
    }
}
