// Replays a point sequence onto a blank canvas, a fixed batch per tick.
//
// The scheduler has exactly one suspension point per tick (the sleep between
// frames). When the sequence runs dry the animation reports `Tick::Done`
// instead of quietly stopping.

use crate::color::Color;
use crate::config::AnimationConfig;
use crate::draw::put_pixel;
use crate::error::Result;
use crate::types::{Coordinate, FrameBuffer, Size};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// More points may follow.
    Continue,
    /// The sequence is exhausted.
    Done,
}

/// Anything that can show a frame: the window, or a recorder in tests.
pub trait Surface {
    fn is_open(&self) -> bool;
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;
}

pub struct Animation<I> {
    canvas: FrameBuffer,
    points: I,
    batch: usize,
    ink: u32,
    drawn: usize,
    done: bool,
}

impl<I> Animation<I>
where
    I: Iterator<Item = Result<Coordinate>>,
{
    pub fn new(size: Size, points: I, config: &AnimationConfig) -> Self {
        Self {
            canvas: FrameBuffer::filled(size, Color::Rgb(config.background).to_u32()),
            points,
            batch: config.batch.max(1),
            ink: Color::Rgb(config.ink).to_u32(),
            drawn: 0,
            done: false,
        }
    }

    pub fn canvas(&self) -> &FrameBuffer {
        &self.canvas
    }

    /// Points consumed so far, including ones that fell outside the canvas.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Draw up to one batch of points. A malformed point ends the animation with its error.
    pub fn step(&mut self) -> Result<Tick> {
        if self.done {
            return Ok(Tick::Done);
        }
        for _ in 0..self.batch {
            match self.points.next() {
                Some(point) => {
                    let p = point.inspect_err(|_| self.done = true)?;
                    put_pixel(&mut self.canvas, p.x, p.y, self.ink);
                    self.drawn += 1;
                }
                None => {
                    self.done = true;
                    return Ok(Tick::Done);
                }
            }
        }
        Ok(Tick::Continue)
    }
}

/// Tick until the sequence is exhausted or the surface closes.
/// Returns the terminal tick: `Done` if every point was drawn.
pub fn run<I, S>(animation: &mut Animation<I>, surface: &mut S, interval: Duration) -> Result<Tick>
where
    I: Iterator<Item = Result<Coordinate>>,
    S: Surface,
{
    while surface.is_open() {
        let tick = animation.step()?;
        surface.present(animation.canvas())?;
        if tick == Tick::Done {
            info!("Done");
            return Ok(Tick::Done);
        }
        thread::sleep(interval);
    }
    debug!("surface closed after {} points", animation.drawn());
    Ok(Tick::Continue)
}
