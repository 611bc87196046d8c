// Iterative 8-connected flood fill.
//
// Grows from the seed with an explicit LIFO stack and a visited set, repainting
// every foreground pixel it reaches. Every coordinate taken off the stack is
// recorded, in order, whether it was repainted or not; that ordered record is
// what the animation replays.

use crate::buffer::PixelBuffer;
use crate::color::{Class, Classifier, Color};
use crate::types::Coordinate;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillResult {
    /// Every coordinate considered, in visiting order. Includes background,
    /// transparent and out-of-bounds coordinates bordering the region.
    pub visited: Vec<Coordinate>,
    /// How many pixels were actually repainted.
    pub repainted: usize,
}

pub struct FloodFiller<'a> {
    buffer: &'a mut PixelBuffer,
    classifier: Classifier,
    fill: Color,
    stack: Vec<Coordinate>,
    visited: HashSet<Coordinate>,
}

impl<'a> FloodFiller<'a> {
    pub fn new(
        buffer: &'a mut PixelBuffer,
        seed: Coordinate,
        classifier: Classifier,
        fill: Color,
    ) -> Self {
        Self {
            buffer,
            classifier,
            fill,
            stack: vec![seed],
            visited: HashSet::new(),
        }
    }

    /// Repaint `c` if it is an in-bounds foreground pixel.
    /// Neighbour coordinates may fall outside the grid; those simply don't match.
    fn try_fill_at(&mut self, c: Coordinate) -> bool {
        match self.buffer.get(c) {
            Ok(color) if self.classifier.classify(color) == Class::Foreground => {
                self.buffer.set(c, self.fill).is_ok()
            }
            _ => false,
        }
    }

    pub fn run(mut self) -> FillResult {
        let mut out = FillResult::default();

        while let Some(c) = self.stack.pop() {
            if !self.visited.insert(c) {
                continue;
            }
            out.visited.push(c);

            if !self.try_fill_at(c) {
                continue;
            }
            out.repainted += 1;

            // Already-visited neighbours would be discarded on pop anyway.
            for n in c.neighbors() {
                if !self.visited.contains(&n) {
                    self.stack.push(n);
                }
            }
        }

        out
    }
}

/// Fill the region connected to `seed`, painting it with `fill`.
pub fn flood_fill(
    buffer: &mut PixelBuffer,
    seed: Coordinate,
    classifier: &Classifier,
    fill: Color,
) -> FillResult {
    FloodFiller::new(buffer, seed, *classifier, fill).run()
}
