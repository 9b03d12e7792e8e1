use crate::foundation::core::FrameSize;
use crate::region::rect::{OverlapRule, WeightedRect};

/// A plan projected onto the encoder's block grid.
///
/// Rectangle edges are widened outward to whole blocks, the way an encoder sees them.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockMap {
    block_size: u32,
    cols: u32,
    rows: u32,
    cells: Vec<Option<f32>>,
}

impl BlockMap {
    /// Rasterize `rects` for a frame of `frame` pixels. `block_size` is raised to at least 1.
    pub fn rasterize(
        rects: &[WeightedRect],
        frame: FrameSize,
        block_size: u32,
        rule: OverlapRule,
    ) -> Self {
        let block_size = block_size.max(1);
        let cols = frame.width.div_ceil(block_size);
        let rows = frame.height.div_ceil(block_size);
        let mut map = Self {
            block_size,
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        };

        // Painter's order: whatever wins is drawn last.
        match rule {
            OverlapRule::FirstWins => rects.iter().rev().for_each(|r| map.fill(r)),
            OverlapRule::LastWins => rects.iter().for_each(|r| map.fill(r)),
        }
        map
    }

    fn fill(&mut self, rect: &WeightedRect) {
        let left = (rect.left / self.block_size).min(self.cols);
        let top = (rect.top / self.block_size).min(self.rows);
        let right = rect.right.div_ceil(self.block_size).min(self.cols);
        let bottom = rect.bottom.div_ceil(self.block_size).min(self.rows);
        for row in top..bottom {
            let start = (row * self.cols + left) as usize;
            let end = (row * self.cols + right) as usize;
            if start < end {
                self.cells[start..end].fill(Some(rect.priority));
            }
        }
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Priority of block `(col, row)`, or `None` if no rectangle touches it.
    pub fn get(&self, col: u32, row: u32) -> Option<f32> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[(row * self.cols + col) as usize]
    }

    /// Number of blocks covered by at least one rectangle.
    pub fn covered(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/blocks.rs"]
mod tests;
