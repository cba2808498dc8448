//! The canvas: a cell grid plus the window-region registry.
//!
//! The canvas is the single shared drawing surface of the engine. Every
//! window holds a [`RegionId`] allocated at creation and released at
//! destruction; the resolver re-places regions each pass, and the renderer
//! paints through them. Painting writes into a plain 2D grid of
//! [`Cell`]s; nothing reaches a real terminal until a driver flushes the
//! grid, which is also what makes the whole engine testable headless.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::color::PairIndex;
use crate::geometry::{AbsRect, Size};

new_key_type! {
    /// Handle to a window's backing region on the canvas.
    pub struct RegionId;
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One terminal cell: a character and its color pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub pair: PairIndex,
}

impl Cell {
    /// A blank cell with the default pair.
    pub const BLANK: Cell = Cell { ch: ' ', pair: PairIndex::DEFAULT };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// Cell grid and region registry.
///
/// Regions carry no pixels of their own: they are rectangles into the shared
/// grid, re-placed by every resolution pass. All drawing is clipped both to
/// the region and to the grid, so a window hanging off the screen edge
/// paints only its visible part.
#[derive(Debug)]
pub struct Canvas {
    grid: Vec<Cell>,
    size: Size,
    regions: SlotMap<RegionId, ()>,
    placement: SecondaryMap<RegionId, AbsRect>,
}

impl Canvas {
    /// Create a blank canvas of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            grid: vec![Cell::BLANK; size.w as usize * size.h as usize],
            size,
            regions: SlotMap::with_key(),
            placement: SecondaryMap::new(),
        }
    }

    /// The canvas dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the grid. All cells reset to blank; placements survive and are
    /// re-clipped by the next pass.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.grid = vec![Cell::BLANK; size.w as usize * size.h as usize];
    }

    // -- region lifecycle ---------------------------------------------------

    /// Allocate a backing region. It has no placement until the first
    /// resolution pass places it.
    pub fn alloc_region(&mut self) -> RegionId {
        self.regions.insert(())
    }

    /// Release a backing region.
    pub fn release_region(&mut self, id: RegionId) {
        self.placement.remove(id);
        self.regions.remove(id);
    }

    /// Number of live regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Move/resize a region. Called by every resolution pass.
    pub fn place_region(&mut self, id: RegionId, rect: AbsRect) {
        if self.regions.contains_key(id) {
            self.placement.insert(id, rect);
        }
    }

    /// The region's current placement, if it has been placed.
    pub fn region_rect(&self, id: RegionId) -> Option<AbsRect> {
        self.placement.get(id).copied()
    }

    // -- drawing ------------------------------------------------------------

    /// Erase a region to blank cells.
    pub fn erase(&mut self, id: RegionId) {
        let Some(rect) = self.region_rect(id) else { return };
        for y in rect.y..rect.bottom().min(self.size.h) {
            for x in rect.x..rect.right().min(self.size.w) {
                let idx = self.index(x, y);
                self.grid[idx] = Cell::BLANK;
            }
        }
    }

    /// Fill a region with spaces in the given pair.
    pub fn fill(&mut self, id: RegionId, pair: PairIndex) {
        let Some(rect) = self.region_rect(id) else { return };
        for y in rect.y..rect.bottom().min(self.size.h) {
            for x in rect.x..rect.right().min(self.size.w) {
                let idx = self.index(x, y);
                self.grid[idx] = Cell { ch: ' ', pair };
            }
        }
    }

    /// Put one character at region-local coordinates.
    pub fn put(&mut self, id: RegionId, x: u16, y: u16, ch: char, pair: PairIndex) {
        let Some(rect) = self.region_rect(id) else { return };
        if x >= rect.w || y >= rect.h {
            return;
        }
        let (gx, gy) = (rect.x + x, rect.y + y);
        if gx < self.size.w && gy < self.size.h {
            let idx = self.index(gx, gy);
            self.grid[idx] = Cell { ch, pair };
        }
    }

    /// Draw a box around the region's edge.
    pub fn draw_box(&mut self, id: RegionId, pair: PairIndex, dashed: bool) {
        let Some(rect) = self.region_rect(id) else { return };
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let (horiz, vert) = if dashed { ('-', '|') } else { ('─', '│') };
        let (tl, tr, bl, br) = if dashed {
            ('+', '+', '+', '+')
        } else {
            ('┌', '┐', '└', '┘')
        };

        for x in 1..rect.w - 1 {
            self.put(id, x, 0, horiz, pair);
            self.put(id, x, rect.h - 1, horiz, pair);
        }
        for y in 1..rect.h - 1 {
            self.put(id, 0, y, vert, pair);
            self.put(id, rect.w - 1, y, vert, pair);
        }
        self.put(id, 0, 0, tl, pair);
        self.put(id, rect.w - 1, 0, tr, pair);
        self.put(id, 0, rect.h - 1, bl, pair);
        self.put(id, rect.w - 1, rect.h - 1, br, pair);
    }

    // -- inspection ---------------------------------------------------------

    /// The cell at absolute grid coordinates.
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        (x < self.size.w && y < self.size.h).then(|| self.grid[self.index(x, y)])
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.grid
    }

    /// Render the grid as plain text, one line per row, right-trimmed.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for y in 0..self.size.h {
            let mut line = String::new();
            for x in 0..self.size.w {
                line.push(self.grid[self.index(x, y)].ch);
            }
            out.push_str(line.trim_end());
            if y + 1 < self.size.h {
                out.push('\n');
            }
        }
        out
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.size.w as usize + x as usize
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Base, Color, PairIndex};

    fn pair(fg: Base, bg: Base) -> PairIndex {
        PairIndex::of(Color::new(fg, bg))
    }

    // -----------------------------------------------------------------------
    // Region lifecycle
    // -----------------------------------------------------------------------

    #[test]
    fn alloc_and_release() {
        let mut canvas = Canvas::new(Size::new(10, 5));
        let a = canvas.alloc_region();
        let b = canvas.alloc_region();
        assert_eq!(canvas.region_count(), 2);

        canvas.release_region(a);
        assert_eq!(canvas.region_count(), 1);
        assert!(canvas.region_rect(a).is_none());

        canvas.release_region(b);
        assert_eq!(canvas.region_count(), 0);
    }

    #[test]
    fn release_is_idempotent() {
        let mut canvas = Canvas::new(Size::new(10, 5));
        let a = canvas.alloc_region();
        canvas.release_region(a);
        canvas.release_region(a);
        assert_eq!(canvas.region_count(), 0);
    }

    #[test]
    fn placement_deferred_until_placed() {
        let mut canvas = Canvas::new(Size::new(10, 5));
        let a = canvas.alloc_region();
        assert!(canvas.region_rect(a).is_none());

        canvas.place_region(a, AbsRect::new(2, 1, 4, 3));
        assert_eq!(canvas.region_rect(a), Some(AbsRect::new(2, 1, 4, 3)));
    }

    #[test]
    fn place_released_region_is_noop() {
        let mut canvas = Canvas::new(Size::new(10, 5));
        let a = canvas.alloc_region();
        canvas.release_region(a);
        canvas.place_region(a, AbsRect::new(0, 0, 2, 2));
        assert!(canvas.region_rect(a).is_none());
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    #[test]
    fn put_is_region_local_and_clipped() {
        let mut canvas = Canvas::new(Size::new(10, 5));
        let a = canvas.alloc_region();
        canvas.place_region(a, AbsRect::new(3, 2, 4, 2));

        canvas.put(a, 0, 0, 'x', PairIndex::DEFAULT);
        assert_eq!(canvas.cell(3, 2).unwrap().ch, 'x');

        // Outside the region: dropped.
        canvas.put(a, 4, 0, 'y', PairIndex::DEFAULT);
        assert_eq!(canvas.cell(7, 2).unwrap().ch, ' ');
    }

    #[test]
    fn put_clipped_to_grid() {
        let mut canvas = Canvas::new(Size::new(5, 3));
        let a = canvas.alloc_region();
        // Region hangs off the right edge.
        canvas.place_region(a, AbsRect::new(3, 0, 4, 1));
        canvas.put(a, 3, 0, 'z', PairIndex::DEFAULT);
        // (6, 0) is off-grid; nothing to observe, nothing panics.
        assert_eq!(canvas.cell(3, 0).unwrap().ch, ' ');
    }

    #[test]
    fn fill_sets_pair_everywhere_in_region() {
        let mut canvas = Canvas::new(Size::new(6, 4));
        let a = canvas.alloc_region();
        canvas.place_region(a, AbsRect::new(1, 1, 3, 2));

        let p = pair(Base::White, Base::Blue);
        canvas.fill(a, p);

        assert_eq!(canvas.cell(1, 1).unwrap().pair, p);
        assert_eq!(canvas.cell(3, 2).unwrap().pair, p);
        assert_eq!(canvas.cell(0, 0).unwrap().pair, PairIndex::DEFAULT);
        assert_eq!(canvas.cell(4, 1).unwrap().pair, PairIndex::DEFAULT);
    }

    #[test]
    fn erase_blanks_region() {
        let mut canvas = Canvas::new(Size::new(6, 4));
        let a = canvas.alloc_region();
        canvas.place_region(a, AbsRect::new(0, 0, 6, 4));
        canvas.fill(a, pair(Base::Red, Base::Black));
        canvas.erase(a);
        assert_eq!(canvas.cell(0, 0).unwrap(), Cell::BLANK);
        assert_eq!(canvas.cell(5, 3).unwrap(), Cell::BLANK);
    }

    #[test]
    fn draw_box_outline() {
        let mut canvas = Canvas::new(Size::new(6, 4));
        let a = canvas.alloc_region();
        canvas.place_region(a, AbsRect::new(0, 0, 6, 4));
        canvas.draw_box(a, PairIndex::DEFAULT, false);

        assert_eq!(canvas.cell(0, 0).unwrap().ch, '┌');
        assert_eq!(canvas.cell(5, 0).unwrap().ch, '┐');
        assert_eq!(canvas.cell(0, 3).unwrap().ch, '└');
        assert_eq!(canvas.cell(5, 3).unwrap().ch, '┘');
        assert_eq!(canvas.cell(2, 0).unwrap().ch, '─');
        assert_eq!(canvas.cell(0, 2).unwrap().ch, '│');
        // Interior untouched.
        assert_eq!(canvas.cell(2, 2).unwrap().ch, ' ');
    }

    #[test]
    fn draw_box_dashed() {
        let mut canvas = Canvas::new(Size::new(5, 3));
        let a = canvas.alloc_region();
        canvas.place_region(a, AbsRect::new(0, 0, 5, 3));
        canvas.draw_box(a, PairIndex::DEFAULT, true);
        assert_eq!(canvas.cell(0, 0).unwrap().ch, '+');
        assert_eq!(canvas.cell(2, 0).unwrap().ch, '-');
        assert_eq!(canvas.cell(0, 1).unwrap().ch, '|');
    }

    #[test]
    fn draw_box_too_small_is_noop() {
        let mut canvas = Canvas::new(Size::new(5, 3));
        let a = canvas.alloc_region();
        canvas.place_region(a, AbsRect::new(0, 0, 1, 1));
        canvas.draw_box(a, PairIndex::DEFAULT, false);
        assert_eq!(canvas.cell(0, 0).unwrap().ch, ' ');
    }

    // -----------------------------------------------------------------------
    // Resize / text dump
    // -----------------------------------------------------------------------

    #[test]
    fn resize_blanks_grid() {
        let mut canvas = Canvas::new(Size::new(4, 2));
        let a = canvas.alloc_region();
        canvas.place_region(a, AbsRect::new(0, 0, 4, 2));
        canvas.fill(a, pair(Base::Green, Base::Black));

        canvas.resize(Size::new(6, 3));
        assert_eq!(canvas.size(), Size::new(6, 3));
        assert_eq!(canvas.cell(0, 0).unwrap(), Cell::BLANK);
        // The region handle survives the resize.
        assert_eq!(canvas.region_count(), 1);
    }

    #[test]
    fn to_text_trims_trailing_blanks() {
        let mut canvas = Canvas::new(Size::new(5, 2));
        let a = canvas.alloc_region();
        canvas.place_region(a, AbsRect::new(0, 0, 5, 2));
        canvas.put(a, 0, 0, 'h', PairIndex::DEFAULT);
        canvas.put(a, 1, 0, 'i', PairIndex::DEFAULT);
        assert_eq!(canvas.to_text(), "hi\n");
    }
}
