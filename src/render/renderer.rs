//! The render pass: a resolved tree painted onto the canvas.
//!
//! One [`Renderer`] lives for exactly one pass. It owns the pass's
//! [`ColorContext`], so color inheritance is scoped to the traversal instead
//! of living in ambient state, and a pass can run against any canvas with no
//! terminal required.
//!
//! Ordering is the visual-correctness contract and is deliberately
//! asymmetric: within a parent, children paint in declared order (later
//! siblings on top); top-level windows and menu windows paint in *reverse*
//! declared order (the first-declared window ends up on top). Both rules are
//! load-bearing.

use crate::color::{Color, ColorContext, PairIndex};
use crate::error::Result;
use crate::text;
use crate::tree::{Arena, Kind, Parent, Pos, Text, Window, WindowId};

use super::canvas::Canvas;

/// One render pass over a resolved tree.
pub struct Renderer<'a> {
    arena: &'a Arena,
    canvas: &'a mut Canvas,
    colors: ColorContext,
}

impl<'a> Renderer<'a> {
    /// Start a pass with `base` as the initially active color.
    pub fn new(arena: &'a Arena, canvas: &'a mut Canvas, base: Color) -> Self {
        let mut colors = ColorContext::new();
        colors.push(base);
        Self { arena, canvas, colors }
    }

    /// Paint top-level windows, then the active menu's windows above them.
    ///
    /// Both sequences paint in reverse declared order, so the first-declared
    /// window in each wins overlaps.
    pub fn render(&mut self, top_level: &[WindowId], menu: Option<&[WindowId]>) -> Result<()> {
        for &id in top_level.iter().rev() {
            self.window(id)?;
        }
        if let Some(windows) = menu {
            for &id in windows.iter().rev() {
                self.window(id)?;
            }
        }
        Ok(())
    }

    /// Paint one window and, for parents, its subtree.
    fn window(&mut self, id: WindowId) -> Result<()> {
        let Some(win) = self.arena.get(id) else { return Ok(()) };
        if !win.visible {
            return Ok(());
        }
        match &win.kind {
            Kind::Parent(parent) => self.parent_window(id, win, parent),
            Kind::Text(text) => self.text_window(win, text),
        }
    }

    fn parent_window(&mut self, id: WindowId, win: &Window, parent: &Parent) -> Result<()> {
        self.canvas.erase(win.region);
        let pair = self.colors.push(win.color);
        self.canvas.fill(win.region, pair);

        if let Some(border) = parent.border {
            // The border inherits its unset channels from the fill color.
            let border_pair = self.colors.push(border.color);
            self.canvas.draw_box(win.region, border_pair, border.dashed);
            self.colors.pop();
        }

        // Declared order: later children paint over earlier siblings.
        let arena = self.arena;
        let result = arena.children(id).iter().try_for_each(|&child| self.window(child));

        self.colors.pop();
        result
    }

    fn text_window(&mut self, win: &Window, text: &Text) -> Result<()> {
        self.canvas.erase(win.region);
        let pair = self.colors.push(win.color);
        self.canvas.fill(win.region, pair);
        let result = self.glyphs(win, text, pair);
        self.colors.pop();
        result
    }

    /// Place the wrapped glyphs of a text window.
    ///
    /// Wraps the plain text at the window width, re-derives the per-line
    /// widths, then walks the raw string with a per-line cursor: escapes are
    /// zero-width, a space opening a line is consumed invisibly, and a
    /// cursor reaching its line's recorded width consumes the break
    /// character and moves on. Every line is centered horizontally; the
    /// block is anchored vertically by the window's `pos`.
    fn glyphs(&mut self, win: &Window, text: &Text, pair: PairIndex) -> Result<()> {
        let rect = win.abs;
        if rect.is_empty() || text.text.is_empty() {
            return Ok(());
        }

        let h = text::height_for_width(&text.text, rect.w)?;
        let widths = text::line_widths(&text.text, h)?;
        let y_shift = match text.pos {
            Pos::Start => 0,
            Pos::Center => rect.h.saturating_sub(h) / 2,
            Pos::End => rect.h.saturating_sub(h),
        };

        let chars: Vec<char> = text.string.chars().collect();
        let mut line = 0usize;
        let mut cursor: u16 = 0;

        let mut i = 0usize;
        while i < chars.len() && line < widths.len() {
            let c = chars[i];
            if c == text::ESCAPE_INTRODUCER {
                while i < chars.len() && chars[i] != text::ESCAPE_TERMINATOR {
                    i += 1;
                }
                i += 1;
                continue;
            }
            if c == ' ' && cursor == 0 {
                // Leading space on a line: consumed, not drawn.
            } else if cursor >= widths[line] {
                line += 1;
                cursor = 0;
            } else {
                let x_shift = rect.w.saturating_sub(widths[line]) / 2;
                self.canvas.put(
                    win.region,
                    x_shift + cursor,
                    y_shift + line as u16,
                    c,
                    pair,
                );
                cursor += 1;
            }
            i += 1;
        }

        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
