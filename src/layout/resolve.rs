//! Rect resolution: declared geometry into absolute geometry.
//!
//! Resolution is a single pre-order traversal: a parent's rect is final
//! before any child rect is computed, because children size themselves
//! against the parent's already-resolved content rect. Nothing is cached
//! between passes: every pass recomputes the full tree from the declared
//! rects and the current terminal size, which is what makes resizes and
//! content changes uniform.

use crate::error::Result;
use crate::geometry::{AbsRect, Coord, Dim};
use crate::render::Canvas;
use crate::text;
use crate::tree::{Align, Arena, Axis, Kind, Pos, WindowId};

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Resolve a set of root windows (top-level or menu-owned) against the
/// screen rect, then their subtrees.
pub fn resolve_roots(
    arena: &mut Arena,
    canvas: &mut Canvas,
    roots: &[WindowId],
    screen: AbsRect,
) -> Result<()> {
    for &id in roots {
        resolve_top(arena, canvas, id, screen)?;
    }
    Ok(())
}

/// Resolve one root window. Auto and fill dimensions mean the full screen
/// extent here; root windows are never distributed against each other.
fn resolve_top(
    arena: &mut Arena,
    canvas: &mut Canvas,
    id: WindowId,
    screen: AbsRect,
) -> Result<()> {
    let Some(win) = arena.get(id) else { return Ok(()) };

    let inflated = win.kind.as_parent().is_some_and(|p| p.inflated);
    let abs = if inflated {
        screen
    } else {
        let w = win.rect.w.fixed().unwrap_or(screen.w);
        let h = win.rect.h.fixed().unwrap_or(screen.h);
        let x = screen.x + win.rect.x.within(screen.w).unwrap_or(0);
        let y = screen.y + win.rect.y.within(screen.h).unwrap_or(0);
        AbsRect::new(x, y, w, h)
    };

    place(arena, canvas, id, abs);
    resolve_children(arena, canvas, id)
}

/// Write a window's resolved rect back and re-place its backing region.
fn place(arena: &mut Arena, canvas: &mut Canvas, id: WindowId, abs: AbsRect) {
    if let Some(win) = arena.get_mut(id) {
        win.abs = abs;
        canvas.place_region(win.region, abs);
    }
}

// ---------------------------------------------------------------------------
// Child resolution
// ---------------------------------------------------------------------------

/// One child's working state during its parent's resolution.
struct Slot {
    id: WindowId,
    main: u16,
    cross: u16,
    /// Takes an equal share of the remaining main axis.
    share: bool,
    /// Pinned to the full content rect, outside distribution.
    pinned: bool,
    main_coord: Coord,
    cross_coord: Coord,
}

/// The content rect a parent offers its children: its resolved rect minus
/// the border (if active) minus the padding.
fn content_rect(arena: &Arena, id: WindowId) -> AbsRect {
    let Some(win) = arena.get(id) else { return AbsRect::ZERO };
    let Some(parent) = win.kind.as_parent() else { return AbsRect::ZERO };
    let mut content = win.abs;
    if parent.border.is_some() {
        content = content.inset(1);
    }
    if parent.padded {
        content = content.inset(1);
    }
    content
}

/// Resolve every child of `id` (a no-op for text leaves), then recurse.
fn resolve_children(arena: &mut Arena, canvas: &mut Canvas, id: WindowId) -> Result<()> {
    let Some(win) = arena.get(id) else { return Ok(()) };
    let Some(parent) = win.kind.as_parent() else { return Ok(()) };
    let (axis, pos, align) = (parent.axis, parent.pos, parent.align);

    let content = content_rect(arena, id);
    let children: Vec<WindowId> = arena.children(id).to_vec();
    if children.is_empty() {
        return Ok(());
    }

    let (content_main, content_cross) = split(axis, content.w, content.h);

    // Sizing: fixed and content-derived extents first, shares after.
    let mut slots = Vec::with_capacity(children.len());
    for &child in &children {
        slots.push(size_child(arena, child, axis, content_main, content_cross)?);
    }

    let taken: u32 = slots
        .iter()
        .filter(|s| !s.pinned && !s.share)
        .map(|s| s.main as u32)
        .sum();
    let sharers = slots.iter().filter(|s| s.share).count() as u32;
    if sharers > 0 {
        let remaining = (content_main as u32).saturating_sub(taken);
        let share = remaining / sharers;
        let mut bonus = remaining % sharers;
        for slot in slots.iter_mut().filter(|s| s.share) {
            slot.main = share as u16 + (bonus > 0) as u16;
            bonus = bonus.saturating_sub(1);
        }
    }

    // Distribution: main-axis offsets for the non-pinned children.
    let flowing: Vec<usize> = (0..slots.len()).filter(|&i| !slots[i].pinned).collect();
    let total: u32 = flowing.iter().map(|&i| slots[i].main as u32).sum();
    let leftover = (content_main as u32).saturating_sub(total);
    let n = flowing.len() as u32;

    let mut before: u32 = 0;
    for (rank, &index) in flowing.iter().enumerate() {
        let gap = cumulative_gap(align, leftover, rank as u32, n);
        let slot = &slots[index];

        let main_pos = match slot.main_coord.within(content_main) {
            Some(offset) => offset as u32,
            None => gap + before,
        };
        let cross_pos = match slot.cross_coord.within(content_cross) {
            Some(offset) => offset as u32,
            None => anchor(pos, content_cross, slots[index].cross) as u32,
        };
        before += slot.main as u32;

        let abs = assemble(axis, content, main_pos as u16, cross_pos as u16, slot.main, slot.cross);
        place(arena, canvas, slot.id, abs);
    }
    for slot in slots.iter().filter(|s| s.pinned) {
        place(arena, canvas, slot.id, content);
    }

    for &child in &children {
        resolve_children(arena, canvas, child)?;
    }
    Ok(())
}

/// Compute one child's extents (shares deferred to the caller).
fn size_child(
    arena: &Arena,
    id: WindowId,
    axis: Axis,
    content_main: u16,
    content_cross: u16,
) -> Result<Slot> {
    let Some(win) = arena.get(id) else {
        return Ok(Slot {
            id,
            main: 0,
            cross: 0,
            share: false,
            pinned: false,
            main_coord: Coord::Auto,
            cross_coord: Coord::Auto,
        });
    };

    let (main_dim, cross_dim) = split(axis, win.rect.w, win.rect.h);
    let (main_coord, cross_coord) = split(axis, win.rect.x, win.rect.y);

    if win.kind.as_parent().is_some_and(|p| p.inflated) {
        return Ok(Slot {
            id,
            main: content_main,
            cross: content_cross,
            share: false,
            pinned: true,
            main_coord,
            cross_coord,
        });
    }

    let cross = match cross_dim {
        Dim::Fixed(n) => n,
        Dim::Auto | Dim::Fill => content_cross,
    };

    let (main, share) = match (main_dim, &win.kind) {
        (Dim::Fixed(n), _) => (n, false),
        (_, Kind::Parent(_)) => (0, true),
        (Dim::Fill, Kind::Text(_)) => (0, true),
        // A zero cross extent clamps instead of consulting the wrapper.
        (Dim::Auto, Kind::Text(_)) if cross == 0 => (0, false),
        (Dim::Auto, Kind::Text(t)) => (wrapped_extent(&t.text, axis, cross)?, false),
    };

    Ok(Slot { id, main, cross, share, pinned: false, main_coord, cross_coord })
}

/// The main-axis extent of a text leaf, derived from its cross-axis size.
///
/// In a horizontal parent the height budget drives the narrowest width; in a
/// vertical parent the width drives the wrapped height. A wrap failure here
/// is the box reporting "this text cannot be rendered in me".
fn wrapped_extent(plain: &str, axis: Axis, cross: u16) -> Result<u16> {
    let extent = match axis {
        Axis::Horizontal => text::width_for_height(plain, cross)?,
        Axis::Vertical => text::height_for_width(plain, cross)?,
    };
    Ok(extent)
}

// ---------------------------------------------------------------------------
// Distribution arithmetic
// ---------------------------------------------------------------------------

/// Total gap inserted before the child at `rank` (of `n` children) when
/// `leftover` cells remain on the main axis.
///
/// Integer positions come from cumulative proportions rather than per-gap
/// rounding, so the result is deterministic and the gaps are as even as
/// integers allow.
fn cumulative_gap(align: Align, leftover: u32, rank: u32, n: u32) -> u32 {
    match align {
        Align::Start => 0,
        Align::Center => leftover / 2,
        Align::End => leftover,
        Align::Between => {
            if n > 1 {
                leftover * rank / (n - 1)
            } else {
                0
            }
        }
        Align::Around => leftover * (2 * rank + 1) / (2 * n),
        Align::Evenly => leftover * (rank + 1) / (n + 1),
    }
}

/// Cross-axis offset of an item of `extent` cells anchored in `span`.
fn anchor(pos: Pos, span: u16, extent: u16) -> u16 {
    match pos {
        Pos::Start => 0,
        Pos::Center => span.saturating_sub(extent) / 2,
        Pos::End => span.saturating_sub(extent),
    }
}

/// Pick (main, cross) out of a (w, h) pair for the given axis.
fn split<T>(axis: Axis, w: T, h: T) -> (T, T) {
    match axis {
        Axis::Horizontal => (w, h),
        Axis::Vertical => (h, w),
    }
}

/// Rebuild an absolute rect from main/cross coordinates inside `content`.
fn assemble(
    axis: Axis,
    content: AbsRect,
    main_pos: u16,
    cross_pos: u16,
    main: u16,
    cross: u16,
) -> AbsRect {
    match axis {
        Axis::Horizontal => {
            AbsRect::new(content.x + main_pos, content.y + cross_pos, main, cross)
        }
        Axis::Vertical => {
            AbsRect::new(content.x + cross_pos, content.y + main_pos, cross, main)
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, Size};
    use crate::tree::{BorderConfig, ParentConfig, TextConfig, Window};

    fn fixture(screen: Size) -> (Arena, Canvas) {
        (Arena::new(), Canvas::new(screen))
    }

    fn insert_parent(arena: &mut Arena, canvas: &mut Canvas, cfg: ParentConfig) -> WindowId {
        let region = canvas.alloc_region();
        arena.insert(Window::parent(cfg, region))
    }

    fn child_parent(
        arena: &mut Arena,
        canvas: &mut Canvas,
        owner: WindowId,
        cfg: ParentConfig,
    ) -> WindowId {
        let region = canvas.alloc_region();
        arena.insert_child(owner, Window::parent(cfg, region)).unwrap()
    }

    fn child_text(
        arena: &mut Arena,
        canvas: &mut Canvas,
        owner: WindowId,
        cfg: TextConfig,
    ) -> WindowId {
        let region = canvas.alloc_region();
        arena.insert_child(owner, Window::text(cfg, region)).unwrap()
    }

    fn abs(arena: &Arena, id: WindowId) -> AbsRect {
        arena.get(id).unwrap().abs
    }

    // -----------------------------------------------------------------------
    // Top-level windows
    // -----------------------------------------------------------------------

    #[test]
    fn top_level_auto_fills_screen() {
        let (mut arena, mut canvas) = fixture(Size::new(80, 24));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new());
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(80, 24).to_rect()).unwrap();
        assert_eq!(abs(&arena, root), AbsRect::new(0, 0, 80, 24));
    }

    #[test]
    fn top_level_far_edge_offset() {
        let (mut arena, mut canvas) = fixture(Size::new(80, 40));
        let banner = insert_parent(
            &mut arena,
            &mut canvas,
            ParentConfig::new().rect(Rect::new().w(Dim::Fill).h(Dim::Fixed(8)).y(-12)),
        );
        resolve_roots(&mut arena, &mut canvas, &[banner], Size::new(80, 40).to_rect()).unwrap();
        assert_eq!(abs(&arena, banner), AbsRect::new(0, 28, 80, 8));
    }

    #[test]
    fn top_level_footer_row() {
        let (mut arena, mut canvas) = fixture(Size::new(80, 24));
        let footer = insert_parent(
            &mut arena,
            &mut canvas,
            ParentConfig::new().rect(Rect::new().h(Dim::Fixed(1)).y(-1)),
        );
        resolve_roots(&mut arena, &mut canvas, &[footer], Size::new(80, 24).to_rect()).unwrap();
        assert_eq!(abs(&arena, footer), AbsRect::new(0, 23, 80, 1));
    }

    #[test]
    fn top_level_windows_resolve_independently() {
        let (mut arena, mut canvas) = fixture(Size::new(20, 10));
        let a = insert_parent(
            &mut arena,
            &mut canvas,
            ParentConfig::new().rect(Rect::new().w(Dim::Fixed(5)).h(Dim::Fixed(5))),
        );
        let b = insert_parent(
            &mut arena,
            &mut canvas,
            ParentConfig::new().rect(Rect::new().w(Dim::Fixed(5)).h(Dim::Fixed(5)).x(4)),
        );
        resolve_roots(&mut arena, &mut canvas, &[a, b], Size::new(20, 10).to_rect()).unwrap();
        // They overlap; neither is displaced by the other.
        assert_eq!(abs(&arena, a), AbsRect::new(0, 0, 5, 5));
        assert_eq!(abs(&arena, b), AbsRect::new(4, 0, 5, 5));
    }

    // -----------------------------------------------------------------------
    // Insets
    // -----------------------------------------------------------------------

    #[test]
    fn border_and_padding_inset_content() {
        let (mut arena, mut canvas) = fixture(Size::new(20, 10));
        let root = insert_parent(
            &mut arena,
            &mut canvas,
            ParentConfig::new()
                .border(BorderConfig::solid(crate::color::Color::NONE))
                .padded(),
        );
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(20, 10).to_rect()).unwrap();
        assert_eq!(content_rect(&arena, root), AbsRect::new(2, 2, 16, 6));
    }

    #[test]
    fn inactive_border_reserves_nothing() {
        let (mut arena, mut canvas) = fixture(Size::new(20, 10));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new());
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(20, 10).to_rect()).unwrap();
        assert_eq!(content_rect(&arena, root), AbsRect::new(0, 0, 20, 10));
    }

    #[test]
    fn insets_exceeding_size_clamp_to_zero() {
        let (mut arena, mut canvas) = fixture(Size::new(20, 10));
        let root = insert_parent(
            &mut arena,
            &mut canvas,
            ParentConfig::new()
                .rect(Rect::new().w(Dim::Fixed(3)).h(Dim::Fixed(2)))
                .border(BorderConfig::solid(crate::color::Color::NONE))
                .padded(),
        );
        let child = child_text(&mut arena, &mut canvas, root, TextConfig::new().string("x"));
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(20, 10).to_rect()).unwrap();
        let c = abs(&arena, child);
        assert_eq!((c.w, c.h), (0, 0));
    }

    // -----------------------------------------------------------------------
    // Inflation
    // -----------------------------------------------------------------------

    #[test]
    fn inflated_child_pins_to_content() {
        let (mut arena, mut canvas) = fixture(Size::new(20, 10));
        let root = insert_parent(
            &mut arena,
            &mut canvas,
            ParentConfig::new().border(BorderConfig::solid(crate::color::Color::NONE)),
        );
        let inner = child_parent(
            &mut arena,
            &mut canvas,
            root,
            // The anchor and an explicit offset are both overridden.
            ParentConfig::new().inflated().pos(crate::tree::Pos::End).rect(Rect::new().x(3)),
        );
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(20, 10).to_rect()).unwrap();
        assert_eq!(abs(&arena, inner), AbsRect::new(1, 1, 18, 8));
    }

    // -----------------------------------------------------------------------
    // Main-axis sizing
    // -----------------------------------------------------------------------

    #[test]
    fn fill_children_share_remaining_space() {
        let (mut arena, mut canvas) = fixture(Size::new(20, 10));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new().vertical());
        let fixed = child_parent(
            &mut arena,
            &mut canvas,
            root,
            ParentConfig::new().rect(Rect::new().h(Dim::Fixed(4))),
        );
        let a = child_parent(&mut arena, &mut canvas, root, ParentConfig::new());
        let b = child_parent(&mut arena, &mut canvas, root, ParentConfig::new());
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(20, 10).to_rect()).unwrap();

        assert_eq!(abs(&arena, fixed), AbsRect::new(0, 0, 20, 4));
        assert_eq!(abs(&arena, a), AbsRect::new(0, 4, 20, 3));
        assert_eq!(abs(&arena, b), AbsRect::new(0, 7, 20, 3));
    }

    #[test]
    fn share_remainder_goes_to_earlier_children() {
        let (mut arena, mut canvas) = fixture(Size::new(20, 11));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new().vertical());
        let a = child_parent(&mut arena, &mut canvas, root, ParentConfig::new());
        let b = child_parent(&mut arena, &mut canvas, root, ParentConfig::new());
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(20, 11).to_rect()).unwrap();
        assert_eq!(abs(&arena, a).h, 6);
        assert_eq!(abs(&arena, b).h, 5);
    }

    #[test]
    fn text_child_sized_by_wrap_in_vertical_parent() {
        let (mut arena, mut canvas) = fixture(Size::new(10, 10));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new().vertical());
        let t = child_text(
            &mut arena,
            &mut canvas,
            root,
            TextConfig::new().string("[+] Pear\nnewline"),
        );
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(10, 10).to_rect()).unwrap();
        // Two lines at content width 10.
        assert_eq!(abs(&arena, t).h, 2);
        assert_eq!(abs(&arena, t).w, 10);
    }

    #[test]
    fn text_child_sized_by_height_search_in_horizontal_parent() {
        let (mut arena, mut canvas) = fixture(Size::new(10, 3));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new());
        let t = child_text(&mut arena, &mut canvas, root, TextConfig::new().string("a bb ccc dddd"));
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(10, 3).to_rect()).unwrap();
        // The height budget (3) drives the narrowest width.
        assert!(abs(&arena, t).w <= 5);
        assert_eq!(abs(&arena, t).h, 3);
    }

    #[test]
    fn unwrappable_text_child_is_an_error() {
        let (mut arena, mut canvas) = fixture(Size::new(4, 10));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new().vertical());
        child_text(&mut arena, &mut canvas, root, TextConfig::new().string("unbreakable"));
        let err = resolve_roots(&mut arena, &mut canvas, &[root], Size::new(4, 10).to_rect());
        assert!(matches!(err, Err(crate::error::Error::Wrap(_))));
    }

    // -----------------------------------------------------------------------
    // Distribution
    // -----------------------------------------------------------------------

    /// A horizontal row of three fixed 2-cell children in a 12-cell parent.
    fn row_fixture(align: Align) -> (Arena, Canvas, [WindowId; 3]) {
        let (mut arena, mut canvas) = fixture(Size::new(12, 1));
        let root = insert_parent(
            &mut arena,
            &mut canvas,
            ParentConfig::new().align(align).rect(Rect::new().h(Dim::Fixed(1))),
        );
        let kids = [0; 3].map(|_| {
            child_parent(
                &mut arena,
                &mut canvas,
                root,
                ParentConfig::new().rect(Rect::new().w(Dim::Fixed(2)).h(Dim::Fixed(1))),
            )
        });
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(12, 1).to_rect()).unwrap();
        (arena, canvas, kids)
    }

    fn xs(arena: &Arena, kids: &[WindowId; 3]) -> [u16; 3] {
        kids.map(|k| abs(arena, k).x)
    }

    #[test]
    fn align_start_packs_left() {
        let (arena, _, kids) = row_fixture(Align::Start);
        assert_eq!(xs(&arena, &kids), [0, 2, 4]);
    }

    #[test]
    fn align_center_packs_block_in_middle() {
        let (arena, _, kids) = row_fixture(Align::Center);
        assert_eq!(xs(&arena, &kids), [3, 5, 7]);
    }

    #[test]
    fn align_end_packs_right() {
        let (arena, _, kids) = row_fixture(Align::End);
        assert_eq!(xs(&arena, &kids), [6, 8, 10]);
    }

    #[test]
    fn align_between_flushes_edges() {
        let (arena, _, kids) = row_fixture(Align::Between);
        assert_eq!(xs(&arena, &kids), [0, 5, 10]);
    }

    #[test]
    fn align_around_halves_outer_gaps() {
        let (arena, _, kids) = row_fixture(Align::Around);
        // leftover 6 over 3 children: gaps 1|2|2|1.
        assert_eq!(xs(&arena, &kids), [1, 5, 9]);
    }

    #[test]
    fn align_evenly_equalizes_all_gaps() {
        let (arena, _, kids) = row_fixture(Align::Evenly);
        // leftover 6 over 4 gaps: 1|2|1|2 cumulative, evenly rounded.
        let [a, b, c] = xs(&arena, &kids);
        assert_eq!(a, 1);
        assert_eq!(b, 5);
        assert_eq!(c, 8);
    }

    #[test]
    fn between_with_single_child_packs_start() {
        let (mut arena, mut canvas) = fixture(Size::new(10, 1));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new().align(Align::Between));
        let only = child_parent(
            &mut arena,
            &mut canvas,
            root,
            ParentConfig::new().rect(Rect::new().w(Dim::Fixed(3)).h(Dim::Fixed(1))),
        );
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(10, 1).to_rect()).unwrap();
        assert_eq!(abs(&arena, only).x, 0);
    }

    // -----------------------------------------------------------------------
    // Cross-axis anchoring and explicit coordinates
    // -----------------------------------------------------------------------

    #[test]
    fn pos_anchors_cross_axis() {
        for (pos, expect_y) in [(Pos::Start, 0), (Pos::Center, 4), (Pos::End, 9)] {
            let (mut arena, mut canvas) = fixture(Size::new(10, 10));
            let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new().pos(pos));
            let kid = child_parent(
                &mut arena,
                &mut canvas,
                root,
                ParentConfig::new().rect(Rect::new().w(Dim::Fixed(4)).h(Dim::Fixed(1))),
            );
            resolve_roots(&mut arena, &mut canvas, &[root], Size::new(10, 10).to_rect()).unwrap();
            assert_eq!(abs(&arena, kid).y, expect_y, "pos {pos:?}");
        }
    }

    #[test]
    fn explicit_coord_beats_anchor() {
        let (mut arena, mut canvas) = fixture(Size::new(10, 10));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new().pos(Pos::Center));
        let kid = child_parent(
            &mut arena,
            &mut canvas,
            root,
            ParentConfig::new().rect(Rect::new().w(Dim::Fixed(4)).h(Dim::Fixed(2)).y(-2)),
        );
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(10, 10).to_rect()).unwrap();
        assert_eq!(abs(&arena, kid).y, 8);
    }

    // -----------------------------------------------------------------------
    // Determinism
    // -----------------------------------------------------------------------

    #[test]
    fn resolving_twice_is_bit_identical() {
        let (mut arena, mut canvas) = fixture(Size::new(40, 12));
        let root = insert_parent(
            &mut arena,
            &mut canvas,
            ParentConfig::new()
                .vertical()
                .border(BorderConfig::solid(crate::color::Color::NONE))
                .align(Align::Around),
        );
        let a = child_text(&mut arena, &mut canvas, root, TextConfig::new().string("hello wrap"));
        let b = child_parent(&mut arena, &mut canvas, root, ParentConfig::new());
        let screen = Size::new(40, 12).to_rect();

        resolve_roots(&mut arena, &mut canvas, &[root], screen).unwrap();
        let first = [abs(&arena, root), abs(&arena, a), abs(&arena, b)];
        resolve_roots(&mut arena, &mut canvas, &[root], screen).unwrap();
        let second = [abs(&arena, root), abs(&arena, a), abs(&arena, b)];
        assert_eq!(first, second);
    }

    #[test]
    fn resize_changes_next_pass_only() {
        let (mut arena, mut canvas) = fixture(Size::new(30, 10));
        let root = insert_parent(&mut arena, &mut canvas, ParentConfig::new());
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(30, 10).to_rect()).unwrap();
        assert_eq!(abs(&arena, root).w, 30);

        canvas.resize(Size::new(50, 20));
        resolve_roots(&mut arena, &mut canvas, &[root], Size::new(50, 20).to_rect()).unwrap();
        assert_eq!(abs(&arena, root).w, 50);
        assert_eq!(abs(&arena, root).h, 20);
    }
}
