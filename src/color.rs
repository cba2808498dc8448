//! Color model: 8 base colors, inherit channels, pair indices, and the
//! render-pass inheritance context.
//!
//! A window's [`Color`] is a pair of optional channels. `None` on a channel
//! does not mean "default": it means "inherit whatever is active where I am
//! drawn", so two identical `Color` values can resolve differently in
//! different parts of the tree. The [`ColorContext`] carries the active color
//! through one render pass; it is created per pass and never shared.

// ---------------------------------------------------------------------------
// Base
// ---------------------------------------------------------------------------

/// One of the 8 base terminal colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// All base colors, in numeric order.
const BASES: [Base; 8] = [
    Base::Black,
    Base::Red,
    Base::Green,
    Base::Yellow,
    Base::Blue,
    Base::Magenta,
    Base::Cyan,
    Base::White,
];

impl Base {
    /// The numeric code, `0..=7`.
    #[inline]
    pub const fn code(self) -> i16 {
        self as i16
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A foreground/background color request.
///
/// A `None` channel inherits from the active color context at render time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub fg: Option<Base>,
    pub bg: Option<Base>,
}

impl Color {
    /// Inherit both channels.
    pub const NONE: Color = Color { fg: None, bg: None };

    /// Both channels explicit.
    #[inline]
    pub const fn new(fg: Base, bg: Base) -> Self {
        Self { fg: Some(fg), bg: Some(bg) }
    }

    /// Explicit foreground, inherited background.
    #[inline]
    pub const fn fg(fg: Base) -> Self {
        Self { fg: Some(fg), bg: None }
    }

    /// Explicit background, inherited foreground.
    #[inline]
    pub const fn bg(bg: Base) -> Self {
        Self { bg: Some(bg), fg: None }
    }

    /// Substitute any inherited channel from `active`.
    #[inline]
    pub fn resolve(self, active: Color) -> Color {
        Color {
            fg: self.fg.or(active.fg),
            bg: self.bg.or(active.bg),
        }
    }
}

// ---------------------------------------------------------------------------
// PairIndex
// ---------------------------------------------------------------------------

/// Index into the fixed 9x9 color-pair table.
///
/// Each channel is encoded as `-1..=7` (−1 is the terminal default for a
/// still-unresolved channel); the index is `(fg + 1) * 9 + (bg + 1)`, a
/// bijection over the 81 combinations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PairIndex(pub u8);

impl PairIndex {
    /// The pair for a fully inherited (terminal default) color.
    pub const DEFAULT: PairIndex = PairIndex(0);

    /// Compute the pair index for a color.
    pub fn of(color: Color) -> PairIndex {
        let fg = color.fg.map_or(-1, Base::code);
        let bg = color.bg.map_or(-1, Base::code);
        PairIndex(((fg + 1) * 9 + (bg + 1)) as u8)
    }

    /// Decode the foreground channel.
    pub fn fg(self) -> Option<Base> {
        let code = (self.0 / 9) as i16 - 1;
        (code >= 0).then(|| BASES[code as usize])
    }

    /// Decode the background channel.
    pub fn bg(self) -> Option<Base> {
        let code = (self.0 % 9) as i16 - 1;
        (code >= 0).then(|| BASES[code as usize])
    }
}

// ---------------------------------------------------------------------------
// ColorContext
// ---------------------------------------------------------------------------

/// The active-color inheritance context of one render pass.
///
/// `push` resolves a requested color against the active one, makes the result
/// active, and hands back its pair; `pop` restores whatever was active before
/// the matching push. Correctly nested push/pop is what lets a border inherit
/// from its window's fill, and a child from its parent.
#[derive(Debug, Default)]
pub struct ColorContext {
    stack: Vec<Color>,
    active: Color,
}

impl ColorContext {
    /// A fresh context with nothing active (both channels default).
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active color.
    #[inline]
    pub fn active(&self) -> Color {
        self.active
    }

    /// Resolve `color` against the active context, activate it, and return
    /// its pair. Balanced by [`ColorContext::pop`].
    pub fn push(&mut self, color: Color) -> PairIndex {
        let resolved = color.resolve(self.active);
        self.stack.push(self.active);
        self.active = resolved;
        PairIndex::of(resolved)
    }

    /// Restore the color that was active before the matching `push`.
    pub fn pop(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.active = previous;
        }
    }

    /// Current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
