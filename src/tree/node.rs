//! Window node types: shared base attributes, the Parent/Text variant split,
//! borders, anchors, and the builder configs.

use std::any::Any;
use std::fmt;

use slotmap::new_key_type;

use crate::color::Color;
use crate::event::EventHook;
use crate::geometry::{AbsRect, Rect};
use crate::render::RegionId;
use crate::text::strip_escapes;

new_key_type! {
    /// Unique identifier for a window. Copy, lightweight.
    pub struct WindowId;
}

new_key_type! {
    /// Unique identifier for a menu.
    pub struct MenuId;
}

// ---------------------------------------------------------------------------
// Anchors
// ---------------------------------------------------------------------------

/// Anchor of a block along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pos {
    #[default]
    Start,
    Center,
    End,
}

/// Distribution of several items along the main axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

/// Layout axis of a parent window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

// ---------------------------------------------------------------------------
// Border
// ---------------------------------------------------------------------------

/// A parent window's border. A window without one draws nothing and reserves
/// no space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Border {
    /// Drawn with this color, inheriting unset channels from the window fill.
    pub color: Color,
    pub dashed: bool,
}

// ---------------------------------------------------------------------------
// Window variants
// ---------------------------------------------------------------------------

/// Parent-specific state. Children live in the arena, in declaration order.
#[derive(Debug, Default)]
pub struct Parent {
    pub axis: Axis,
    pub border: Option<Border>,
    /// Inset the content rect by one extra cell on every side.
    pub padded: bool,
    /// Claim the owner's entire content area, overriding position anchors.
    pub inflated: bool,
    /// Cross-axis anchor applied to each child.
    pub pos: Pos,
    /// Main-axis distribution applied to the children.
    pub align: Align,
}

/// Text-leaf state.
#[derive(Debug, Default)]
pub struct Text {
    /// Raw source string; may contain inline style escapes.
    pub string: String,
    /// Plain-text cache, escapes stripped. Kept in sync with `string`.
    pub text: String,
    /// Vertical anchor of the wrapped block inside the window.
    pub pos: Pos,
    /// Horizontal distribution mode. Accepted in configuration; per-line
    /// placement currently centers every line regardless.
    pub align: Align,
}

impl Text {
    /// Replace the source string and refresh the plain cache.
    pub fn set_string(&mut self, string: impl Into<String>) {
        self.string = string.into();
        self.text = strip_escapes(&self.string);
    }
}

/// The closed window variant: every window is a parent or a text leaf.
#[derive(Debug)]
pub enum Kind {
    Parent(Parent),
    Text(Text),
}

impl Kind {
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Kind::Text(_))
    }

    pub fn as_parent(&self) -> Option<&Parent> {
        match self {
            Kind::Parent(p) => Some(p),
            Kind::Text(_) => None,
        }
    }

    pub fn as_parent_mut(&mut self) -> Option<&mut Parent> {
        match self {
            Kind::Parent(p) => Some(p),
            Kind::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Kind::Text(t) => Some(t),
            Kind::Parent(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Kind::Text(t) => Some(t),
            Kind::Parent(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// A window node: base attributes shared by both variants, plus the variant.
pub struct Window {
    /// Identifying name; not required to be unique.
    pub name: String,
    pub visible: bool,
    /// Declared geometry: user intent, never mutated by the resolver.
    pub rect: Rect,
    /// Most recently resolved geometry. A cache of the last pass only.
    pub abs: AbsRect,
    pub color: Color,
    pub event: Option<EventHook>,
    /// Backing canvas region, allocated at creation, released at destruction.
    pub region: RegionId,
    /// Opaque collaborator state (e.g. an input editor).
    pub data: Option<Box<dyn Any>>,
    pub kind: Kind,
}

impl Window {
    /// Build a parent window node from its config.
    pub fn parent(cfg: ParentConfig, region: RegionId) -> Self {
        Self {
            name: cfg.name,
            visible: cfg.visible,
            rect: cfg.rect,
            abs: AbsRect::ZERO,
            color: cfg.color,
            event: cfg.event,
            region,
            data: None,
            kind: Kind::Parent(Parent {
                axis: cfg.axis,
                border: cfg.border.to_border(),
                padded: cfg.padded,
                inflated: cfg.inflated,
                pos: cfg.pos,
                align: cfg.align,
            }),
        }
    }

    /// Build a text window node from its config.
    pub fn text(cfg: TextConfig, region: RegionId) -> Self {
        let mut text = Text {
            pos: cfg.pos,
            align: cfg.align,
            ..Text::default()
        };
        text.set_string(cfg.string);
        Self {
            name: cfg.name,
            visible: cfg.visible,
            rect: cfg.rect,
            abs: AbsRect::ZERO,
            color: cfg.color,
            event: cfg.event,
            region,
            data: None,
            kind: Kind::Text(text),
        }
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("name", &self.name)
            .field("visible", &self.visible)
            .field("rect", &self.rect)
            .field("abs", &self.abs)
            .field("color", &self.color)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Configs
// ---------------------------------------------------------------------------

/// Border configuration. May be carried around inactive: a parent can hold
/// border settings without drawing or reserving anything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BorderConfig {
    pub active: bool,
    pub color: Color,
    pub dashed: bool,
}

impl BorderConfig {
    /// An active solid border.
    pub const fn solid(color: Color) -> Self {
        Self { active: true, color, dashed: false }
    }

    /// An active dashed border.
    pub const fn dashed(color: Color) -> Self {
        Self { active: true, color, dashed: true }
    }

    /// The border to store on the node, if any.
    pub fn to_border(self) -> Option<Border> {
        self.active.then_some(Border { color: self.color, dashed: self.dashed })
    }
}

/// Configuration for a parent window.
#[derive(Debug, Default)]
pub struct ParentConfig {
    pub name: String,
    pub rect: Rect,
    pub color: Color,
    pub event: Option<EventHook>,
    pub visible: bool,
    pub border: BorderConfig,
    pub axis: Axis,
    pub padded: bool,
    pub inflated: bool,
    pub pos: Pos,
    pub align: Align,
}

impl ParentConfig {
    /// A visible, horizontal, auto-rect parent.
    pub fn new() -> Self {
        Self { visible: true, ..Self::default() }
    }

    /// Set the name (builder).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the declared rect (builder).
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Set the color (builder).
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the event hook (builder).
    pub fn event(mut self, hook: EventHook) -> Self {
        self.event = Some(hook);
        self
    }

    /// Start hidden (builder).
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Set the border configuration (builder).
    pub fn border(mut self, border: BorderConfig) -> Self {
        self.border = border;
        self
    }

    /// Lay children out top-to-bottom (builder).
    pub fn vertical(mut self) -> Self {
        self.axis = Axis::Vertical;
        self
    }

    /// Inset the content rect by one extra cell per side (builder).
    pub fn padded(mut self) -> Self {
        self.padded = true;
        self
    }

    /// Claim the owner's whole content area (builder).
    pub fn inflated(mut self) -> Self {
        self.inflated = true;
        self
    }

    /// Set the cross-axis anchor (builder).
    pub fn pos(mut self, pos: Pos) -> Self {
        self.pos = pos;
        self
    }

    /// Set the main-axis distribution (builder).
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Configuration for a text window.
#[derive(Debug, Default)]
pub struct TextConfig {
    pub name: String,
    pub rect: Rect,
    pub color: Color,
    pub event: Option<EventHook>,
    pub visible: bool,
    pub string: String,
    pub pos: Pos,
    pub align: Align,
}

impl TextConfig {
    /// A visible, empty, auto-rect text window.
    pub fn new() -> Self {
        Self { visible: true, ..Self::default() }
    }

    /// Set the source string (builder).
    pub fn string(mut self, string: impl Into<String>) -> Self {
        self.string = string.into();
        self
    }

    /// Set the name (builder).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the declared rect (builder).
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Set the color (builder).
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the event hook (builder).
    pub fn event(mut self, hook: EventHook) -> Self {
        self.event = Some(hook);
        self
    }

    /// Start hidden (builder).
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Set the vertical anchor (builder).
    pub fn pos(mut self, pos: Pos) -> Self {
        self.pos = pos;
        self
    }

    /// Set the horizontal distribution (builder).
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
