//! # casement
//!
//! A declarative terminal windowing toolkit: a tree of rectangular panes
//! rendered onto a character-cell canvas, with nested layout, word-level
//! text wrapping, bordered containers, and color inheritance.
//!
//! Geometry is declared, not computed by the caller: windows carry
//! partially-specified rects (fixed sizes, fill-to-parent, edge-relative
//! offsets, centering, space distribution) and every render pass resolves
//! the whole tree against the current terminal size before painting. There
//! is no diffing and no cached layout — resizes and content changes are the
//! same code path as the first frame.
//!
//! ## Core Systems
//!
//! - **[`geometry`]** — declared and resolved rect types
//! - **[`color`]** — 8-color palette, inherit channels, pair indices
//! - **[`text`]** — wrapping under the width/height duality
//! - **[`tree`]** — the window arena: Parent/Text nodes, borders, configs
//! - **[`layout`]** — top-down rect resolution
//! - **[`render`]** — canvas, paint pass, crossterm driver
//! - **[`event`]** — key codes and event hooks
//! - **[`input`]** — line-editing collaborator for text windows
//! - **[`tui`]** — the root context: menus, focus, dispatch, run loop
//! - **[`error`]** — the crate error type

// Foundation
pub mod color;
pub mod error;
pub mod geometry;
pub mod text;

// The tree and its resolution
pub mod layout;
pub mod tree;

// Rendering
pub mod render;

// Events and collaborators
pub mod event;
pub mod input;

// The root context
pub mod tui;
