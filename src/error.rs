//! Crate-level error type.

use std::io;

use crate::text::WrapError;

/// Everything that can go wrong inside the toolkit.
///
/// Wrap failures and structural misuse are reported synchronously to the
/// caller of the operation that hit them; geometry problems (resize, empty
/// children, zero-size rects) are clamped and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The terminal driver could not be initialized or written to.
    #[error("terminal driver error: {0}")]
    Driver(#[from] io::Error),

    /// Text cannot be rendered inside its box.
    #[error("cannot render text in its box: {0}")]
    Wrap(#[from] WrapError),

    /// A window id no longer refers to a live window.
    #[error("window is no longer alive")]
    StaleWindow,

    /// A menu id no longer refers to a live menu.
    #[error("menu is no longer alive")]
    StaleMenu,

    /// A child was attached to a text leaf.
    #[error("text windows cannot own children")]
    NotAParent,

    /// A text operation targeted a parent window.
    #[error("parent windows hold no text")]
    NotAText,
}

pub type Result<T> = std::result::Result<T, Error>;
