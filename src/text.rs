//! Text wrapping under the width/height duality.
//!
//! Wrapping is word-level: a line breaks at the most recent space, or at an
//! explicit newline regardless of width. The forward direction
//! ([`height_for_width`]) is a single scan; the reverse direction
//! ([`width_for_height`]) binary-searches for the narrowest width whose
//! wrapped height still fits, which is what lets a box's height budget drive
//! "tall and narrow" versus "short and wide" without the caller choosing.
//!
//! Inline style-escape sequences (introducer through the terminating `m`)
//! occupy zero cells and are invisible to every scan here.

use thiserror::Error;

/// Introduces an inline style-escape sequence.
pub const ESCAPE_INTRODUCER: char = '\x1b';

/// Terminates an inline style-escape sequence.
pub const ESCAPE_TERMINATOR: char = 'm';

/// A width bound no line-break arrangement can satisfy: some single word is
/// wider than the bound. A value, not a panic; callers decide whether it is
/// fatal for the box being laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("text cannot be wrapped inside width {width}")]
pub struct WrapError {
    pub width: u16,
}

/// Advance `i` from an escape introducer to just past its terminator.
fn skip_escape(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i] != ESCAPE_TERMINATOR {
        i += 1;
    }
    i + 1
}

/// The number of lines `text` occupies when wrapped at `max_w` cells.
///
/// A line breaks on an explicit `'\n'`, or when it would exceed `max_w`, in
/// which case the scan rewinds to the most recent space so words stay whole.
/// A word wider than `max_w` is a [`WrapError`]. Empty text is one line.
pub fn height_for_width(text: &str, max_w: u16) -> Result<u16, WrapError> {
    let chars: Vec<char> = text.chars().collect();
    let max_w = max_w as usize;

    let mut h: u16 = 1;
    let mut line_w = 0usize;
    let mut space_index = 0usize;
    let mut last_space_index = 0usize;

    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];
        if c == ESCAPE_INTRODUCER {
            i = skip_escape(&chars, i);
            continue;
        }
        if c == ' ' {
            space_index = i;
        }
        if c == '\n' {
            line_w = 0;
            h += 1;
        } else if line_w >= max_w {
            line_w = 0;
            h += 1;
            // No space since the last break: the word itself is too wide.
            if space_index == last_space_index {
                return Err(WrapError { width: max_w as u16 });
            }
            i = space_index;
            last_space_index = space_index;
        } else {
            line_w += 1;
        }
        i += 1;
    }

    Ok(h)
}

/// The minimum width at which `text` wraps into at most `max_h` lines.
///
/// Binary search over `[1, len(text)]`; a candidate that fails to wrap at
/// all, or wraps too tall, pushes the search toward larger widths. If no
/// width in the domain satisfies the bound the whole search is a
/// [`WrapError`].
pub fn width_for_height(text: &str, max_h: u16) -> Result<u16, WrapError> {
    let len = text.chars().count();
    if len == 0 {
        return Ok(0);
    }

    let mut left = 1usize;
    let mut right = len;
    let mut best = None;

    while left <= right {
        let mid = (left + right) / 2;
        match height_for_width(text, mid as u16) {
            Err(_) => left = mid + 1,
            Ok(h) if h > max_h => left = mid + 1,
            Ok(_) => {
                best = Some(mid as u16);
                right = mid - 1;
            }
        }
    }

    best.ok_or(WrapError { width: len as u16 })
}

/// The width actually used by each wrapped line of `text` under the height
/// bound `max_h`.
///
/// Re-derives the minimal wrap width via [`width_for_height`], then replays
/// the same line-breaking scan recording per-line widths. An overflowed
/// line's width excludes the partial word carried to the next line and the
/// space that triggered the break. At most `max_h` entries.
pub fn line_widths(text: &str, max_h: u16) -> Result<Vec<u16>, WrapError> {
    let max_w = width_for_height(text, max_h)? as usize;
    let chars: Vec<char> = text.chars().collect();
    let cap = max_h as usize;

    let mut widths: Vec<u16> = Vec::new();
    let mut line_w = 0usize;
    let mut space_index = 0usize;

    let mut i = 0usize;
    while i < chars.len() && widths.len() < cap {
        let c = chars[i];
        if c == ESCAPE_INTRODUCER {
            i = skip_escape(&chars, i);
            continue;
        }
        if c == ' ' {
            space_index = i;
        }
        if c == ' ' && line_w == 0 {
            // A space at the start of a line is consumed without a cell.
        } else if c == '\n' {
            widths.push(line_w as u16);
            line_w = 0;
        } else if line_w >= max_w {
            widths.push(line_w.saturating_sub(i - space_index) as u16);
            line_w = 0;
            i = space_index;
        } else {
            line_w += 1;
        }
        i += 1;
    }

    if widths.len() < cap {
        widths.push(line_w as u16);
    }

    Ok(widths)
}

/// Remove every style-escape sequence, leaving only visible characters.
///
/// Idempotent: stripping a stripped string is the identity.
pub fn strip_escapes(string: &str) -> String {
    let mut text = String::with_capacity(string.len());
    let mut chars = string.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_INTRODUCER {
            for t in chars.by_ref() {
                if t == ESCAPE_TERMINATOR {
                    break;
                }
            }
        } else {
            text.push(c);
        }
    }
    text
}

// ===========================================================================
// Tests
// ===========================================================================
