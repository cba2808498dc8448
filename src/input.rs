//! Line-editing collaborator for text windows.
//!
//! [`Input`] owns a buffer and a cursor and knows nothing about rendering:
//! every edit pushes its visible string into the bound text window, and the
//! next render pass picks it up like any other content change. It lives in
//! the window's opaque `data` slot; the window's hook takes it out, offers
//! it the key, and puts it back (see the dashboard demo).

use crate::event::Key;
use crate::tree::WindowId;
use crate::tui::Tui;

/// A single-line editor bound to a text window.
///
/// The cursor is a byte offset into the buffer, always on a char boundary.
#[derive(Debug, Clone)]
pub struct Input {
    buffer: String,
    cursor: usize,
    /// Maximum buffer length in characters.
    capacity: usize,
    window: Option<WindowId>,
}

impl Input {
    /// Create an empty editor holding at most `capacity` characters.
    pub fn new(capacity: usize) -> Self {
        Self { buffer: String::new(), cursor: 0, capacity, window: None }
    }

    /// Bind to the text window that displays the buffer (builder).
    pub fn bind(mut self, window: WindowId) -> Self {
        self.window = Some(window);
        self
    }

    /// The current buffer contents.
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// The cursor position as a byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the buffer, move the cursor to the end, and sync the window.
    pub fn set_value(&mut self, tui: &mut Tui, value: impl Into<String>) {
        self.buffer = value.into();
        self.cursor = self.buffer.len();
        self.sync(tui);
    }

    /// Empty the buffer and sync the window.
    pub fn clear(&mut self, tui: &mut Tui) {
        self.buffer.clear();
        self.cursor = 0;
        self.sync(tui);
    }

    /// Offer a key to the editor. Returns whether it was consumed; consumed
    /// keys sync the bound window.
    pub fn handle_key(&mut self, tui: &mut Tui, key: Key) -> bool {
        let consumed = match key {
            Key::LEFT => self.move_left(),
            Key::RIGHT => self.move_right(),
            Key::HOME => self.move_home(),
            Key::END => self.move_end(),
            Key::BACKSPACE | Key::CTRL_H => self.backspace(),
            Key::DELETE | Key::CTRL_D => self.delete(),
            key => match key.as_char() {
                Some(c) => self.insert(c),
                None => false,
            },
        };
        if consumed {
            self.sync(tui);
        }
        consumed
    }

    // -- cursor ops ---------------------------------------------------------

    fn move_left(&mut self) -> bool {
        match self.buffer[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                true
            }
            None => false,
        }
    }

    fn move_right(&mut self) -> bool {
        match self.buffer[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }

    fn move_home(&mut self) -> bool {
        self.cursor = 0;
        true
    }

    fn move_end(&mut self) -> bool {
        self.cursor = self.buffer.len();
        true
    }

    fn insert(&mut self, c: char) -> bool {
        if self.buffer.chars().count() >= self.capacity {
            return false;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    fn backspace(&mut self) -> bool {
        match self.buffer[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                self.buffer.remove(self.cursor);
                true
            }
            None => false,
        }
    }

    fn delete(&mut self) -> bool {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
            true
        } else {
            false
        }
    }

    fn sync(&self, tui: &mut Tui) {
        if let Some(window) = self.window {
            let _ = tui.set_text(window, self.buffer.clone());
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
