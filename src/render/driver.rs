//! Crossterm terminal backend.
//!
//! The `Driver` is the only place the crate touches a real terminal: raw
//! mode, the alternate screen, cursor visibility, canvas flushing, and the
//! blocking input read all live here. Everything above it draws on the
//! [`Canvas`] and works headless.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::color::{Base, PairIndex};
use crate::event::Key;
use crate::geometry::Size;

use super::canvas::Canvas;

// ---------------------------------------------------------------------------
// TermEvent
// ---------------------------------------------------------------------------

/// A terminal input event the run loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    Key(Key),
    Resize(Size),
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend over a buffered stdout writer.
///
/// Construction enters raw mode and the alternate screen and hides the
/// cursor; failure is reported once, to the caller, with no retry and no
/// degraded mode. Drop restores the terminal.
pub struct Driver {
    writer: BufWriter<Stdout>,
}

impl Driver {
    /// Initialize the terminal for rendering.
    pub fn new() -> io::Result<Self> {
        let mut writer = BufWriter::new(io::stdout());
        terminal::enable_raw_mode()?;
        execute!(writer, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { writer })
    }

    /// The current terminal size.
    pub fn size() -> io::Result<Size> {
        terminal::size().map(|(w, h)| Size::new(w, h))
    }

    /// Flush the whole canvas to the terminal.
    ///
    /// The cursor stays hidden for the entire pass so no partial state is
    /// ever visible.
    pub fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        queue!(self.writer, cursor::Hide)?;
        let size = canvas.size();
        for y in 0..size.h {
            queue!(self.writer, cursor::MoveTo(0, y))?;
            for x in 0..size.w {
                let cell = canvas.cell(x, y).unwrap_or_default();
                queue!(
                    self.writer,
                    SetForegroundColor(channel_color(cell.pair.fg())),
                    SetBackgroundColor(channel_color(cell.pair.bg())),
                    Print(cell.ch),
                )?;
            }
        }
        queue!(self.writer, ResetColor)?;
        self.writer.flush()
    }

    /// Block until the next key press or resize.
    pub fn read(&mut self) -> io::Result<TermEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(code) = convert_key(key) {
                        return Ok(TermEvent::Key(code));
                    }
                }
                Event::Resize(w, h) => return Ok(TermEvent::Resize(Size::new(w, h))),
                _ => {}
            }
        }
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        let _ = execute!(self.writer, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Map a resolved channel to a terminal color; an unresolved channel is the
/// terminal default.
fn channel_color(base: Option<Base>) -> TermColor {
    match base {
        None => TermColor::Reset,
        Some(Base::Black) => TermColor::Black,
        Some(Base::Red) => TermColor::DarkRed,
        Some(Base::Green) => TermColor::DarkGreen,
        Some(Base::Yellow) => TermColor::DarkYellow,
        Some(Base::Blue) => TermColor::DarkBlue,
        Some(Base::Magenta) => TermColor::DarkMagenta,
        Some(Base::Cyan) => TermColor::DarkCyan,
        Some(Base::White) => TermColor::Grey,
    }
}

/// Convert a crossterm key event to an integer key code.
fn convert_key(key: KeyEvent) -> Option<Key> {
    let code = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() {
                Key((c as u8 - b'a' + 1) as i32)
            } else {
                return None;
            }
        }
        KeyCode::Char(c) => Key::from_char(c),
        KeyCode::Enter => Key::ENTER,
        KeyCode::Tab => Key::TAB,
        KeyCode::Esc => Key::ESC,
        KeyCode::Backspace => Key::BACKSPACE,
        KeyCode::Delete => Key::DELETE,
        KeyCode::Left => Key::LEFT,
        KeyCode::Right => Key::RIGHT,
        KeyCode::Up => Key::UP,
        KeyCode::Down => Key::DOWN,
        KeyCode::Home => Key::HOME,
        KeyCode::End => Key::END,
        _ => return None,
    };
    Some(code)
}

// ===========================================================================
// Tests
// ===========================================================================
