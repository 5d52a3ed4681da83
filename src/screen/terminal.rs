//! crossterm-backed [`Screen`].
//!
//! Non-blocking mode puts the terminal into raw mode so single keystrokes
//! can be polled. Blocking mode keeps the terminal cooked so the line
//! discipline handles echo and editing for `read_line`. Both use the
//! alternate screen, and both restore the terminal when dropped.

use super::{Color, KeyInput, Screen};
use crate::config::InputMode;
use crate::core::constants::{FALLBACK_SCREEN_HEIGHT, FALLBACK_SCREEN_WIDTH};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, BufRead, Stdout, Write};
use std::time::Duration;

pub struct TerminalScreen {
    out: Stdout,
    raw: bool,
}

impl TerminalScreen {
    /// Take over the terminal. The previous state is restored on drop.
    pub fn enter(mode: InputMode) -> io::Result<Self> {
        let raw = mode == InputMode::NonBlocking;
        let mut out = io::stdout();
        if raw {
            enable_raw_mode()?;
        }
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            if raw {
                let _ = disable_raw_mode();
            }
            return Err(e);
        }
        tracing::debug!(raw, "terminal entered");
        Ok(Self { out, raw })
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, Show, LeaveAlternateScreen);
        if self.raw {
            let _ = disable_raw_mode();
        }
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Blue => TermColor::DarkBlue,
        Color::Brown => TermColor::DarkYellow,
        Color::Grey => TermColor::Grey,
        Color::LightBlue => TermColor::Blue,
        Color::LightCyan => TermColor::Cyan,
        Color::LightGreen => TermColor::Green,
        Color::LightRed => TermColor::Red,
        Color::White => TermColor::White,
        Color::Yellow => TermColor::Yellow,
    }
}

/// Raw mode swallows SIGINT, so Ctrl+C is read as a cancel here. Other
/// Ctrl/Alt chords never reach the answer buffer.
fn key_for(code: KeyCode, modifiers: KeyModifiers) -> KeyInput {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyInput::Esc,
            _ => KeyInput::Other,
        };
    }
    if modifiers.contains(KeyModifiers::ALT) {
        return KeyInput::Other;
    }
    match code {
        KeyCode::Char(c) => KeyInput::Char(c),
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Backspace | KeyCode::Delete => KeyInput::Backspace,
        KeyCode::Esc => KeyInput::Esc,
        _ => KeyInput::Other,
    }
}

/// Map a crossterm event to a game key. Key releases (sent on Windows) are
/// dropped so one physical press yields one input.
fn key_input(event: Event) -> Option<KeyInput> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => Some(key_for(code, modifiers)),
        Event::Resize(_, _) => Some(KeyInput::Resize),
        _ => None,
    }
}

impl Screen for TerminalScreen {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write_at(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y), Print(text))
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(term_color(color)))
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        queue!(self.out, SetBackgroundColor(term_color(color)))
    }

    fn reset_color(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor)
    }

    fn size(&self) -> (u16, u16) {
        match terminal::size() {
            Ok((w, h)) if w > 0 && h > 0 => (w, h),
            _ => (FALLBACK_SCREEN_WIDTH, FALLBACK_SCREEN_HEIGHT),
        }
    }

    fn poll_key(&mut self) -> io::Result<Option<KeyInput>> {
        // One event per call: anything else queued waits for the next frame.
        if event::poll(Duration::ZERO)? {
            return Ok(key_input(event::read()?));
        }
        Ok(None)
    }

    fn read_key(&mut self) -> io::Result<KeyInput> {
        loop {
            if let Some(key) = key_input(event::read()?) {
                return Ok(key);
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
    }

    fn show_cursor(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, Show)
        } else {
            queue!(self.out, Hide)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
