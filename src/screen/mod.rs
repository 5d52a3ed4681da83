//! Screen driver capability set.
//!
//! The game core only ever talks to a [`Screen`]: cursor-addressed text,
//! foreground/background colors, a non-blocking key poll and a blocking
//! line read. [`TerminalScreen`] drives a real terminal through crossterm;
//! [`MemoryScreen`] is a headless grid with a scripted input queue.

pub mod memory;
pub mod terminal;

pub use memory::MemoryScreen;
pub use terminal::TerminalScreen;

use std::io;

/// Palette used by the scenes. Mapped onto terminal colors by each driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Brown,
    Grey,
    LightBlue,
    LightCyan,
    LightGreen,
    LightRed,
    White,
    Yellow,
}

/// Keys the game cares about. Everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Backspace,
    Esc,
    /// The terminal was resized; cached regions are stale.
    Resize,
    Other,
}

pub trait Screen {
    /// Clear the whole screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Write `text` starting at column `x`, row `y` (both zero-based).
    fn write_at(&mut self, x: u16, y: u16, text: &str) -> io::Result<()>;

    fn set_color(&mut self, color: Color) -> io::Result<()>;

    fn set_background(&mut self, color: Color) -> io::Result<()>;

    /// Restore the terminal's default colors.
    fn reset_color(&mut self) -> io::Result<()>;

    /// Terminal size as `(columns, rows)`. Drivers fall back to
    /// `FALLBACK_SCREEN_WIDTH x FALLBACK_SCREEN_HEIGHT` if the query fails.
    fn size(&self) -> (u16, u16);

    /// Return a pending key without blocking, if there is one.
    fn poll_key(&mut self) -> io::Result<Option<KeyInput>>;

    /// Block until a key is pressed.
    fn read_key(&mut self) -> io::Result<KeyInput>;

    /// Block until a full line is entered. `None` means input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn show_cursor(&mut self, visible: bool) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}
