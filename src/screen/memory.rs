//! Headless [`Screen`] for tests and scripted runs.
//!
//! Output is painted into a character grid and every `write_at` is logged,
//! so callers can check both what is visible and how often a row was
//! redrawn. Input comes from scripted queues: an exhausted key script reads
//! as `Esc` and an exhausted line script as closed input, so a scripted
//! session always terminates.

use super::{Color, KeyInput, Screen};
use std::collections::VecDeque;
use std::io;

/// One logged `write_at` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

#[derive(Debug, Clone)]
pub struct MemoryScreen {
    width: u16,
    height: u16,
    cells: Vec<Vec<char>>,
    fg: Option<Color>,
    bg: Option<Color>,
    cursor_visible: bool,
    clears: usize,
    writes: Vec<WriteRecord>,
    keys: VecDeque<Option<KeyInput>>,
    lines: VecDeque<String>,
}

impl MemoryScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width as usize]; height as usize],
            fg: None,
            bg: None,
            cursor_visible: true,
            clears: 0,
            writes: Vec::new(),
            keys: VecDeque::new(),
            lines: VecDeque::new(),
        }
    }

    pub fn push_key(&mut self, key: KeyInput) {
        self.keys.push_back(Some(key));
    }

    /// Queue one `Char` key per character of `text`.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.push_key(KeyInput::Char(c));
        }
    }

    /// Queue `frames` polls that find no pending key.
    pub fn push_idle(&mut self, frames: usize) {
        self.keys.extend(std::iter::repeat(None).take(frames));
    }

    pub fn push_line(&mut self, line: &str) {
        self.lines.push_back(line.to_string());
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Visible text of row `y` with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        self.cells
            .get(y as usize)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Whether any row currently shows `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }

    pub fn writes(&self) -> &[WriteRecord] {
        &self.writes
    }

    /// Number of writes that landed on row `y` since the log was last cleared.
    pub fn writes_on_row(&self, y: u16) -> usize {
        self.writes.iter().filter(|w| w.y == y).count()
    }

    pub fn clear_write_log(&mut self) {
        self.writes.clear();
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}

impl Screen for MemoryScreen {
    fn clear(&mut self) -> io::Result<()> {
        for row in &mut self.cells {
            row.fill(' ');
        }
        self.clears += 1;
        Ok(())
    }

    fn write_at(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        if let Some(row) = self.cells.get_mut(y as usize) {
            for (cell, c) in row.iter_mut().skip(x as usize).zip(text.chars()) {
                *cell = c;
            }
        }
        self.writes.push(WriteRecord {
            x,
            y,
            text: text.to_string(),
            fg: self.fg,
            bg: self.bg,
        });
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.fg = Some(color);
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        self.bg = Some(color);
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.fg = None;
        self.bg = None;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn poll_key(&mut self) -> io::Result<Option<KeyInput>> {
        Ok(self.keys.pop_front().unwrap_or(Some(KeyInput::Esc)))
    }

    fn read_key(&mut self) -> io::Result<KeyInput> {
        while let Some(entry) = self.keys.pop_front() {
            if let Some(key) = entry {
                return Ok(key);
            }
        }
        Ok(KeyInput::Esc)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn show_cursor(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_paints_grid_and_logs() {
        let mut screen = MemoryScreen::new(20, 3);
        screen.set_color(Color::Yellow).unwrap();
        screen.write_at(2, 1, "hello").unwrap();

        assert_eq!(screen.row_text(1), "  hello");
        assert_eq!(screen.writes_on_row(1), 1);
        assert_eq!(screen.writes()[0].fg, Some(Color::Yellow));
    }

    #[test]
    fn test_write_past_edge_is_clipped() {
        let mut screen = MemoryScreen::new(5, 1);
        screen.write_at(3, 0, "abcdef").unwrap();
        screen.write_at(0, 9, "off screen").unwrap();
        assert_eq!(screen.row_text(0), "   ab");
    }

    #[test]
    fn test_clear_blanks_everything() {
        let mut screen = MemoryScreen::new(10, 2);
        screen.write_at(0, 0, "x").unwrap();
        screen.clear().unwrap();
        assert_eq!(screen.row_text(0), "");
        assert_eq!(screen.clear_count(), 1);
    }

    #[test]
    fn test_scripted_keys_then_esc() {
        let mut screen = MemoryScreen::new(10, 2);
        screen.type_text("ab");
        screen.push_idle(1);

        assert_eq!(screen.poll_key().unwrap(), Some(KeyInput::Char('a')));
        assert_eq!(screen.poll_key().unwrap(), Some(KeyInput::Char('b')));
        assert_eq!(screen.poll_key().unwrap(), None);
        assert_eq!(screen.poll_key().unwrap(), Some(KeyInput::Esc));
    }

    #[test]
    fn test_read_key_skips_idle_entries() {
        let mut screen = MemoryScreen::new(10, 2);
        screen.push_idle(3);
        screen.push_key(KeyInput::Enter);
        assert_eq!(screen.read_key().unwrap(), KeyInput::Enter);
        assert_eq!(screen.read_key().unwrap(), KeyInput::Esc);
    }

    #[test]
    fn test_read_line_reports_closed_input() {
        let mut screen = MemoryScreen::new(10, 2);
        screen.push_line("apple");
        assert_eq!(screen.read_line().unwrap().as_deref(), Some("apple"));
        assert_eq!(screen.read_line().unwrap(), None);
    }
}
