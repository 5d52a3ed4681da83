use super::battle_scene::draw_header;
use crate::config::InputMode;
use crate::core::session::Session;
use crate::screen::{Color, Screen};
use std::io;

pub fn draw_title_scene(screen: &mut impl Screen, session: &Session, mode: InputMode) -> io::Result<()> {
    let (prompt, controls) = match mode {
        InputMode::NonBlocking => (
            "Press ENTER to start, ESC to quit",
            "Controls: Enter=confirm, Backspace=delete, 1/2/3 skills",
        ),
        InputMode::Blocking => (
            "Press ENTER to start, type esc to quit",
            "Controls: type the answer + Enter, 1/2/3 + Enter for skills",
        ),
    };

    screen.reset_color()?;
    screen.clear()?;
    draw_header(screen, session)?;
    screen.set_color(Color::White)?;
    screen.write_at(3, 4, prompt)?;
    screen.write_at(3, 6, controls)?;
    screen.reset_color()?;
    screen.flush()
}
