use crate::core::session::GameSummary;
use crate::screen::{Color, Screen};
use std::io;

const BANNER: [&str; 3] = [
    "===========================",
    "   G A M E   O V E R   ",
    "===========================",
];

pub fn draw_game_over_scene(screen: &mut impl Screen, summary: &GameSummary) -> io::Result<()> {
    screen.reset_color()?;
    screen.clear()?;

    screen.set_color(Color::LightRed)?;
    for (offset, line) in (0u16..).zip(BANNER) {
        screen.write_at(29, 9 + offset, line)?;
    }

    screen.set_color(Color::Yellow)?;
    screen.write_at(31, 13, &format!("Final Score: {}", summary.score))?;
    screen.write_at(31, 14, &format!("Max Level:   {}", summary.max_level))?;

    screen.reset_color()?;
    screen.write_at(0, 19, "Press Enter to exit...")?;
    screen.show_cursor(true)?;
    screen.flush()
}
