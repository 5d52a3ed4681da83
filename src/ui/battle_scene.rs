use super::{fill_row, hp_bar, HEADER_ROW, MONSTER_COLUMN, MONSTER_ROW, PLAYER_COLUMN, PLAYER_ROW, SEPARATOR_ROW};
use crate::combat::{Entity, Monster};
use crate::core::session::Session;
use crate::screen::{Color, Screen};
use std::io;

/// Title banner plus level and score, shared by the title and play screens.
pub fn draw_header(screen: &mut impl Screen, session: &Session) -> io::Result<()> {
    screen.set_color(Color::Yellow)?;
    screen.write_at(0, HEADER_ROW, "=== WORD WARRIOR RPG ===")?;
    screen.write_at(
        0,
        HEADER_ROW + 1,
        &format!("LEVEL: {}   SCORE: {}", session.level, session.score),
    )?;
    screen.write_at(0, HEADER_ROW + 2, "========================")?;
    screen.reset_color()
}

fn draw_player(screen: &mut impl Screen, player: &Entity) -> io::Result<()> {
    screen.set_color(Color::White)?;
    screen.write_at(PLAYER_COLUMN, PLAYER_ROW, &format!("PLAYER: {}", player.name))?;
    screen.set_color(Color::LightCyan)?;
    screen.write_at(PLAYER_COLUMN, PLAYER_ROW + 1, &hp_bar(player.hp, player.max_hp))?;
    screen.reset_color()
}

fn monster_sprite(monster: &Monster) -> [String; 4] {
    [
        "  /---\\   ".to_string(),
        " | o o |  ".to_string(),
        "  \\_^_/   ".to_string(),
        format!(" ({})", monster.name),
    ]
}

fn draw_monster(screen: &mut impl Screen, monster: &Monster) -> io::Result<()> {
    screen.set_color(monster.color.unwrap_or(Color::White))?;
    for (offset, line) in (0u16..).zip(monster_sprite(monster).iter()) {
        screen.write_at(MONSTER_COLUMN, MONSTER_ROW + offset, line)?;
    }
    screen.set_color(Color::LightRed)?;
    screen.write_at(MONSTER_COLUMN, MONSTER_ROW + 4, &hp_bar(monster.hp, monster.max_hp))?;
    screen.reset_color()
}

/// Repaint the whole battle frame: header, both entities and the
/// separator. Text regions are left to the region diffing.
pub fn draw_battle_frame(screen: &mut impl Screen, session: &Session) -> io::Result<()> {
    let (width, _) = screen.size();
    screen.reset_color()?;
    screen.clear()?;
    draw_header(screen, session)?;
    draw_player(screen, &session.player)?;
    draw_monster(screen, &session.monster)?;

    screen.set_color(Color::Grey)?;
    screen.write_at(0, SEPARATOR_ROW, &"-".repeat(width as usize))?;
    screen.reset_color()?;

    // Empty bars where the regions will go
    for region in super::Region::ALL {
        fill_row(screen, region.row(), region.background())?;
    }
    Ok(())
}
