//! Screen layout, per-region render cache and the three scenes.
//!
//! The play screen has two layers. The battle frame (header, HP bars,
//! monster sprite) is repainted in full only after an event that changes an
//! entity. The five text regions below it are composed every frame and
//! written only when their text differs from what was last drawn.

pub mod battle_scene;
pub mod game_over_scene;
pub mod title_scene;

use crate::combat::vowel_hint;
use crate::core::session::Session;
use crate::screen::{Color, Screen};
use std::io;
use std::time::Instant;

// Play screen layout (zero-based rows and columns)
pub const HEADER_ROW: u16 = 0;
pub const PLAYER_COLUMN: u16 = 1;
pub const PLAYER_ROW: u16 = 4;
pub const MONSTER_COLUMN: u16 = 39;
pub const MONSTER_ROW: u16 = 3;
pub const SEPARATOR_ROW: u16 = 11;
pub const TEXT_COLUMN: u16 = 4;
pub const HP_BAR_CELLS: u32 = 10;

/// A line of the play screen that is diffed frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Question,
    Hint,
    Input,
    Feedback,
    Cooldowns,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Question,
        Region::Hint,
        Region::Input,
        Region::Feedback,
        Region::Cooldowns,
    ];

    pub fn row(&self) -> u16 {
        match self {
            Self::Question => 13,
            Self::Hint => 14,
            Self::Input => 15,
            Self::Feedback => 17,
            Self::Cooldowns => 19,
        }
    }

    pub fn background(&self) -> Color {
        match self {
            Self::Hint => Color::Blue,
            _ => Color::LightBlue,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Text of every region for one frame, computed from state alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayView {
    pub question: String,
    pub hint: String,
    pub input: String,
    pub feedback: String,
    pub cooldowns: String,
}

impl PlayView {
    pub fn compose(session: &Session, now: Instant) -> Self {
        let target = &session.target;
        let hint = if session.skills.reveal.is_active(now) {
            format!("Hint: {}", vowel_hint(&target.answer))
        } else {
            "Hint: (press 1 to reveal vowels)".to_string()
        };
        Self {
            question: format!(
                "Monster Question: {} ({} letters)",
                target.prompt,
                target.letter_count()
            ),
            hint,
            input: format!("Your Input: {}", session.input_buffer),
            feedback: session.feedback.clone(),
            cooldowns: session.skills.cooldown_line(now),
        }
    }

    pub fn text(&self, region: Region) -> &str {
        match region {
            Region::Question => &self.question,
            Region::Hint => &self.hint,
            Region::Input => &self.input,
            Region::Feedback => &self.feedback,
            Region::Cooldowns => &self.cooldowns,
        }
    }
}

/// Last text drawn per region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderCache {
    drawn: [Option<String>; 5],
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` for `region`; true if it differs from the last draw.
    pub fn changed(&mut self, region: Region, text: &str) -> bool {
        let slot = &mut self.drawn[region.index()];
        if slot.as_deref() == Some(text) {
            return false;
        }
        *slot = Some(text.to_string());
        true
    }

    /// Forget everything, e.g. after the screen was cleared.
    pub fn invalidate(&mut self) {
        self.drawn = Default::default();
    }

    pub fn last_drawn(&self, region: Region) -> Option<&str> {
        self.drawn[region.index()].as_deref()
    }
}

/// Paint a full-width background bar on `row`.
pub fn fill_row(screen: &mut impl Screen, row: u16, background: Color) -> io::Result<()> {
    let (width, _) = screen.size();
    screen.set_background(background)?;
    screen.write_at(0, row, &" ".repeat(width as usize))?;
    screen.reset_color()
}

/// Redraw one region: background bar plus white text.
pub fn draw_region(screen: &mut impl Screen, region: Region, text: &str) -> io::Result<()> {
    let row = region.row();
    fill_row(screen, row, region.background())?;
    screen.set_background(region.background())?;
    screen.set_color(Color::White)?;
    screen.write_at(TEXT_COLUMN, row, text)?;
    screen.reset_color()
}

/// Draw every region whose text changed since the last call. Returns how
/// many regions were written.
pub fn draw_changed_regions(
    screen: &mut impl Screen,
    cache: &mut RenderCache,
    view: &PlayView,
) -> io::Result<usize> {
    let mut drawn = 0;
    for region in Region::ALL {
        let text = view.text(region);
        if cache.changed(region, text) {
            draw_region(screen, region, text)?;
            drawn += 1;
        }
    }
    Ok(drawn)
}

/// `[██████----] 30/50`
pub fn hp_bar(current: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (current.min(max) * HP_BAR_CELLS / max) as usize
    };
    let empty = HP_BAR_CELLS as usize - filled;
    format!("[{}{}] {}/{}", "█".repeat(filled), "-".repeat(empty), current, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::SkillKind;
    use crate::screen::MemoryScreen;
    use crate::vocabulary::{Vocabulary, Word};
    use rand::rngs::mock::StepRng;
    use std::time::Duration;

    fn apple_session() -> Session {
        let vocab = Vocabulary::new(vec![Word::new("apple", "蘋果")]).unwrap();
        let mut session = Session::new(vocab, &mut StepRng::new(0, 0));
        session.begin_play();
        session
    }

    #[test]
    fn test_hp_bar() {
        assert_eq!(hp_bar(50, 50), "[██████████] 50/50");
        assert_eq!(hp_bar(25, 50), "[█████-----] 25/50");
        assert_eq!(hp_bar(4, 50), "[----------] 4/50");
        assert_eq!(hp_bar(0, 0), "[----------] 0/0");
    }

    #[test]
    fn test_compose_view() {
        let session = apple_session();
        let view = PlayView::compose(&session, Instant::now());
        assert_eq!(view.question, "Monster Question: 蘋果 (5 letters)");
        assert_eq!(view.hint, "Hint: (press 1 to reveal vowels)");
        assert_eq!(view.input, "Your Input: ");
        assert_eq!(
            view.cooldowns,
            "[1]Reveal Ready   [2]Freeze Ready   [3]Slash Ready"
        );
    }

    #[test]
    fn test_hint_follows_reveal_window() {
        let mut session = apple_session();
        let t0 = Instant::now();
        session.skills.get_mut(SkillKind::Reveal).try_activate(t0);

        assert_eq!(PlayView::compose(&session, t0).hint, "Hint: a___e");
        let later = t0 + Duration::from_millis(4000);
        assert_eq!(
            PlayView::compose(&session, later).hint,
            "Hint: (press 1 to reveal vowels)"
        );
    }

    #[test]
    fn test_cache_reports_changes_only() {
        let mut cache = RenderCache::new();
        assert!(cache.changed(Region::Hint, "a"));
        assert!(!cache.changed(Region::Hint, "a"));
        assert!(cache.changed(Region::Hint, "b"));
        assert!(cache.changed(Region::Input, "b"));
        assert_eq!(cache.last_drawn(Region::Hint), Some("b"));

        cache.invalidate();
        assert_eq!(cache.last_drawn(Region::Hint), None);
        assert!(cache.changed(Region::Hint, "b"));
    }

    #[test]
    fn test_draw_changed_regions_skips_unchanged() {
        let session = apple_session();
        let mut screen = MemoryScreen::new(80, 25);
        let mut cache = RenderCache::new();
        let now = Instant::now();

        let view = PlayView::compose(&session, now);
        assert_eq!(draw_changed_regions(&mut screen, &mut cache, &view).unwrap(), 5);
        assert!(screen.row_text(Region::Question.row()).contains("蘋果"));

        screen.clear_write_log();
        assert_eq!(draw_changed_regions(&mut screen, &mut cache, &view).unwrap(), 0);
        assert!(screen.writes().is_empty());
    }
}
