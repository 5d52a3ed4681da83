//! The frame loop: title, play and game-over phases over one [`Screen`].
//!
//! Everything runs on the caller's thread. In non-blocking mode each play
//! iteration renders, polls at most one key and then sleeps for the frame
//! interval, so cooldowns count down on screen while the player types. In
//! blocking mode the loop suspends inside `read_line` and the screen only
//! refreshes after each submitted line.

use crate::config::InputMode;
use crate::core::clock::Clock;
use crate::core::constants::FRAME_INTERVAL_MS;
use crate::core::session::{GameSummary, Session};
use crate::error::GameError;
use crate::input::{
    apply_line_command, apply_play_command, command_for_key, command_for_line, InputResult,
    LineCommand,
};
use crate::screen::{KeyInput, Screen};
use crate::ui::battle_scene::draw_battle_frame;
use crate::ui::game_over_scene::draw_game_over_scene;
use crate::ui::title_scene::draw_title_scene;
use crate::ui::{draw_changed_regions, PlayView, Region, RenderCache, TEXT_COLUMN};
use rand::Rng;
use std::time::Duration;

const INPUT_LABEL: &str = "Your Input: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSettings {
    pub mode: InputMode,
    pub frame_interval: Duration,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            mode: InputMode::NonBlocking,
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
        }
    }
}

pub struct FrameLoop<S: Screen, C: Clock, R: Rng> {
    screen: S,
    clock: C,
    rng: R,
    settings: LoopSettings,
    cache: RenderCache,
    /// Battle frame must be repainted before the next region pass.
    frame_dirty: bool,
    frames: u64,
}

impl<S: Screen, C: Clock, R: Rng> FrameLoop<S, C, R> {
    pub fn new(screen: S, clock: C, rng: R, settings: LoopSettings) -> Self {
        Self {
            screen,
            clock,
            rng,
            settings,
            cache: RenderCache::new(),
            frame_dirty: true,
            frames: 0,
        }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Play iterations completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one whole game on `session` and report how it ended.
    pub fn run(&mut self, session: &mut Session) -> Result<GameSummary, GameError> {
        tracing::info!(
            mode = ?self.settings.mode,
            words = session.vocabulary().count(),
            "game started"
        );

        self.title_phase(session)?;
        while session.is_playing() {
            self.play_frame(session)?;
        }
        self.game_over_phase(session)
    }

    fn title_phase(&mut self, session: &mut Session) -> Result<(), GameError> {
        draw_title_scene(&mut self.screen, session, self.settings.mode)?;

        match self.settings.mode {
            InputMode::NonBlocking => loop {
                match self.screen.read_key()? {
                    KeyInput::Enter => {
                        session.begin_play();
                        break;
                    }
                    KeyInput::Esc => {
                        session.quit();
                        break;
                    }
                    _ => {}
                }
            },
            InputMode::Blocking => match self.screen.read_line()? {
                Some(line) if command_for_line(&line) != LineCommand::Cancel => {
                    session.begin_play();
                }
                _ => session.quit(),
            },
        }
        self.frame_dirty = true;
        Ok(())
    }

    /// Render the current state, then take at most one input event.
    pub fn play_frame(&mut self, session: &mut Session) -> Result<(), GameError> {
        self.render_play(session)?;

        let result = match self.settings.mode {
            InputMode::NonBlocking => {
                let result = match self.screen.poll_key()? {
                    Some(key) => {
                        let now = self.clock.now();
                        apply_play_command(command_for_key(key), session, now, &mut self.rng)
                    }
                    None => InputResult::Continue,
                };
                self.clock.sleep(self.settings.frame_interval);
                result
            }
            InputMode::Blocking => self.read_submission(session)?,
        };

        if result == InputResult::Redraw {
            self.frame_dirty = true;
        }
        self.frames += 1;
        Ok(())
    }

    fn render_play(&mut self, session: &Session) -> Result<(), GameError> {
        if self.frame_dirty {
            draw_battle_frame(&mut self.screen, session)?;
            self.cache.invalidate();
            self.frame_dirty = false;
        }
        let view = PlayView::compose(session, self.clock.now());
        draw_changed_regions(&mut self.screen, &mut self.cache, &view)?;
        self.screen.flush()?;
        Ok(())
    }

    fn read_submission(&mut self, session: &mut Session) -> Result<InputResult, GameError> {
        let column = TEXT_COLUMN + INPUT_LABEL.len() as u16;
        self.screen.write_at(column, Region::Input.row(), "")?;
        self.screen.show_cursor(true)?;
        self.screen.flush()?;
        let line = self.screen.read_line()?;
        self.screen.show_cursor(false)?;

        let typed = line.as_deref().map_or(0, |l| l.chars().count());

        // Closed input counts as cancel
        let command = match line {
            Some(line) => command_for_line(&line),
            None => LineCommand::Cancel,
        };
        let now = self.clock.now();
        let result = apply_line_command(command, session, now, &mut self.rng);

        // Typed text is echoed by the terminal; repaint over it
        if result == InputResult::Continue {
            self.clear_wrapped_echo(column as usize + typed)?;
            self.cache.invalidate();
        }
        Ok(result)
    }

    /// Blank the rows below the input line that an echoed line of
    /// `echo_width` cells spilled onto.
    fn clear_wrapped_echo(&mut self, echo_width: usize) -> Result<(), GameError> {
        let (width, height) = self.screen.size();
        if width == 0 {
            return Ok(());
        }
        let blank = " ".repeat(width as usize);
        let first = Region::Input.row() + 1;
        let spilled = (echo_width / width as usize).min(height as usize) as u16;
        for row in first..(first + spilled).min(height) {
            self.screen.write_at(0, row, &blank)?;
        }
        Ok(())
    }

    fn game_over_phase(&mut self, session: &Session) -> Result<GameSummary, GameError> {
        let summary = session.summary();
        tracing::info!(
            score = summary.score,
            max_level = summary.max_level,
            outcome = ?summary.outcome,
            frames = self.frames,
            "game over"
        );

        draw_game_over_scene(&mut self.screen, &summary)?;
        match self.settings.mode {
            InputMode::NonBlocking => {
                while !matches!(self.screen.read_key()?, KeyInput::Enter | KeyInput::Esc) {}
            }
            InputMode::Blocking => {
                self.screen.read_line()?;
            }
        }
        Ok(summary)
    }
}
