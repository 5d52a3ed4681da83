//! Input handling for the play phase.
//!
//! Keys (non-blocking mode) and lines (blocking mode) are first mapped to a
//! command, then applied to the session through the combat resolver.

use crate::combat::{
    activate_skill, erase_letter, push_letter, resolve_attempt, submit_buffer, CombatEvent,
    SkillKind,
};
use crate::core::constants::CANCEL_WORD;
use crate::core::session::Session;
use crate::screen::KeyInput;
use rand::Rng;
use std::time::Instant;

/// What a single keystroke asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    Letter(char),
    Erase,
    Confirm,
    Skill(SkillKind),
    Cancel,
    /// Screen geometry changed; repaint everything.
    Redraw,
    Ignore,
}

/// What a submitted line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Cancel,
    Skill(SkillKind),
    Attempt(String),
}

/// Result of handling one play-phase input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Only the text regions may have changed.
    Continue,
    /// Health or the monster changed; the battle frame needs a full redraw.
    Redraw,
    /// Player asked to leave. The session is already marked as over.
    Quit,
}

pub fn command_for_key(key: KeyInput) -> PlayCommand {
    match key {
        KeyInput::Esc => PlayCommand::Cancel,
        KeyInput::Enter => PlayCommand::Confirm,
        KeyInput::Backspace => PlayCommand::Erase,
        KeyInput::Resize => PlayCommand::Redraw,
        KeyInput::Char(c) => match SkillKind::from_hotkey(c) {
            Some(kind) => PlayCommand::Skill(kind),
            None if c.is_ascii_alphabetic() => PlayCommand::Letter(c),
            None => PlayCommand::Ignore,
        },
        KeyInput::Other => PlayCommand::Ignore,
    }
}

/// `esc` quits, a lone hotkey fires that skill, anything else is an answer.
pub fn command_for_line(line: &str) -> LineCommand {
    let line = line.trim();
    if line.eq_ignore_ascii_case(CANCEL_WORD) {
        return LineCommand::Cancel;
    }
    let mut chars = line.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(kind) = SkillKind::from_hotkey(c) {
            return LineCommand::Skill(kind);
        }
    }
    LineCommand::Attempt(line.to_string())
}

fn result_for(events: &[CombatEvent]) -> InputResult {
    if events.iter().any(CombatEvent::changes_entities) {
        InputResult::Redraw
    } else {
        InputResult::Continue
    }
}

pub fn apply_play_command(
    command: PlayCommand,
    session: &mut Session,
    now: Instant,
    rng: &mut impl Rng,
) -> InputResult {
    match command {
        PlayCommand::Cancel => {
            session.quit();
            InputResult::Quit
        }
        PlayCommand::Confirm => result_for(&submit_buffer(session, now, rng)),
        PlayCommand::Skill(kind) => result_for(&activate_skill(session, kind, now, rng)),
        PlayCommand::Letter(c) => {
            push_letter(session, c);
            InputResult::Continue
        }
        PlayCommand::Erase => {
            erase_letter(session);
            InputResult::Continue
        }
        PlayCommand::Redraw => InputResult::Redraw,
        PlayCommand::Ignore => InputResult::Continue,
    }
}

pub fn apply_line_command(
    command: LineCommand,
    session: &mut Session,
    now: Instant,
    rng: &mut impl Rng,
) -> InputResult {
    match command {
        LineCommand::Cancel => {
            session.quit();
            InputResult::Quit
        }
        LineCommand::Skill(kind) => result_for(&activate_skill(session, kind, now, rng)),
        LineCommand::Attempt(attempt) => {
            session.input_buffer.clear();
            result_for(&resolve_attempt(session, &attempt, now, rng))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::GamePhase;
    use crate::vocabulary::{Vocabulary, Word};
    use rand::rngs::mock::StepRng;

    fn apple_session() -> Session {
        let vocab = Vocabulary::new(vec![Word::new("apple", "蘋果")]).unwrap();
        let mut session = Session::new(vocab, &mut StepRng::new(0, 0));
        session.begin_play();
        session
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(command_for_key(KeyInput::Esc), PlayCommand::Cancel);
        assert_eq!(command_for_key(KeyInput::Enter), PlayCommand::Confirm);
        assert_eq!(command_for_key(KeyInput::Backspace), PlayCommand::Erase);
        assert_eq!(command_for_key(KeyInput::Resize), PlayCommand::Redraw);
        assert_eq!(command_for_key(KeyInput::Char('Q')), PlayCommand::Letter('Q'));
        assert_eq!(
            command_for_key(KeyInput::Char('3')),
            PlayCommand::Skill(SkillKind::Slash)
        );
        assert_eq!(command_for_key(KeyInput::Char('7')), PlayCommand::Ignore);
        assert_eq!(command_for_key(KeyInput::Other), PlayCommand::Ignore);
    }

    #[test]
    fn test_line_commands() {
        assert_eq!(command_for_line("esc"), LineCommand::Cancel);
        assert_eq!(command_for_line(" ESC "), LineCommand::Cancel);
        assert_eq!(command_for_line("1"), LineCommand::Skill(SkillKind::Reveal));
        assert_eq!(command_for_line("2"), LineCommand::Skill(SkillKind::Freeze));
        assert_eq!(
            command_for_line("  Apple "),
            LineCommand::Attempt("Apple".to_string())
        );
        assert_eq!(command_for_line("12"), LineCommand::Attempt("12".to_string()));
        assert_eq!(command_for_line(""), LineCommand::Attempt(String::new()));
    }

    #[test]
    fn test_typing_then_confirm_hits() {
        let mut session = apple_session();
        let now = Instant::now();
        let mut rng = StepRng::new(0, 0);
        for c in "apple".chars() {
            let result = apply_play_command(PlayCommand::Letter(c), &mut session, now, &mut rng);
            assert_eq!(result, InputResult::Continue);
        }
        let result = apply_play_command(PlayCommand::Confirm, &mut session, now, &mut rng);
        assert_eq!(result, InputResult::Redraw);
        assert_eq!(session.monster.hp, 5);
    }

    #[test]
    fn test_reveal_needs_no_full_redraw() {
        let mut session = apple_session();
        let result = apply_play_command(
            PlayCommand::Skill(SkillKind::Reveal),
            &mut session,
            Instant::now(),
            &mut StepRng::new(0, 0),
        );
        assert_eq!(result, InputResult::Continue);
        assert!(session.skills.reveal.is_active(Instant::now()));
    }

    #[test]
    fn test_cancel_quits() {
        let mut session = apple_session();
        let result = apply_play_command(
            PlayCommand::Cancel,
            &mut session,
            Instant::now(),
            &mut StepRng::new(0, 0),
        );
        assert_eq!(result, InputResult::Quit);
        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_line_attempt_is_case_insensitive() {
        let mut session = apple_session();
        let result = apply_line_command(
            command_for_line("APPLE"),
            &mut session,
            Instant::now(),
            &mut StepRng::new(0, 0),
        );
        assert_eq!(result, InputResult::Redraw);
        assert_eq!(session.monster.hp, 5);
        assert_eq!(session.score, 50);
    }
}
