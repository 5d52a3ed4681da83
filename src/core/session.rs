use crate::combat::{Entity, Monster, SkillSet};
use crate::core::constants::{PLAYER_MAX_HP, PLAYER_NAME};
use crate::core::progression::opening_monster;
use crate::vocabulary::{Vocabulary, Word};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for confirm or cancel.
    Start,
    Play,
    /// Terminal phase. Nothing mutates the session once it is reached.
    GameOver,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Defeated,
    Quit,
}

/// Final numbers reported on the game-over screen and in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub max_level: u32,
    pub outcome: Outcome,
}

/// Everything one run of the game owns.
#[derive(Debug, Clone)]
pub struct Session {
    pub player: Entity,
    pub score: u32,
    pub level: u32,
    pub monster: Monster,
    pub target: Word,
    pub input_buffer: String,
    pub feedback: String,
    pub skills: SkillSet,
    pub phase: GamePhase,
    outcome: Option<Outcome>,
    vocabulary: Vocabulary,
}

impl Session {
    pub fn new(vocabulary: Vocabulary, rng: &mut impl Rng) -> Self {
        let target = vocabulary.next_word(rng);
        Self {
            player: Entity::new(PLAYER_NAME, PLAYER_MAX_HP),
            score: 0,
            level: 1,
            monster: opening_monster(),
            target,
            input_buffer: String::new(),
            feedback: String::new(),
            skills: SkillSet::new(),
            phase: GamePhase::Start,
            outcome: None,
            vocabulary,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Replace the current target with a fresh draw.
    pub fn draw_target(&mut self, rng: &mut impl Rng) {
        self.target = self.vocabulary.next_word(rng);
    }

    pub fn begin_play(&mut self) {
        if self.phase == GamePhase::Start {
            self.phase = GamePhase::Play;
            self.feedback.clear();
            self.input_buffer.clear();
        }
    }

    /// User cancelled. Ignored once the game is already over.
    pub fn quit(&mut self) {
        if self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.outcome = Some(Outcome::Quit);
        }
    }

    pub(crate) fn end_in_defeat(&mut self) {
        self.phase = GamePhase::GameOver;
        self.outcome = Some(Outcome::Defeated);
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Play
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            max_level: self.level,
            outcome: self.outcome.unwrap_or(Outcome::Quit),
        }
    }
}
