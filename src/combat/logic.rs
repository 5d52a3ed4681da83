//! Combat resolution: typed attempts, skill activations and the input buffer.
//!
//! Every entry point is a no-op unless the session is in `GamePhase::Play`,
//! and every one that can kill something hands over to
//! `progression::resolve_deaths` before returning.

use super::skills::SkillKind;
use crate::core::constants::*;
use crate::core::progression::resolve_deaths;
use crate::core::session::Session;
use rand::Rng;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEvent {
    /// Correct answer.
    Hit { damage: u32 },
    /// Wrong answer, player took damage.
    Miss { damage: u32 },
    /// Wrong answer absorbed by Freeze.
    Shielded,
    /// Reveal started; the hint shows vowels.
    Revealed,
    /// Freeze started; misses are shielded.
    Frozen,
    Slashed { damage: u32 },
    MonsterDefeated { new_level: u32 },
    PlayerDefeated { final_score: u32, level: u32 },
}

impl CombatEvent {
    /// Message for the feedback line.
    pub fn feedback(&self) -> String {
        match self {
            Self::Hit { damage } => format!("Hit! Dealt {} damage!", damage),
            Self::Miss { damage } => format!("Miss! You took {} damage!", damage),
            Self::Shielded => "Miss! Frozen shielded the hit.".to_string(),
            Self::Revealed => "Skill 1: Reveal vowels!".to_string(),
            Self::Frozen => "Skill 2: Monster frozen!".to_string(),
            Self::Slashed { damage } => format!("Skill 3: Slash dealt {}!", damage),
            Self::MonsterDefeated { .. } => "Monster defeated! Level Up! HP Restored.".to_string(),
            Self::PlayerDefeated { .. } => "You have fallen...".to_string(),
        }
    }

    /// Whether health bars or the monster changed, so the battle frame
    /// needs a full redraw.
    pub fn changes_entities(&self) -> bool {
        !matches!(self, Self::Shielded | Self::Revealed | Self::Frozen)
    }
}

/// Case-insensitive comparison, ignoring surrounding whitespace.
pub fn answers_match(attempt: &str, answer: &str) -> bool {
    attempt.trim().to_lowercase() == answer.trim().to_lowercase()
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Keep vowels, mask every other character.
pub fn vowel_hint(answer: &str) -> String {
    answer
        .chars()
        .map(|c| if is_vowel(c) { c } else { HINT_MASK })
        .collect()
}

fn roll(rng: &mut impl Rng, base: u32, spread: u32) -> u32 {
    base + rng.gen_range(0..=spread)
}

/// Set the feedback line from the most recent event.
fn record(session: &mut Session, events: &[CombatEvent]) {
    if let Some(last) = events.last() {
        session.feedback = last.feedback();
    }
}

/// Resolve a finished attempt against the current target.
pub fn resolve_attempt(
    session: &mut Session,
    attempt: &str,
    now: Instant,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    if !session.is_playing() {
        return Vec::new();
    }

    let mut events = Vec::new();
    if answers_match(attempt, &session.target.answer) {
        let damage = roll(rng, HIT_DAMAGE_BASE, HIT_DAMAGE_SPREAD);
        session.monster.take_damage(damage);
        session.score += damage * HIT_SCORE_MULTIPLIER;
        events.push(CombatEvent::Hit { damage });
    } else if session.skills.freeze.is_active(now) {
        events.push(CombatEvent::Shielded);
    } else {
        let damage = roll(rng, MISS_DAMAGE_BASE, MISS_DAMAGE_SPREAD);
        session.player.take_damage(damage);
        events.push(CombatEvent::Miss { damage });
    }
    tracing::debug!(?events, attempt, answer = %session.target.answer, "attempt resolved");

    // Next question, win or lose, as long as this monster is still standing
    if !session.monster.is_dead() && !session.player.is_dead() {
        session.draw_target(rng);
    }

    events.extend(resolve_deaths(session, rng));
    record(session, &events);
    events
}

/// Commit the typed buffer as an attempt. The buffer is cleared either way.
pub fn submit_buffer(session: &mut Session, now: Instant, rng: &mut impl Rng) -> Vec<CombatEvent> {
    if !session.is_playing() {
        return Vec::new();
    }
    let attempt = std::mem::take(&mut session.input_buffer);
    resolve_attempt(session, &attempt, now, rng)
}

/// Trigger a skill. Requests while it is cooling down or active are
/// silently ignored.
pub fn activate_skill(
    session: &mut Session,
    kind: SkillKind,
    now: Instant,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    if !session.is_playing() {
        return Vec::new();
    }
    if !session.skills.get_mut(kind).try_activate(now) {
        tracing::debug!(
            skill = kind.name(),
            remaining_ms = session.skills.get(kind).remaining_ms(now),
            "skill not ready"
        );
        return Vec::new();
    }

    let mut events = Vec::new();
    match kind {
        SkillKind::Slash => {
            let damage = roll(rng, SLASH_DAMAGE_BASE, SLASH_DAMAGE_SPREAD);
            session.monster.take_damage(damage);
            session.score += damage * SLASH_SCORE_MULTIPLIER;
            events.push(CombatEvent::Slashed { damage });
        }
        SkillKind::Reveal => events.push(CombatEvent::Revealed),
        SkillKind::Freeze => events.push(CombatEvent::Frozen),
    }
    tracing::debug!(skill = kind.name(), "skill activated");

    events.extend(resolve_deaths(session, rng));
    record(session, &events);
    events
}

/// Append a typed letter (lowercased). Non-letters and anything past the
/// buffer cap are dropped.
pub fn push_letter(session: &mut Session, c: char) -> bool {
    if !session.is_playing()
        || !c.is_ascii_alphabetic()
        || session.input_buffer.len() >= INPUT_BUFFER_MAX_LEN
    {
        return false;
    }
    session.input_buffer.push(c.to_ascii_lowercase());
    true
}

pub fn erase_letter(session: &mut Session) -> bool {
    session.is_playing() && session.input_buffer.pop().is_some()
}
