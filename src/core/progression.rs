//! Encounter progression: what happens when something dies.

use crate::combat::{CombatEvent, Entity, Monster, MonsterTier};
use crate::core::constants::*;
use crate::core::session::Session;
use rand::Rng;

/// Health budget for the monster guarding `level`.
pub fn monster_hp_for_level(level: u32) -> u32 {
    MONSTER_BASE_HP + level * MONSTER_HP_PER_LEVEL + MonsterTier::for_level(level).hp_bonus()
}

pub fn spawn_monster(level: u32) -> Monster {
    let tier = MonsterTier::for_level(level);
    Entity::monster(tier.name(), monster_hp_for_level(level), tier.color())
}

/// The first monster is a weaker slime than the level formula would give.
pub fn opening_monster() -> Monster {
    let tier = MonsterTier::Slime;
    Entity::monster(tier.name(), OPENING_MONSTER_HP, tier.color())
}

/// React to deaths after a combat action. Player death wins over a
/// simultaneous monster kill and ends the session.
pub fn resolve_deaths(session: &mut Session, rng: &mut impl Rng) -> Option<CombatEvent> {
    if !session.is_playing() {
        return None;
    }

    if session.player.is_dead() {
        session.end_in_defeat();
        tracing::info!(
            score = session.score,
            level = session.level,
            "player defeated"
        );
        return Some(CombatEvent::PlayerDefeated {
            final_score: session.score,
            level: session.level,
        });
    }

    if session.monster.is_dead() {
        advance_level(session, rng);
        return Some(CombatEvent::MonsterDefeated {
            new_level: session.level,
        });
    }

    None
}

fn advance_level(session: &mut Session, rng: &mut impl Rng) {
    let defeated = std::mem::replace(&mut session.monster, spawn_monster(session.level + 1));
    session.level += 1;
    session.score += KILL_SCORE_BONUS;
    session.player.heal_to_full();
    session.draw_target(rng);
    session.input_buffer.clear();

    tracing::info!(
        defeated = %defeated.name,
        level = session.level,
        next = %session.monster.name,
        hp = session.monster.max_hp,
        "level up"
    );
}
