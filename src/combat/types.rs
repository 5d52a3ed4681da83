use crate::core::constants::*;
use crate::screen::Color;

/// Anything with a health pool. The player and every monster share this
/// shape; monsters additionally carry a display color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub color: Option<Color>,
}

/// Monsters behave exactly like any other entity.
pub type Monster = Entity;

impl Entity {
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
            color: None,
        }
    }

    pub fn monster(name: impl Into<String>, max_hp: u32, color: Color) -> Monster {
        Self {
            color: Some(color),
            ..Self::new(name, max_hp)
        }
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    pub fn heal_to_full(&mut self) {
        self.hp = self.max_hp;
    }
}

/// Monster family for a level: every 3rd level is a boss, otherwise even
/// levels alternate with the base tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterTier {
    Slime,
    Goblin,
    DragonBoss,
}

impl MonsterTier {
    pub fn for_level(level: u32) -> Self {
        if level % BOSS_LEVEL_INTERVAL == 0 {
            Self::DragonBoss
        } else if level % ALTERNATE_TIER_INTERVAL == 0 {
            Self::Goblin
        } else {
            Self::Slime
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Slime => "Slime",
            Self::Goblin => "Goblin",
            Self::DragonBoss => "Dragon Boss",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Slime => Color::LightGreen,
            Self::Goblin => Color::Brown,
            Self::DragonBoss => Color::LightRed,
        }
    }

    pub fn hp_bonus(&self) -> u32 {
        match self {
            Self::DragonBoss => BOSS_HP_BONUS,
            Self::Slime | Self::Goblin => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation() {
        let hero = Entity::new("Hero", 50);
        assert_eq!(hero.name, "Hero");
        assert_eq!(hero.hp, 50);
        assert_eq!(hero.max_hp, 50);
        assert_eq!(hero.color, None);
        assert!(!hero.is_dead());
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut slime = Entity::monster("Slime", 10, Color::LightGreen);
        slime.take_damage(4);
        assert_eq!(slime.hp, 6);
        assert!(!slime.is_dead());

        slime.take_damage(100);
        assert_eq!(slime.hp, 0);
        assert!(slime.is_dead());
    }

    #[test]
    fn test_zero_damage_is_harmless() {
        let mut hero = Entity::new("Hero", 50);
        hero.take_damage(0);
        assert_eq!(hero.hp, 50);
    }

    #[test]
    fn test_heal_to_full() {
        let mut hero = Entity::new("Hero", 50);
        hero.take_damage(37);
        hero.heal_to_full();
        assert_eq!(hero.hp, 50);
    }

    #[test]
    fn test_tier_for_level() {
        assert_eq!(MonsterTier::for_level(1), MonsterTier::Slime);
        assert_eq!(MonsterTier::for_level(2), MonsterTier::Goblin);
        assert_eq!(MonsterTier::for_level(3), MonsterTier::DragonBoss);
        assert_eq!(MonsterTier::for_level(4), MonsterTier::Goblin);
        assert_eq!(MonsterTier::for_level(5), MonsterTier::Slime);
        // Boss check wins over the even check
        assert_eq!(MonsterTier::for_level(6), MonsterTier::DragonBoss);
    }

    #[test]
    fn test_only_boss_gets_hp_bonus() {
        assert_eq!(MonsterTier::DragonBoss.hp_bonus(), 20);
        assert_eq!(MonsterTier::Goblin.hp_bonus(), 0);
        assert_eq!(MonsterTier::Slime.hp_bonus(), 0);
    }
}
