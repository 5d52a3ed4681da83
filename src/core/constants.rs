// Player
pub const PLAYER_NAME: &str = "Hero";
pub const PLAYER_MAX_HP: u32 = 50;

// Monster scaling: hp = BASE + level * PER_LEVEL (+ BOSS_BONUS every 3rd level)
pub const OPENING_MONSTER_HP: u32 = 10;
pub const MONSTER_BASE_HP: u32 = 10;
pub const MONSTER_HP_PER_LEVEL: u32 = 5;
pub const BOSS_HP_BONUS: u32 = 20;
pub const BOSS_LEVEL_INTERVAL: u32 = 3;
pub const ALTERNATE_TIER_INTERVAL: u32 = 2;

// Combat rolls: base + uniform(0..=spread)
pub const HIT_DAMAGE_BASE: u32 = 5;
pub const HIT_DAMAGE_SPREAD: u32 = 4;
pub const HIT_SCORE_MULTIPLIER: u32 = 10;
pub const MISS_DAMAGE_BASE: u32 = 2;
pub const MISS_DAMAGE_SPREAD: u32 = 2;
pub const SLASH_DAMAGE_BASE: u32 = 8;
pub const SLASH_DAMAGE_SPREAD: u32 = 4;
pub const SLASH_SCORE_MULTIPLIER: u32 = 12;
pub const KILL_SCORE_BONUS: u32 = 100;

// Skill timers (milliseconds); a zero duration is a one-shot effect
pub const REVEAL_COOLDOWN_MS: u64 = 8_000;
pub const REVEAL_DURATION_MS: u64 = 4_000;
pub const FREEZE_COOLDOWN_MS: u64 = 10_000;
pub const FREEZE_DURATION_MS: u64 = 3_000;
pub const SLASH_COOLDOWN_MS: u64 = 6_000;
pub const SLASH_DURATION_MS: u64 = 0;

// Input
pub const INPUT_BUFFER_MAX_LEN: usize = 20;
pub const HINT_MASK: char = '_';
pub const CANCEL_WORD: &str = "esc";

// Frame pacing
pub const FRAME_INTERVAL_MS: u64 = 40;

// Terminal fallbacks when the size query fails
pub const FALLBACK_SCREEN_WIDTH: u16 = 100;
pub const FALLBACK_SCREEN_HEIGHT: u16 = 25;

// Vocabulary
pub const DEFAULT_VOCABULARY_PATH: &str = "words.txt";
pub const MISSING_PROMPT: &str = "?";
