//! Cooldown-gated skills.
//!
//! A skill's state is a pure function of `(skill, now)`: nothing expires on
//! a timer, the frame loop just asks again each frame. Activation is the
//! only mutation and sets the cooldown and the active window together.

use crate::core::constants::*;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillKind {
    /// Hint shows vowels, masks everything else.
    Reveal,
    /// Misses cost no health.
    Freeze,
    /// Instant bonus damage to the monster.
    Slash,
}

impl SkillKind {
    pub const ALL: [SkillKind; 3] = [SkillKind::Reveal, SkillKind::Freeze, SkillKind::Slash];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Reveal => "Reveal",
            Self::Freeze => "Freeze",
            Self::Slash => "Slash",
        }
    }

    pub fn cooldown_ms(&self) -> u64 {
        match self {
            Self::Reveal => REVEAL_COOLDOWN_MS,
            Self::Freeze => FREEZE_COOLDOWN_MS,
            Self::Slash => SLASH_COOLDOWN_MS,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::Reveal => REVEAL_DURATION_MS,
            Self::Freeze => FREEZE_DURATION_MS,
            Self::Slash => SLASH_DURATION_MS,
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Self::Reveal => '1',
            Self::Freeze => '2',
            Self::Slash => '3',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.hotkey() == key)
    }
}

/// Where a skill sits relative to a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillState {
    /// Effect running; takes precedence over the cooldown it also implies.
    Active { remaining_ms: u64 },
    Cooling { remaining_ms: u64 },
    ReadyIdle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub kind: SkillKind,
    pub cooldown: Duration,
    pub duration: Duration,
    /// `None` until first use, meaning ready.
    pub next_ready_at: Option<Instant>,
    pub active_until: Option<Instant>,
}

/// Milliseconds from `now` until `deadline`, rounded up; zero once passed.
fn ceil_ms_until(deadline: Instant, now: Instant) -> u64 {
    let left = deadline.saturating_duration_since(now);
    let nanos = left.as_nanos();
    nanos.div_ceil(1_000_000) as u64
}

impl Skill {
    pub fn new(kind: SkillKind) -> Self {
        Self {
            kind,
            cooldown: Duration::from_millis(kind.cooldown_ms()),
            duration: Duration::from_millis(kind.duration_ms()),
            next_ready_at: None,
            active_until: None,
        }
    }

    pub fn is_ready(&self, now: Instant) -> bool {
        self.next_ready_at.map_or(true, |at| now >= at)
    }

    pub fn is_active(&self, now: Instant) -> bool {
        !self.duration.is_zero() && self.active_until.is_some_and(|until| now < until)
    }

    /// Zero when ready, otherwise the cooldown left rounded up to whole ms.
    pub fn remaining_ms(&self, now: Instant) -> u64 {
        match self.next_ready_at {
            Some(at) if !self.is_ready(now) => ceil_ms_until(at, now),
            _ => 0,
        }
    }

    pub fn state(&self, now: Instant) -> SkillState {
        if self.is_active(now) {
            let remaining_ms = self.active_until.map_or(0, |until| ceil_ms_until(until, now));
            SkillState::Active { remaining_ms }
        } else if !self.is_ready(now) {
            SkillState::Cooling {
                remaining_ms: self.remaining_ms(now),
            }
        } else {
            SkillState::ReadyIdle
        }
    }

    /// Fire the skill if it is ready. Returns false (and changes nothing)
    /// while it is cooling down or still active.
    pub fn try_activate(&mut self, now: Instant) -> bool {
        if !self.is_ready(now) {
            return false;
        }
        if !self.duration.is_zero() {
            self.active_until = Some(now + self.duration);
        }
        self.next_ready_at = Some(now + self.cooldown);
        true
    }

    /// Cooldown label for the status line, e.g. `Ready` or `3.2s`.
    pub fn cooldown_label(&self, now: Instant) -> String {
        match self.remaining_ms(now) {
            0 => "Ready".to_string(),
            ms => format!("{:.1}s", ms as f64 / 1000.0),
        }
    }
}

/// The player's three skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSet {
    pub reveal: Skill,
    pub freeze: Skill,
    pub slash: Skill,
}

impl SkillSet {
    pub fn new() -> Self {
        Self {
            reveal: Skill::new(SkillKind::Reveal),
            freeze: Skill::new(SkillKind::Freeze),
            slash: Skill::new(SkillKind::Slash),
        }
    }

    pub fn get(&self, kind: SkillKind) -> &Skill {
        match kind {
            SkillKind::Reveal => &self.reveal,
            SkillKind::Freeze => &self.freeze,
            SkillKind::Slash => &self.slash,
        }
    }

    pub fn get_mut(&mut self, kind: SkillKind) -> &mut Skill {
        match kind {
            SkillKind::Reveal => &mut self.reveal,
            SkillKind::Freeze => &mut self.freeze,
            SkillKind::Slash => &mut self.slash,
        }
    }

    /// `[1]Reveal Ready   [2]Freeze 3.2s   [3]Slash Ready`
    pub fn cooldown_line(&self, now: Instant) -> String {
        SkillKind::ALL
            .iter()
            .map(|&kind| {
                format!(
                    "[{}]{} {}",
                    kind.hotkey(),
                    kind.name(),
                    self.get(kind).cooldown_label(now)
                )
            })
            .collect::<Vec<_>>()
            .join("   ")
    }
}

impl Default for SkillSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_new_skill_is_ready_and_idle() {
        let now = Instant::now();
        let skill = Skill::new(SkillKind::Reveal);
        assert!(skill.is_ready(now));
        assert!(!skill.is_active(now));
        assert_eq!(skill.remaining_ms(now), 0);
        assert_eq!(skill.state(now), SkillState::ReadyIdle);
    }

    #[test]
    fn test_timed_skill_lifecycle() {
        let t0 = Instant::now();
        let mut reveal = Skill::new(SkillKind::Reveal);
        assert!(reveal.try_activate(t0));

        assert_eq!(reveal.state(t0), SkillState::Active { remaining_ms: 4000 });
        assert!(reveal.is_active(t0 + ms(3999)));

        // Active window over, cooldown still running
        assert!(!reveal.is_active(t0 + ms(4000)));
        assert_eq!(
            reveal.state(t0 + ms(4000)),
            SkillState::Cooling { remaining_ms: 4000 }
        );

        assert_eq!(reveal.state(t0 + ms(8000)), SkillState::ReadyIdle);
    }

    #[test]
    fn test_activation_while_cooling_is_noop() {
        let t0 = Instant::now();
        let mut freeze = Skill::new(SkillKind::Freeze);
        assert!(freeze.try_activate(t0));
        let snapshot = freeze.clone();

        assert!(!freeze.try_activate(t0 + ms(1000)));
        assert!(!freeze.try_activate(t0 + ms(5000)));
        assert_eq!(freeze, snapshot);

        assert!(freeze.try_activate(t0 + ms(10_000)));
        assert_eq!(freeze.next_ready_at, Some(t0 + ms(20_000)));
    }

    #[test]
    fn test_instant_skill_never_active() {
        let t0 = Instant::now();
        let mut slash = Skill::new(SkillKind::Slash);
        assert!(slash.try_activate(t0));
        assert!(!slash.is_active(t0));
        assert_eq!(slash.active_until, None);
        assert_eq!(slash.next_ready_at, Some(t0 + ms(6000)));
        assert_eq!(slash.state(t0), SkillState::Cooling { remaining_ms: 6000 });
    }

    #[test]
    fn test_remaining_ms_rounds_up() {
        let t0 = Instant::now();
        let mut slash = Skill::new(SkillKind::Slash);
        slash.try_activate(t0);
        let now = t0 + ms(1000) + Duration::from_micros(1);
        assert_eq!(slash.remaining_ms(now), 5000);
        assert_eq!(slash.remaining_ms(t0 + ms(5999)), 1);
        assert_eq!(slash.remaining_ms(t0 + ms(6000)), 0);
    }

    #[test]
    fn test_cooldown_label() {
        let t0 = Instant::now();
        let mut freeze = Skill::new(SkillKind::Freeze);
        assert_eq!(freeze.cooldown_label(t0), "Ready");
        freeze.try_activate(t0);
        assert_eq!(freeze.cooldown_label(t0 + ms(6800)), "3.2s");
    }

    #[test]
    fn test_hotkeys_round_trip() {
        for kind in SkillKind::ALL {
            assert_eq!(SkillKind::from_hotkey(kind.hotkey()), Some(kind));
        }
        assert_eq!(SkillKind::from_hotkey('4'), None);
    }

    #[test]
    fn test_cooldown_line() {
        let t0 = Instant::now();
        let mut skills = SkillSet::new();
        assert_eq!(
            skills.cooldown_line(t0),
            "[1]Reveal Ready   [2]Freeze Ready   [3]Slash Ready"
        );
        skills.get_mut(SkillKind::Slash).try_activate(t0);
        assert_eq!(
            skills.cooldown_line(t0 + ms(1500)),
            "[1]Reveal Ready   [2]Freeze Ready   [3]Slash 4.5s"
        );
    }
}
