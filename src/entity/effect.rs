//! Timed hearts modifiers attached to a single actor

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Spell,
    Consumable,
}

/// A timed modifier, ticked once per round by the scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub name: String,
    pub kind: EffectKind,
    pub rounds_left: u32,
    /// Applied on every tick, clamped to the actor's hearts range
    pub hearts_per_round: i32,
    /// Emitted once, when the effect is attached
    #[serde(default)]
    pub activation: String,
    /// Emitted once, when the effect runs out
    #[serde(default)]
    pub deactivation: String,
}

impl Effect {
    /// The curse spell: one round, minus ten hearts
    pub fn curse(target: &str, caster: &str) -> Self {
        Self {
            name: "Curse".into(),
            kind: EffectKind::Spell,
            rounds_left: 1,
            hearts_per_round: -10,
            activation: format!("{target} has been cursed by {caster}!"),
            deactivation: format!("The curse on {target} has worn off."),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.rounds_left == 0
    }
}
