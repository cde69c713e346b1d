//! AI action selection
//!
//! Each behavior tag maps to a weighted table over one roll of the behavior
//! die (zero-based). An actor's ancestry gets the first say; the base table
//! applies when it defers. Every path yields an action, `Pass` at worst.

pub mod ancestry;

use crate::actions::Action;
use crate::core::config::EngineConfig;
use crate::core::types::{ActorId, Direction};
use crate::entity::actor::Behavior;
use crate::world::World;

pub use ancestry::{for_ancestry, AncestryBehavior, HumanAncestry};

/// Choose this round's action for an AI-controlled actor
pub fn decide(world: &mut World, config: &EngineConfig, actor: ActorId) -> Action {
    let Some((behavior, ancestry)) = world.actor(actor).map(|a| (a.behavior, a.ancestry)) else {
        return Action::Pass;
    };

    if let Some(ancestry) = ancestry {
        if let Some(action) = for_ancestry(ancestry).decide(world, config, actor, behavior) {
            tracing::debug!(%actor, ?ancestry, action = action.name(), "Ancestry decided");
            return action;
        }
    }

    let action = base_table(world, config, actor, behavior);
    tracing::debug!(%actor, ?behavior, action = action.name(), "Behavior decided");
    action
}

fn base_table(world: &mut World, config: &EngineConfig, actor: ActorId, behavior: Behavior) -> Action {
    match behavior {
        Behavior::Player => {
            tracing::debug!(%actor, "Player reached the behavior engine; passing");
            Action::Pass
        }
        Behavior::Looter => {
            let choice = match world.dice.roll(config.behavior_die) {
                0..=2 => world.random_visible_item(actor).map(Action::Take),
                3..=4 => world.random_held_item(actor).map(Action::Drop),
                _ => None,
            };
            choice.unwrap_or(Action::Pass)
        }
        Behavior::Aggressive => {
            let choice = match world.dice.roll(config.behavior_die) {
                0..=18 => world.first_visible_actor(actor).and_then(|target| {
                    let kind = world.actor(actor)?.preferred_attack;
                    Some(Action::Attack { kind, target })
                }),
                _ => None,
            };
            choice.unwrap_or(Action::Pass)
        }
        Behavior::Wanderer => match world.dice.roll(config.behavior_die) {
            0 => Action::ForceMove(Direction::North),
            1 => Action::ForceMove(Direction::East),
            2 => Action::ForceMove(Direction::South),
            3 => Action::ForceMove(Direction::West),
            _ => Action::Pass,
        },
        Behavior::Helpful | Behavior::Immobile | Behavior::Flee => {
            tracing::warn!(%actor, ?behavior, "Behavior has no action table; passing");
            Action::Pass
        }
    }
}
