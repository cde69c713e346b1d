//! Species overrides for AI decisions

use crate::actions::Action;
use crate::core::config::EngineConfig;
use crate::core::types::{ActorId, AttackKind};
use crate::entity::actor::{Ancestry, Behavior};
use crate::world::World;

/// Species-specific decision hook, consulted before the base tables
pub trait AncestryBehavior {
    /// Choose an action for `behavior`, or `None` to defer to the base table
    fn decide(
        &self,
        world: &mut World,
        config: &EngineConfig,
        actor: ActorId,
        behavior: Behavior,
    ) -> Option<Action>;
}

/// Get the decision hook for an ancestry
pub fn for_ancestry(ancestry: Ancestry) -> Box<dyn AncestryBehavior> {
    match ancestry {
        Ancestry::Human => Box::new(HumanAncestry),
    }
}

/// Humans brawl: an aggressive human punches instead of using its preference
pub struct HumanAncestry;

impl AncestryBehavior for HumanAncestry {
    fn decide(
        &self,
        world: &mut World,
        config: &EngineConfig,
        actor: ActorId,
        behavior: Behavior,
    ) -> Option<Action> {
        match behavior {
            Behavior::Aggressive => {
                let roll = world.dice.roll(config.behavior_die);
                let action = match roll {
                    0..=18 => world.first_visible_actor(actor).map(|target| Action::Attack {
                        kind: AttackKind::Melee,
                        target,
                    }),
                    _ => None,
                };
                Some(action.unwrap_or(Action::Pass))
            }
            Behavior::Player
            | Behavior::Looter
            | Behavior::Wanderer
            | Behavior::Helpful
            | Behavior::Immobile
            | Behavior::Flee => None,
        }
    }
}
