//! Timed effects: attachment and the once-per-round tick

use crate::core::types::ActorId;
use crate::entity::effect::Effect;
use crate::io::{Category, Writer};
use crate::world::World;

/// Attach an effect and announce its activation to the actor's room
pub fn attach_effect(world: &mut World, actor: ActorId, effect: Effect, writer: &mut dyn Writer) {
    let Some(target) = world.actor_mut(actor) else {
        return;
    };
    let room = target.location;
    let activation = effect.activation.clone();
    tracing::debug!(actor = %target.name, effect = %effect.name, rounds = effect.rounds_left, "Effect attached");
    target.effects.push(effect);

    if !activation.is_empty() {
        writer.say_to_room(world, room, Category::Narration, activation);
    }
}

/// Tick every effect on every live actor once
///
/// Each effect applies its hearts delta (clamped to the actor's range), then
/// counts down; expired effects are removed with their deactivation text.
/// Returns the actors whose hearts reached zero during the tick.
pub fn tick_effects(world: &mut World, writer: &mut dyn Writer) -> Vec<ActorId> {
    let ids: Vec<ActorId> = world
        .live_actors()
        .filter(|a| !a.effects.is_empty())
        .map(|a| a.id)
        .collect();
    let mut fallen = Vec::new();

    for id in ids {
        let Some(actor) = world.actor_mut(id) else {
            continue;
        };
        let mut ended = Vec::new();
        let effects = std::mem::take(&mut actor.effects);
        for mut effect in effects {
            actor.adjust_hearts(effect.hearts_per_round);
            effect.rounds_left = effect.rounds_left.saturating_sub(1);
            if effect.is_expired() {
                ended.push(effect);
            } else {
                actor.effects.push(effect);
            }
        }
        let room = actor.location;
        let name = actor.name.clone();
        let dead = !actor.is_alive();

        for effect in ended {
            tracing::debug!(actor = %name, effect = %effect.name, "Effect expired");
            if !effect.deactivation.is_empty() {
                writer.say_to_room(world, room, Category::Narration, effect.deactivation);
            }
        }
        if dead {
            writer.say_to_room(world, room, Category::Combat, format!("{name} has fallen!"));
            tracing::info!(actor = %name, "Actor fell to an effect");
            fallen.push(id);
        }
    }
    fallen
}
