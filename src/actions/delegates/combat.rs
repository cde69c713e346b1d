//! Attack resolution and the shared damage routine
//!
//! An attack hits when `roll(attack_die) + base > armor`, where `base` is the
//! attacker's stat for the attack kind. A hit deals `base` damage (at least
//! one heart). Hearts saturate at zero; zero hearts is terminal.

use crate::core::config::EngineConfig;
use crate::core::types::{ActorId, AttackKind};
use crate::entity::effect::Effect;
use crate::io::{Category, Writer};
use crate::simulation::effects::attach_effect;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit { damage: u32, fallen: bool },
    Miss,
    /// Thrown attack beyond its declared range
    OutOfRange,
    /// Target left, died, or never existed
    NoTarget,
}

pub fn attack(
    world: &mut World,
    config: &EngineConfig,
    attacker: ActorId,
    kind: AttackKind,
    target: ActorId,
    writer: &mut dyn Writer,
) -> AttackOutcome {
    let Some(source) = world.actor(attacker) else {
        return AttackOutcome::NoTarget;
    };
    let target_ok = world
        .actor(target)
        .is_some_and(|t| t.is_alive() && t.location == source.location && t.id != attacker);
    if !target_ok {
        writer.say_to(attacker, Category::Error, "Looks like that mob isn't here...".into());
        return AttackOutcome::NoTarget;
    }
    let Some(victim) = world.actor(target) else {
        return AttackOutcome::NoTarget;
    };

    let base = source.attack.for_kind(kind);
    let armor = victim.armor;
    let room = victim.location;
    let attacker_name = source.name.clone();
    let target_name = victim.name.clone();
    let in_range = match (kind, source.position, victim.position) {
        (AttackKind::Thrown, Some(from), Some(to)) => from.distance(&to) <= config.throw_range,
        _ => true,
    };

    writer.say_to_room(
        world,
        room,
        Category::Combat,
        format!(
            "{} has {} attacked {}!",
            source.format_hp(),
            kind.verb(),
            victim.format_hp()
        ),
    );

    if !in_range {
        writer.say_to_room(
            world,
            room,
            Category::Narration,
            format!("{attacker_name}'s throw falls short of {target_name}."),
        );
        return AttackOutcome::OutOfRange;
    }

    let roll = world.dice.roll(config.attack_die);
    let total = i64::from(roll) + i64::from(base);
    tracing::debug!(attacker = %attacker_name, target = %target_name, %kind, roll, base, armor, "Attack roll");

    if total > i64::from(armor) {
        let (damage, fallen) = resolve_damage(world, target, base, writer);
        AttackOutcome::Hit { damage, fallen }
    } else {
        writer.say_to_room(
            world,
            room,
            Category::Narration,
            format!("{attacker_name} misses {target_name}."),
        );
        AttackOutcome::Miss
    }
}

/// Apply `amount` damage (minimum one heart) and narrate it
///
/// Returns the damage dealt and whether the target fell.
pub fn resolve_damage(
    world: &mut World,
    target: ActorId,
    amount: i32,
    writer: &mut dyn Writer,
) -> (u32, bool) {
    let damage = u32::try_from(amount.max(1)).unwrap_or(1);
    let Some(victim) = world.actor_mut(target) else {
        return (0, false);
    };
    victim.hearts = victim.hearts.saturating_sub(damage);
    let fallen = !victim.is_alive();
    let room = victim.location;
    let name = victim.name.clone();
    let summary = format!("{} takes {damage} damage!", victim.format_hp());

    writer.say_to_room(world, room, Category::Combat, summary);
    if fallen {
        writer.say_to_room(world, room, Category::Combat, format!("{name} has fallen!"));
        tracing::info!(actor = %name, "Actor fell");
    }
    (damage, fallen)
}

/// Lay the curse spell on a target in the caster's room
pub fn curse(world: &mut World, caster: ActorId, target: ActorId, writer: &mut dyn Writer) {
    let Some(source) = world.actor(caster) else {
        return;
    };
    let caster_name = source.name.clone();
    let room = source.location;
    let victim = world
        .actor(target)
        .filter(|t| t.is_alive() && t.location == room);
    let Some(victim) = victim else {
        writer.say_to(caster, Category::Error, "That mob isn't here".into());
        return;
    };
    let effect = Effect::curse(&victim.name, &caster_name);
    attach_effect(world, target, effect, writer);
}
