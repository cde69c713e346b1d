//! Name resolution: turn typed names into concrete actors and items
//!
//! Matching is case-insensitive and "early": a query matches a name when the
//! name, or any word of it, starts with the query. Ambiguity resolves to the
//! first match in enumeration order (room floor order, inventory order,
//! actor registration order).

use std::str::FromStr;

use crate::actions::{Action, SettingChange};
use crate::core::types::{ActorId, AttackKind};
use crate::world::World;

pub fn early_matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    let name = name.to_lowercase();
    let query = query.to_lowercase();
    name.starts_with(&query) || name.split_whitespace().any(|word| word.starts_with(&query))
}

pub fn take_or_retry(world: &World, actor: ActorId, item_name: &str) -> Action {
    if item_name == "all" {
        return Action::TakeAll;
    }
    world
        .actor(actor)
        .and_then(|a| world.room(a.location))
        .and_then(|room| {
            room.items
                .iter()
                .find(|i| i.flags.can_take() && i.name_matches(item_name))
        })
        .map(|item| Action::Take(item.id))
        .unwrap_or_else(|| Action::retry("That item isn't here..."))
}

pub fn drop_or_retry(world: &World, actor: ActorId, item_name: &str) -> Action {
    let Some(holder) = world.actor(actor) else {
        return Action::retry("You're not holding that item...");
    };
    let mut matching = holder.inventory.iter().filter(|i| i.name_matches(item_name)).peekable();
    if matching.peek().is_none() {
        return Action::retry("You're not holding that item...");
    }
    match matching.find(|i| i.flags.can_drop()) {
        Some(item) => Action::Drop(item.id),
        None => Action::retry("You can't drop that item"),
    }
}

pub fn consume_or_retry(world: &World, actor: ActorId, item_name: &str) -> Action {
    world
        .actor(actor)
        .and_then(|a| a.find_held(item_name))
        .map(|item| Action::Consume(item.id))
        .unwrap_or_else(|| Action::retry("You're not holding that item"))
}

pub fn give_or_retry(world: &World, actor: ActorId, target_name: &str, item_name: &str) -> Action {
    let Some(item) = world.actor(actor).and_then(|a| a.find_held(item_name)) else {
        return Action::retry("You aren't holding that item");
    };
    if !item.flags.can_drop() {
        return Action::retry("You can't drop that item");
    }
    match world.target(actor, target_name) {
        Some(target) => Action::Give {
            target,
            item: item.id,
        },
        None => Action::retry(format!("{target_name} isn't here")),
    }
}

/// Attack with the actor's preferred kind; an empty name picks the first visible actor
pub fn attack_or_retry(world: &World, actor: ActorId, target_name: &str) -> Action {
    let Some(attacker) = world.actor(actor) else {
        return Action::retry("Looks like that mob isn't here...");
    };
    let target = if target_name.is_empty() {
        world.first_visible_actor(actor)
    } else {
        world.target(actor, target_name)
    };
    match target {
        Some(target) => Action::Attack {
            kind: attacker.preferred_attack,
            target,
        },
        None => Action::retry("Looks like that mob isn't here..."),
    }
}

pub fn attack_setting(value: Option<&str>) -> Action {
    match value.map(AttackKind::from_str) {
        Some(Ok(kind)) => Action::Settings(SettingChange::PreferredAttack(kind)),
        _ => Action::retry("Not a valid attack"),
    }
}

pub fn curse_or_retry(world: &World, actor: ActorId, target_name: &str) -> Action {
    world
        .target(actor, target_name)
        .map(Action::Curse)
        .unwrap_or_else(|| Action::retry("That mob isn't here"))
}
