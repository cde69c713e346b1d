//! Item transfers between floors and inventories, consumption, inspection
//!
//! Every transfer is remove-then-add, so an item sits in exactly one
//! container. Conditions are checked again here because the action was
//! resolved earlier in the round and the world may have moved on.

use crate::core::types::{ActorId, ItemId, RoomId};
use crate::entity::item::ConsumeHandler;
use crate::io::{Category, Writer};
use crate::simulation::effects::attach_effect;
use crate::world::World;

pub fn take(world: &mut World, actor: ActorId, item: ItemId, writer: &mut dyn Writer) -> bool {
    let Some(room_id) = world.actor(actor).map(|a| a.location) else {
        return false;
    };
    let available = world
        .room(room_id)
        .and_then(|room| room.items.iter().find(|i| i.id == item))
        .is_some_and(|i| i.flags.can_take());
    if !available {
        writer.say_to(actor, Category::Error, "That item isn't here...".into());
        return false;
    }
    move_floor_to_inventory(world, actor, room_id, item, writer)
}

pub fn take_all(world: &mut World, actor: ActorId, writer: &mut dyn Writer) -> usize {
    let Some(room_id) = world.actor(actor).map(|a| a.location) else {
        return 0;
    };
    let takeable: Vec<ItemId> = world
        .room(room_id)
        .map(|room| {
            room.items
                .iter()
                .filter(|i| i.flags.can_take())
                .map(|i| i.id)
                .collect()
        })
        .unwrap_or_default();
    if takeable.is_empty() {
        writer.say_to(actor, Category::Info, "There is nothing here to take.".into());
        return 0;
    }
    let mut taken = 0;
    for item in takeable {
        if move_floor_to_inventory(world, actor, room_id, item, writer) {
            taken += 1;
        }
    }
    taken
}

fn move_floor_to_inventory(
    world: &mut World,
    actor: ActorId,
    room_id: RoomId,
    item: ItemId,
    writer: &mut dyn Writer,
) -> bool {
    let Some(taken) = world.room_mut(room_id).and_then(|room| room.remove_item(item)) else {
        return false;
    };
    let item_name = taken.name().to_string();
    let Some(taker) = world.actor_mut(actor) else {
        // Put it back
        if let Some(room) = world.room_mut(room_id) {
            room.items.push(taken);
        }
        return false;
    };
    taker.inventory.push(taken);
    let name = taker.name.clone();
    writer.say_to_room(world, room_id, Category::Info, format!("{name} took the {item_name}."));
    true
}

pub fn drop(world: &mut World, actor: ActorId, item: ItemId, writer: &mut dyn Writer) -> bool {
    let Some(holder) = world.actor(actor) else {
        return false;
    };
    match holder.held_item(item) {
        None => {
            writer.say_to(actor, Category::Error, "You're not holding that item...".into());
            return false;
        }
        Some(held) if !held.flags.can_drop() => {
            writer.say_to(actor, Category::Error, "You can't drop that item".into());
            return false;
        }
        Some(_) => {}
    }
    let room_id = holder.location;
    let name = holder.name.clone();

    let Some(dropped) = world.actor_mut(actor).and_then(|a| a.remove_item(item)) else {
        return false;
    };
    let item_name = dropped.name().to_string();
    match world.room_mut(room_id) {
        Some(room) => room.items.push(dropped),
        None => {
            if let Some(a) = world.actor_mut(actor) {
                a.inventory.push(dropped);
            }
            return false;
        }
    }
    writer.say_to_room(world, room_id, Category::Info, format!("{name} dropped the {item_name}."));
    true
}

pub fn give(
    world: &mut World,
    actor: ActorId,
    target: ActorId,
    item: ItemId,
    writer: &mut dyn Writer,
) -> bool {
    let Some(giver) = world.actor(actor) else {
        return false;
    };
    match giver.held_item(item) {
        None => {
            writer.say_to(actor, Category::Error, "You aren't holding that item".into());
            return false;
        }
        Some(held) if !held.flags.can_drop() => {
            writer.say_to(actor, Category::Error, "You can't drop that item".into());
            return false;
        }
        Some(_) => {}
    }
    let room = giver.location;
    let giver_name = giver.name.clone();
    let receiver = world
        .actor(target)
        .filter(|t| t.is_alive() && t.location == room && t.id != actor);
    let Some(receiver) = receiver else {
        writer.say_to(actor, Category::Error, "They aren't here anymore".into());
        return false;
    };
    let target_name = receiver.name.clone();

    let Some(given) = world.actor_mut(actor).and_then(|a| a.remove_item(item)) else {
        return false;
    };
    let item_name = given.name().to_string();
    match world.actor_mut(target) {
        Some(t) => t.inventory.push(given),
        None => return false,
    }
    writer.say_to_many(
        vec![actor, target],
        Category::Info,
        format!("{giver_name} gave {target_name} a {item_name}"),
    );
    true
}

/// Run a held item's consume handler; the item is used up only on completion
pub fn consume(world: &mut World, actor: ActorId, item: ItemId, writer: &mut dyn Writer) -> bool {
    let Some(eater) = world.actor(actor) else {
        return false;
    };
    let Some(held) = eater.held_item(item) else {
        writer.say_to(actor, Category::Error, "You're not holding that item".into());
        return false;
    };
    let Some(handler) = held.on_consume.clone() else {
        writer.say_to(actor, Category::Error, "You can't consume that.".into());
        return false;
    };
    let item_name = held.name().to_string();
    let name = eater.name.clone();
    let room = eater.location;

    let completed = match handler {
        ConsumeHandler::Heal { hearts } => {
            if eater.hearts >= eater.max_hearts {
                writer.say_to(actor, Category::Info, "You don't need that right now.".into());
                false
            } else {
                let delta = i32::try_from(hearts).unwrap_or(i32::MAX);
                if let Some(a) = world.actor_mut(actor) {
                    a.adjust_hearts(delta);
                }
                true
            }
        }
        ConsumeHandler::Afflict(effect) => {
            attach_effect(world, actor, effect, writer);
            true
        }
    };

    if completed {
        if let Some(a) = world.actor_mut(actor) {
            a.remove_item(item);
        }
        writer.say_to_room(world, room, Category::Info, format!("{name} consumed the {item_name}."));
    }
    completed
}

/// Describe a held item, a floor item, or someone in the room
pub fn examine(world: &World, actor: ActorId, query: &str, writer: &mut dyn Writer) {
    let Some(viewer) = world.actor(actor) else {
        return;
    };
    let floor = world.room(viewer.location).and_then(|room| room.find_item(query));
    let item = viewer.find_held(query).or(floor);

    let text = match item {
        Some(item) if !item.examine_text.is_empty() => item.examine_text.clone(),
        Some(item) => format!("It's {} {}.", indefinite_article(item.name()), item.name()),
        None => match world.others_in_room(actor).find(|a| a.name_matches(query)) {
            Some(other) if !other.description.is_empty() => other.description.clone(),
            Some(other) => format!("You see {}. {} hearts remain.", other.name, other.hearts),
            None => {
                writer.say_to(actor, Category::Error, "You don't see that here.".into());
                return;
            }
        },
    };
    writer.say_to(actor, Category::Info, text);
}

/// "a" or "an" by the first letter of `name`
fn indefinite_article(name: &str) -> &'static str {
    match name.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

pub fn inventory(world: &World, actor: ActorId, writer: &mut dyn Writer) {
    let Some(holder) = world.actor(actor) else {
        return;
    };
    let text = if holder.inventory.is_empty() {
        "You aren't carrying anything.".to_string()
    } else {
        let names: Vec<&str> = holder.inventory.iter().map(|i| i.name()).collect();
        format!("You are carrying: {}", names.join(", "))
    };
    writer.say_to(actor, Category::Info, text);
}
