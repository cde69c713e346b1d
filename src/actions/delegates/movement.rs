//! Movement between rooms and exit listings

use crate::actions::delegates::look;
use crate::core::types::{ActorId, Direction, RoomId};
use crate::io::{Category, Writer};
use crate::world::World;

/// Move through an existing exit
///
/// Without a matching exit a player is told so; AI actors do nothing.
pub fn walk(world: &mut World, actor: ActorId, direction: Direction, writer: &mut dyn Writer) {
    let Some(mover) = world.actor(actor) else {
        return;
    };
    let is_player = mover.is_player();
    let destination = world
        .room(mover.location)
        .and_then(|room| room.exit(direction))
        .map(|exit| exit.to);

    match destination {
        Some(to) => arrive(world, actor, direction, to, writer),
        None if is_player => {
            writer.say_to(actor, Category::Error, "Sorry, can't go that way.".into());
        }
        None => {
            tracing::debug!(%actor, %direction, "AI move blocked by missing exit");
        }
    }
}

/// Move by direction alone, ignoring whether the room declares that exit
pub fn force_move(world: &mut World, actor: ActorId, direction: Direction, writer: &mut dyn Writer) {
    let Some(from) = world.actor(actor).map(|a| a.location) else {
        return;
    };
    match world.resolve_direction(from, direction) {
        Some(to) => arrive(world, actor, direction, to, writer),
        None => {
            tracing::debug!(%actor, %direction, room = %from, "Forced move has no destination");
        }
    }
}

fn arrive(world: &mut World, actor: ActorId, direction: Direction, to: RoomId, writer: &mut dyn Writer) {
    let Some(mover) = world.actor(actor) else {
        return;
    };
    let name = mover.name.clone();
    let from = mover.location;
    let is_player = mover.is_player();

    writer.say_to_room(world, from, Category::Movement, format!("{name} left {direction}"));
    let first_visit = world.relocate(actor, to);
    writer.say_to_room(
        world,
        to,
        Category::Movement,
        format!("{name} arrived from {}", direction.inverse()),
    );
    tracing::debug!(actor = %name, %from, %to, first_visit, "Moved");

    if is_player {
        look::look(world, actor, writer);
    }
}

/// List the exits of the actor's room with their previews
pub fn doors(world: &World, actor: ActorId, writer: &mut dyn Writer) {
    let Some(room) = world.actor(actor).and_then(|a| world.room(a.location)) else {
        return;
    };
    if room.exits.is_empty() {
        writer.say_to(actor, Category::Info, "There are no exits.".into());
        return;
    }
    let listing = room
        .exits
        .iter()
        .map(|exit| format!("{}: {}", exit.direction, exit.preview))
        .collect::<Vec<_>>()
        .join("\n");
    writer.say_to(actor, Category::Info, listing);
}
