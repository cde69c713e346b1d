//! Room descriptions and operator inspection

use serde::Serialize;

use crate::core::types::ActorId;
use crate::io::{Category, Writer};
use crate::world::{Lighting, Weather, World};

/// Describe the actor's room: name, text, conditions, items, company
pub fn look(world: &World, actor: ActorId, writer: &mut dyn Writer) {
    let Some(room) = world.actor(actor).and_then(|a| world.room(a.location)) else {
        return;
    };

    let mut lines = vec![room.name.clone()];
    if !room.look.is_empty() {
        lines.push(room.look.clone());
    }
    match room.lighting {
        Lighting::Bright => {}
        Lighting::Dim => lines.push("The light here is dim.".into()),
        Lighting::Dark => lines.push("It is dark.".into()),
    }
    match room.weather {
        Weather::Clear => {}
        Weather::Rain => lines.push("Rain is falling.".into()),
        Weather::Fog => lines.push("Fog hangs in the air.".into()),
        Weather::Storm => lines.push("A storm rages.".into()),
    }
    for item in &room.items {
        if item.room_text.is_empty() {
            lines.push(format!("There is a {} here.", item.name()));
        } else {
            lines.push(item.room_text.clone());
        }
    }
    for other in world.others_in_room(actor) {
        lines.push(format!("{} is here.", other.name));
    }

    writer.say_to(actor, Category::Info, lines.join("\n"));
}

/// Operator inspection: dump the internal state of a named actor or item
///
/// Searches live actors by exact name, then every inventory, then every
/// room floor.
pub fn debug(world: &World, actor: ActorId, query: &str, writer: &mut dyn Writer) {
    let found = world
        .live_actors()
        .find(|a| a.name.eq_ignore_ascii_case(query))
        .map(dump)
        .or_else(|| {
            world
                .actors()
                .flat_map(|a| a.inventory.iter())
                .find(|i| i.name_matches(query))
                .map(dump)
        })
        .or_else(|| {
            world
                .rooms()
                .flat_map(|r| r.items.iter())
                .find(|i| i.name_matches(query))
                .map(dump)
        });

    match found {
        Some(Ok(json)) => writer.say_to(actor, Category::Info, json),
        Some(Err(err)) => {
            tracing::warn!(%err, query, "Debug dump failed");
            writer.say_to(actor, Category::Error, format!("Could not inspect {query}"));
        }
        None => writer.say_to(actor, Category::Error, format!("Nothing named {query} exists.")),
    }
}

fn dump<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
