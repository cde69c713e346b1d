//! Load a world from a TOML description
//!
//! Rooms, items and actors are declared in separate tables and joined by id.
//! Each item names exactly one container: a `room` floor or a `holder`'s
//! inventory. References are checked before any actor takes a turn.

use ahash::AHashSet;
use serde::Deserialize;
use std::path::Path;

use crate::core::dice::Dice;
use crate::core::error::{EngineError, Result};
use crate::core::flags::ItemFlags;
use crate::core::types::{ActorId, AttackKind, ItemId, Position, RoomId};
use crate::entity::actor::{Actor, Ancestry, AttackStats, Attributes, Behavior};
use crate::entity::item::{ConsumeHandler, Item};
use crate::world::room::Room;
use crate::world::state::World;

#[derive(Debug, Deserialize)]
pub struct WorldFile {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub actors: Vec<ActorDef>,
}

#[derive(Debug, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub names: Vec<String>,
    #[serde(default)]
    pub examine_text: String,
    #[serde(default)]
    pub room_text: String,
    #[serde(default)]
    pub flags: ItemFlags,
    #[serde(default)]
    pub on_consume: Option<ConsumeHandler>,
    #[serde(default)]
    pub position: Option<Position>,
    /// Floor this item lies on
    #[serde(default)]
    pub room: Option<RoomId>,
    /// Actor carrying this item
    #[serde(default)]
    pub holder: Option<ActorId>,
}

#[derive(Debug, Deserialize)]
pub struct ActorDef {
    pub id: ActorId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub behavior: Behavior,
    #[serde(default)]
    pub ancestry: Option<Ancestry>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub attack: AttackStats,
    #[serde(default = "default_hearts")]
    pub hearts: u32,
    #[serde(default)]
    pub max_hearts: Option<u32>,
    #[serde(default)]
    pub armor: i32,
    #[serde(default)]
    pub preferred_attack: AttackKind,
    pub room: RoomId,
    #[serde(default)]
    pub position: Option<Position>,
}

fn default_hearts() -> u32 {
    10
}

impl ItemDef {
    fn into_item(self) -> Item {
        Item {
            id: self.id,
            names: self.names,
            examine_text: self.examine_text,
            room_text: self.room_text,
            flags: self.flags,
            on_consume: self.on_consume,
            position: self.position,
        }
    }
}

impl ActorDef {
    fn into_actor(self) -> Actor {
        let mut actor = Actor::new(self.id, self.name, self.behavior, self.room);
        actor.description = self.description;
        actor.ancestry = self.ancestry;
        actor.attributes = self.attributes;
        actor.attack = self.attack;
        actor.max_hearts = self.max_hearts.unwrap_or(self.hearts).max(self.hearts);
        actor.hearts = self.hearts;
        actor.armor = self.armor;
        actor.preferred_attack = self.preferred_attack;
        actor.position = self.position;
        actor
    }
}

impl WorldFile {
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate references and build the world
    pub fn into_world(self, dice: Dice) -> Result<World> {
        let mut world = World::new(dice);
        let mut item_ids = AHashSet::new();

        for room in &self.rooms {
            for item in &room.items {
                if !item_ids.insert(item.id) {
                    return Err(EngineError::DuplicateId(item.id.to_string()));
                }
            }
        }

        let room_ids: AHashSet<RoomId> = self.rooms.iter().map(|r| r.id).collect();
        for room in &self.rooms {
            if let Some(exit) = room.exits.iter().find(|e| !room_ids.contains(&e.to)) {
                return Err(EngineError::DanglingExit {
                    from: room.id,
                    to: exit.to,
                });
            }
        }

        for room in self.rooms {
            world.add_room(room)?;
        }
        for actor in self.actors {
            world.add_actor(actor.into_actor())?;
        }

        for def in self.items {
            if !item_ids.insert(def.id) {
                return Err(EngineError::DuplicateId(def.id.to_string()));
            }
            match (def.room, def.holder) {
                (Some(room_id), None) => {
                    let room = world
                        .room_mut(room_id)
                        .ok_or(EngineError::RoomNotFound(room_id))?;
                    room.items.push(def.into_item());
                }
                (None, Some(holder)) => {
                    let actor = world
                        .actor_mut(holder)
                        .ok_or(EngineError::ActorNotFound(holder))?;
                    actor.inventory.push(def.into_item());
                }
                _ => return Err(EngineError::OrphanItem { item: def.id }),
            }
        }

        tracing::info!(
            rooms = world.rooms().count(),
            actors = world.actors().count(),
            items = item_ids.len(),
            "World loaded"
        );
        Ok(world)
    }
}

/// Read a world file from disk
pub fn load_world(path: &Path, dice: Dice) -> Result<World> {
    let contents = std::fs::read_to_string(path)?;
    WorldFile::from_toml(&contents)?.into_world(dice)
}
