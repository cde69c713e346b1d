//! Rooms and the exits that join them

use serde::{Deserialize, Serialize};

use crate::core::flags::RoomFlags;
use crate::core::types::{Direction, ItemId, RoomId};
use crate::entity::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Fog,
    Storm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum Lighting {
    #[default]
    Bright,
    Dim,
    Dark,
}

/// A directed edge of the room graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exit {
    pub direction: Direction,
    pub to: RoomId,
    /// What an actor sees looking through this exit
    #[serde(default)]
    pub preview: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(default)]
    pub look: String,
    #[serde(default)]
    pub exits: Vec<Exit>,
    #[serde(default)]
    pub flags: RoomFlags,
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub lighting: Lighting,
    /// Floor items, in enumeration order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            look: String::new(),
            exits: Vec::new(),
            flags: RoomFlags::empty(),
            weather: Weather::default(),
            lighting: Lighting::default(),
            items: Vec::new(),
        }
    }

    pub fn with_look(mut self, look: impl Into<String>) -> Self {
        self.look = look.into();
        self
    }

    pub fn with_exit(mut self, direction: Direction, to: RoomId, preview: impl Into<String>) -> Self {
        self.exits.push(Exit {
            direction,
            to,
            preview: preview.into(),
        });
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// First exit leading in `direction`
    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }

    pub fn find_item(&self, query: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name_matches(query))
    }

    pub fn has_item(&self, item: ItemId) -> bool {
        self.items.iter().any(|i| i.id == item)
    }

    pub fn remove_item(&mut self, item: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id == item)?;
        Some(self.items.remove(index))
    }
}
