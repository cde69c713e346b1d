//! Actors: anything that takes turns, human- or AI-controlled

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::command::resolver::early_matches;
use crate::core::types::{ActorId, AttackKind, ItemId, Position, RoomId};
use crate::entity::effect::Effect;
use crate::entity::item::Item;

/// AI archetype governing an actor's automatic choice of action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// Controlled by a human through the command interpreter
    Player,
    Looter,
    Aggressive,
    Wanderer,
    Helpful,
    #[default]
    Immobile,
    Flee,
}

/// Species tag whose decision hook may override the base behavior table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ancestry {
    Human,
}

/// Attribute block used by initiative and combat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub awareness: i32,
    pub spirit: i32,
    pub speed: i32,
    pub presence: i32,
    pub cunning: i32,
    pub persuasion: i32,
    pub tenacity: i32,
    pub fortitude: i32,
    pub strength: i32,
    pub agility: i32,
    pub precision: i32,
    pub endurance: i32,
    pub durability: i32,
}

/// Base attack value per attack kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackStats {
    pub melee: i32,
    pub ranged: i32,
    pub thrown: i32,
}

impl Default for AttackStats {
    fn default() -> Self {
        Self {
            melee: 1,
            ranged: 1,
            thrown: 1,
        }
    }
}

impl AttackStats {
    pub fn for_kind(&self, kind: AttackKind) -> i32 {
        match kind {
            AttackKind::Melee => self.melee,
            AttackKind::Ranged => self.ranged,
            AttackKind::Thrown => self.thrown,
        }
    }
}

/// A single actor in the world
#[derive(Debug, Clone, Serialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub description: String,
    pub behavior: Behavior,
    pub ancestry: Option<Ancestry>,
    pub attributes: Attributes,
    pub attack: AttackStats,
    /// Current health; 0 means fallen, which is terminal
    pub hearts: u32,
    pub max_hearts: u32,
    pub armor: i32,
    pub preferred_attack: AttackKind,
    pub location: RoomId,
    pub position: Option<Position>,
    pub inventory: Vec<Item>,
    pub visited: AHashSet<RoomId>,
    pub effects: Vec<Effect>,
    /// Most recent action taken, read by the repeat command
    pub last_action: Option<Action>,
}

impl Actor {
    /// A fresh actor at full health standing in `location`
    pub fn new(id: ActorId, name: impl Into<String>, behavior: Behavior, location: RoomId) -> Self {
        let mut visited = AHashSet::new();
        visited.insert(location);
        Self {
            id,
            name: name.into(),
            description: String::new(),
            behavior,
            ancestry: None,
            attributes: Attributes::default(),
            attack: AttackStats::default(),
            hearts: 10,
            max_hearts: 10,
            armor: 0,
            preferred_attack: AttackKind::default(),
            location,
            position: None,
            inventory: Vec::new(),
            visited,
            effects: Vec::new(),
            last_action: None,
        }
    }

    pub fn with_hearts(mut self, hearts: u32) -> Self {
        self.hearts = hearts;
        self.max_hearts = self.max_hearts.max(hearts);
        self
    }

    pub fn with_armor(mut self, armor: i32) -> Self {
        self.armor = armor;
        self
    }

    pub fn with_awareness(mut self, awareness: i32) -> Self {
        self.attributes.awareness = awareness;
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.inventory.push(item);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hearts > 0
    }

    pub fn is_player(&self) -> bool {
        self.behavior == Behavior::Player
    }

    /// "Name [hearts/max]" as shown in combat narration
    pub fn format_hp(&self) -> String {
        format!("{} [{}/{}]", self.name, self.hearts, self.max_hearts)
    }

    /// Apply a signed hearts delta, clamped to `0..=max_hearts`
    ///
    /// Returns the hearts value after the change.
    pub fn adjust_hearts(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.hearts) + i64::from(delta);
        let clamped = next.clamp(0, i64::from(self.max_hearts));
        self.hearts = u32::try_from(clamped).unwrap_or(0);
        self.hearts
    }

    /// Record a room as visited; returns false if it already was
    pub fn record_visit(&mut self, room: RoomId) -> bool {
        self.visited.insert(room)
    }

    pub fn holds(&self, item: ItemId) -> bool {
        self.inventory.iter().any(|i| i.id == item)
    }

    pub fn held_item(&self, item: ItemId) -> Option<&Item> {
        self.inventory.iter().find(|i| i.id == item)
    }

    /// First held item whose names match `query`, in inventory order
    pub fn find_held(&self, query: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.name_matches(query))
    }

    pub fn remove_item(&mut self, item: ItemId) -> Option<Item> {
        let index = self.inventory.iter().position(|i| i.id == item)?;
        Some(self.inventory.remove(index))
    }

    pub fn name_matches(&self, query: &str) -> bool {
        early_matches(&self.name, query)
    }
}
