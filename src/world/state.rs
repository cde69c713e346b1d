//! The owned world context every component queries and mutates

use ahash::AHashMap;

use crate::core::dice::Dice;
use crate::core::error::{EngineError, Result};
use crate::core::types::{ActorId, Direction, ItemId, RoomId, Round};
use crate::entity::actor::Actor;
use crate::world::room::Room;

/// Rooms, actors and dice for one game
#[derive(Debug)]
pub struct World {
    pub round: Round,
    rooms: AHashMap<RoomId, Room>,
    /// Rooms in insertion order, for deterministic enumeration
    room_order: Vec<RoomId>,
    /// Actors in registration order (the initiative tie-break)
    actors: Vec<Actor>,
    actor_index: AHashMap<ActorId, usize>,
    pub dice: Dice,
}

impl World {
    pub fn new(dice: Dice) -> Self {
        Self {
            round: 0,
            rooms: AHashMap::new(),
            room_order: Vec::new(),
            actors: Vec::new(),
            actor_index: AHashMap::new(),
            dice,
        }
    }

    pub fn add_room(&mut self, room: Room) -> Result<()> {
        if self.rooms.contains_key(&room.id) {
            return Err(EngineError::DuplicateId(room.id.to_string()));
        }
        self.room_order.push(room.id);
        self.rooms.insert(room.id, room);
        Ok(())
    }

    pub fn add_actor(&mut self, actor: Actor) -> Result<()> {
        if self.actor_index.contains_key(&actor.id) {
            return Err(EngineError::DuplicateId(actor.id.to_string()));
        }
        if !self.rooms.contains_key(&actor.location) {
            return Err(EngineError::RoomNotFound(actor.location));
        }
        self.actor_index.insert(actor.id, self.actors.len());
        self.actors.push(actor);
        Ok(())
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    /// All rooms in insertion order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.room_order.iter().filter_map(|id| self.rooms.get(id))
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actor_index.get(&id).and_then(|&i| self.actors.get(i))
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        let index = *self.actor_index.get(&id)?;
        self.actors.get_mut(index)
    }

    /// Lookup for callers outside the core, where a missing actor is a bug
    pub fn require_actor(&self, id: ActorId) -> Result<&Actor> {
        self.actor(id).ok_or(EngineError::ActorNotFound(id))
    }

    /// Every actor, fallen ones included, in registration order
    pub fn actors(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.iter()
    }

    pub fn live_actors(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.iter().filter(|a| a.is_alive())
    }

    pub fn actors_in_room(&self, room: RoomId) -> impl Iterator<Item = &Actor> + '_ {
        self.live_actors().filter(move |a| a.location == room)
    }

    /// Other live actors sharing the viewer's room
    pub fn others_in_room(&self, viewer: ActorId) -> impl Iterator<Item = &Actor> + '_ {
        let room = self.actor(viewer).map(|a| a.location);
        self.live_actors()
            .filter(move |a| a.id != viewer && Some(a.location) == room)
    }

    pub fn first_visible_actor(&self, viewer: ActorId) -> Option<ActorId> {
        self.others_in_room(viewer).next().map(|a| a.id)
    }

    /// First visible actor whose name matches `name`
    pub fn target(&self, viewer: ActorId, name: &str) -> Option<ActorId> {
        self.others_in_room(viewer)
            .find(|a| a.name_matches(name))
            .map(|a| a.id)
    }

    /// Uniformly random takeable item on the viewer's floor
    pub fn random_visible_item(&mut self, viewer: ActorId) -> Option<ItemId> {
        let room = self.actor(viewer)?.location;
        let ids: Vec<ItemId> = self
            .room(room)?
            .items
            .iter()
            .filter(|i| i.flags.can_take())
            .map(|i| i.id)
            .collect();
        let index = self.dice.pick(ids.len())?;
        ids.get(index).copied()
    }

    /// Uniformly random item from the actor's own inventory
    pub fn random_held_item(&mut self, actor: ActorId) -> Option<ItemId> {
        let ids: Vec<ItemId> = self.actor(actor)?.inventory.iter().map(|i| i.id).collect();
        let index = self.dice.pick(ids.len())?;
        ids.get(index).copied()
    }

    /// Destination for a move that ignores exit validation
    ///
    /// Prefers the room's own exit; otherwise finds a room whose exit in the
    /// opposite direction leads back here.
    pub fn resolve_direction(&self, from: RoomId, direction: Direction) -> Option<RoomId> {
        if let Some(exit) = self.room(from)?.exit(direction) {
            return Some(exit.to);
        }
        let back = direction.inverse();
        self.rooms()
            .find(|room| room.exit(back).is_some_and(|e| e.to == from))
            .map(|room| room.id)
    }

    /// Move an actor and mark the room visited; returns true on a first visit
    pub fn relocate(&mut self, actor: ActorId, to: RoomId) -> bool {
        match self.actor_mut(actor) {
            Some(a) => {
                a.location = to;
                a.position = None;
                a.record_visit(to)
            }
            None => false,
        }
    }

    pub fn advance_round(&mut self) {
        self.round += 1;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Dice::default())
    }
}
