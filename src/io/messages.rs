//! Output boundary: tagged messages addressed to actors
//!
//! The core never formats for a screen. It hands `Message`s to a `Writer`
//! and the transport decides how each category is styled.

use serde::Serialize;

use crate::core::types::{ActorId, RoomId};
use crate::world::World;

/// Styling hint for clients; never read by game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Info,
    Error,
    Combat,
    Movement,
    Narration,
    Join,
    TurnStart,
}

/// Who receives a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Audience {
    Actor(ActorId),
    Actors(Vec<ActorId>),
    /// Everyone standing in `room` when the message was emitted
    Room { room: RoomId, present: Vec<ActorId> },
    All,
}

impl Audience {
    pub fn includes(&self, actor: ActorId) -> bool {
        match self {
            Audience::Actor(id) => *id == actor,
            Audience::Actors(ids) => ids.contains(&actor),
            Audience::Room { present, .. } => present.contains(&actor),
            Audience::All => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub audience: Audience,
    pub category: Category,
    pub text: String,
}

/// Message sink supplied by the transport
pub trait Writer {
    fn write(&mut self, message: Message);

    fn say_to(&mut self, actor: ActorId, category: Category, text: String) {
        self.write(Message {
            audience: Audience::Actor(actor),
            category,
            text,
        });
    }

    fn say_to_many(&mut self, actors: Vec<ActorId>, category: Category, text: String) {
        self.write(Message {
            audience: Audience::Actors(actors),
            category,
            text,
        });
    }

    /// Address every live actor currently in `room`
    fn say_to_room(&mut self, world: &World, room: RoomId, category: Category, text: String) {
        let present = world.actors_in_room(room).map(|a| a.id).collect();
        self.write(Message {
            audience: Audience::Room { room, present },
            category,
            text,
        });
    }

    fn say_to_all(&mut self, category: Category, text: String) {
        self.write(Message {
            audience: Audience::All,
            category,
            text,
        });
    }
}

/// Writer that records everything it is handed
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    pub messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts an actor would have seen, in emission order
    pub fn texts_for(&self, actor: ActorId) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.audience.includes(actor))
            .map(|m| m.text.as_str())
            .collect()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.text == text)
    }

    pub fn with_category(&self, category: Category) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(move |m| m.category == category)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Writer for MessageLog {
    fn write(&mut self, message: Message) {
        self.messages.push(message);
    }
}
