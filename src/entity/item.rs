//! Items and their consume handlers

use serde::{Deserialize, Serialize};

use crate::command::resolver::early_matches;
use crate::core::flags::ItemFlags;
use crate::core::types::{ItemId, Position};
use crate::entity::effect::Effect;

/// What happens when an item is consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "handler", rename_all = "snake_case")]
pub enum ConsumeHandler {
    /// Restore hearts immediately. Refused at full health.
    Heal { hearts: u32 },
    /// Attach a timed effect to the consumer
    Afflict(Effect),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Match names; the first one is used in narration
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
}

impl Item {
    pub fn new<S: Into<String>>(id: ItemId, names: impl IntoIterator<Item = S>) -> Self {
        Self {
            id,
            names: names.into_iter().map(Into::into).collect(),
            examine_text: String::new(),
            room_text: String::new(),
            flags: ItemFlags::empty(),
            on_consume: None,
            position: None,
        }
    }

    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_examine_text(mut self, text: impl Into<String>) -> Self {
        self.examine_text = text.into();
        self
    }

    pub fn with_room_text(mut self, text: impl Into<String>) -> Self {
        self.room_text = text.into();
        self
    }

    pub fn with_consume(mut self, handler: ConsumeHandler) -> Self {
        self.flags |= ItemFlags::CONSUMABLE;
        self.on_consume = Some(handler);
        self
    }

    /// Name used in narration
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("something")
    }

    pub fn name_matches(&self, query: &str) -> bool {
        self.names.iter().any(|name| early_matches(name, query))
    }
}
