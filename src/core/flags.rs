//! Capability flag sets for items and rooms

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// What an actor is allowed to do with an item.
    ///
    /// Serialized as a `|`-separated list of flag names, so world files can
    /// write `flags = "TAKEABLE | CONSUMABLE"`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ItemFlags: u8 {
        const TAKEABLE    = 1 << 0;
        const UNDROPPABLE = 1 << 1;
        const CONSUMABLE  = 1 << 2;
    }
}

bitflags! {
    /// Permission gates attached to a room. Read-only to the core.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct RoomFlags: u8 {
        const SAFE_ZONE = 1 << 0;
        const NO_MAGIC  = 1 << 1;
        const INDOORS   = 1 << 2;
    }
}

impl ItemFlags {
    pub fn can_take(self) -> bool {
        self.contains(ItemFlags::TAKEABLE)
    }

    pub fn can_drop(self) -> bool {
        !self.contains(ItemFlags::UNDROPPABLE)
    }
}
