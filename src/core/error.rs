use thiserror::Error;

use crate::core::types::{ActorId, ItemId, RoomId};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("Duplicate id in world data: {0}")]
    DuplicateId(String),

    #[error("Exit from {from} leads to unknown {to}")]
    DanglingExit { from: RoomId, to: RoomId },

    #[error("Item {item} has no container (needs exactly one of `room` or `holder`)")]
    OrphanItem { item: ItemId },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
