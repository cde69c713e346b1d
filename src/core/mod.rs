pub mod config;
pub mod dice;
pub mod error;
pub mod flags;
pub mod types;

pub use config::EngineConfig;
pub use dice::Dice;
pub use flags::{ItemFlags, RoomFlags};
