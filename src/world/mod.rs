//! Rooms, the world index and world loading

pub mod loader;
pub mod room;
pub mod state;

pub use loader::{load_world, WorldFile};
pub use room::{Exit, Lighting, Room, Weather};
pub use state::World;
