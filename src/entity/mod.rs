pub mod actor;
pub mod effect;
pub mod item;

pub use actor::{Actor, Ancestry, AttackStats, Attributes, Behavior};
pub use effect::{Effect, EffectKind};
pub use item::{ConsumeHandler, Item};
