//! Actions: what an actor can do, and how each one is carried out

pub mod catalog;
pub mod delegates;
pub mod execute;

pub use catalog::{Action, ActionCategory, SettingChange};
pub use execute::execute;
