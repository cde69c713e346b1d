//! Delegates perform the mutation and messaging for one family of actions

pub mod combat;
pub mod items;
pub mod look;
pub mod movement;
