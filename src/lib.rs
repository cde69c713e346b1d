//! Ember Keep - turn-resolution core for a room-based text adventure
//!
//! Players and AI mobs share one round loop: initiative, free actions,
//! one committed action per actor, a deferred resolution pass, then the
//! effect tick. Transport lives behind the `io::Reader` and `io::Writer`
//! traits.

pub mod actions;
pub mod behavior;
pub mod command;
pub mod core;
pub mod entity;
pub mod io;
pub mod simulation;
pub mod world;
