//! Command interpretation for human-controlled actors
//!
//! line -> grammar::parse -> Command -> resolver -> Action

pub mod grammar;
pub mod resolver;

use crate::actions::Action;
use crate::core::types::ActorId;
use crate::world::World;
use grammar::Command;

pub use resolver::early_matches;

/// Map one raw input line to exactly one action
///
/// Unrecognized or incomplete input becomes `Action::Retry` with a prompt.
pub fn interpret(world: &World, actor: ActorId, line: &str) -> Action {
    let line = line.trim_end_matches(['\r', '\n']).to_lowercase();
    match grammar::parse(&line) {
        Some(command) => resolve(world, actor, command),
        None => {
            tracing::debug!(%actor, line = %line, "Unknown command");
            Action::retry("Unknown Command")
        }
    }
}

fn resolve(world: &World, actor: ActorId, command: Command<'_>) -> Action {
    match command {
        // A stored repeat is reissued as-is, so repeats never nest
        Command::Again => match world.actor(actor).and_then(|a| a.last_action.clone()) {
            Some(Action::Repeat(inner)) => Action::Repeat(inner),
            Some(last) => Action::Repeat(Box::new(last)),
            None => Action::retry("There is nothing to repeat."),
        },
        Command::Debug(Some(target)) => Action::Debug(target.to_string()),
        Command::Debug(None) => Action::retry("Debug what?"),
        Command::Pass => Action::Pass,
        Command::Look => Action::Look,
        Command::Doors => Action::Doors,
        Command::Examine(Some(target)) => Action::Examine(target.to_string()),
        Command::Examine(None) => Action::retry("What should I examine?"),
        Command::Inventory => Action::Inventory,
        Command::Take(Some(item)) => resolver::take_or_retry(world, actor, item),
        Command::Take(None) => Action::retry("What would you like to take?"),
        Command::Drop(Some(item)) => resolver::drop_or_retry(world, actor, item),
        Command::Drop(None) => Action::retry("What would you like to drop?"),
        Command::Consume(Some(item)) => resolver::consume_or_retry(world, actor, item),
        Command::Consume(None) => Action::retry("What would you like to consume?"),
        Command::Give {
            target: Some(target),
            item: Some(item),
        } => resolver::give_or_retry(world, actor, target, item),
        Command::Give { .. } => Action::retry("What would you like to give?"),
        Command::Go(direction) => {
            let has_exit = world
                .actor(actor)
                .and_then(|a| world.room(a.location))
                .is_some_and(|room| room.exit(direction).is_some());
            if has_exit {
                Action::Move(direction)
            } else {
                Action::retry("Sorry, can't go that way.")
            }
        }
        Command::Attack(target) => resolver::attack_or_retry(world, actor, target.unwrap_or("")),
        Command::Set { key: None, .. } => Action::retry("What would you like to set?"),
        Command::Set {
            key: Some("attack"),
            value,
        } => resolver::attack_setting(value),
        Command::Set { .. } => Action::retry("I don't know about that setting."),
        Command::Curse(Some(target)) => resolver::curse_or_retry(world, actor, target),
        Command::Curse(None) => Action::retry("Curse whom?"),
    }
}
