//! The round loop
//!
//! A round runs in four phases:
//! initiative -> turns (acquire, run free actions, commit) -> deferred pass -> effect tick
//!
//! Within a turn an actor may take any number of free actions; the first
//! turn-consuming action ends the turn and is committed. Committed actions
//! resolve together in the deferred pass, once each, in registration order.
//! An actor felled earlier in the pass still resolves its own intent, so
//! combat within a round is simultaneous.

use crate::actions::{execute, Action};
use crate::behavior;
use crate::command;
use crate::core::config::EngineConfig;
use crate::core::types::{ActorId, Round};
use crate::io::{Category, Input, Reader, Writer};
use crate::simulation::effects::tick_effects;
use crate::world::World;

/// What happened during one round
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub round: Round,
    /// Initiative order
    pub order: Vec<ActorId>,
    /// Turn-consuming action each actor committed, in initiative order
    pub committed: Vec<(ActorId, Action)>,
    /// Actors that fell this round
    pub fallen: Vec<ActorId>,
}

/// Order live actors by `roll(initiative_die) + awareness`, highest first
///
/// Ties keep registration order.
pub fn roll_initiative(world: &mut World, config: &EngineConfig) -> Vec<ActorId> {
    let contenders: Vec<(ActorId, i32)> = world
        .live_actors()
        .map(|a| (a.id, a.attributes.awareness))
        .collect();

    let mut scored: Vec<(ActorId, i64)> = contenders
        .into_iter()
        .map(|(id, awareness)| {
            let roll = world.dice.roll(config.initiative_die);
            (id, i64::from(roll) + i64::from(awareness))
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(id, _)| id).collect()
}

/// Run one full round
pub fn run_round(
    world: &mut World,
    config: &EngineConfig,
    reader: &mut dyn Reader,
    writer: &mut dyn Writer,
) -> RoundReport {
    let round = world.round;
    let order = roll_initiative(world, config);
    tracing::info!(round, actors = order.len(), "Round start");
    tracing::debug!(round, ?order, "Initiative order");

    let mut committed = Vec::with_capacity(order.len());
    for &actor in &order {
        if !world.actor(actor).is_some_and(|a| a.is_alive()) {
            continue;
        }
        let action = take_turn(world, config, actor, reader, writer);
        committed.push((actor, action));
    }

    let deferred: Vec<(ActorId, Action)> = world
        .actors()
        .filter_map(|a| committed.iter().find(|(id, _)| *id == a.id).cloned())
        .collect();
    for (actor, action) in &deferred {
        execute(world, config, *actor, action, writer);
    }

    // Everyone in the order was alive when initiative was rolled
    let mut fallen: Vec<ActorId> = order
        .iter()
        .copied()
        .filter(|id| !world.actor(*id).is_some_and(|a| a.is_alive()))
        .collect();

    for id in tick_effects(world, writer) {
        if !fallen.contains(&id) {
            fallen.push(id);
        }
    }

    world.advance_round();
    tracing::info!(round, fallen = fallen.len(), "Round end");
    RoundReport {
        round,
        order,
        committed,
        fallen,
    }
}

/// One actor's turn: returns the turn-consuming action it committed
fn take_turn(
    world: &mut World,
    config: &EngineConfig,
    actor: ActorId,
    reader: &mut dyn Reader,
    writer: &mut dyn Writer,
) -> Action {
    let Some((name, is_player, rejoining)) = world.actor(actor).map(|a| {
        let rejoining = matches!(a.last_action, None | Some(Action::Inactive));
        (a.name.clone(), a.is_player(), rejoining)
    }) else {
        return Action::Pass;
    };

    if is_player && reader.is_active(actor) {
        if rejoining {
            writer.say_to_all(Category::Join, format!("{name} has joined the game!"));
        }
        writer.say_to_all(Category::TurnStart, format!("{name}'s turn"));
    }

    let committed = loop {
        let action = if is_player {
            match reader.read_line(actor) {
                Input::Line(line) => command::interpret(world, actor, &line),
                Input::Inactive => Action::Inactive,
            }
        } else {
            behavior::decide(world, config, actor)
        };

        if !action.is_retry() {
            if let Some(a) = world.actor_mut(actor) {
                a.last_action = Some(action.clone());
            }
        }

        if action.is_free() {
            execute(world, config, actor, &action, writer);
        } else {
            break action;
        }
    };

    tracing::debug!(actor = %name, action = committed.name(), "Action committed");
    if config.announce_pending {
        writer.say_to(actor, Category::Info, format!("Pending Action: {}", committed.name()));
    }
    committed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::Dice;
    use crate::core::types::RoomId;
    use crate::entity::actor::{Actor, Behavior};
    use crate::io::{MessageLog, ScriptedReader};
    use crate::world::Room;

    fn world(rolls: Vec<u32>) -> World {
        let mut world = World::new(Dice::scripted(rolls));
        world.add_room(Room::new(RoomId(1), "Hall")).unwrap();
        world
            .add_actor(Actor::new(ActorId(1), "Alice", Behavior::Player, RoomId(1)).with_awareness(2))
            .unwrap();
        world
            .add_actor(Actor::new(ActorId(2), "Bob", Behavior::Immobile, RoomId(1)).with_awareness(5))
            .unwrap();
        world
            .add_actor(Actor::new(ActorId(3), "Cat", Behavior::Immobile, RoomId(1)).with_awareness(2))
            .unwrap();
        world
    }

    #[test]
    fn test_initiative_sorts_descending_with_stable_ties() {
        // Alice 10+2, Bob 3+5, Cat 10+2
        let mut world = world(vec![10, 3, 10]);
        let order = roll_initiative(&mut world, &EngineConfig::default());
        assert_eq!(order, vec![ActorId(1), ActorId(3), ActorId(2)]);
    }

    #[test]
    fn test_initiative_skips_fallen() {
        let mut world = world(vec![]);
        world.actor_mut(ActorId(2)).unwrap().hearts = 0;
        let order = roll_initiative(&mut world, &EngineConfig::default());
        assert_eq!(order.len(), 2);
        assert!(!order.contains(&ActorId(2)));
    }

    #[test]
    fn test_free_actions_do_not_end_turn() {
        let mut world = world(vec![]);
        let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["look", "i", "xyzzy", "wait"]);
        let mut log = MessageLog::new();
        let report = run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

        let (_, alice_action) = report
            .committed
            .iter()
            .find(|(id, _)| *id == ActorId(1))
            .unwrap();
        assert_eq!(alice_action, &Action::Pass);
        assert_eq!(reader.remaining(ActorId(1)), 0);
        assert!(log.contains("Unknown Command"));
        assert!(log.contains("Pending Action: Pass"));
        assert_eq!(world.round, 1);
    }

    #[test]
    fn test_join_announced_only_on_first_active_turn() {
        let mut world = world(vec![]);
        let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["wait", "wait"]);
        let mut log = MessageLog::new();
        let config = EngineConfig::default();

        run_round(&mut world, &config, &mut reader, &mut log);
        run_round(&mut world, &config, &mut reader, &mut log);
        assert_eq!(log.with_category(Category::Join).count(), 1);
        assert_eq!(log.with_category(Category::TurnStart).count(), 2);
    }

    #[test]
    fn test_disconnected_player_is_inactive() {
        let mut world = world(vec![]);
        let mut reader = ScriptedReader::new();
        let mut log = MessageLog::new();
        let report = run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

        assert!(report.committed.contains(&(ActorId(1), Action::Inactive)));
        assert!(log.contains("Alice is inactive"));
        assert_eq!(log.with_category(Category::TurnStart).count(), 0);
        assert_eq!(report.committed.len(), 3);
    }
}
