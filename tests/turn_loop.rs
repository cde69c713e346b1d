//! Round loop integration tests
//!
//! Drives whole rounds through `run_round` with scripted input and scripted
//! dice, then checks the world and the message stream.

use ember_keep::actions::Action;
use ember_keep::core::types::{ActorId, AttackKind, Direction, RoomId};
use ember_keep::core::{Dice, EngineConfig};
use ember_keep::entity::actor::{Actor, Behavior};
use ember_keep::io::{Category, MessageLog, ScriptedReader};
use ember_keep::simulation::{roll_initiative, run_round};
use ember_keep::world::{Room, World};
use proptest::prelude::*;

fn two_rooms(dice: Dice) -> World {
    let mut world = World::new(dice);
    world
        .add_room(
            Room::new(RoomId(1), "Cellar")
                .with_look("Damp stone and old barrels.")
                .with_exit(Direction::North, RoomId(2), "A ladder up"),
        )
        .unwrap();
    world
        .add_room(
            Room::new(RoomId(2), "Attic")
                .with_look("Dust motes drift in a shaft of light.")
                .with_exit(Direction::South, RoomId(1), "A ladder down"),
        )
        .unwrap();
    world
        .add_actor(Actor::new(ActorId(1), "Alice", Behavior::Player, RoomId(1)))
        .unwrap();
    world
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn test_player_walks_north() {
    let mut world = two_rooms(Dice::seeded(7));
    world
        .add_actor(Actor::new(ActorId(2), "Owl", Behavior::Immobile, RoomId(2)))
        .unwrap();
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["n"]);
    let mut log = MessageLog::new();

    let report = run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

    let alice = world.actor(ActorId(1)).unwrap();
    assert_eq!(alice.location, RoomId(2));
    assert!(alice.visited.contains(&RoomId(2)));
    assert!(report
        .committed
        .contains(&(ActorId(1), Action::Move(Direction::North))));

    let seen = log.texts_for(ActorId(1));
    assert!(seen.contains(&"Alice left NORTH"));
    assert!(seen.contains(&"Alice arrived from SOUTH"));
    assert!(seen.iter().any(|t| t.starts_with("Attic")), "auto-look after arriving");

    // The owl only sees the arrival
    let owl = log.texts_for(ActorId(2));
    assert!(owl.contains(&"Alice arrived from SOUTH"));
    assert!(!owl.contains(&"Alice left NORTH"));
}

#[test]
fn test_blocked_move_does_not_consume_turn() {
    let mut world = two_rooms(Dice::seeded(7));
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["w", "n"]);
    let mut log = MessageLog::new();

    run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

    assert!(log.contains("Sorry, can't go that way."));
    assert_eq!(world.actor(ActorId(1)).unwrap().location, RoomId(2));
}

// ============================================================================
// Commitment
// ============================================================================

#[test]
fn test_one_committed_action_per_actor() {
    let mut world = two_rooms(Dice::seeded(3));
    world
        .add_actor(Actor::new(ActorId(2), "Rat", Behavior::Wanderer, RoomId(1)))
        .unwrap();
    world
        .add_actor(Actor::new(ActorId(3), "Crow", Behavior::Looter, RoomId(2)))
        .unwrap();
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["look", "doors", "i", "wait"]);
    let mut log = MessageLog::new();

    let report = run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

    assert_eq!(report.committed.len(), 3);
    for id in [ActorId(1), ActorId(2), ActorId(3)] {
        assert_eq!(report.committed.iter().filter(|(a, _)| *a == id).count(), 1);
    }
    assert!(report.committed.iter().all(|(_, action)| !action.is_free()));
    assert_eq!(log.texts_for(ActorId(1)).iter().filter(|t| t.starts_with("Pending Action")).count(), 1);
}

#[test]
fn test_unknown_command_reprompts() {
    let mut world = two_rooms(Dice::seeded(1));
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["xyzzy123", "wait"]);
    let mut log = MessageLog::new();

    let report = run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

    assert!(log.contains("Unknown Command"));
    assert_eq!(report.committed, vec![(ActorId(1), Action::Pass)]);
    // A retry is never remembered
    assert_eq!(world.actor(ActorId(1)).unwrap().last_action, Some(Action::Pass));
}

#[test]
fn test_repeat_reissues_last_action() {
    let mut world = two_rooms(Dice::seeded(1));
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["n", "again"]);
    let mut log = MessageLog::new();
    let config = EngineConfig::default();

    run_round(&mut world, &config, &mut reader, &mut log);
    assert_eq!(world.actor(ActorId(1)).unwrap().location, RoomId(2));

    // Attic has no north exit: the repeated move fails at execution
    let report = run_round(&mut world, &config, &mut reader, &mut log);
    assert_eq!(
        report.committed,
        vec![(ActorId(1), Action::Repeat(Box::new(Action::Move(Direction::North))))]
    );
    assert!(log.contains("Repeating the last action: Move"));
    assert!(log.contains("Sorry, can't go that way."));
    assert_eq!(world.actor(ActorId(1)).unwrap().location, RoomId(2));
}

#[test]
fn test_repeat_of_free_action_keeps_turn_open() {
    let mut world = two_rooms(Dice::seeded(1));
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["inventory", ".", "wait"]);
    let mut log = MessageLog::new();

    let report = run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

    assert_eq!(report.committed, vec![(ActorId(1), Action::Pass)]);
    assert_eq!(
        log.texts_for(ActorId(1))
            .iter()
            .filter(|t| **t == "You aren't carrying anything.")
            .count(),
        2
    );
}

#[test]
fn test_inactive_player_still_commits() {
    let mut world = two_rooms(Dice::seeded(1));
    let mut reader = ScriptedReader::new();
    let mut log = MessageLog::new();

    let report = run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

    assert_eq!(report.committed, vec![(ActorId(1), Action::Inactive)]);
    assert!(log.contains("Alice is inactive"));
    assert_eq!(log.with_category(Category::Join).count(), 0);
}

// ============================================================================
// AI
// ============================================================================

#[test]
fn test_aggressive_mob_attacks_on_low_roll() {
    // initiative: Alice 0, Goblin 10; behavior roll 5; attack roll 5
    let mut world = two_rooms(Dice::scripted([0, 10, 5, 5]));
    world
        .add_actor(Actor::new(ActorId(2), "Goblin", Behavior::Aggressive, RoomId(1)))
        .unwrap();
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["wait"]);
    let mut log = MessageLog::new();

    let report = run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

    assert_eq!(report.order, vec![ActorId(2), ActorId(1)]);
    assert_eq!(
        report.committed[0],
        (
            ActorId(2),
            Action::Attack {
                kind: AttackKind::Melee,
                target: ActorId(1)
            }
        )
    );
    assert_eq!(world.actor(ActorId(1)).unwrap().hearts, 9);
    assert!(log.contains("Goblin [10/10] has melee attacked Alice [10/10]!"));
    assert!(log.contains("Alice [9/10] takes 1 damage!"));
}

#[test]
fn test_mutual_attacks_both_land() {
    // initiative: Alice 0, Goblin 10; behavior roll 0; attack rolls 5 and 5
    let mut world = two_rooms(Dice::scripted([0, 10, 0, 5, 5]));
    {
        let alice = world.actor_mut(ActorId(1)).unwrap();
        alice.hearts = 1;
        alice.attack.melee = 10;
    }
    let mut goblin = Actor::new(ActorId(2), "Goblin", Behavior::Aggressive, RoomId(1));
    goblin.attack.melee = 2;
    world.add_actor(goblin).unwrap();
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["attack goblin"]);
    let mut log = MessageLog::new();

    let report = run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);

    // Goblin acted first, but intents resolve in registration order
    assert_eq!(report.order, vec![ActorId(2), ActorId(1)]);
    assert_eq!(world.actor(ActorId(2)).unwrap().hearts, 0);
    assert_eq!(world.actor(ActorId(1)).unwrap().hearts, 0);
    assert!(log.contains("Goblin [0/10] takes 10 damage!"));
    assert!(log.contains("Alice [0/10] takes 2 damage!"));
    assert!(log.contains("Goblin has fallen!"));
    assert!(log.contains("Alice has fallen!"));
    assert_eq!(report.fallen.len(), 2);

    // Nobody is left to roll initiative
    let order = roll_initiative(&mut world, &EngineConfig::default());
    assert!(order.is_empty());
}

#[test]
fn test_long_repeat_chain_stays_flat() {
    let mut world = two_rooms(Dice::seeded(1));
    let mut lines = vec![String::from("look")];
    lines.extend(std::iter::repeat(String::from(".")).take(3000));
    lines.push(String::from("wait"));
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), lines);
    let mut log = MessageLog::new();
    let config = EngineConfig::default();

    let report = run_round(&mut world, &config, &mut reader, &mut log);
    assert_eq!(report.committed, vec![(ActorId(1), Action::Pass)]);
    assert_eq!(
        log.texts_for(ActorId(1))
            .iter()
            .filter(|t| **t == "Repeating the last action: Look")
            .count(),
        3000
    );

    // Repeating a committed repeat across rounds never wraps it again
    let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["n"]);
    run_round(&mut world, &config, &mut reader, &mut log);
    for _ in 0..50 {
        let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["."]);
        run_round(&mut world, &config, &mut reader, &mut log);
    }
    assert_eq!(
        world.actor(ActorId(1)).unwrap().last_action,
        Some(Action::Repeat(Box::new(Action::Move(Direction::North))))
    );
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_initiative_is_deterministic_for_a_seed(seed in any::<u64>(), awareness in prop::collection::vec(-3i32..6, 1..8)) {
        let build = || {
            let mut world = World::new(Dice::seeded(seed));
            world.add_room(Room::new(RoomId(1), "Ring")).unwrap();
            for (i, a) in awareness.iter().enumerate() {
                let id = ActorId(i as u32 + 1);
                world
                    .add_actor(Actor::new(id, format!("A{i}"), Behavior::Immobile, RoomId(1)).with_awareness(*a))
                    .unwrap();
            }
            world
        };
        let config = EngineConfig::default();
        let first = roll_initiative(&mut build(), &config);
        let second = roll_initiative(&mut build(), &config);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), awareness.len());
    }

    #[test]
    fn prop_round_advances_by_one(seed in any::<u64>(), rounds in 1u64..6) {
        let mut world = two_rooms(Dice::seeded(seed));
        world
            .add_actor(Actor::new(ActorId(2), "Rat", Behavior::Wanderer, RoomId(2)))
            .unwrap();
        let mut reader = ScriptedReader::new();
        let mut log = MessageLog::new();
        for _ in 0..rounds {
            run_round(&mut world, &EngineConfig::default(), &mut reader, &mut log);
        }
        prop_assert_eq!(world.round, rounds);
    }
}
