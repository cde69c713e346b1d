//! Dispatch of an action to the delegate that carries it out

use crate::actions::catalog::{Action, SettingChange};
use crate::actions::delegates::{combat, items, look, movement};
use crate::core::config::EngineConfig;
use crate::core::types::ActorId;
use crate::io::{Category, Writer};
use crate::world::World;

/// Perform `action` once on behalf of `actor`
///
/// Expected failures (missing item, departed target) become messages to the
/// actor. Nothing here aborts the round.
pub fn execute(
    world: &mut World,
    config: &EngineConfig,
    actor: ActorId,
    action: &Action,
    writer: &mut dyn Writer,
) {
    match action {
        Action::Move(direction) => movement::walk(world, actor, *direction, writer),
        Action::ForceMove(direction) => movement::force_move(world, actor, *direction, writer),
        Action::Attack { kind, target } => {
            let outcome = combat::attack(world, config, actor, *kind, *target, writer);
            tracing::trace!(%actor, ?outcome, "Attack resolved");
        }
        Action::Take(item) => {
            items::take(world, actor, *item, writer);
        }
        Action::TakeAll => {
            items::take_all(world, actor, writer);
        }
        Action::Drop(item) => {
            items::drop(world, actor, *item, writer);
        }
        Action::Consume(item) => {
            items::consume(world, actor, *item, writer);
        }
        Action::Give { target, item } => {
            items::give(world, actor, *target, *item, writer);
        }
        Action::Look => look::look(world, actor, writer),
        Action::Doors => movement::doors(world, actor, writer),
        Action::Examine(query) => items::examine(world, actor, query, writer),
        Action::Inventory => items::inventory(world, actor, writer),
        Action::Debug(query) => look::debug(world, actor, query, writer),
        Action::Pass => {}
        Action::Inactive => {
            if let Some(a) = world.actor(actor) {
                let (room, text) = (a.location, format!("{} is inactive", a.name));
                writer.say_to_room(world, room, Category::Info, text);
            }
        }
        Action::Retry(message) => writer.say_to(actor, Category::Error, message.clone()),
        Action::Repeat(inner) => {
            if !matches!(inner.as_ref(), Action::Repeat(_)) {
                writer.say_to(
                    actor,
                    Category::Info,
                    format!("Repeating the last action: {}", inner.name()),
                );
            }
            execute(world, config, actor, inner, writer);
        }
        Action::Settings(change) => {
            if let Some(a) = world.actor_mut(actor) {
                match change {
                    SettingChange::PreferredAttack(kind) => a.preferred_attack = *kind,
                }
                writer.say_to(actor, Category::Info, "Settings were changed.".into());
            }
        }
        Action::Curse(target) => combat::curse(world, actor, *target, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{AttackKind, Direction, RoomId};
    use crate::entity::actor::{Actor, Behavior};
    use crate::io::MessageLog;
    use crate::world::Room;

    fn world() -> World {
        let mut world = World::default();
        world
            .add_room(Room::new(RoomId(1), "Yard").with_exit(Direction::East, RoomId(2), "a barn"))
            .unwrap();
        world.add_room(Room::new(RoomId(2), "Barn")).unwrap();
        world.add_actor(Actor::new(ActorId(1), "Alice", Behavior::Player, RoomId(1))).unwrap();
        world.add_actor(Actor::new(ActorId(2), "Rat", Behavior::Wanderer, RoomId(1))).unwrap();
        world
    }

    #[test]
    fn test_settings_change_preferred_attack() {
        let mut world = world();
        let mut log = MessageLog::new();
        let action = Action::Settings(SettingChange::PreferredAttack(AttackKind::Ranged));
        execute(&mut world, &EngineConfig::default(), ActorId(1), &action, &mut log);

        assert_eq!(world.actor(ActorId(1)).unwrap().preferred_attack, AttackKind::Ranged);
        assert_eq!(log.texts_for(ActorId(1)), vec!["Settings were changed."]);
    }

    #[test]
    fn test_repeat_announces_once_for_nested_repeat() {
        let mut world = world();
        let mut log = MessageLog::new();
        let action = Action::Repeat(Box::new(Action::Repeat(Box::new(Action::Doors))));
        execute(&mut world, &EngineConfig::default(), ActorId(1), &action, &mut log);

        assert_eq!(
            log.texts_for(ActorId(1)),
            vec!["Repeating the last action: Doors", "EAST: a barn"]
        );
    }

    #[test]
    fn test_inactive_is_announced_to_room() {
        let mut world = world();
        let mut log = MessageLog::new();
        execute(&mut world, &EngineConfig::default(), ActorId(1), &Action::Inactive, &mut log);
        assert_eq!(log.texts_for(ActorId(2)), vec!["Alice is inactive"]);
    }

    #[test]
    fn test_retry_reports_error_to_actor_only() {
        let mut world = world();
        let mut log = MessageLog::new();
        execute(&mut world, &EngineConfig::default(), ActorId(1), &Action::retry("Unknown Command"), &mut log);
        assert_eq!(log.with_category(Category::Error).count(), 1);
        assert!(log.texts_for(ActorId(2)).is_empty());
    }
}
