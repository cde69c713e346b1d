//! The closed set of executable intents

use serde::{Deserialize, Serialize};

use crate::core::types::{ActorId, AttackKind, Direction, ItemId};

/// One actor intent, holding only the data needed to execute it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    /// Movement that skips exit validation (wandering AI)
    ForceMove(Direction),
    Attack { kind: AttackKind, target: ActorId },
    Take(ItemId),
    TakeAll,
    Drop(ItemId),
    Consume(ItemId),
    Give { target: ActorId, item: ItemId },
    Look,
    Doors,
    Examine(String),
    Inventory,
    Debug(String),
    Pass,
    Inactive,
    /// Invalid or incomplete input; re-prompt without using the turn
    Retry(String),
    Repeat(Box<Action>),
    Settings(SettingChange),
    Curse(ActorId),
}

/// Mutation applied by `Action::Settings`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingChange {
    PreferredAttack(AttackKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Movement,
    Combat,
    Item,
    Info,
    Control,
}

impl Action {
    pub fn category(&self) -> ActionCategory {
        match self {
            Action::Move(_) | Action::ForceMove(_) => ActionCategory::Movement,
            Action::Attack { .. } | Action::Curse(_) => ActionCategory::Combat,
            Action::Take(_)
            | Action::TakeAll
            | Action::Drop(_)
            | Action::Consume(_)
            | Action::Give { .. } => ActionCategory::Item,
            Action::Look | Action::Doors | Action::Examine(_) | Action::Inventory => {
                ActionCategory::Info
            }
            Action::Debug(_)
            | Action::Pass
            | Action::Inactive
            | Action::Retry(_)
            | Action::Settings(_) => ActionCategory::Control,
            Action::Repeat(inner) => inner.category(),
        }
    }

    /// Whether executing this leaves the actor's turn open
    ///
    /// A repeat inherits the status of whatever it wraps, through any depth
    /// of nesting.
    pub fn is_free(&self) -> bool {
        match self {
            Action::Look
            | Action::Doors
            | Action::Examine(_)
            | Action::Inventory
            | Action::Debug(_)
            | Action::Retry(_)
            | Action::Settings(_) => true,
            Action::Repeat(inner) => inner.is_free(),
            Action::Move(_)
            | Action::ForceMove(_)
            | Action::Attack { .. }
            | Action::Take(_)
            | Action::TakeAll
            | Action::Drop(_)
            | Action::Consume(_)
            | Action::Give { .. }
            | Action::Pass
            | Action::Inactive
            | Action::Curse(_) => false,
        }
    }

    /// Short name shown in "Pending Action" and repeat notices
    pub fn name(&self) -> &'static str {
        match self {
            Action::Move(_) | Action::ForceMove(_) => "Move",
            Action::Attack { kind, .. } => match kind {
                AttackKind::Melee => "AttackMelee",
                AttackKind::Ranged => "AttackRanged",
                AttackKind::Thrown => "AttackThrow",
            },
            Action::Take(_) => "Take",
            Action::TakeAll => "TakeAll",
            Action::Drop(_) => "Drop",
            Action::Consume(_) => "Consume",
            Action::Give { .. } => "Give",
            Action::Look => "Look",
            Action::Doors => "Doors",
            Action::Examine(_) => "Examine",
            Action::Inventory => "Inventory",
            Action::Debug(_) => "Debug",
            Action::Pass => "Pass",
            Action::Inactive => "Inactive",
            Action::Retry(_) => "Retry",
            Action::Repeat(_) => "Repeat",
            Action::Settings(_) => "Settings",
            Action::Curse(_) => "Curse",
        }
    }

    pub fn retry(message: impl Into<String>) -> Self {
        Action::Retry(message.into())
    }

    pub fn is_retry(&self) -> bool {
        matches!(self, Action::Retry(_))
    }
}
