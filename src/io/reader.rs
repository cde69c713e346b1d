//! Input boundary: one line of text per acquisition attempt

use ahash::AHashMap;
use std::collections::VecDeque;

use crate::core::types::ActorId;

/// Result of asking the transport for a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Disconnected or timed out. Distinct from an empty line.
    Inactive,
}

/// Line source supplied by the transport
pub trait Reader {
    /// Whether the actor currently has a live connection
    fn is_active(&self, actor: ActorId) -> bool;

    fn read_line(&mut self, actor: ActorId) -> Input;
}

/// Reader fed from per-actor queues of prepared lines
///
/// An actor is active while it still has queued lines.
#[derive(Debug, Default, Clone)]
pub struct ScriptedReader {
    lines: AHashMap<ActorId, VecDeque<String>>,
}

impl ScriptedReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<S: Into<String>>(
        mut self,
        actor: ActorId,
        lines: impl IntoIterator<Item = S>,
    ) -> Self {
        self.push_lines(actor, lines);
        self
    }

    pub fn push_lines<S: Into<String>>(&mut self, actor: ActorId, lines: impl IntoIterator<Item = S>) {
        self.lines
            .entry(actor)
            .or_default()
            .extend(lines.into_iter().map(Into::into));
    }

    pub fn remaining(&self, actor: ActorId) -> usize {
        self.lines.get(&actor).map_or(0, VecDeque::len)
    }
}

impl Reader for ScriptedReader {
    fn is_active(&self, actor: ActorId) -> bool {
        self.remaining(actor) > 0
    }

    fn read_line(&mut self, actor: ActorId) -> Input {
        match self.lines.get_mut(&actor).and_then(VecDeque::pop_front) {
            Some(line) => Input::Line(line),
            None => Input::Inactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reader_drains_then_goes_inactive() {
        let mut reader = ScriptedReader::new().with_lines(ActorId(1), ["look", ""]);
        assert!(reader.is_active(ActorId(1)));
        assert_eq!(reader.read_line(ActorId(1)), Input::Line("look".into()));
        assert_eq!(reader.read_line(ActorId(1)), Input::Line(String::new()));
        assert!(!reader.is_active(ActorId(1)));
        assert_eq!(reader.read_line(ActorId(1)), Input::Inactive);
    }

    #[test]
    fn test_unknown_actor_is_inactive() {
        let mut reader = ScriptedReader::new();
        assert!(!reader.is_active(ActorId(7)));
        assert_eq!(reader.read_line(ActorId(7)), Input::Inactive);
    }
}
