//! Transport boundary: the reader and writer collaborators

pub mod messages;
pub mod reader;

pub use messages::{Audience, Category, Message, MessageLog, Writer};
pub use reader::{Input, Reader, ScriptedReader};
