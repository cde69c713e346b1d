//! Round scheduling and effect timers

pub mod effects;
pub mod round;

pub use effects::{attach_effect, tick_effects};
pub use round::{roll_initiative, run_round, RoundReport};
