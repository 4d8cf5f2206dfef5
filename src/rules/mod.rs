//! Rules: the engine trait, shared push legality and the push itself.
//!
//! - `engine`: the `RulesEngine` trait and game results
//! - `legality`: access, self-elimination and reversal checks, shared by
//!   validation and the mobility scan
//! - `push`: the cascading board mutation

pub mod engine;
pub mod legality;
pub mod push;

pub use engine::{GameResult, RulesEngine, WinReason};
pub use legality::{check_push, legal_pushes};
pub use push::{push, PushOutcome};
