//! Evaluation of tabletop dice notation such as `1d20 + $strMod`,
//! `drop(4d6)` or `longsword.dmg.2h`.

pub mod common;
pub mod config;
mod evaluator;
pub mod roll;
pub mod parse;
pub mod resolve;

pub use config::{MapEntry, RollMap, RollerConfig, RollerOptions, Variables};
pub use evaluator::Evaluator;
pub use parse::ParseError;
pub use roll::{RollError, RollResult, Roller};

/// Rolls `notation` with the default options and no roll map or variables.
pub fn roll(notation: &str) -> Result<RollResult, RollError> {
    Evaluator::new().roll(notation)
}
