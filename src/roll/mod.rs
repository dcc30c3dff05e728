mod ctx;
mod error;
mod eval;
pub mod functions;
mod result;
mod roller;
mod source;

pub type RResult<T> = Result<T, RollError>;

pub use ctx::RollContext;
pub use error::RollError;
pub use eval::Execute;
pub use result::{Breakdown, RollResult, RolledDie};
pub use roller::{Roller, MAX_ITERATIONS, MAX_RANGE};
pub use source::EntropySource;
