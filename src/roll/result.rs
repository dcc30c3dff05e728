use crate::common::*;
use std::fmt;

/// One physical die rolled during an evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledDie {
    /// `"{count}d{size}: {ordinal}"`, where the ordinal is the die's position
    /// in the whole trace.
    pub label: String,
    pub size: DieSize,
    /// The reported value; `-1`, `0` or `1` for Fate dice.
    pub value: Int,
}

impl RolledDie {
    pub fn fate_face(&self) -> Option<FateFace> {
        if self.size.is_fate() {
            FateFace::from_value(self.value)
        } else {
            None
        }
    }
}

impl fmt::Display for RolledDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fate_face() {
            Some(face) => write!(f, "{} = {}", self.label, face),
            None => write!(f, "{} = {}", self.label, self.value),
        }
    }
}

/// Every die rolled during one evaluation, in roll order.
pub type Breakdown = Vec<RolledDie>;

#[derive(Debug, Clone, PartialEq)]
pub struct RollResult {
    pub total: Value,
    /// The notation that was evaluated, after roll-map lookup and variable
    /// substitution.
    pub notation: String,
    /// The flattened values left after functions were applied.
    pub rolls: Values,
    pub breakdown: Breakdown,
}

impl RollResult {
    /// The value of every die rolled, before any function touched it.
    pub fn original_rolls(&self) -> Vec<Int> {
        self.breakdown.iter().map(|die| die.value).collect()
    }

    /// The faces of every Fate die rolled.
    pub fn fate_rolls(&self) -> Vec<FateFace> {
        self.breakdown.iter().filter_map(RolledDie::fate_face).collect()
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)?;
        if !self.breakdown.is_empty() {
            f.write_str(" [")?;
            for (i, die) in self.breakdown.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", die)?;
            }
            f.write_str("]")?;
        }
        write!(f, " = {}", self.total)
    }
}
