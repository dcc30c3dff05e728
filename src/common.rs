use std::fmt::{self, Write};
use std::num::NonZeroU32;
use std::str::FromStr;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type Float = f64;

/// A single evaluated number. Dice faces are integral, but division is not.
pub type Value = Float;
pub type Values = Vec<Value>;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Marker used in notation for Fate dice, as in `4dF`.
pub const FATE_MARKER: &str = "F";

/// The number of faces on the physical die backing a Fate roll.
pub const FATE_FACES: UInt = 6;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DieSize {
    Sides(NonZeroUInt),
    Fate,
}

impl DieSize {
    /// The size of the die that is physically rolled.
    pub fn faces(self) -> NonZeroUInt {
        match self {
            Self::Sides(x) => x,
            Self::Fate => NonZeroUInt::MIN.saturating_add(FATE_FACES - 1),
        }
    }

    pub const fn is_fate(self) -> bool {
        matches!(self, Self::Fate)
    }
}

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sides(x) => fmt::Display::fmt(x, f),
            Self::Fate => f.write_str(FATE_MARKER),
        }
    }
}

impl From<NonZeroUInt> for DieSize {
    fn from(x: NonZeroUInt) -> Self {
        Self::Sides(x)
    }
}

impl TryFrom<UInt> for DieSize {
    type Error = std::num::TryFromIntError;

    fn try_from(value: UInt) -> Result<Self, Self::Error> {
        NonZeroUInt::try_from(value).map(Self::Sides)
    }
}

impl FromStr for DieSize {
    type Err = <NonZeroUInt as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == FATE_MARKER {
            Ok(Self::Fate)
        } else {
            s.parse().map(Self::Sides)
        }
    }
}

/// One face of a Fate die.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FateFace {
    Minus,
    Blank,
    Plus,
}

impl FateFace {
    /// Physical faces 1..=6 in order; each symbol covers two of them.
    const TABLE: [Self; FATE_FACES as usize] = [
        Self::Minus,
        Self::Minus,
        Self::Blank,
        Self::Blank,
        Self::Plus,
        Self::Plus,
    ];

    /// Maps a physical roll of the backing six-sided die onto its face.
    pub fn from_roll(roll: Int) -> Option<Self> {
        let index = usize::try_from(roll.checked_sub(1)?).ok()?;
        Self::TABLE.get(index).copied()
    }

    /// Recovers the face from its reported value.
    pub const fn from_value(value: Int) -> Option<Self> {
        match value {
            -1 => Some(Self::Minus),
            0 => Some(Self::Blank),
            1 => Some(Self::Plus),
            _ => None,
        }
    }

    pub const fn value(self) -> Int {
        match self {
            Self::Minus => -1,
            Self::Blank => 0,
            Self::Plus => 1,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Minus => '-',
            Self::Blank => '□',
            Self::Plus => '+',
        }
    }
}

impl fmt::Display for FateFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub fn apply(self, l: Value, r: Value) -> Value {
        match self {
            Self::Add => l + r,
            Self::Sub => l - r,
            Self::Mul => l * r,
            Self::Div => l / r,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        };
        f.write_char(c)
    }
}

/// The built-in functions available in notation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Function {
    Max,
    Min,
    Avg,
    Drop,
    Sum,
    Count,
}

impl Function {
    pub const ALL: [Self; 6] = [
        Self::Max,
        Self::Min,
        Self::Avg,
        Self::Drop,
        Self::Sum,
        Self::Count,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
            Self::Avg => "avg",
            Self::Drop => "drop",
            Self::Sum => "sum",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnknownFunction(pub String);

impl FromStr for Function {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|func| func.name() == s)
            .ok_or_else(|| UnknownFunction(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_size_from_str() {
        assert_eq!("20".parse(), Ok(DieSize::try_from(20u32).unwrap()));
        assert_eq!("F".parse(), Ok(DieSize::Fate));
        assert!("0".parse::<DieSize>().is_err());
        assert!("T".parse::<DieSize>().is_err());
        assert_eq!(DieSize::Fate.faces().get(), 6);
        assert_eq!(DieSize::Fate.to_string(), "F");
    }

    #[test]
    fn test_fate_faces_partition_evenly() {
        let faces: Vec<_> = (1..=6).map(|x| FateFace::from_roll(x).unwrap()).collect();
        for face in [FateFace::Minus, FateFace::Blank, FateFace::Plus] {
            assert_eq!(faces.iter().filter(|&&f| f == face).count(), 2);
            assert_eq!(FateFace::from_value(face.value()), Some(face));
        }
        assert_eq!(FateFace::from_roll(0), None);
        assert_eq!(FateFace::from_roll(7), None);
    }

    #[test]
    fn test_function_names() {
        for func in Function::ALL {
            assert_eq!(func.name().parse(), Ok(func));
        }
        assert_eq!(
            "roll".parse::<Function>(),
            Err(UnknownFunction("roll".to_owned()))
        );
    }
}
