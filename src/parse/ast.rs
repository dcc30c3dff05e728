use crate::common::*;
use crate::roll::Execute;
use std::fmt;

/// A node of a lexed and bound notation tree.
#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch::enum_dispatch(Execute)]
pub enum Node {
    Number(Literal),
    Variable(Variable),
    Roll(Dice),
    Operator(Operator),
    Method(Method),
}

impl Node {
    pub fn number(value: Int) -> Self {
        Self::Number(Literal { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Variable { name: name.into() })
    }

    pub fn roll(count: usize, size: DieSize) -> Self {
        Self::Roll(Dice::new(count, size))
    }

    pub fn binary(l: Self, op: BinaryOperator, r: Self) -> Self {
        Self::Operator(Operator::new(l, op, r))
    }

    pub fn method(function: Function, parameters: Vec<Self>) -> Self {
        Self::Method(Method::new(function, parameters))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => fmt::Display::fmt(&x.value, f),
            Self::Variable(x) => write!(f, "${}", x.name),
            Self::Roll(x) => fmt::Display::fmt(x, f),
            Self::Operator(x) => write!(f, "({} {} {})", x.left(), x.op, x.right()),
            Self::Method(x) => {
                write!(f, "{}(", x.function)?;
                for (i, param) in x.parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Literal {
    pub value: Int,
}

/// A `$name` reference, stored without its sigil.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Variable {
    pub name: String,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dice {
    pub count: usize,
    pub size: DieSize,
}

impl Dice {
    pub fn new(count: usize, size: DieSize) -> Self {
        Self { count, size }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.size)
    }
}

/// A binary operator together with both of its operands.
///
/// Operators that have not been bound yet only exist as lexer tokens, so a
/// node of this type can always be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub op: BinaryOperator,
    operands: Box<[Node; 2]>,
}

impl Operator {
    pub fn new(left: Node, op: BinaryOperator, right: Node) -> Self {
        Self {
            op,
            operands: Box::new([left, right]),
        }
    }

    pub fn left(&self) -> &Node {
        &self.operands[0]
    }

    pub fn right(&self) -> &Node {
        &self.operands[1]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub function: Function,
    pub parameters: Vec<Node>,
}

impl Method {
    pub fn new(function: Function, parameters: Vec<Node>) -> Self {
        Self {
            function,
            parameters,
        }
    }
}
