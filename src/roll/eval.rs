use super::{functions, RollError};
use crate::common::*;
use crate::parse::ast::*;

/// Evaluation of a single node into a set of values.
#[enum_dispatch::enum_dispatch]
pub trait Execute {
    fn execute<R: crate::roll::Roller>(
        &self,
        ctx: &mut crate::roll::RollContext<'_, R>,
    ) -> crate::roll::RResult<crate::common::Values>;
}

fn total(values: Values) -> Value {
    values.into_iter().sum()
}

impl Execute for Literal {
    fn execute<R: super::Roller>(&self, _: &mut super::RollContext<'_, R>) -> super::RResult<Values> {
        Ok(vec![self.value as Value])
    }
}

impl Execute for Variable {
    fn execute<R: super::Roller>(&self, ctx: &mut super::RollContext<'_, R>) -> super::RResult<Values> {
        Ok(vec![ctx.variable(&self.name)? as Value])
    }
}

impl Execute for Dice {
    fn execute<R: super::Roller>(&self, ctx: &mut super::RollContext<'_, R>) -> super::RResult<Values> {
        ctx.roll(self)
    }
}

impl Execute for Operator {
    fn execute<R: super::Roller>(&self, ctx: &mut super::RollContext<'_, R>) -> super::RResult<Values> {
        let l = total(self.left().execute(ctx)?);
        let r = total(self.right().execute(ctx)?);
        if self.op == BinaryOperator::Div && r == 0.0 {
            return Err(RollError::ZeroDivision);
        }
        Ok(vec![self.op.apply(l, r)])
    }
}

impl Execute for Method {
    fn execute<R: super::Roller>(&self, ctx: &mut super::RollContext<'_, R>) -> super::RResult<Values> {
        let sets = ctx.execute(&self.parameters)?;
        let sets = NonEmpty::try_from_vec(sets).map_err(|_| RollError::MissingArguments(self.function))?;

        let values = match self.function {
            Function::Max => functions::max(sets),
            Function::Min => functions::min(sets),
            Function::Avg => functions::avg(sets),
            Function::Drop => functions::drop(sets),
            Function::Sum => functions::sum(sets),
            Function::Count => {
                let default = ctx.options().default_count as Value;
                // A bare roll in first place is counted rather than matched against.
                if matches!(self.parameters.first(), Some(Node::Roll(_))) {
                    functions::count(default, &sets)
                } else {
                    let target = sets.first().first().copied().unwrap_or(default);
                    functions::count(target, &sets[1..])
                }
            }
        };
        Ok(values)
    }
}
