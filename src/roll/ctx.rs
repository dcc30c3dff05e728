use super::{error::RollError, eval::Execute, result::*, roller::Roller, RResult};
use crate::common::*;
use crate::config::{RollerOptions, Variables};
use crate::parse::ast::{Dice, Node};

/// State owned by a single evaluation.
///
/// The trace lives here rather than on the evaluator, so concurrent rolls on
/// one evaluator never see each other's dice.
pub struct RollContext<'a, R> {
    roller: R,
    options: &'a RollerOptions,
    variables: &'a Variables,
    breakdown: Breakdown,
    rolls: usize,
}

impl<'a, R: Roller> RollContext<'a, R> {
    pub fn new(roller: R, options: &'a RollerOptions, variables: &'a Variables) -> Self {
        Self {
            roller,
            options,
            variables,
            breakdown: Breakdown::new(),
            rolls: 0,
        }
    }

    pub fn options(&self) -> &RollerOptions {
        self.options
    }

    pub fn variable(&self, name: &str) -> RResult<Int> {
        self.variables
            .get(name)
            .ok_or_else(|| RollError::UndefinedVariable(name.to_owned()))
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.options.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    /// Rolls every die of `dice`, recording each one in the trace.
    pub fn roll(&mut self, dice: &Dice) -> RResult<Values> {
        self.count_rolls(dice.count)?;

        let mut values = Values::new();
        values
            .try_reserve_exact(dice.count)
            .and_then(|_| self.breakdown.try_reserve(dice.count))
            .map_err(|_| RollError::TooManyRolls)?;
        for _ in 0..dice.count {
            let value = match dice.size {
                DieSize::Sides(sides) => self.roller.roll(self.options.min_roll, sides),
                DieSize::Fate => {
                    let roll = self.roller.roll_between(1, Int::from(FATE_FACES));
                    FateFace::from_roll(roll).map_or(0, FateFace::value)
                }
            };
            self.breakdown.push(RolledDie {
                label: format!("{}: {}", dice, self.breakdown.len()),
                size: dice.size,
                value,
            });
            values.push(value as Value);
        }
        Ok(values)
    }

    /// Evaluates each node into its own set of values.
    pub fn execute(&mut self, nodes: &[Node]) -> RResult<Vec<Values>> {
        nodes.iter().map(|node| node.execute(self)).collect()
    }

    /// Evaluates a whole notation and sums everything it produced.
    pub fn eval(mut self, notation: String, nodes: &[Node]) -> RResult<RollResult> {
        let rolls: Values = self.execute(nodes)?.into_iter().flatten().collect();
        let total = rolls.iter().fold(0.0, |sum, x| sum + x);
        tracing::debug!(%notation, total, dice = self.breakdown.len(), "rolled");
        Ok(RollResult {
            total,
            notation,
            rolls,
            breakdown: self.breakdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mock_roller() -> StepRng {
        StepRng::new(0, 1)
    }

    fn eval_with(s: &str, roller: impl Roller, options: &RollerOptions) -> RResult<RollResult> {
        let variables: Variables = [("dex", 3), ("zero", 0)].into_iter().collect();
        let nodes = parse::lex(s)?;
        RollContext::new(roller, options, &variables).eval(s.to_owned(), &nodes)
    }

    fn eval(s: &str) -> RResult<RollResult> {
        eval_with(s, mock_roller(), &RollerOptions::default())
    }

    fn check(s: &str, expected: Value) {
        assert_eq!(expected, eval(s).unwrap().total);
    }

    fn check_err(s: &str, expected: RollError) {
        assert_eq!(expected, eval(s).unwrap_err());
    }

    #[test]
    fn test_eval_numbers() {
        check("2", 2.0);
        check("-2", -2.0);
        check("2 3", 5.0);
        check("$dex", 3.0);
    }

    #[test]
    fn test_eval_binary() {
        check("2 + 3", 5.0);
        check("2 + 3 * 4", 20.0);
        check("7 / 2", 3.5);
        check("1 - 2 - 3", -4.0);
        check("10 / $dex", 10.0 / 3.0);
    }

    #[test]
    fn test_eval_dice() {
        check("1d20 + 4", 1.0 + 4.0);
        check("2d4", 1.0 + 2.0);
        check("8d6", (1 + 2 + 3 + 4 + 5 + 6 + 1 + 2) as Value);
        check("2d6 * 2", (1.0 + 2.0) * 2.0);
        check("0d6", 0.0);
    }

    #[test]
    fn test_eval_fate() {
        // Physical faces 1..=6 map onto -, -, blank, blank, +, +.
        let result = eval("6dF").unwrap();
        assert_eq!(result.original_rolls(), vec![-1, -1, 0, 0, 1, 1]);
        assert_eq!(result.total, 0.0);
        assert_eq!(result.breakdown[0].label, "6dF: 0");
    }

    #[test]
    fn test_eval_functions() {
        check("max(2d20)", 2.0);
        check("min(2d20)", 1.0);
        check("drop(4d6)", (2 + 3 + 4) as Value);
        check("sum(drop(4d6))", (2 + 3 + 4) as Value);
        check("max(drop(4d6))", 4.0);
        check("avg(4d6)", 2.0);
        check("sum(2d8 + 3)", 6.0);
        check("count(2, 8d6)", 2.0);
        check("count(8d6)", 1.0);
        check("count($dex, 3d6, 3d6)", 1.0);
        check("max(1d4, 2d4, 1d4)", 2.0 + 3.0);
    }

    #[test]
    fn test_eval_trace_order() {
        let result = eval("1d4 + max(2d6) + 1d8").unwrap();
        let labels: Vec<_> = result.breakdown.iter().map(|die| die.label.as_str()).collect();
        assert_eq!(labels, vec!["1d4: 0", "2d6: 1", "2d6: 2", "1d8: 3"]);
    }

    #[test]
    fn test_eval_rolls_are_flattened() {
        let result = eval("drop(1d20, 1d20, 1d20)").unwrap();
        assert_eq!(result.rolls, vec![2.0, 3.0]);
        assert_eq!(result.total, 5.0);
    }

    #[test]
    fn test_min_roll_option() {
        let options = RollerOptions {
            min_roll: 0,
            ..RollerOptions::default()
        };
        let result = eval_with("3d10", mock_roller(), &options).unwrap();
        assert_eq!(result.original_rolls(), vec![0, 1, 2]);

        // A minimum above the die size never lifts a roll past its last face.
        let options = RollerOptions {
            min_roll: 3,
            ..RollerOptions::default()
        };
        let result = eval_with("2d2", mock_roller(), &options).unwrap();
        assert_eq!(result.original_rolls(), vec![2, 2]);
    }

    #[test]
    fn test_errors() {
        check_err("1d20 + $missing", RollError::UndefinedVariable("missing".to_owned()));
        check_err("max()", RollError::MissingArguments(Function::Max));
        check_err("4 / $zero", RollError::ZeroDivision);
        check_err("1001d6", RollError::TooManyRolls);
        check_err("sum(600d6, 600d6)", RollError::TooManyRolls);
    }

    #[test]
    fn test_unbounded_rolls() {
        let options = RollerOptions {
            max_rolls: None,
            ..RollerOptions::default()
        };
        let result = eval_with("2000d6", mock_roller(), &options).unwrap();
        assert_eq!(result.breakdown.len(), 2000);

        assert_eq!(
            eval_with("4611686018427387904d6", mock_roller(), &options).unwrap_err(),
            RollError::TooManyRolls
        );
    }

    proptest! {
        #[test]
        fn rolls_stay_in_range(count in 0usize..50, sides in 1u32..=100, seed: u64) {
            let s = format!("{}d{}", count, sides);
            let result = eval_with(&s, StdRng::seed_from_u64(seed), &RollerOptions::default()).unwrap();
            prop_assert_eq!(result.breakdown.len(), count);
            for value in result.original_rolls() {
                prop_assert!((1..=i64::from(sides)).contains(&value));
            }
        }

        #[test]
        fn fate_rolls_stay_in_range(count in 0usize..50, seed: u64) {
            let s = format!("{}dF", count);
            let result = eval_with(&s, StdRng::seed_from_u64(seed), &RollerOptions::default()).unwrap();
            prop_assert_eq!(result.fate_rolls().len(), count);
            prop_assert!(result.original_rolls().iter().all(|x| (-1..=1).contains(x)));
        }

        #[test]
        fn drop_removes_lowest(seed: u64) {
            let result = eval_with("drop(4d6)", StdRng::seed_from_u64(seed), &RollerOptions::default()).unwrap();
            let dice = result.original_rolls();
            let expected = dice.iter().sum::<Int>() - dice.iter().min().copied().unwrap_or(0);
            prop_assert_eq!(result.total, expected as Value);
        }
    }
}
