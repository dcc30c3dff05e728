//! The built-in functions. Each receives one evaluated set of values per
//! parameter.

use crate::common::*;

fn total(set: &[Value]) -> Value {
    set.iter().sum()
}

/// Index of the set picked by `better`, keeping the earliest on ties.
fn pick_by_total(sets: &[Values], better: impl Fn(Value, Value) -> bool) -> usize {
    let mut best = 0;
    for (i, set) in sets.iter().enumerate().skip(1) {
        if better(total(set), total(&sets[best])) {
            best = i;
        }
    }
    best
}

/// The largest value of a single set, or the set with the largest total.
pub fn max(sets: NonEmpty<Values>) -> Values {
    if sets.len() == 1 {
        let set = sets.first();
        return set.iter().copied().max_by(Value::total_cmp).into_iter().collect();
    }
    let best = pick_by_total(&sets, |a, b| a > b);
    sets.into_vec().swap_remove(best)
}

/// The smallest value of a single set, or the set with the smallest total.
pub fn min(sets: NonEmpty<Values>) -> Values {
    if sets.len() == 1 {
        let set = sets.first();
        return set.iter().copied().min_by(Value::total_cmp).into_iter().collect();
    }
    let best = pick_by_total(&sets, |a, b| a < b);
    sets.into_vec().swap_remove(best)
}

/// The floored mean of every set.
pub fn avg(sets: NonEmpty<Values>) -> Values {
    sets.iter()
        .map(|set| {
            if set.is_empty() {
                0.0
            } else {
                (total(set) / set.len() as Value).floor()
            }
        })
        .collect()
}

/// A single set without its lowest value, or every set but the one with the
/// lowest total.
pub fn drop(sets: NonEmpty<Values>) -> Values {
    if sets.len() == 1 {
        let mut set = sets.into_vec().swap_remove(0);
        set.sort_by(|a, b| b.total_cmp(a));
        set.pop();
        return set;
    }
    let lowest = pick_by_total(&sets, |a, b| a < b);
    sets.into_iter()
        .enumerate()
        .filter(|&(i, _)| i != lowest)
        .flat_map(|(_, set)| set)
        .collect()
}

/// The total of every value in every set.
pub fn sum(sets: NonEmpty<Values>) -> Values {
    vec![sets.iter().map(|set| total(set)).sum()]
}

/// How many values of each set equal `target`.
pub fn count(target: Value, sets: &[Values]) -> Values {
    sets.iter()
        .map(|set| set.iter().filter(|&&x| x == target).count() as Value)
        .collect()
}
