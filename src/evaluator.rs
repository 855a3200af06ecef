use crate::operator::Operator;

/// Collects every value reachable by placing one of `operators` into each gap
/// between consecutive `components` and folding strictly left to right.
///
/// Duplicates are kept, one value per operator combination. Combinations that
/// overflow, or concatenate a negative value, are dropped. A single component
/// yields itself and an empty slice yields nothing.
pub fn reachable_values(components: &[i64], operators: &[Operator]) -> Vec<i64> {
    match components {
        [] => Vec::new(),
        [only] => vec![*only],
        [first, rest @ ..] => {
            let mut results = Vec::new();
            fold_from(*first, rest, operators, &mut results);
            results
        }
    }
}

fn fold_from(acc: i64, rest: &[i64], operators: &[Operator], results: &mut Vec<i64>) {
    let Some((next, tail)) = rest.split_first() else {
        results.push(acc);
        return;
    };

    for op in operators {
        if let Some(value) = op.apply(acc, *next) {
            fold_from(value, tail, operators, results);
        }
    }
}
