/// Recovers the single value absent from a `0..=n` sequence of length `n`.
pub trait MissingNumberFinder {
    fn find_missing(&self, numbers: &[i64]) -> i64;
}

// * The arithmetic series sum (sum 0..n) formula is n * (n + 1) / 2
// * thus, the missing number is the difference of the expected sum and the actual sum
//
// The input must already be unique and within [0, n]; otherwise the answer is meaningless.
#[derive(Debug, Default, Clone, Copy)]
pub struct SumFinder;

fn sum_to(n: i64) -> i64 {
    n * (n + 1) / 2
}

impl MissingNumberFinder for SumFinder {
    fn find_missing(&self, numbers: &[i64]) -> i64 {
        let expected = sum_to(numbers.len() as i64);
        let actual = numbers.iter().sum::<i64>();
        expected - actual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_example() {
        assert_eq!(2, SumFinder.find_missing(&[3, 0, 1]));
    }

    #[test]
    fn test_single_zero() {
        assert_eq!(1, SumFinder.find_missing(&[0]));
    }

    #[test]
    fn test_missing_zero() {
        assert_eq!(0, SumFinder.find_missing(&[1, 2, 3]));
    }

    /// A shuffled `0..=n` with one element removed, plus that element.
    fn missing_case() -> impl Strategy<Value = (Vec<i64>, i64)> {
        (1i64..300).prop_flat_map(|n| {
            (0..=n).prop_flat_map(move |removed| {
                let values: Vec<i64> = (0..=n).filter(|&v| v != removed).collect();
                (Just(values).prop_shuffle(), Just(removed))
            })
        })
    }

    proptest! {
        #[test]
        fn finds_the_removed_value((values, removed) in missing_case()) {
            prop_assert_eq!(removed, SumFinder.find_missing(&values));
        }

        #[test]
        fn ignores_element_order((values, _removed) in missing_case()) {
            let mut reversed = values.clone();
            reversed.reverse();
            let mut sorted = values.clone();
            sorted.sort_unstable();
            let found = SumFinder.find_missing(&values);
            prop_assert_eq!(found, SumFinder.find_missing(&reversed));
            prop_assert_eq!(found, SumFinder.find_missing(&sorted));
        }
    }
}
