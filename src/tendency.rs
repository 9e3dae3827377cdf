//! Measures of central tendency: mean, median and midrange
//!
//! Each function accepts any slice whose elements convert to `f64` through
//! [`ToPrimitive`], which covers every primitive integer and float type as well
//! as the untyped [`Value`](crate::Value). Results are always `f64`.

use std::fmt::Display;

use num_traits::ToPrimitive;

use crate::{
    error::Result,
    sample::{validate, validate_ordered},
};

/// Arithmetic mean: the sum of the sample divided by its length
///
/// Integer samples use true division, so `mean(&[1, 2])` is `1.5`.
/// A NaN element can still be added, so it makes the mean NaN rather than failing.
///
/// ```
/// use central_tendency::mean;
///
/// assert_eq!(mean(&[1, 2, 3, 4, 5]), Ok(3.0));
/// assert!(mean::<u32>(&[]).is_err());
/// ```
pub fn mean<T>(sample: &[T]) -> Result<f64>
where
    T: ToPrimitive + Display,
{
    let values = validate(sample)?;
    let mean = mean_of(&values);

    #[cfg(feature = "log")]
    log::trace!("Mean of {} values: {}", values.len(), mean);

    Ok(mean)
}

/// Middle value of the sample once sorted ascending
///
/// For an even number of elements this is the average of the two central ones.
/// The sort happens on a private copy; the input order does not matter.
/// NaN cannot be ordered and is reported as a non-numeric element.
///
/// ```
/// use central_tendency::median;
///
/// assert_eq!(median(&[3, 1, 2]), Ok(2.0));
/// assert_eq!(median(&[4, 1, 3, 2]), Ok(2.5));
/// ```
pub fn median<T>(sample: &[T]) -> Result<f64>
where
    T: ToPrimitive + Display,
{
    let mut values = validate_ordered(sample)?;
    values.sort_by(f64::total_cmp);
    let median = median_of_sorted(&values);

    #[cfg(feature = "log")]
    log::trace!("Median of {} values: {}", values.len(), median);

    Ok(median)
}

/// Halfway point between the largest and smallest values of the sample
///
/// NaN is rejected, as for [`median`].
///
/// ```
/// use central_tendency::midrange;
///
/// assert_eq!(midrange(&[1.5, 4., 2.5, 3., 10.5]), Ok(6.0));
/// ```
pub fn midrange<T>(sample: &[T]) -> Result<f64>
where
    T: ToPrimitive + Display,
{
    let values = validate_ordered(sample)?;
    let (min, max) = extremes(&values);
    let midrange = (max + min) / 2.;

    #[cfg(feature = "log")]
    log::trace!("Midrange of {} values: {}", values.len(), midrange);

    Ok(midrange)
}

/// `values` must be non-empty
pub(crate) fn mean_of(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());

    values.iter().sum::<f64>() / values.len() as f64
}

/// `sorted` must be non-empty and sorted ascending
pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!(sorted.is_sorted_by(|a, b| a <= b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.
    } else {
        sorted[mid]
    }
}

/// Smallest and largest of `values`, which must be non-empty and NaN-free
fn extremes(values: &[f64]) -> (f64, f64) {
    debug_assert!(!values.is_empty());

    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Finite values small enough that sums cannot overflow
    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(
            prop::num::f64::NORMAL.prop_filter("finite", |x| x.is_finite() && x.abs() < 1e12),
            min_len..=max_len,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn mean_is_sum_over_len(data in finite_vec(1, 100)) {
            let expected = data.iter().sum::<f64>() / data.len() as f64;
            let m = mean(&data).unwrap();
            prop_assert!((m - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }

        #[test]
        fn median_is_permutation_invariant(
            (data, shuffled) in finite_vec(1, 100)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            prop_assert_eq!(median(&data).unwrap(), median(&shuffled).unwrap());
        }

        #[test]
        fn median_matches_sorted_middle(data in finite_vec(1, 100)) {
            let mut sorted = data.clone();
            sorted.sort_by(f64::total_cmp);
            let n = sorted.len();
            let expected = if n % 2 == 0 {
                (sorted[n / 2 - 1] + sorted[n / 2]) / 2.
            } else {
                sorted[n / 2]
            };
            prop_assert_eq!(median(&data).unwrap(), expected);
        }

        #[test]
        fn midrange_is_mean_of_extremes(data in finite_vec(1, 100)) {
            let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = data.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(midrange(&data).unwrap(), (max + min) / 2.);
        }
    }
}
