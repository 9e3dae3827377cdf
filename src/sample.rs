//! Validation shared by every statistic in this crate

use std::fmt::Display;

use num_traits::ToPrimitive;

use crate::error::{Result, StatsError};

/// Checks a sample and copies it out as `f64`s, preserving input order
///
/// Fails with [`StatsError::EmptyInput`] if the sample is empty, and with
/// [`StatsError::NonNumericElement`] for the first element that has no `f64`
/// representation. NaN is a number as far as addition goes, so it passes; use
/// [`validate_ordered`] where the values must be compared. The caller's slice
/// is left untouched.
///
/// ```
/// use central_tendency::{validate, StatsError};
///
/// assert_eq!(validate(&[3, 1, 2]), Ok(vec![3.0, 1.0, 2.0]));
/// assert_eq!(validate::<f64>(&[]), Err(StatsError::EmptyInput));
/// ```
pub fn validate<T>(sample: &[T]) -> Result<Vec<f64>>
where
    T: ToPrimitive + Display,
{
    check(sample, true)
}

/// Like [`validate`], but also rejects NaN, which has no place in an ordering
///
/// ```
/// use central_tendency::{validate_ordered, StatsError};
///
/// assert_eq!(
///     validate_ordered(&[1.0, f64::NAN]),
///     Err(StatsError::NonNumericElement("NaN".to_owned()))
/// );
/// ```
pub fn validate_ordered<T>(sample: &[T]) -> Result<Vec<f64>>
where
    T: ToPrimitive + Display,
{
    check(sample, false)
}

fn check<T>(sample: &[T], allow_nan: bool) -> Result<Vec<f64>>
where
    T: ToPrimitive + Display,
{
    if sample.is_empty() {
        #[cfg(feature = "log")]
        log::debug!("Rejected empty sample");

        return Err(StatsError::EmptyInput);
    }

    sample
        .iter()
        .map(|element| match element.to_f64() {
            Some(v) if allow_nan || !v.is_nan() => Ok(v),
            _ => {
                #[cfg(feature = "log")]
                log::debug!("Rejected non-numeric element: {}", element);

                Err(StatsError::NonNumericElement(element.to_string()))
            }
        })
        .collect()
}
