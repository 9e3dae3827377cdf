//! All central tendency measures of a sample at once

use std::fmt::Display;

use num_traits::ToPrimitive;

use crate::{
    error::Result,
    sample::validate_ordered,
    tendency::{mean_of, median_of_sorted},
};

/// Central tendency and extremes of a sample
///
/// Validates the sample once, where calling [`mean`](crate::mean),
/// [`median`](crate::median) and [`midrange`](crate::midrange) separately
/// would validate it three times.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of elements in the sample
    pub count: usize,
    /// Smallest element
    pub min: f64,
    /// Largest element
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Middle value, averaging the central two for even counts
    pub median: f64,
    /// Halfway point between [`Self::min`] and [`Self::max`]
    pub midrange: f64,
}

impl Summary {
    /// Summarizes a sample
    ///
    /// Fails the same way as [`median`](crate::median): on an empty sample, or
    /// on the first element that is not a number or is NaN.
    ///
    /// ```
    /// use central_tendency::Summary;
    ///
    /// let summary = Summary::new(&[5, 2, 4, 1, 3]).unwrap();
    /// assert_eq!(summary.count, 5);
    /// assert_eq!(summary.median, 3.0);
    /// assert_eq!(summary.midrange, 3.0);
    /// ```
    pub fn new<T>(sample: &[T]) -> Result<Self>
    where
        T: ToPrimitive + Display,
    {
        let mut values = validate_ordered(sample)?;
        // Summed in input order, so it matches `mean` bit for bit
        let mean = mean_of(&values);
        values.sort_by(f64::total_cmp);

        let (min, max) = (values[0], values[values.len() - 1]);

        Ok(Self {
            count: values.len(),
            min,
            max,
            mean,
            median: median_of_sorted(&values),
            midrange: (max + min) / 2.,
        })
    }
}
