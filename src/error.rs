//! Errors returned while computing a statistic

use thiserror::Error;

/// Reasons a statistic could not be computed for a sample
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The sample has no elements, so no statistic is defined
    #[error("Empty sample: at least one element is required")]
    EmptyInput,

    /// An element could not take part in numeric arithmetic or ordering
    ///
    /// Holds the textual form of the first offending element, in input order.
    #[error("Non-numeric: {0}")]
    NonNumericElement(String),
}

/// Shorthand for results carrying a [`StatsError`]
pub type Result<T> = std::result::Result<T, StatsError>;
