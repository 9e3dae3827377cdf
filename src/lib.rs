#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod error;
mod sample;
mod summary;
mod tendency;
mod value;

pub use error::{Result, StatsError};
pub use sample::{validate, validate_ordered};
pub use summary::Summary;
pub use tendency::{mean, median, midrange};
pub use value::{parse_sample, Value};
