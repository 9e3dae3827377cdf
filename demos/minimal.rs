//! A basic example showing minimal usage
//!
//! We compute every statistic on a small typed dataset, then all of them at once with [`Summary`]

use central_tendency::{mean, median, midrange, Summary};

/// Some sample data to summarize
///
/// Note that the exact median is 44.5
const DATA: [f32; 15] = [
    18.6, 83.1, 21.5, 21.4, 63.4, 64.1, 4.6, 92.7, 31.1, 94.8, 2.4, 44.5, 70.0, 17.1, 61.0,
];

fn main() -> central_tendency::Result<()> {
    println!("Mean: {}", mean(&DATA)?);
    println!("Median: {}", median(&DATA)?);
    println!("Midrange: {}", midrange(&DATA)?);

    // Validates once instead of three times
    let summary = Summary::new(&DATA)?;
    println!("{summary:#?}");

    Ok(())
}
