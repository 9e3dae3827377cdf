//! An example reading samples from text, where not every element is guaranteed to be a number

use central_tendency::{mean, parse_sample, StatsError};

/// Lines as they might come out of a hand-edited file
const LINES: [&str; 4] = ["1, 2, 3, 4, 5", "1 2.5 3", "Naif, Yash, 5", ""];

fn main() {
    for line in LINES {
        let sample = parse_sample(line);

        match mean(&sample) {
            Ok(m) => println!("{line:?}: mean is {m}"),
            Err(StatsError::EmptyInput) => println!("{line:?}: nothing to average"),
            Err(e @ StatsError::NonNumericElement(_)) => println!("{line:?}: {e}"),
        }
    }
}
