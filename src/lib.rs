//! Stopwatch with named laps that serializes itself to JSON.
//!
//! The [`stopwatch`] module holds the library, [`cli`] is the `lapwatch`
//! binary that times shell steps with it.

pub mod cli;
pub mod stopwatch;

pub use stopwatch::{Lap, StartTimeError, StopWatch, StopWatchRecord};
