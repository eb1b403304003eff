use serde::{Deserialize, Serialize};

/// A named point in time recorded while timing something.
///
/// Laps are only markers for tracing, they never affect the total time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    #[serde(rename = "lap_name")]
    pub name: String,
    #[serde(rename = "lap_time_stamp")]
    pub timestamp: f64,
}

impl Lap {
    pub fn new(name: impl Into<String>, timestamp: f64) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }
}

/// Plain view of a [`StopWatch`](super::StopWatch), mostly useful for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopWatchRecord {
    pub start_time: f64,
    pub stop_time: Option<f64>,
    pub laps: Vec<Lap>,
    pub total_time: Option<f64>,
}
