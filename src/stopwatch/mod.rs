//! A stopwatch with named laps.
//!
//! The watch starts when it is created and can be stopped once. Laps are named
//! points in time that can be recorded at any moment, even after stopping, and
//! are never part of the total.
//!
//! ```
//! use lapwatch::stopwatch::StopWatch;
//!
//! let mut watch = StopWatch::new();
//! watch.lap("loaded");
//! assert!(watch.stop());
//! assert!(watch.total().is_some());
//! ```

mod error;
mod record;

pub use self::error::{Result, StartTime, StartTimeError, TIME_LIMIT};
pub use self::record::{Lap, StopWatchRecord};

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::{debug, warn};

/// Name of the lap recorded when stopping an already stopped watch.
pub const ATTEMPTED_TO_STOP_AGAIN: &str = "attempted_to_stop_again";

/// Zero-argument function returning "now" as seconds.
pub type TimeSource = Box<dyn Fn() -> f64>;

/// Seconds since the UNIX epoch, the default time source.
#[must_use]
pub fn system_time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}

/// Keeps a clock reading encodable as a JSON number.
///
/// NaN becomes `fallback`, infinities and huge values are clamped to
/// [`TIME_LIMIT`] so that `stop - start` stays finite.
fn sanitize(reading: f64, fallback: f64) -> f64 {
    if reading.is_nan() {
        warn!(fallback, "time source returned NaN");
        return fallback;
    }

    let clamped = reading.clamp(-TIME_LIMIT, TIME_LIMIT);
    if clamped != reading {
        warn!(reading, clamped, "time source reading out of range");
    }

    clamped
}

pub struct StopWatch {
    start_time: f64,
    stop_time: Option<f64>,
    laps: Vec<Lap>,
    time_source: TimeSource,
}

impl Default for StopWatch {
    fn default() -> Self {
        Self::new()
    }
}

impl StopWatch {
    /// Starts a stopwatch using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_time_source(system_time)
    }

    /// Starts a stopwatch at the current time of `time_source`.
    pub fn with_time_source<F>(time_source: F) -> Self
    where
        F: Fn() -> f64 + 'static,
    {
        let start_time = sanitize(time_source(), 0.0);

        Self::build(start_time, Box::new(time_source))
    }

    /// Starts a stopwatch at `start_time`, the time source is not called.
    ///
    /// # Errors
    /// Returns [`StartTimeError::NotFinite`] for NaN and infinities and
    /// [`StartTimeError::OutOfRange`] beyond [`TIME_LIMIT`].
    pub fn with_start_time<F>(start_time: f64, time_source: F) -> Result<Self>
    where
        F: Fn() -> f64 + 'static,
    {
        let start_time = StartTime::try_from(start_time)?;

        Ok(Self::build(start_time.as_f64(), Box::new(time_source)))
    }

    /// Starts a stopwatch from an untyped start time.
    ///
    /// `None` behaves like [`StopWatch::with_time_source`]. Anything other than
    /// a float is rejected, including integers and booleans.
    ///
    /// # Errors
    /// Returns [`StartTimeError::NotAFloat`] if `start_time` is not a float.
    pub fn try_from_value<F>(start_time: Option<&Value>, time_source: F) -> Result<Self>
    where
        F: Fn() -> f64 + 'static,
    {
        match start_time {
            Some(value) => {
                let start_time = StartTime::try_from(value)?;
                Ok(Self::build(start_time.as_f64(), Box::new(time_source)))
            }
            None => Ok(Self::with_time_source(time_source)),
        }
    }

    fn build(start_time: f64, time_source: TimeSource) -> Self {
        debug!(start_time, "stopwatch started");

        Self {
            start_time,
            stop_time: None,
            laps: Vec::new(),
            time_source,
        }
    }

    fn now(&self) -> f64 {
        sanitize((self.time_source)(), self.start_time)
    }

    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    #[must_use]
    pub fn stop_time(&self) -> Option<f64> {
        self.stop_time
    }

    /// Laps in the order they were recorded.
    #[must_use]
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    #[must_use]
    pub fn stopped(&self) -> bool {
        self.stop_time.is_some()
    }

    #[must_use]
    pub fn running(&self) -> bool {
        !self.stopped()
    }

    /// Time between start and stop, `None` while the watch is running.
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        self.stop_time.map(|stop_time| stop_time - self.start_time)
    }

    /// Stops the watch if it is running.
    ///
    /// Stopping an already stopped watch is most likely a bug in the caller,
    /// so instead of failing it records an [`ATTEMPTED_TO_STOP_AGAIN`] lap and
    /// returns `false`. The stop time is never changed after the first stop.
    pub fn stop(&mut self) -> bool {
        if self.stopped() {
            let lap = self.lap(ATTEMPTED_TO_STOP_AGAIN);
            warn!(lap_time_stamp = lap.timestamp, "stopwatch already stopped");
            return false;
        }

        let stop_time = self.now();
        self.stop_time = Some(stop_time);

        debug!(stop_time, total = stop_time - self.start_time, "stopwatch stopped");

        true
    }

    /// Records the current time as a named lap and returns a copy of it.
    pub fn lap(&mut self, name: impl Into<String>) -> Lap {
        let lap = Lap::new(name, self.now());

        debug!(lap_name = %lap.name, lap_time_stamp = lap.timestamp, "lap");

        self.laps.push(lap.clone());
        lap
    }

    #[must_use]
    pub fn as_record(&self) -> StopWatchRecord {
        StopWatchRecord {
            start_time: self.start_time,
            stop_time: self.stop_time,
            laps: self.laps.clone(),
            total_time: self.total(),
        }
    }

    /// JSON encoding of [`StopWatch::as_record`], same as `to_string()`.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Indented JSON encoding of [`StopWatch::as_record`].
    ///
    /// # Errors
    /// Fails only if the encoder fails to write.
    pub fn to_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for StopWatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.as_record().serialize(serializer)
    }
}

impl fmt::Display for StopWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl fmt::Debug for StopWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopWatch")
            .field("start_time", &self.start_time)
            .field("stop_time", &self.stop_time)
            .field("laps", &self.laps)
            .finish_non_exhaustive()
    }
}
