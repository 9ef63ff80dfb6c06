//! `now` and `timestamp` reports

use crate::{Clock, ClockError, Result, Zone};
use chrono::DateTime;
use std::fmt;

/// Parse an epoch-seconds argument
pub fn parse_epoch(text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|_| ClockError::InvalidTimestamp(text.to_string()))
}

/// Current time in a zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowReport {
    pub zoned: String,
    pub epoch: i64,
}

impl NowReport {
    pub fn capture(clock: &dyn Clock, zone: &Zone) -> Self {
        let now = clock.now();
        Self {
            zoned: zone.format(now),
            epoch: now.timestamp(),
        }
    }
}

impl fmt::Display for NowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Time: {}", self.zoned)?;
        write!(f, "Timestamp   : {}", self.epoch)
    }
}

/// An epoch timestamp decoded into a zone and into UTC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampReport {
    pub epoch: i64,
    pub zoned: String,
    pub utc: String,
}

impl TimestampReport {
    pub fn decode(epoch: i64, zone: &Zone) -> Result<Self> {
        let instant = DateTime::from_timestamp(epoch, 0).ok_or(ClockError::OutOfRange(epoch))?;

        Ok(Self {
            epoch,
            zoned: zone.format(instant),
            utc: Zone::Utc.format(instant),
        })
    }
}

impl fmt::Display for TimestampReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timestamp: {}", self.epoch)?;
        writeln!(f, "Formatted: {}", self.zoned)?;
        write!(f, "UTC Time : {}", self.utc)
    }
}
