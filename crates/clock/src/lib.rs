//! Timezone-aware timestamp formatting for gtool
//!
//! Converts between epoch seconds and human readable times in a resolved
//! [`Zone`].
//!
//! # Examples
//!
//! ```
//! use gtool_clock::{TimestampReport, Zone};
//!
//! let zone: Zone = "UTC".parse().unwrap();
//! let report = TimestampReport::decode(0, &zone).unwrap();
//! assert_eq!(report.zoned, "1970-01-01 00:00:00 UTC");
//! ```

mod report;
mod zone;

pub use report::{parse_epoch, NowReport, TimestampReport};
pub use zone::Zone;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while resolving zones or decoding timestamps
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("invalid timezone {0}")]
    UnknownZone(String),

    #[error("invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    #[error("timestamp {0} is out of the representable range")]
    OutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, ClockError>;

/// Source of the current instant
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
