//! Timezone specifier resolution

use crate::ClockError;
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Date and time part of the display layout; the zone column follows it
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A resolved timezone
///
/// Parsed from `Local`, `UTC` (or an empty string) or an IANA name such as
/// `Asia/Shanghai`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Utc,
    Named(Tz),
}

impl FromStr for Zone {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Local" => Ok(Zone::Local),
            "" | "UTC" => Ok(Zone::Utc),
            name => name
                .parse::<Tz>()
                .map(Zone::Named)
                .map_err(|_| ClockError::UnknownZone(name.to_string())),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "Local"),
            Zone::Utc => write!(f, "UTC"),
            Zone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

impl Zone {
    /// The instant with this zone's offset applied
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::Local => match local_tz() {
                Some(tz) => instant.with_timezone(&tz).fixed_offset(),
                None => instant.with_timezone(&Local).fixed_offset(),
            },
            Zone::Utc => instant.fixed_offset(),
            Zone::Named(tz) => instant.with_timezone(tz).fixed_offset(),
        }
    }

    /// Zone column shown next to a localized time
    ///
    /// The IANA abbreviation (`JST`, `EST`), `UTC` for UTC. The local zone
    /// falls back to its numeric offset when the host zone has no IANA name.
    pub fn abbreviation(&self, instant: DateTime<Utc>) -> String {
        match self {
            Zone::Local => match local_tz() {
                Some(tz) => instant.with_timezone(&tz).format("%Z").to_string(),
                None => self.localize(instant).format("%:z").to_string(),
            },
            Zone::Utc => "UTC".to_string(),
            Zone::Named(tz) => instant.with_timezone(tz).format("%Z").to_string(),
        }
    }

    /// Render the instant as `YYYY-MM-DD HH:MM:SS ZONE`
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        format!(
            "{} {}",
            self.localize(instant).format(DATE_TIME_FORMAT),
            self.abbreviation(instant)
        )
    }
}

/// IANA zone of the host
fn local_tz() -> Option<Tz> {
    local_tz_from(env::var("TZ").ok(), || iana_time_zone::get_timezone().ok())
}

/// `TZ` wins when set; the system setting is only consulted without it.
/// A `TZ` that is not an IANA name (e.g. `CST-8`) resolves to nothing.
fn local_tz_from(tz_env: Option<String>, system: impl FnOnce() -> Option<String>) -> Option<Tz> {
    match tz_env.as_deref() {
        Some(spec) if !spec.is_empty() => spec.trim_start_matches(':').parse().ok(),
        _ => system()?.parse().ok(),
    }
}
