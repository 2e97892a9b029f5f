//! Ride identifiers and the generators that hand them out.

use crate::errors::AppError;
use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stored ride: creation instant (millisecond precision)
/// plus a sequence number that disambiguates rides created in the same
/// millisecond.
///
/// Textual form: `2025-10-16T12:00:00.123Z-0001`.
/// Ordering follows `(created_at, seq)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RideId {
    created_at: DateTime<Utc>,
    seq: u32,
}

impl RideId {
    pub fn new(created_at: DateTime<Utc>, seq: u32) -> Self {
        Self {
            created_at: created_at.trunc_subsecs(3),
            seq,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn seq(&self) -> u32 {
        self.seq
    }
}

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:04}",
            self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.seq
        )
    }
}

impl FromStr for RideId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (ts, seq) = s
            .rsplit_once('-')
            .ok_or_else(|| AppError::InvalidRideId(s.to_string()))?;

        // the last '-' must come after the timestamp's 'Z'
        if !ts.ends_with('Z') {
            return Err(AppError::InvalidRideId(s.to_string()));
        }

        let created_at = DateTime::parse_from_rfc3339(ts)
            .map_err(|_| AppError::InvalidRideId(s.to_string()))?
            .with_timezone(&Utc);
        let seq = seq
            .parse::<u32>()
            .map_err(|_| AppError::InvalidRideId(s.to_string()))?;

        Ok(RideId::new(created_at, seq))
    }
}

impl TryFrom<String> for RideId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RideId> for String {
    fn from(id: RideId) -> Self {
        id.to_string()
    }
}

/// Source of fresh ride identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> RideId;
}

/// Wall-clock generator. Strictly monotonic: when the clock reads an
/// instant that is not after the last issued id, the last instant is
/// reused with the next sequence number.
pub struct ClockIdGenerator {
    clock: Box<dyn FnMut() -> DateTime<Utc>>,
    last: Option<RideId>,
}

impl ClockIdGenerator {
    /// Generator reading `Utc::now()`, seeded with the newest stored id.
    pub fn seeded(last: Option<RideId>) -> Self {
        Self::with_clock(last, Utc::now)
    }

    pub fn with_clock<F>(last: Option<RideId>, clock: F) -> Self
    where
        F: FnMut() -> DateTime<Utc> + 'static,
    {
        Self {
            clock: Box::new(clock),
            last,
        }
    }
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&mut self) -> RideId {
        let now = (self.clock)().trunc_subsecs(3);

        let id = match self.last {
            Some(last) if now <= last.created_at => {
                RideId::new(last.created_at, last.seq.saturating_add(1))
            }
            _ => RideId::new(now, 0),
        };

        self.last = Some(id);
        id
    }
}

/// Deterministic generator: starts at `start` and advances by `step` on
/// every call. Used by tests and by anything that needs reproducible ids.
pub struct SequentialIdGenerator {
    next: DateTime<Utc>,
    step: Duration,
}

impl SequentialIdGenerator {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self { next: start, step }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> RideId {
        let id = RideId::new(self.next, 0);
        self.next += self.step;
        id
    }
}
