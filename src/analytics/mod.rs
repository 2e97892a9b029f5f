//! Fire-and-forget analytics events.
//!
//! Delivery is best effort: callers discard whatever `send` returns.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Profitability;

pub const RIDE_CATEGORY: &str = "Ride";
pub const RIDE_ANALYZED_ACTION: &str = "Analyzed_Ride";
pub const APP_CATEGORY: &str = "App";
pub const SESSION_OPENED_ACTION: &str = "Session_Opened";

/// Operation name used for analytics rows in the internal log.
pub const LOG_OPERATION: &str = "analytics";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    /// Event emitted after a ride has been analyzed and stored.
    pub fn ride_analyzed(profitability: Profitability) -> Self {
        Self {
            category: RIDE_CATEGORY.to_string(),
            action: RIDE_ANALYZED_ACTION.to_string(),
            label: format!("Profitability: {}", profitability),
        }
    }

    /// Emitted once per run that loads the ride state.
    pub fn session_opened() -> Self {
        Self {
            category: APP_CATEGORY.to_string(),
            action: SESSION_OPENED_ACTION.to_string(),
            label: format!("tavalendo {}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// `category/action`, used as the log target.
    pub fn target(&self) -> String {
        format!("{}/{}", self.category, self.action)
    }
}

pub trait AnalyticsSink {
    fn send(&self, event: &AnalyticsEvent) -> AppResult<()>;
}

/// Drops every event. Used when analytics are disabled in the config.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn send(&self, _event: &AnalyticsEvent) -> AppResult<()> {
        Ok(())
    }
}

/// Appends events to the internal `log` table (shown by `log --print`).
pub struct DbLogSink {
    pool: DbPool,
}

impl DbLogSink {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl AnalyticsSink for DbLogSink {
    fn send(&self, event: &AnalyticsEvent) -> AppResult<()> {
        ttlog(&self.pool.conn, LOG_OPERATION, &event.target(), &event.label)
            .map_err(|e| AppError::Analytics(e.to_string()))
    }
}

impl<T: AnalyticsSink + ?Sized> AnalyticsSink for Box<T> {
    fn send(&self, event: &AnalyticsEvent) -> AppResult<()> {
        (**self).send(event)
    }
}
