//! # Daily Report Types
//!
//! The same-day sales summary and the day boundary it is scoped to.
//!
//! ## Day Boundary
//! ```text
//! server clock (local)      2026-10-16 15:30 +07:00
//!        │
//!        ▼
//! local midnight            2026-10-16 00:00 +07:00
//!        │
//!        ▼
//! stored comparison (UTC)   2026-10-15 17:00 UTC   ← created_at >= this
//! ```

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Best-selling product of the reporting window.
///
/// `Default` is the empty marker used when nothing was sold: `{"", 0}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub quantity_sold: i64,
}

/// Aggregate view of one calendar day's sales. Derived, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    pub total_revenue: i64,
    pub total_transactions: i64,
    pub top_product: TopProduct,
}

impl DailyReport {
    /// True when no transaction fell inside the window.
    pub fn is_empty(&self) -> bool {
        self.total_transactions == 0
    }
}

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Returns the first instant of `now`'s calendar day in its own time zone,
/// expressed in UTC.
///
/// When a DST jump skips local midnight, the day starts at the first local
/// minute that exists (01:00 for a one-hour gap at midnight).
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);

    // Offset transitions fall on whole minutes
    (0..MINUTES_PER_DAY)
        .map(|m| midnight + Duration::minutes(m))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map_or_else(|| now.with_timezone(&Utc), |start| start.with_timezone(&Utc))
}
