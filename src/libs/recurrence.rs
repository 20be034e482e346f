//! One-shot recurrence expansion.
//!
//! A task created or updated with a repeat flag is expanded once, at that
//! moment, into a fixed batch of future siblings. Siblings are independent
//! records: editing the base later never revisits them, it only appends a
//! fresh batch.

use crate::libs::task::{Repeat, Task};
use crate::msg_debug;
use chrono::{Duration, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Number of future copies produced by the daily flag.
const DAILY_COPIES: i64 = 5;
/// Number of future copies produced by the weekly flag.
const WEEKLY_COPIES: i64 = 4;

/// Synthesizes the sibling records for `base` according to the repeat
/// flags, assigning ids contiguously starting at `start_id`.
///
/// The base task itself is implicitly "Day 1" / "Week 1"; the first daily
/// sibling is titled "(Day 2)". When the combined due date and time of the
/// base cannot be parsed the expansion is skipped entirely and an empty
/// batch is returned — the caller still keeps the base task.
pub fn expand(base: &Task, daily: bool, weekly: bool, start_id: i64) -> Vec<Task> {
    let combined = format!("{} {}", base.due_date, base.due_time);
    let base_dt = match NaiveDateTime::parse_from_str(&combined, DATETIME_FORMAT) {
        Ok(dt) => dt,
        Err(_) => {
            msg_debug!(format!("Recurrence skipped: unparseable date-time '{}'", combined));
            return Vec::new();
        }
    };

    let mut siblings = Vec::new();
    let mut next_id = start_id;

    if daily {
        for i in 1..=DAILY_COPIES {
            let future_dt = base_dt + Duration::days(i);
            siblings.push(
                Task::new(
                    next_id,
                    &format!("{} (Day {})", base.title, i + 1),
                    &future_dt.date().format(DATE_FORMAT).to_string(),
                    &future_dt.time().format(TIME_FORMAT).to_string(),
                    &base.image,
                )
                .with_repeat(Repeat::Daily),
            );
            next_id += 1;
        }
    }

    if weekly {
        for i in 1..=WEEKLY_COPIES {
            let future_dt = base_dt + Duration::weeks(i);
            siblings.push(
                Task::new(
                    next_id,
                    &format!("{} (Week {})", base.title, i + 1),
                    &future_dt.date().format(DATE_FORMAT).to_string(),
                    &future_dt.time().format(TIME_FORMAT).to_string(),
                    &base.image,
                )
                .with_repeat(Repeat::Weekly),
            );
            next_id += 1;
        }
    }

    siblings
}
