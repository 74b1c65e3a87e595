use crate::backend::Backend;
use crate::core::journal::Journal;
use crate::core::store::WriteOffStore;
use crate::errors::AppResult;
use crate::models::write_off::WriteOff;
use crate::utils::date;
use chrono::{DateTime, Local};

/// Fold today's confirmed check-ins into the store.
///
/// Returns the number of new records. A tracker failure is returned before
/// the store is touched.
pub fn sync_checkins(
    backend: &dyn Backend,
    store: &mut WriteOffStore,
    now: DateTime<Local>,
    journal: &mut dyn Journal,
) -> AppResult<usize> {
    let from = date::start_of_day(now)?;
    let checkins = backend.confirmed_checkins(from, now)?;

    journal.record(
        "sync",
        "",
        &format!("Found {} check-in(s) since {}", checkins.len(), from),
    );

    let mut added = 0;

    for c in checkins {
        if store.contains_checkin(c.task_id, &c.changed_at) {
            continue;
        }

        if c.hours == 0 {
            journal.record(
                "sync_skip",
                &c.task_id.to_string(),
                "Tracker reported a check-in without hours",
            );
            continue;
        }

        store.push(WriteOff::user_checkin(c.task_id, c.hours, c.changed_at))?;
        added += 1;

        journal.record(
            "sync_checkin",
            &c.task_id.to_string(),
            &format!(
                "Detected new check-in: {} hour(s) at {}",
                c.hours,
                date::display_datetime(&c.changed_at)
            ),
        );
    }

    Ok(added)
}
