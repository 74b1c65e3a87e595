use crate::core::journal::Journal;
use crate::core::store::WriteOffStore;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CapacityOutcome {
    /// The user's own check-ins already fill the day; all pending work dropped.
    QuotaReached { discarded_hours: u32 },
    /// Scheduled work fits in the remaining capacity.
    WithinCapacity,
    /// Pending records were removed. `remaining_overflow > 0` means the
    /// pending set ran out before the target was reached.
    Trimmed {
        removed_hours: u32,
        remaining_overflow: i64,
    },
}

/// Trim pending work so that check-ins plus scheduled hours fit `capacity`.
///
/// Records are removed whole, smallest first; among equal sizes the most
/// recently scheduled goes first.
pub fn enforce_capacity(
    store: &mut WriteOffStore,
    capacity: u32,
    journal: &mut dyn Journal,
) -> CapacityOutcome {
    let checkined = store.checkined_time();
    let scheduled = store.scheduled_time();

    journal.record(
        "capacity",
        "",
        &format!("User wrote off {checkined} hour(s), scheduled {scheduled}, capacity is {capacity}"),
    );

    if checkined >= capacity {
        store.remove_where(|r| r.is_pending());
        journal.record(
            "capacity_reached",
            "",
            &format!("User already reached the day limit, dropped {scheduled} scheduled hour(s)"),
        );
        return CapacityOutcome::QuotaReached {
            discarded_hours: scheduled,
        };
    }

    let overflow = i64::from(checkined) + i64::from(scheduled) - i64::from(capacity);
    if overflow <= 0 {
        return CapacityOutcome::WithinCapacity;
    }

    let mut candidates: Vec<usize> = store
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_pending())
        .map(|(i, _)| i)
        .collect();

    let records = store.records();
    // stable sort: insertion order breaks the remaining ties
    candidates.sort_by(|&a, &b| {
        let (ra, rb) = (&records[a], &records[b]);
        match ra.hours.cmp(&rb.hours) {
            Ordering::Equal => rb.time.cmp(&ra.time),
            other => other,
        }
    });

    let mut removed_hours: u32 = 0;
    let mut to_remove = Vec::new();

    for idx in candidates {
        if i64::from(removed_hours) >= overflow {
            break;
        }
        let r = &records[idx];
        removed_hours += r.hours;
        to_remove.push(idx);

        journal.record(
            "capacity_trim",
            &r.task_id.to_string(),
            &format!("Deleted scheduled {} hour(s) from {}", r.hours, r.time_str()),
        );
    }

    store.remove_indices(&to_remove);

    let remaining_overflow = (overflow - i64::from(removed_hours)).max(0);
    if remaining_overflow > 0 {
        journal.record(
            "capacity_exhausted",
            "",
            &format!("Pending work exhausted, {remaining_overflow} hour(s) still over capacity"),
        );
    }

    CapacityOutcome::Trimmed {
        removed_hours,
        remaining_overflow,
    }
}
