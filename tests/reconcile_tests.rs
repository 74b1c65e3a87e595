mod common;
use common::{FakeBackend, at, options, task};
use rwriteoff::core::capacity::CapacityOutcome;
use rwriteoff::core::journal::MemoryJournal;
use rwriteoff::core::reconcile::ReconcileLogic;
use rwriteoff::core::store::WriteOffStore;
use rwriteoff::models::write_off::{WriteOff, WriteOffKind};

#[test]
fn test_scheduled_work_is_trimmed_merged_and_committed() {
    // 4h at 09:00 and 5h at 10:00 on task 100, capacity 7
    let backend = FakeBackend::new(7, at(10, 5)).with_tasks(&[100]);
    let mut store = WriteOffStore::new();
    store.schedule_work(100, 4, at(9, 0)).unwrap();
    store.schedule_work(100, 5, at(10, 0)).unwrap();
    let mut journal = MemoryJournal::new();

    let report = ReconcileLogic::checkin_scheduled_work(
        &backend,
        &mut store,
        7,
        &options(at(10, 5)),
        &mut journal,
    )
    .unwrap();

    assert_eq!(
        report.capacity,
        CapacityOutcome::Trimmed {
            removed_hours: 4,
            remaining_overflow: 0
        }
    );
    assert_eq!(backend.written(), vec![(100, 5, true)]);

    assert_eq!(store.len(), 1);
    let r = &store.records()[0];
    assert_eq!(r.task_id, 100);
    assert_eq!(r.hours, 5);
    assert!(r.recorded);
}

#[test]
fn test_failed_sync_aborts_the_cycle() {
    let backend = FakeBackend::new(7, at(10, 5)).with_tasks(&[1]);
    backend.fail_sync.set(true);
    let mut store = WriteOffStore::new();
    store.schedule_work(1, 9, at(9, 0)).unwrap();
    let before = store.clone();

    let result = ReconcileLogic::checkin_scheduled_work(
        &backend,
        &mut store,
        7,
        &options(at(10, 5)),
        &mut MemoryJournal::new(),
    );

    assert!(result.is_err());
    assert_eq!(store, before);
    assert!(backend.written().is_empty());
}

#[test]
fn test_user_checkins_count_against_capacity() {
    let backend = FakeBackend::new(8, at(15, 0)).with_tasks(&[1, 2]);
    backend.add_checkin(2, 6, at(11, 0));
    let mut store = WriteOffStore::new();
    store.schedule_work(1, 3, at(14, 0)).unwrap();

    let report = ReconcileLogic::checkin_scheduled_work(
        &backend,
        &mut store,
        8,
        &options(at(15, 0)),
        &mut MemoryJournal::new(),
    )
    .unwrap();

    assert_eq!(report.synced, 1);
    // only the 3h record is pending: it goes whole
    assert!(backend.written().is_empty());
    assert_eq!(store.scheduled_time(), 0);
    assert_eq!(store.checkined_time(), 6);
}

#[test]
fn test_daily_plan_charges_the_remainder() {
    let backend = FakeBackend::new(8, at(17, 0)).with_tasks(&[1, 2]);
    backend.add_checkin(1, 3, at(10, 0));
    let mut store = WriteOffStore::new();
    store.schedule_work(1, 2, at(16, 0)).unwrap();

    let report = ReconcileLogic::sync_daily_plan(
        &backend,
        &mut store,
        8,
        &options(at(17, 0)),
        &mut MemoryJournal::new(),
        || Some(task(2)),
    )
    .unwrap();

    assert_eq!(report.planned, Some((2, 3)));
    let mut written = backend.written();
    written.sort();
    assert_eq!(written, vec![(1, 2, true), (2, 3, true)]);
    assert_eq!(store.checkined_time(), 8);
    assert_eq!(store.scheduled_time(), 0);
}

#[test]
fn test_daily_plan_without_task_leaves_hours_unaccounted() {
    let backend = FakeBackend::new(8, at(17, 0)).with_tasks(&[1]);
    let mut store = WriteOffStore::new();
    store.schedule_work(1, 2, at(16, 0)).unwrap();
    let mut journal = MemoryJournal::new();

    let report = ReconcileLogic::sync_daily_plan(
        &backend,
        &mut store,
        8,
        &options(at(17, 0)),
        &mut journal,
        || None,
    )
    .unwrap();

    assert_eq!(report.planned, None);
    assert!(journal.has("plan_skipped"));
    assert_eq!(backend.written(), vec![(1, 2, true)]);
    assert_eq!(store.checkined_time(), 2);
}

#[test]
fn test_daily_plan_does_not_ask_when_day_is_full() {
    let backend = FakeBackend::new(4, at(17, 0)).with_tasks(&[1]);
    backend.add_checkin(1, 4, at(10, 0));
    let mut store = WriteOffStore::new();
    let mut asked = false;

    ReconcileLogic::sync_daily_plan(
        &backend,
        &mut store,
        4,
        &options(at(17, 0)),
        &mut MemoryJournal::new(),
        || {
            asked = true;
            None
        },
    )
    .unwrap();

    assert!(!asked);
    assert!(
        store
            .iter()
            .all(|r| r.kind().unwrap() == WriteOffKind::UserConfirmed)
    );
}

#[test]
fn test_set_active_flag_is_forwarded() {
    let backend = FakeBackend::new(8, at(10, 0)).with_tasks(&[1]);
    let mut store = WriteOffStore::from_records(vec![WriteOff::scheduled(1, 1, at(9, 0))]).unwrap();

    ReconcileLogic::checkin_scheduled_work(
        &backend,
        &mut store,
        8,
        &options(at(10, 0)).with_set_active(false),
        &mut MemoryJournal::new(),
    )
    .unwrap();

    assert_eq!(backend.written(), vec![(1, 1, false)]);
}
