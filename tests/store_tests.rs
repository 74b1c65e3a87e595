mod common;
use common::{at, day, on};
use rwriteoff::core::store::{WriteOffStore, checkined_time, pending, scheduled_time};
use rwriteoff::errors::AppError;
use rwriteoff::models::write_off::{WriteOff, WriteOffKind};

fn sample() -> Vec<WriteOff> {
    vec![
        WriteOff::scheduled(1, 2, at(9, 0)),
        WriteOff::user_checkin(2, 3, at(10, 0)),
        WriteOff::scheduled(1, 1, at(11, 0)),
        WriteOff::committed(3, 4, at(12, 0), false),
    ]
}

#[test]
fn test_aggregates_follow_classification() {
    let records = sample();
    assert_eq!(scheduled_time(&records), 3);
    assert_eq!(checkined_time(&records), 3);

    let p = pending(&records);
    assert_eq!(p.len(), 2);
    assert!(p.iter().all(|r| r.kind().unwrap() == WriteOffKind::Pending));

    let store = WriteOffStore::from_records(records).unwrap();
    assert_eq!(store.scheduled_time(), 3);
    assert_eq!(store.checkined_time(), 3);
}

#[test]
fn test_user_created_unrecorded_record_is_rejected() {
    let bad = WriteOff {
        task_id: 7,
        hours: 1,
        time: at(9, 0),
        recorded: false,
        created_by_user: true,
    };

    assert!(matches!(bad.kind(), Err(AppError::InvalidRecord(_))));

    let mut store = WriteOffStore::new();
    assert!(store.push(bad.clone()).is_err());
    assert!(store.is_empty());
    assert!(WriteOffStore::from_records(vec![bad]).is_err());
}

#[test]
fn test_zero_hours_are_rejected() {
    let mut store = WriteOffStore::new();
    assert!(store.schedule_work(1, 0, at(9, 0)).is_err());
    assert!(store.is_empty());
}

#[test]
fn test_clear_stale_keeps_today_and_pending_backlog() {
    let yesterday = day().pred_opt().unwrap();
    let mut store = WriteOffStore::from_records(vec![
        WriteOff::user_checkin(1, 2, on(yesterday, 15, 0)),
        WriteOff::committed(2, 1, on(yesterday, 16, 0), false),
        WriteOff::scheduled(3, 2, on(yesterday, 17, 0)),
        WriteOff::user_checkin(4, 1, at(9, 0)),
    ])
    .unwrap();

    let removed = store.clear_stale(day());

    assert_eq!(removed, 2);
    let tasks: Vec<_> = store.iter().map(|r| r.task_id).collect();
    assert_eq!(tasks, vec![3, 4]);
}

#[test]
fn test_remove_where_and_contains_checkin() {
    let mut store = WriteOffStore::from_records(sample()).unwrap();

    assert!(store.contains_checkin(2, &at(10, 0)));
    assert!(!store.contains_checkin(2, &at(10, 1)));

    assert_eq!(store.remove_where(|r| r.task_id == 1), 2);
    assert_eq!(store.len(), 2);
    assert_eq!(store.scheduled_time(), 0);
}
