mod common;
use common::{FakeBackend, at, day, on, options};
use rwriteoff::core::journal::MemoryJournal;
use rwriteoff::core::picker::TaskPicker;
use rwriteoff::core::store::WriteOffStore;
use rwriteoff::core::workday::WorkdayLogic;
use rwriteoff::models::day_state::DayState;
use rwriteoff::models::strategy::WriteOffStrategy;
use rwriteoff::models::write_off::{WriteOff, WriteOffKind};

#[test]
fn test_first_logon_commits_backlog_and_starts_the_day() {
    let yesterday = day().pred_opt().unwrap();
    let backend = FakeBackend::new(6, at(8, 1)).with_tasks(&[1]);
    let mut store = WriteOffStore::from_records(vec![
        WriteOff::user_checkin(2, 3, on(yesterday, 11, 0)),
        WriteOff::scheduled(1, 2, on(yesterday, 17, 0)),
    ])
    .unwrap();
    let mut day_state = DayState {
        begin: Some(on(yesterday, 9, 0)),
        capacity: Some(8),
        current_task: Some(1),
    };
    let mut journal = MemoryJournal::new();

    let report =
        WorkdayLogic::start_day(&backend, &mut store, &mut day_state, &options(at(8, 0)), &mut journal)
            .unwrap();

    assert!(report.new_day);
    assert!(report.backlog.is_some());
    assert_eq!(backend.written(), vec![(1, 2, true)]);
    assert_eq!(report.capacity, 6);
    assert_eq!(day_state.capacity, Some(6));
    assert_eq!(day_state.begin, Some(at(8, 0)));
    assert!(journal.has("day_start"));

    // only the backlog commit is left, with tool provenance
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].kind().unwrap(), WriteOffKind::Committed);
}

#[test]
fn test_capacity_failure_on_first_logon_writes_nothing() {
    let yesterday = day().pred_opt().unwrap();
    let backend = FakeBackend::new(6, at(8, 1)).with_tasks(&[1]);
    backend.fail_capacity.set(true);
    let persisted = WriteOffStore::from_records(vec![WriteOff::scheduled(1, 2, on(yesterday, 17, 0))])
        .unwrap();

    // the host reloads the same persisted state after every failed run
    for _ in 0..2 {
        let mut store = persisted.clone();
        let mut day_state = DayState {
            begin: Some(on(yesterday, 9, 0)),
            capacity: None,
            current_task: Some(1),
        };

        let result = WorkdayLogic::start_day(
            &backend,
            &mut store,
            &mut day_state,
            &options(at(8, 0)),
            &mut MemoryJournal::new(),
        );

        assert!(result.is_err());
        assert_eq!(store, persisted);
    }

    assert!(backend.written().is_empty());
}

#[test]
fn test_second_logon_keeps_the_day() {
    let backend = FakeBackend::new(6, at(13, 0));
    let mut store = WriteOffStore::new();
    let mut day_state = DayState {
        begin: Some(at(8, 0)),
        capacity: Some(8),
        current_task: None,
    };
    let mut journal = MemoryJournal::new();

    let report =
        WorkdayLogic::start_day(&backend, &mut store, &mut day_state, &options(at(13, 0)), &mut journal)
            .unwrap();

    assert!(!report.new_day);
    assert_eq!(report.capacity, 8);
    assert_eq!(day_state.begin, Some(at(8, 0)));
    assert!(!journal.has("day_start"));
}

#[test]
fn test_schedule_commits_right_away() {
    let backend = FakeBackend::new(8, at(10, 0)).with_tasks(&[1]);
    let mut store = WriteOffStore::new();
    let day_state = DayState {
        begin: Some(at(8, 0)),
        capacity: Some(8),
        current_task: Some(1),
    };
    let mut journal = MemoryJournal::new();

    let report = WorkdayLogic::schedule(
        &backend,
        &mut store,
        &day_state,
        1,
        1,
        &options(at(10, 0)),
        &mut journal,
    )
    .unwrap();

    assert_eq!(report.commit.written_hours(), 1);
    assert!(journal.has("schedule"));
    assert_eq!(store.checkined_time(), 1);
}

#[test]
fn test_schedule_rejects_zero_hours() {
    let backend = FakeBackend::new(8, at(10, 0)).with_tasks(&[1]);
    let mut store = WriteOffStore::new();

    let result = WorkdayLogic::schedule(
        &backend,
        &mut store,
        &DayState::default(),
        1,
        0,
        &options(at(10, 0)),
        &mut MemoryJournal::new(),
    );

    assert!(result.is_err());
    assert!(store.is_empty());
}

#[test]
fn test_logoff_before_the_day_is_over_does_nothing() {
    let backend = FakeBackend::new(8, at(12, 0)).with_tasks(&[1]);
    let mut store = WriteOffStore::new();
    let mut day_state = DayState {
        begin: Some(at(9, 0)),
        capacity: Some(8),
        current_task: Some(1),
    };
    let picker = TaskPicker::new(&backend, WriteOffStrategy::Watch);
    let mut journal = MemoryJournal::new();

    let report = WorkdayLogic::end_day(
        &backend,
        &mut store,
        &mut day_state,
        &options(at(12, 0)),
        &mut journal,
        &picker,
    )
    .unwrap();

    assert!(!report.closed);
    assert!(journal.has("day_end_skipped"));
    assert!(backend.written().is_empty());
}

#[test]
fn test_logoff_after_a_full_day_fills_the_plan() {
    let backend = FakeBackend::new(8, at(17, 30)).with_tasks(&[1]);
    backend.add_checkin(1, 5, at(12, 0));
    let mut store = WriteOffStore::new();
    let mut day_state = DayState {
        begin: Some(at(9, 0)),
        capacity: Some(8),
        current_task: Some(1),
    };
    let picker = TaskPicker::new(&backend, WriteOffStrategy::Watch);

    let report = WorkdayLogic::end_day(
        &backend,
        &mut store,
        &mut day_state,
        &options(at(17, 30)),
        &mut MemoryJournal::new(),
        &picker,
    )
    .unwrap();

    assert!(report.closed);
    assert_eq!(report.cycle.unwrap().planned, Some((1, 3)));
    assert_eq!(backend.written(), vec![(1, 3, true)]);
    assert_eq!(store.checkined_time(), 8);
}

#[test]
fn test_logoff_when_hours_are_accounted_commits_without_planning() {
    let backend = FakeBackend::new(4, at(13, 0)).with_tasks(&[1]);
    let mut store = WriteOffStore::new();
    store.schedule_work(1, 4, at(12, 0)).unwrap();
    let mut day_state = DayState {
        begin: Some(at(11, 0)),
        capacity: Some(4),
        current_task: None,
    };
    let picker = TaskPicker::new(&backend, WriteOffStrategy::Watch);

    let report = WorkdayLogic::end_day(
        &backend,
        &mut store,
        &mut day_state,
        &options(at(13, 0)),
        &mut MemoryJournal::new(),
        &picker,
    )
    .unwrap();

    assert!(report.closed);
    assert_eq!(report.cycle.unwrap().planned, None);
    assert_eq!(backend.written(), vec![(1, 4, true)]);
}

#[test]
fn test_plan_records_picker_errors() {
    let backend = FakeBackend::new(8, at(18, 0)).with_tasks(&[1]);
    let mut store = WriteOffStore::new();
    let mut day_state = DayState::default();
    // explicit task the tracker does not know
    let picker = TaskPicker::new(&backend, WriteOffStrategy::Watch).with_explicit(Some(42));
    let mut journal = MemoryJournal::new();

    let report = WorkdayLogic::plan(
        &backend,
        &mut store,
        &mut day_state,
        8,
        &options(at(18, 0)),
        &mut journal,
        &picker,
    )
    .unwrap();

    assert_eq!(report.planned, None);
    assert!(journal.has("pick_failed"));
    assert!(journal.has("plan_skipped"));
}
