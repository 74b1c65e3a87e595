mod common;
use common::{FakeBackend, at};
use rwriteoff::core::picker::TaskPicker;
use rwriteoff::errors::AppError;
use rwriteoff::models::day_state::DayState;
use rwriteoff::models::strategy::WriteOffStrategy;
use rwriteoff::models::task::TaskState;

#[test]
fn test_explicit_task_wins_and_is_remembered() {
    let backend = FakeBackend::new(8, at(9, 0)).with_tasks(&[1, 2]);
    let mut day = DayState {
        current_task: Some(1),
        ..DayState::default()
    };

    let picked = TaskPicker::new(&backend, WriteOffStrategy::Watch)
        .with_explicit(Some(2))
        .pick(&mut day)
        .unwrap();

    assert_eq!(picked.map(|t| t.id), Some(2));
    assert_eq!(day.current_task, Some(2));
}

#[test]
fn test_remembered_task_is_reused() {
    let backend = FakeBackend::new(8, at(9, 0)).with_tasks(&[1, 2]);
    let mut day = DayState {
        current_task: Some(2),
        ..DayState::default()
    };

    let picked = TaskPicker::new(&backend, WriteOffStrategy::Random)
        .pick(&mut day)
        .unwrap();

    assert_eq!(picked.map(|t| t.id), Some(2));
}

#[test]
fn test_closed_remembered_task_falls_back_to_strategy() {
    let backend = FakeBackend::new(8, at(9, 0)).with_tasks(&[1]);
    backend.tasks.borrow_mut().get_mut(&1).unwrap().state = TaskState::Closed;
    let mut day = DayState {
        current_task: Some(1),
        ..DayState::default()
    };

    let picked = TaskPicker::new(&backend, WriteOffStrategy::Watch)
        .pick(&mut day)
        .unwrap();

    assert!(picked.is_none());
    assert_eq!(day.current_task, None);
}

#[test]
fn test_random_strategy_picks_an_open_task() {
    let backend = FakeBackend::new(8, at(9, 0)).with_tasks(&[3, 4, 5]);
    backend.tasks.borrow_mut().get_mut(&4).unwrap().state = TaskState::Closed;
    let mut day = DayState::default();

    for _ in 0..20 {
        day.current_task = None;
        let picked = TaskPicker::new(&backend, WriteOffStrategy::Random)
            .pick(&mut day)
            .unwrap()
            .unwrap();
        assert!(picked.id == 3 || picked.id == 5);
        assert_eq!(day.current_task, Some(picked.id));
    }
}

#[test]
fn test_random_strategy_without_tasks_picks_nothing() {
    let backend = FakeBackend::new(8, at(9, 0));
    let mut day = DayState::default();

    let picked = TaskPicker::new(&backend, WriteOffStrategy::Random)
        .pick(&mut day)
        .unwrap();

    assert!(picked.is_none());
}

#[test]
fn test_unknown_explicit_task_is_an_error() {
    let backend = FakeBackend::new(8, at(9, 0));
    let mut day = DayState::default();

    let result = TaskPicker::new(&backend, WriteOffStrategy::Watch)
        .with_explicit(Some(9))
        .pick(&mut day);

    assert!(matches!(result, Err(AppError::UnknownTask(9))));
}
