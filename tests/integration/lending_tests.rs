//! Lending workflow tests against the public desk API

use chrono::Duration;
use libranet::{
    models::{LibraryItem, SeedItem},
    AppError, AppState,
};

use crate::{desk, start_time};

fn assert_invariant(state: &AppState) {
    for item in state.list_items() {
        assert_eq!(item.is_available(), item.borrower().is_none(), "{}", item);
        assert_eq!(item.is_available(), item.due_date().is_none(), "{}", item);
    }
}

#[test]
fn test_borrow_then_immediate_return() {
    let clock = std::sync::Arc::new(libranet::clock::ManualClock::new(start_time()));
    let mut state = AppState::with_seed(
        vec![SeedItem::Book {
            id: 1,
            title: "Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
            pages: 464,
        }],
        clock,
    )
    .unwrap();

    let receipt = state.borrow(1, "Alice", 3).unwrap();
    assert_eq!(receipt.due_date, start_time() + Duration::days(3));

    let item = state.lookup(1).unwrap();
    assert!(!item.is_available());
    assert_eq!(item.borrower(), Some("Alice"));
    assert_invariant(&state);

    assert_eq!(state.return_item(1).unwrap(), None);
    let item = state.lookup(1).unwrap();
    assert!(item.is_available());
    assert_eq!(item.borrower(), None);
    assert!(state.list_fines().is_empty());
    assert_invariant(&state);
}

#[test]
fn test_overdue_return_records_fine() {
    let (mut state, clock) = desk();

    state.borrow(4, "Alice", 5).unwrap();
    clock.advance(Duration::days(7));
    let fine = state.return_item(4).unwrap().expect("fine");

    assert_eq!(fine.item_id, 4);
    assert_eq!(fine.borrower, "Alice");
    assert_eq!(fine.days_overdue, 2);
    assert_eq!(fine.amount, 20.0);
    assert_eq!(state.list_fines(), &[fine]);
    assert_invariant(&state);
}

#[test]
fn test_return_before_due_has_no_fine() {
    let (mut state, clock) = desk();

    state.borrow(5, "Bob", 5).unwrap();
    clock.advance(Duration::days(3));
    assert_eq!(state.return_item(5).unwrap(), None);
    assert!(state.list_fines().is_empty());
}

#[test]
fn test_partial_day_late_is_not_fined() {
    let (mut state, clock) = desk();

    state.borrow(6, "Carol", 2).unwrap();
    clock.advance(Duration::days(2) + Duration::hours(20));
    assert_eq!(state.return_item(6).unwrap(), None);
}

#[test]
fn test_borrow_lent_item_is_rejected() {
    let (mut state, _clock) = desk();

    state.borrow(1, "Alice", 3).unwrap();
    let before: LibraryItem = state.lookup(1).unwrap().clone();

    let err = state.borrow(1, "Bob", 10).unwrap_err();
    assert!(matches!(err, AppError::ItemNotAvailable { id: 1, ref borrower } if borrower == "Alice"));
    assert_eq!(state.lookup(1).unwrap(), &before);
}

#[test]
fn test_return_available_item_is_informational() {
    let (mut state, _clock) = desk();

    let err = state.return_item(2).unwrap_err();
    assert!(matches!(err, AppError::AlreadyAvailable(2)));
    assert!(err.is_informational());
    assert!(state.list_fines().is_empty());
}

#[test]
fn test_unknown_item() {
    let (mut state, _clock) = desk();

    assert!(matches!(state.lookup(99), Err(AppError::ItemNotFound(99))));
    assert!(matches!(state.borrow(99, "Alice", 1), Err(AppError::ItemNotFound(99))));
    assert!(matches!(state.return_item(99), Err(AppError::ItemNotFound(99))));
    assert!(matches!(state.play(99), Err(AppError::ItemNotFound(99))));
    assert!(matches!(state.archive(99), Err(AppError::ItemNotFound(99))));
}

#[test]
fn test_play_does_not_touch_lending_state() {
    let (mut state, _clock) = desk();

    state.borrow(7, "Dev", 4).unwrap();
    let before = state.lookup(7).unwrap().clone();
    state.play(7).unwrap();
    assert_eq!(state.lookup(7).unwrap(), &before);

    assert!(matches!(state.play(1), Err(AppError::WrongVariant { .. })));
}

#[test]
fn test_archive_is_idempotent_and_keeps_availability() {
    let (mut state, _clock) = desk();

    state.archive(8).unwrap();
    state.archive(8).unwrap();
    let item = state.lookup(8).unwrap();
    assert!(item.is_archived());
    assert!(item.is_available());

    state.borrow(8, "Eve", 2).unwrap();
    assert!(state.lookup(8).unwrap().is_archived());
}

#[test]
fn test_fines_are_listed_in_return_order() {
    let (mut state, clock) = desk();

    state.borrow(1, "Alice", 1).unwrap();
    state.borrow(5, "Bob", 1).unwrap();
    clock.advance(Duration::days(4));
    state.return_item(5).unwrap();
    clock.advance(Duration::days(1));
    state.return_item(1).unwrap();

    let fines: Vec<_> = state
        .list_fines()
        .iter()
        .map(|f| (f.item_id, f.days_overdue))
        .collect();
    assert_eq!(fines, vec![(5, 3), (1, 4)]);
}

#[test]
fn test_search_over_default_catalog() {
    let (state, _clock) = desk();

    let ids: Vec<_> = state.search("audio").map(|i| i.id()).collect();
    assert_eq!(ids, vec![2, 7]);

    let ids: Vec<_> = state.search("MONTHLY").map(|i| i.id()).collect();
    assert_eq!(ids, vec![3, 8]);
}
