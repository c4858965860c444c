//! Scripted sessions through the interactive menu

use std::io::Cursor;

use chrono::Duration;
use libranet::cli;

use crate::desk;

fn run_script(state: &mut libranet::AppState, script: &str) -> String {
    let mut output = Vec::new();
    cli::run(state, Cursor::new(script.to_string()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_borrow_and_return_session() {
    let (mut state, _clock) = desk();

    let output = run_script(&mut state, "2\n1\nAlice\n3\n3\n1\n7\n0\n");

    assert!(output.contains("Borrowed item: Book[id=1, title='Clean Code'"));
    assert!(output.contains("by Alice until 2025-09-04 09:00"));
    assert!(output.contains("Returned item: Book[id=1, title='Clean Code', author='Robert C. Martin', status=Available]"));
    assert!(output.contains("No fines recorded."));
    assert!(output.ends_with("Exiting... Bye!\n"));
    assert!(state.lookup(1).unwrap().is_available());
}

#[test]
fn test_late_return_prints_fine() {
    let (mut state, clock) = desk();

    run_script(&mut state, "2\n4\nBob\n2\n");
    clock.advance(Duration::days(5));
    let output = run_script(&mut state, "3\n4\n7\n");

    assert!(output.contains("Fine applied: FineRecord[itemId=4, borrower='Bob', daysOverdue=3, amount=30.0"));
    assert_eq!(state.list_fines().len(), 1);
}

#[test]
fn test_empty_days_uses_configured_default() {
    let (mut state, _clock) = desk();

    run_script(&mut state, "2\n5\nCarol\n\n");
    let due = state.lookup(5).unwrap().due_date().unwrap();
    assert_eq!(
        due,
        crate::start_time() + Duration::days(i64::from(state.config.loans.default_days))
    );
}

#[test]
fn test_errors_are_reported_and_menu_continues() {
    let (mut state, _clock) = desk();

    let output = run_script(&mut state, "9\n3\n1\n4\n1\n5\n3\n5\n3\n2\n42\nDan\n1\nabc\n0\n");

    assert!(output.contains("Invalid choice!"));
    assert!(output.contains("Item id 1 is already available, no need to return"));
    assert!(output.contains("Error [12]: Item id 1 is a Book, expected AudioBook"));
    assert!(output.contains("Archived E-Magazine 'Nature Monthly' issue #2025"));
    assert!(output.contains("E-Magazine 'Nature Monthly' issue #2025 is already archived"));
    assert!(output.contains("Error [5]: Item not found: 42"));
    assert!(output.contains("Invalid choice!"));
    assert!(output.ends_with("Exiting... Bye!\n"));
}

#[test]
fn test_search_and_show_all() {
    let (mut state, _clock) = desk();

    let output = run_script(&mut state, "6\nemagazine\n6\ncobol\n1\n");

    assert!(output.contains("EMagazine[id=9, title='India Today'"));
    assert!(output.contains("No items match 'cobol'"));
    assert!(output.contains("--- All Items ---"));
    assert!(output.contains("AudioBook[id=7, title='Panchatantra Ki Kahaniyaan - Audio'"));
}
