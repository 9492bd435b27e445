//! FILENAME: tests/test_commands.rs
//! Integration tests for the add / reset / show command handlers.

mod common;

use app_lib::{
    add_ticket, create_app_state, get_pivot, list_item_types, reset_tickets, AppConfig,
    CommandError, ADD_REBUILD_OP,
};
use common::{SupportFixture, TestHarness};
use engine::{TicketForm, ValidationError};
use persistence::PersistenceError;

// ============================================================================
// ADD TICKET
// ============================================================================

#[test]
fn test_add_returns_rebuilt_pivot() {
    let harness = TestHarness::new();

    harness.add("SC-1", "Mouse Dell", "1");
    harness.add("SC-2", "Teclado Dell", "1");
    let view = harness.add("SC-3", "Mouse Dell", "1");

    assert_eq!(view.columns, vec!["Mouse Dell", "Teclado Dell", "Totals"]);
    assert_eq!(view.rows, vec![vec!["SC-1", "SC-2", ""], vec!["SC-3", "", ""]]);
    assert_eq!(
        view.totals_row,
        Some(vec!["2".to_string(), "1".to_string(), "Total".to_string()])
    );
    assert_eq!(view.record_count, 3);
}

#[test]
fn test_fixture_pivot() {
    let harness = TestHarness::with_sample_data();
    let view = get_pivot(&harness.state).unwrap();

    assert_eq!(view.columns, SupportFixture::columns());
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[2], vec!["SC-105", "", "", "", ""]);
    assert_eq!(
        view.totals_row,
        Some(vec!["3", "2", "1", "1", "Total"].into_iter().map(String::from).collect::<Vec<String>>())
    );
    assert_eq!(view.record_count, SupportFixture::entries().len());
}

#[test]
fn test_invalid_form_leaves_store_untouched() {
    let harness = TestHarness::with_sample_data();
    let before = get_pivot(&harness.state).unwrap();

    let err =
        add_ticket(&harness.state, TicketForm::new("SC-200", "Mouse Dell", "0")).unwrap_err();
    match &err {
        CommandError::Validation { operation, source } => {
            assert_eq!(*operation, "add_ticket");
            assert_eq!(*source, ValidationError::InvalidQuantity("0".to_string()));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(err.to_string().starts_with("add_ticket:"));

    let err = add_ticket(&harness.state, TicketForm::default()).unwrap_err();
    assert_eq!(err.operation(), "add_ticket");

    assert_eq!(harness.stored_count(), SupportFixture::entries().len());
    assert_eq!(get_pivot(&harness.state).unwrap(), before);
}

#[test]
fn test_unknown_item_type_rejected() {
    let harness = TestHarness::new();
    let err =
        add_ticket(&harness.state, TicketForm::new("SC-1", "Impressora HP", "1")).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Validation {
            source: ValidationError::UnknownItemType(_),
            ..
        }
    ));
    assert_eq!(harness.stored_count(), 0);
}

// ============================================================================
// RESET
// ============================================================================

#[test]
fn test_reset_then_rebuild_is_empty() {
    let harness = TestHarness::with_sample_data();

    let view = reset_tickets(&harness.state).unwrap();
    assert!(view.is_empty());
    assert!(view.columns.is_empty());
    assert!(view.rows.is_empty());
    assert_eq!(view.totals_row, None);
    assert_eq!(view.record_count, 0);

    let again = get_pivot(&harness.state).unwrap();
    assert_eq!(again, view);
    assert_eq!(harness.stored_count(), 0);
}

#[test]
fn test_add_after_reset_starts_new_column_order() {
    let harness = TestHarness::with_sample_data();
    reset_tickets(&harness.state).unwrap();

    let view = harness.add("SC-900", "Pilhas AAA", "1");
    assert_eq!(view.columns, vec!["Pilhas AAA", "Totals"]);
}

// ============================================================================
// SHOW / TYPES
// ============================================================================

#[test]
fn test_empty_store_pivot() {
    let harness = TestHarness::new();
    let view = get_pivot(&harness.state).unwrap();
    assert!(view.is_empty());
    assert!(view.to_table().to_grid().render_text().is_empty());
}

#[test]
fn test_get_pivot_is_deterministic() {
    let harness = TestHarness::with_sample_data();
    let first = serde_json::to_string(&get_pivot(&harness.state).unwrap()).unwrap();
    let second = serde_json::to_string(&get_pivot(&harness.state).unwrap()).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("\"totalsRow\""));
    assert!(first.contains("\"recordCount\":7"));
}

#[test]
fn test_list_item_types() {
    let harness = TestHarness::new();
    let types = list_item_types(&harness.state);
    assert_eq!(types.len(), 21);
    assert_eq!(types[0], "Mouse Dell");
    assert_eq!(types[20], "Monitor Lenovo 23 polegadas");
}

// ============================================================================
// FILE-BACKED STATE
// ============================================================================

#[test]
fn test_file_state_keeps_tickets_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_path: dir.path().join("chamados.db"),
        ..AppConfig::default()
    };

    {
        let state = create_app_state(&config).unwrap();
        add_ticket(&state, TicketForm::new("SC-1", "Cabo HDMI", "1")).unwrap();
    }

    let state = create_app_state(&config).unwrap();
    let view = get_pivot(&state).unwrap();
    assert_eq!(view.columns, vec!["Cabo HDMI", "Totals"]);
    assert_eq!(view.rows, vec![vec!["SC-1", ""]]);
}

#[test]
fn test_open_failure_names_operation() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_path: dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    match create_app_state(&config) {
        Err(err) => assert_eq!(err.operation(), "open_store"),
        Ok(_) => panic!("opening a directory as a database should fail"),
    }
}

#[test]
fn test_rebuild_failure_after_insert_is_reported_as_rebuild() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_path: dir.path().join("chamados.db"),
        ..AppConfig::default()
    };
    let state = create_app_state(&config).unwrap();

    // A row no form could produce, written behind the store's back.
    let other = rusqlite::Connection::open(&config.database_path).unwrap();
    other
        .execute(
            "INSERT INTO tickets (ticket_number, item_type, quantity) VALUES ('SC-0', 'Cabo HDMI', 0)",
            [],
        )
        .unwrap();
    drop(other);

    let err = add_ticket(&state, TicketForm::new("SC-1", "Cabo HDMI", "1")).unwrap_err();
    assert_eq!(err.operation(), ADD_REBUILD_OP);
    assert!(matches!(
        err,
        CommandError::Persistence {
            source: PersistenceError::InvalidRecord { .. },
            ..
        }
    ));
    assert!(err.to_string().contains(ADD_REBUILD_OP));

    // The insert itself was committed.
    assert_eq!(state.store.lock().unwrap().count().unwrap(), 2);
}
