use super::*;

fn three_rows() -> Vec<TableRow> {
    vec![
        TableRow::new("t1", "users"),
        TableRow::new("t2", "projects"),
        TableRow::new("t3", "columns"),
    ]
}

// =============================================================
// Bulk actions
// =============================================================

#[test]
fn select_all_checks_every_row() {
    let mut state = SelectionState::default();
    state.set_rows(three_rows());
    state.select_all();
    assert_eq!(state.checked_ids(), vec!["t1", "t2", "t3"]);
}

#[test]
fn select_all_is_idempotent_over_prior_state() {
    let mut state = SelectionState::default();
    state.set_rows(three_rows());
    state.toggle("t2", true);
    state.select_all();
    assert_eq!(state.checked_ids(), vec!["t1", "t2", "t3"]);
}

#[test]
fn clear_all_unchecks_every_row() {
    let mut state = SelectionState::default();
    state.set_rows(three_rows());
    state.select_all();
    state.clear_all();
    assert!(state.checked_ids().is_empty());
}

#[test]
fn bulk_actions_on_empty_inventory_are_noops() {
    let mut state = SelectionState::default();
    state.select_all();
    state.clear_all();
    assert!(state.checked_ids().is_empty());
}

// =============================================================
// Per-row toggle
// =============================================================

#[test]
fn toggle_checks_and_unchecks_a_single_row() {
    let mut state = SelectionState::default();
    state.set_rows(three_rows());
    state.toggle("t3", true);
    assert_eq!(state.checked_ids(), vec!["t3"]);
    state.toggle("t3", false);
    assert!(state.checked_ids().is_empty());
}

#[test]
fn toggle_unknown_id_is_ignored() {
    let mut state = SelectionState::default();
    state.set_rows(three_rows());
    state.toggle("nope", true);
    assert!(state.checked_ids().is_empty());
}

// =============================================================
// checked_ids ordering
// =============================================================

#[test]
fn checked_ids_follow_row_order_not_toggle_order() {
    let mut state = SelectionState::default();
    state.set_rows(three_rows());
    state.toggle("t3", true);
    state.toggle("t1", true);
    assert_eq!(state.checked_ids(), vec!["t1", "t3"]);
}

// =============================================================
// set_rows
// =============================================================

#[test]
fn set_rows_drops_previous_selection_and_clears_loading() {
    let mut state = SelectionState {
        loading: true,
        ..SelectionState::default()
    };
    state.set_rows(three_rows());
    state.select_all();
    state.set_rows(vec![TableRow::new("t9", "logs")]);
    assert!(!state.loading);
    assert!(state.checked_ids().is_empty());
    assert_eq!(state.rows.len(), 1);
}
