use super::*;

fn record(id: &str) -> UserRecord {
    UserRecord {
        id: id.to_owned(),
        name: "Ada".to_owned(),
        date_of_birth: "1815-12-10".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: 5_551_234,
        active: false,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// UsersState
// =============================================================

#[test]
fn begin_load_sets_loading_and_clears_error() {
    let mut state = UsersState { error: Some("old".to_owned()), ..UsersState::default() };
    state.begin_load();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_load_success_replaces_items() {
    let mut state = UsersState { items: vec![record("old")], ..UsersState::default() };
    let ticket = state.begin_load();
    assert!(state.finish_load(ticket, Ok(vec![record("a"), record("b")])));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert!(state.find("b").is_some());
    assert!(state.find("old").is_none());
}

#[test]
fn finish_load_failure_shows_error_instead_of_table() {
    let mut state = UsersState { items: vec![record("a")], ..UsersState::default() };
    let ticket = state.begin_load();
    state.finish_load(ticket, Err(GatewayError::Auth("Missing or invalid credentials".to_owned())));
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("Missing or invalid credentials"));
}

#[test]
fn superseded_load_is_ignored_even_when_it_lands_last() {
    let mut state = UsersState::default();
    let mount = state.begin_load();
    let after_create = state.begin_load();

    assert!(state.finish_load(after_create, Ok(vec![record("a"), record("new")])));
    assert!(!state.finish_load(mount, Ok(vec![record("a")])));

    assert!(!state.loading);
    assert!(state.find("new").is_some());
}

#[test]
fn superseded_load_keeps_loading_until_latest_lands() {
    let mut state = UsersState::default();
    let first = state.begin_load();
    let second = state.begin_load();

    assert!(!state.finish_load(first, Err(GatewayError::Network("Failed to fetch".to_owned()))));
    assert!(state.loading);
    assert!(state.error.is_none());

    assert!(state.finish_load(second, Ok(vec![record("a")])));
    assert!(!state.loading);
}

// =============================================================
// DashboardDialog
// =============================================================

#[test]
fn dialog_cannot_be_dismissed_or_replaced_while_pending() {
    let mut dialog = DashboardDialog::default();
    assert!(dialog.open(DashboardModal::ConfirmDelete("a".to_owned())));
    assert_eq!(dialog.begin_submit(), Some(DashboardModal::ConfirmDelete("a".to_owned())));

    assert!(!dialog.dismiss());
    assert!(!dialog.open(DashboardModal::Editor(EditorMode::Edit("b".to_owned()))));
    assert_eq!(dialog.modal, DashboardModal::ConfirmDelete("a".to_owned()));
    assert!(dialog.pending);
}

#[test]
fn dialog_refuses_a_second_submit_while_pending() {
    let mut dialog = DashboardDialog::default();
    dialog.open(DashboardModal::Editor(EditorMode::Create));
    assert!(dialog.begin_submit().is_some());
    assert_eq!(dialog.begin_submit(), None);
}

#[test]
fn dialog_submit_needs_an_open_modal() {
    let mut dialog = DashboardDialog::default();
    assert_eq!(dialog.begin_submit(), None);
    assert!(!dialog.pending);
}

#[test]
fn dialog_success_closes_and_failure_keeps_modal_open() {
    let mut dialog = DashboardDialog::default();
    dialog.open(DashboardModal::Editor(EditorMode::Create));

    dialog.begin_submit();
    dialog.finish_submit(false);
    assert_eq!(dialog.modal, DashboardModal::Editor(EditorMode::Create));
    assert!(!dialog.pending);

    dialog.begin_submit();
    dialog.finish_submit(true);
    assert_eq!(dialog.modal, DashboardModal::Closed);
    assert!(dialog.dismiss());
}

// =============================================================
// FormDraft
// =============================================================

#[test]
fn new_draft_is_empty_and_active() {
    let draft = FormDraft::default();
    assert!(draft.name.is_empty());
    assert!(draft.active);
}

#[test]
fn draft_from_record_mirrors_fields() {
    let draft = FormDraft::from(&record("a"));
    assert_eq!(draft.name, "Ada");
    assert_eq!(draft.date_of_birth, "1815-12-10");
    assert_eq!(draft.phone, "5551234");
    assert!(!draft.active);
}

#[test]
fn draft_to_input_parses_trimmed_phone() {
    let draft = FormDraft { phone: " 5550100 ".to_owned(), name: " Ada ".to_owned(), ..FormDraft::default() };
    let input = draft.to_input().unwrap();
    assert_eq!(input.phone, Some(5_550_100));
    assert_eq!(input.name.as_deref(), Some("Ada"));
    assert_eq!(input.active, Some(true));
}

#[test]
fn draft_to_input_rejects_non_numeric_phone() {
    for phone in ["", "555-0100", "12.5", "call me"] {
        let draft = FormDraft { phone: phone.to_owned(), ..FormDraft::default() };
        assert_eq!(
            draft.to_input(),
            Err(GatewayError::Validation(PHONE_INVALID.to_owned())),
            "{phone:?} should be rejected"
        );
    }
}

// =============================================================
// EditorMode
// =============================================================

#[test]
fn editor_mode_labels_follow_mode() {
    assert_eq!(EditorMode::Create.title(), "Add User");
    assert_eq!(EditorMode::Create.submit_label(), "Create");
    assert_eq!(EditorMode::Edit("x".to_owned()).title(), "Edit User");
    assert_eq!(EditorMode::Edit("x".to_owned()).submit_label(), "Save");
}
