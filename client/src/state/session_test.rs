use super::*;

fn make_user(name: &str, grade: &str) -> User {
    User {
        name: name.to_owned(),
        last_name: "Ruiz".to_owned(),
        email: format!("{}@x.com", name.to_lowercase()),
        grade: grade.to_owned(),
        institution: Some("Unidad Educativa Demo".to_owned()),
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_no_user() {
    let state = SessionState::default();
    assert!(state.current_user().is_none());
    assert!(!state.loading);
}

#[test]
fn restoring_state_is_loading() {
    let state = SessionState::restoring();
    assert!(state.user.is_none());
    assert!(state.loading);
}

// =============================================================
// set_user / logout
// =============================================================

#[test]
fn set_user_replaces_current_user() {
    let mut state = SessionState::default();
    state.set_user(make_user("Ana", "1-egb"));
    state.set_user(make_user("Luis", "9-egb"));
    assert_eq!(state.current_user().map(|u| u.name.as_str()), Some("Luis"));
}

#[test]
fn set_user_ends_restoring() {
    let mut state = SessionState::restoring();
    state.set_user(make_user("Ana", "1-egb"));
    assert!(!state.loading);
}

#[test]
fn logout_clears_and_returns_user() {
    let mut state = SessionState::default();
    state.set_user(make_user("Ana", "1-egb"));
    let previous = state.logout();
    assert_eq!(previous.map(|u| u.name), Some("Ana".to_owned()));
    assert!(state.current_user().is_none());
    assert_eq!(state.logout(), None);
}

// =============================================================
// Restoration
// =============================================================

#[test]
fn finish_restore_adopts_persisted_user() {
    let mut state = SessionState::restoring();
    state.finish_restore(Some(make_user("Ana", "1-egb")));
    assert_eq!(state.current_user().map(|u| u.grade.as_str()), Some("1-egb"));
    assert!(!state.loading);
}

#[test]
fn finish_restore_keeps_user_signed_in_meanwhile() {
    let mut state = SessionState::restoring();
    state.set_user(make_user("Luis", "9-egb"));
    state.finish_restore(Some(make_user("Ana", "1-egb")));
    assert_eq!(state.current_user().map(|u| u.name.as_str()), Some("Luis"));
}

#[test]
fn finish_restore_without_persisted_user_stays_signed_out() {
    let mut state = SessionState::restoring();
    state.finish_restore(None);
    assert_eq!(state, SessionState::default());
}
