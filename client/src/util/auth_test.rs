use super::*;
use crate::net::types::User;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = SessionState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = SessionState {
        user: Some(User {
            name: "Ana".to_owned(),
            last_name: "Ruiz".to_owned(),
            email: "a@x.com".to_owned(),
            grade: "1-egb".to_owned(),
            institution: None,
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
