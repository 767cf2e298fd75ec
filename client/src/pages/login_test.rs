use super::*;
use crate::state::session::SessionState;

fn ana_form() -> AuthForm {
    AuthForm {
        name: "Ana".to_owned(),
        last_name: "Ruiz".to_owned(),
        institution_code: "DEMO2025".to_owned(),
        email: "a@x.com".to_owned(),
        password: "p".to_owned(),
    }
}

// =============================================================
// FormMode / AuthField
// =============================================================

#[test]
fn form_mode_defaults_to_login_and_toggles() {
    assert_eq!(FormMode::default(), FormMode::Login);
    assert_eq!(FormMode::Login.toggled(), FormMode::Register);
    assert_eq!(FormMode::Register.toggled(), FormMode::Login);
    assert_eq!(FormMode::Register.title(), "Crear Cuenta");
}

#[test]
fn auth_field_set_then_value() {
    let mut form = AuthForm::default();
    for field in AuthField::REGISTER_ONLY.into_iter().chain(AuthField::SHARED) {
        field.set(&mut form, field.name().to_owned());
        assert_eq!(field.value(&form), field.name());
    }
    assert_eq!(form.institution_code, "codigo_institucion");
}

#[test]
fn only_institution_code_has_hint() {
    assert!(AuthField::InstitutionCode.hint().is_some());
    assert!(AuthField::Email.hint().is_none());
    assert_eq!(AuthField::Password.input_type(), "password");
}

// =============================================================
// build_submission
// =============================================================

#[test]
fn login_submission_trims_email_and_keeps_password() {
    let form = AuthForm { email: "  a@x.com ".to_owned(), password: " secret ".to_owned(), ..AuthForm::default() };
    assert_eq!(
        build_submission(FormMode::Login, &form, "3-egb"),
        Ok(AuthSubmission::Login(LoginRequest { email: "a@x.com".to_owned(), password: " secret ".to_owned() }))
    );
}

#[test]
fn login_submission_requires_email_and_password() {
    let missing_password = AuthForm { email: "a@x.com".to_owned(), ..AuthForm::default() };
    assert_eq!(build_submission(FormMode::Login, &missing_password, "3-egb"), Err(LOGIN_REQUIRED_MESSAGE));
    let blank_email = AuthForm { email: "   ".to_owned(), password: "p".to_owned(), ..AuthForm::default() };
    assert_eq!(build_submission(FormMode::Login, &blank_email, "3-egb"), Err(LOGIN_REQUIRED_MESSAGE));
}

#[test]
fn register_submission_matches_backend_payload() {
    let Ok(AuthSubmission::Register(request)) = build_submission(FormMode::Register, &ana_form(), "1-egb") else {
        panic!("expected a registration submission");
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({
            "nombre": "Ana",
            "apellidos": "Ruiz",
            "email": "a@x.com",
            "password": "p",
            "codigo_institucion": "DEMO2025",
            "grado": "1-egb"
        })
    );
}

#[test]
fn register_submission_requires_every_field() {
    for field in AuthField::REGISTER_ONLY.into_iter().chain(AuthField::SHARED) {
        let mut form = ana_form();
        field.set(&mut form, "  ".to_owned());
        assert_eq!(
            build_submission(FormMode::Register, &form, "1-egb"),
            Err(REGISTER_REQUIRED_MESSAGE),
            "{field:?} should be required"
        );
    }
}

#[test]
fn register_with_unknown_grade_still_builds() {
    let result = build_submission(FormMode::Register, &ana_form(), "99-egb");
    assert!(matches!(result, Ok(AuthSubmission::Register(ref r)) if r.grade == "99-egb"));
}

// =============================================================
// GradeBadge
// =============================================================

#[test]
fn badge_for_third_egb_shows_level_and_ages() {
    let badge = GradeBadge::for_grade("3-egb");
    assert_eq!(badge.code, "3 EGB");
    assert_eq!(badge.initial, "3");
    assert_eq!(badge.caption, "Constructores • 7-8 años");
    assert_eq!(badge.color, "#3B82F6");
}

#[test]
fn badge_for_unknown_grade_degrades() {
    let badge = GradeBadge::for_grade("99-egb");
    assert_eq!(badge.code, "99 EGB");
    assert_eq!(badge.caption, "");
    assert_eq!(badge.color, catalog::NEUTRAL_COLOR);
    let empty = GradeBadge::for_grade("");
    assert_eq!(empty.initial, "");
}

// =============================================================
// End-to-end state flow (no network)
// =============================================================

#[test]
fn registration_reply_signs_in_and_targets_dashboard() {
    let reply: crate::net::types::AuthResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "user": { "nombre": "Ana", "apellidos": "Ruiz", "email": "a@x.com", "grado": "1-egb" }
    }))
    .unwrap();
    let mut session = SessionState::default();
    session.set_user(reply.user.unwrap());

    let target = View::LoginRegister("1-egb".to_owned()).next(Transition::Authenticated, &session);
    assert_eq!(session.current_user().map(|u| u.grade.as_str()), Some("1-egb"));
    assert_eq!(target.path(), "/dashboard");
}

#[test]
fn registration_with_unknown_grade_reaches_dashboard_without_level() {
    let mut session = SessionState::default();
    session.set_user(User {
        name: "Ana".to_owned(),
        last_name: "Ruiz".to_owned(),
        email: "a@x.com".to_owned(),
        grade: "99-egb".to_owned(),
        institution: None,
    });
    let target = View::LoginRegister("99-egb".to_owned()).next(Transition::Authenticated, &session);
    assert_eq!(target, View::Dashboard);
    assert_eq!(session.current_user().and_then(User::level), None);
}
