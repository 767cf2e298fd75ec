use super::*;

fn user(grade: &str, institution: Option<&str>) -> User {
    User {
        name: "ana".to_owned(),
        last_name: "Ruiz".to_owned(),
        email: "a@x.com".to_owned(),
        grade: grade.to_owned(),
        institution: institution.map(str::to_owned),
    }
}

#[test]
fn summary_for_known_grade() {
    let summary = StudentSummary::for_user(&user("5-egb", Some("Unidad Educativa Demo")));
    assert_eq!(summary.initial, "A");
    assert_eq!(summary.greeting, "¡Bienvenido, ana!");
    assert_eq!(summary.grade_line, "5 EGB • Nivel: Constructores");
    assert_eq!(summary.institution.as_deref(), Some("Unidad Educativa Demo"));
    assert_eq!(summary.color, "#3B82F6");
}

#[test]
fn summary_for_unknown_grade_degrades() {
    let summary = StudentSummary::for_user(&user("99-egb", None));
    assert_eq!(summary.grade_line, "99 EGB • Nivel: ");
    assert_eq!(summary.color, catalog::NEUTRAL_COLOR);
    assert_eq!(summary.institution, None);
}

#[test]
fn summary_drops_blank_institution() {
    let summary = StudentSummary::for_user(&user("1-egb", Some("  ")));
    assert_eq!(summary.institution, None);
}
