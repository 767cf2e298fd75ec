//! View routing state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` registers its Leptos routes from the segment constants below, and
//! the router fallback resolves unmatched URLs through [`View::from_path`].
//! Navigation targets are computed here and tested without a browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::SessionState;
use crate::util::auth::should_redirect_unauth;

pub const HOME_PATH: &str = "/";
pub const GRADES_SEGMENT: &str = "grados";
pub const LOGIN_SEGMENT: &str = "login";
pub const DASHBOARD_SEGMENT: &str = "dashboard";
/// Route parameter carrying the grade id on the login view.
pub const GRADE_PARAM: &str = "grado";

/// One of the five top-level screens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    GradeSelection,
    /// Login/registration form for a raw grade id taken from the URL.
    LoginRegister(String),
    Dashboard,
    /// Unmatched path; resolves to [`View::Home`].
    RedirectHome,
}

/// User intents that move between views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// "Comenzar Ahora", header "Niveles"/"Ingresar", or the back link.
    ChooseGrade,
    /// A grade tile was picked.
    SelectGrade(String),
    /// Login or registration succeeded.
    Authenticated,
    /// Brand or "Inicio" link.
    GoHome,
    /// "Cerrar Sesión". Returns home, except from the dashboard, which goes
    /// to grade selection like its unauthenticated redirect.
    LoggedOut,
}

impl View {
    /// Map a URL path to a view. Query strings, fragments, and a trailing
    /// slash are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let rest = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if rest.is_empty() {
            return Self::Home;
        }
        match rest.split('/').collect::<Vec<_>>().as_slice() {
            [segment] if *segment == GRADES_SEGMENT => Self::GradeSelection,
            [segment] if *segment == DASHBOARD_SEGMENT => Self::Dashboard,
            [segment, grade] if *segment == LOGIN_SEGMENT && !grade.is_empty() => {
                Self::LoginRegister((*grade).to_owned())
            }
            _ => Self::RedirectHome,
        }
    }

    /// Canonical path for this view.
    pub fn path(&self) -> String {
        match self {
            Self::Home | Self::RedirectHome => HOME_PATH.to_owned(),
            Self::GradeSelection => format!("/{GRADES_SEGMENT}"),
            Self::LoginRegister(grade) => login_path(grade),
            Self::Dashboard => format!("/{DASHBOARD_SEGMENT}"),
        }
    }

    /// Apply redirects and the dashboard auth guard.
    #[must_use]
    pub fn resolve(self, session: &SessionState) -> Self {
        match self {
            Self::RedirectHome => Self::Home,
            Self::Dashboard if should_redirect_unauth(session) => Self::GradeSelection,
            other => other,
        }
    }

    /// Follow `transition` from this view, then resolve guards.
    #[must_use]
    pub fn next(&self, transition: Transition, session: &SessionState) -> Self {
        let target = match transition {
            Transition::GoHome => Self::Home,
            // Leaving the guarded view lands where its guard would send it.
            Transition::LoggedOut => match self {
                Self::Dashboard => Self::GradeSelection,
                _ => Self::Home,
            },
            Transition::ChooseGrade => Self::GradeSelection,
            Transition::SelectGrade(grade) => Self::LoginRegister(grade),
            Transition::Authenticated => match self {
                Self::LoginRegister(_) => Self::Dashboard,
                other => other.clone(),
            },
        };
        target.resolve(session)
    }
}

/// `/login/<grade>`
pub fn login_path(grade_id: &str) -> String {
    format!("/{LOGIN_SEGMENT}/{grade_id}")
}
