//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::View;
use crate::state::session::{SessionState, SessionStore};

/// True once restoration has finished and no user is present.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// Send the browser to wherever `guarded` resolves whenever the session
/// stops satisfying it.
pub fn install_unauth_redirect<F>(session: SessionStore, guarded: View, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        let target = guarded.clone().resolve(&state);
        if target != guarded {
            navigate(&target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
