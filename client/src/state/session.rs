//! Session store for the signed-in student.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`SessionStore`] through Leptos context. Views read it
//! reactively, so a `set_user` or `logout` is visible to every subscriber on
//! the next render. The user is mirrored to `localStorage` under
//! [`SESSION_STORAGE_KEY`] and restored after hydration.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage;

/// `localStorage` key holding the persisted user JSON.
pub const SESSION_STORAGE_KEY: &str = "chaskiUser";

/// Current user plus whether a persisted session is still being restored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// State used before the persisted session has been checked.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    /// Replace the current user. Last write wins.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Clear the current user, returning it.
    pub fn logout(&mut self) -> Option<User> {
        self.loading = false;
        self.user.take()
    }

    /// Finish restoration with whatever was persisted. A user set while
    /// restoring is kept.
    pub fn finish_restore(&mut self, persisted: Option<User>) {
        if self.user.is_none() {
            self.user = persisted;
        }
        self.loading = false;
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Reactive handle to the app-wide [`SessionState`].
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    pub fn new(initial: SessionState) -> Self {
        Self { state: RwSignal::new(initial) }
    }

    /// Tracked snapshot; re-runs the caller's effect on change.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Tracked read of the current user.
    pub fn current_user(&self) -> Option<User> {
        self.state.with(|s| s.current_user().cloned())
    }

    pub fn set_user(&self, user: User) {
        storage::save_json(SESSION_STORAGE_KEY, &user);
        self.state.update(|s| s.set_user(user));
    }

    /// Clear the user and remove the persisted session.
    pub fn logout(&self) {
        storage::remove(SESSION_STORAGE_KEY);
        self.state.update(|s| {
            s.logout();
        });
    }

    /// Load the persisted user, if any, and end the restoring phase.
    pub fn restore_persisted(&self) {
        let persisted = storage::load_json::<User>(SESSION_STORAGE_KEY);
        if persisted.is_some() {
            leptos::logging::log!("restored persisted session");
        }
        self.state.update(|s| s.finish_restore(persisted));
    }
}
