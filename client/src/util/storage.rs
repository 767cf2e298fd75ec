//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so state modules
//! can persist values without repeating web-sys glue. Outside the browser
//! every call is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().unwrap_or_default())
}

/// Load a JSON value from `localStorage` for `key`. Missing or corrupt
/// entries yield `None`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).unwrap_or_default()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("ignoring corrupt localStorage entry {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if let Err(e) = storage.set_item(key, &raw) {
            leptos::logging::warn!("localStorage write for {key} failed: {e:?}");
        }
    }
}

/// Remove `key` from `localStorage`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                leptos::logging::warn!("localStorage remove for {key} failed: {e:?}");
            }
        }
    }
}
